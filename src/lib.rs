//! # Algebraic Normal Form of Boolean functions and S-boxes

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code, unused_must_use)]
#![forbid(
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_extern_crates
)]

mod anf_error;
mod anf_polynom;
mod assignment;
mod iterator;
pub mod known_sboxes;
mod mobius;
mod report;
mod sbox;
mod truth_table;
mod utils;

pub use crate::anf_error::AnfError;
pub use crate::anf_polynom::{render, render_with_style, AnfPolynomial, FormulaStyle, Monomial};
pub use crate::assignment::AssignmentVector;
pub use crate::iterator::{enumerate_assignments, AssignmentIterator};
pub use crate::mobius::{mobius_transform_in_place, transform, MobiusTransform};
pub use crate::report::tabulate;
pub use crate::sbox::{CoordinateAnf, SBox};
pub use crate::truth_table::TruthTable;
