//! Multi-output Boolean functions (S-boxes) and their coordinate ANFs.

use crate::report::tabulate;
use crate::utils::variables_count_from_len;
use crate::{
    enumerate_assignments, render, AnfError, AnfPolynomial, AssignmentVector, MobiusTransform,
    TruthTable,
};
use log::{debug, info};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Substitution box $S : \mathbb{F}_2^n \to \mathbb{F}_2^m$, stored as its $2^n$ output words.
///
/// Coordinate function $y_i$ is bit $i$ of each output word, the least significant bit being $y_0$:
/// $y_i(x) = (S(x) \gg i) \bmod 2$.
/// Inputs follow the same convention, $x_j$ being bit $j$ of the input word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SBox {
    entries: Vec<u32>,
    input_bits: usize,
    output_bits: usize,
}

impl SBox {
    /// Creates an S-box from its output words, whose count must be a power of 2.
    ///
    /// Returns an error if `output_bits` is greater than 32 or if an entry doesn't fit in `output_bits` bits.
    pub fn new(entries: Vec<u32>, output_bits: usize) -> Result<Self, AnfError> {
        let input_bits = variables_count_from_len(entries.len())?;
        if output_bits > 32 {
            return Err(AnfError::TooBigVariableCount(32));
        }
        if let Some((index, &value)) = entries
            .iter()
            .enumerate()
            .find(|(_, value)| u64::from(**value) >> output_bits != 0)
        {
            return Err(AnfError::SBoxEntryTooWide {
                index,
                value,
                output_bits,
            });
        }
        Ok(SBox {
            entries,
            input_bits,
            output_bits,
        })
    }

    /// Creates a 4-bit output S-box from a string of hex nibbles, the first nibble being $S(0)$.
    ///
    /// # Example
    /// ```rust
    /// use sbox_anf::SBox;
    ///
    /// // PRESENT
    /// let sbox = SBox::from_hex_nibbles("C56B90AD3EF84712").unwrap();
    /// assert_eq!(sbox.input_bits(), 4);
    /// assert_eq!(sbox.lookup(1), Some(0x5));
    /// ```
    pub fn from_hex_nibbles(nibbles: &str) -> Result<Self, AnfError> {
        let entries = nibbles
            .chars()
            .map(|c| c.to_digit(16).ok_or(AnfError::StringHexParseError))
            .collect::<Result<Vec<u32>, AnfError>>()?;
        Self::new(entries, 4)
    }

    /// Input width $n$.
    pub fn input_bits(&self) -> usize {
        self.input_bits
    }

    /// Output width $m$.
    pub fn output_bits(&self) -> usize {
        self.output_bits
    }

    /// The $2^n$ output words.
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// $S(x)$, or `None` if `x` is greater than $2^n - 1$.
    pub fn lookup(&self, x: usize) -> Option<u32> {
        self.entries.get(x).copied()
    }

    /// Truth table of the coordinate function $y_{bit}$.
    pub fn coordinate_truth_table(&self, bit: usize) -> Result<TruthTable, AnfError> {
        self.check_output_bit(bit)?;
        Ok(self.coordinate_truth_table_unchecked(bit))
    }

    /// Truth table, Möbius stages and ANF of the coordinate function $y_{bit}$.
    pub fn coordinate_anf(&self, bit: usize) -> Result<CoordinateAnf, AnfError> {
        self.check_output_bit(bit)?;
        let assignments: Vec<AssignmentVector> = enumerate_assignments(self.input_bits).collect();
        self.compute_coordinate(bit, &assignments)
    }

    /// ANF of every coordinate function, $y_0$ first.
    ///
    /// Coordinates are independent, they are computed in parallel when the `parallel` feature is enabled.
    ///
    /// # Example
    /// ```rust
    /// use sbox_anf::SBox;
    ///
    /// let sbox = SBox::from_hex_nibbles("C56B90AD3EF84712").unwrap();
    /// let coordinates = sbox.coordinate_anfs().unwrap();
    /// assert_eq!(coordinates[0].formula(), "x0 + x2 + x1 * x2 + x3");
    /// ```
    pub fn coordinate_anfs(&self) -> Result<Vec<CoordinateAnf>, AnfError> {
        info!(
            "Computing ANF of {} coordinates of a {}x{} S-box",
            self.output_bits, self.input_bits, self.output_bits
        );
        let assignments: Vec<AssignmentVector> = enumerate_assignments(self.input_bits).collect();

        #[cfg(feature = "parallel")]
        let coordinates = (0..self.output_bits)
            .into_par_iter()
            .map(|bit| self.compute_coordinate(bit, &assignments))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let coordinates = (0..self.output_bits)
            .map(|bit| self.compute_coordinate(bit, &assignments))
            .collect();

        coordinates
    }

    fn check_output_bit(&self, bit: usize) -> Result<(), AnfError> {
        if bit >= self.output_bits {
            return Err(AnfError::OutputBitOutOfRange {
                bit,
                output_bits: self.output_bits,
            });
        }
        Ok(())
    }

    fn coordinate_truth_table_unchecked(&self, bit: usize) -> TruthTable {
        let values = self
            .entries
            .iter()
            .map(|entry| (entry >> bit) & 1 == 1)
            .collect();
        TruthTable::from_values_unchecked(values, self.input_bits)
    }

    fn compute_coordinate(
        &self,
        bit: usize,
        assignments: &[AssignmentVector],
    ) -> Result<CoordinateAnf, AnfError> {
        let truth_table = self.coordinate_truth_table_unchecked(bit);
        let transform = truth_table.mobius_transform();
        let formula = render(assignments, transform.coefficients())?;
        debug!("y{} = {}", bit, formula);
        Ok(CoordinateAnf {
            output_bit: bit,
            truth_table,
            transform,
            formula,
        })
    }
}

/// ANF computation of one coordinate function of an S-box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateAnf {
    output_bit: usize,
    truth_table: TruthTable,
    transform: MobiusTransform,
    formula: String,
}

impl CoordinateAnf {
    /// Index $i$ of the coordinate $y_i$.
    pub fn output_bit(&self) -> usize {
        self.output_bit
    }

    /// Truth table of the coordinate.
    pub fn truth_table(&self) -> &TruthTable {
        &self.truth_table
    }

    /// Möbius transform of the truth table, with its stages.
    pub fn transform(&self) -> &MobiusTransform {
        &self.transform
    }

    /// Rendered ANF, eg. `x0 + x2 + x1 * x2 + x3`.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// ANF polynomial of the coordinate.
    pub fn anf_polynomial(&self) -> AnfPolynomial {
        self.transform.anf_polynomial()
    }

    /// Tabulation of the assignments, coordinate values and stages, followed by the formula.
    ///
    /// ```text
    /// y0 ANF
    /// x1 x0 y0 S1 S2
    /// 0  0  0  0  0
    /// ...
    ///
    /// y0 = x0 * x1
    /// ```
    pub fn report(&self) -> Result<String, AnfError> {
        let output_name = format!("y{}", self.output_bit);
        let assignments: Vec<AssignmentVector> =
            enumerate_assignments(self.truth_table.variables_count()).collect();
        let table = tabulate(
            &output_name,
            &assignments,
            self.truth_table.values(),
            self.transform.stages(),
        )?;
        Ok(format!(
            "{} ANF\n{}\n{} = {}\n",
            output_name, table, output_name, self.formula
        ))
    }
}
