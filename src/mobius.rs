//! Fast Möbius transform over the Boolean lattice.
//!
//! For a Boolean function $f$ of $n$ variables, the ANF coefficient of the monomial $x^u = \prod_{j : u_j = 1} x_j$ is
//!
//! $$a_u = \bigoplus_{v \preceq u} f(v)$$
//!
//! where $v \preceq u$ means every variable set in $v$ is set in $u$. The transform is computed as $n$ butterfly stages
//! of XOR operations, and is its own inverse over $\mathbb{F}_2$.

use crate::utils::variables_count_from_len;
use crate::{AnfError, AnfPolynomial};
use log::{debug, trace};

/// Output of the stage-wise Möbius transform: the ANF coefficients and every intermediate stage vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobiusTransform {
    variables_count: usize,
    stages: Vec<Vec<bool>>,
    coefficients: Vec<bool>,
}

impl MobiusTransform {
    /// Variable count $n$ of the transformed function.
    pub fn variables_count(&self) -> usize {
        self.variables_count
    }

    /// The $n$ stage vectors, `stages()[s]` being the vector after stage $s$.
    ///
    /// The last stage is equal to [Self::coefficients]. There is no stage for a 0-variable function.
    pub fn stages(&self) -> &[Vec<bool>] {
        &self.stages
    }

    /// ANF coefficients, in canonical assignment order.
    pub fn coefficients(&self) -> &[bool] {
        &self.coefficients
    }

    /// Consumes the transform and returns the ANF coefficients.
    pub fn into_coefficients(self) -> Vec<bool> {
        self.coefficients
    }

    /// ANF polynomial built from the coefficients.
    pub fn anf_polynomial(&self) -> AnfPolynomial {
        AnfPolynomial::from_coefficients_unchecked(self.coefficients.clone(), self.variables_count)
    }
}

/// Computes the ANF coefficients of a truth table, keeping every intermediate stage.
///
/// `truth_table[i]` is the function output for the $i$-th assignment of [crate::enumerate_assignments].
///
/// At stage $s$, with $step = 2^s$, the vector is split in blocks of $2 \cdot step$ values: the first half of each block
/// is copied, and each value of the second half is XORed with the value $step$ positions before.
///
/// # Returns
/// The coefficients and stage vectors, or [AnfError::InvalidLength] if the truth table length is not a power of 2.
///
/// # Example
/// ```rust
/// use sbox_anf::transform;
///
/// let transform = transform(&[false, false, false, true]).unwrap();
/// assert_eq!(transform.coefficients(), &[false, false, false, true]);
/// assert_eq!(transform.stages().len(), 2);
/// ```
pub fn transform(truth_table: &[bool]) -> Result<MobiusTransform, AnfError> {
    let variables_count = variables_count_from_len(truth_table.len())?;
    Ok(staged_transform(truth_table, variables_count))
}

/// `truth_table` must hold exactly $2^n$ values, $n$ being `variables_count`.
pub(crate) fn staged_transform(truth_table: &[bool], variables_count: usize) -> MobiusTransform {
    debug!(
        "Möbius transform of {} values ({} variables)",
        truth_table.len(),
        variables_count
    );

    let mut stages: Vec<Vec<bool>> = Vec::with_capacity(variables_count);
    for stage in 0..variables_count {
        let stage_input = stages.last().map(Vec::as_slice).unwrap_or(truth_table);
        let stage_output = mobius_stage(stage_input, stage);
        trace!("stage {}: {}", stage, bits_to_string(&stage_output));
        stages.push(stage_output);
    }

    let coefficients = stages
        .last()
        .cloned()
        .unwrap_or_else(|| truth_table.to_vec());
    MobiusTransform {
        variables_count,
        stages,
        coefficients,
    }
}

/// Same transform as [transform], computed in place without keeping the stage vectors.
///
/// Applying it twice restores the original values.
///
/// # Returns
/// The variable count, or [AnfError::InvalidLength] if the length of `values` is not a power of 2 (values are then left untouched).
pub fn mobius_transform_in_place(values: &mut [bool]) -> Result<usize, AnfError> {
    let variables_count = variables_count_from_len(values.len())?;
    mobius_transform_unchecked(values, variables_count);
    Ok(variables_count)
}

/// `values` must hold exactly $2^n$ values, $n$ being `variables_count`.
pub(crate) fn mobius_transform_unchecked(values: &mut [bool], variables_count: usize) {
    for stage in 0..variables_count {
        let step = 1usize << stage;
        for block in values.chunks_exact_mut(step << 1) {
            let (low, high) = block.split_at_mut(step);
            for (high_value, low_value) in high.iter_mut().zip(low.iter()) {
                *high_value ^= *low_value;
            }
        }
    }
}

fn mobius_stage(input: &[bool], stage: usize) -> Vec<bool> {
    let step = 1usize << stage;
    input
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            if idx & step == 0 {
                value
            } else {
                value ^ input[idx - step]
            }
        })
        .collect()
}

fn bits_to_string(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}
