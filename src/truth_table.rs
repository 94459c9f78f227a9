use crate::mobius::staged_transform;
use crate::utils::{
    bits_from_biguint, bits_from_u64, bits_to_biguint, bits_to_u64, variables_count_from_len,
};
use crate::{AnfError, AnfPolynomial, AssignmentVector, MobiusTransform};
use num_bigint::BigUint;
use num_traits::Num;
use std::fmt::Display;

/// Truth table of a single-output Boolean function of $n$ variables.
///
/// Value $i$ is the output for the $i$-th assignment of [crate::enumerate_assignments],
/// ie for the input whose bit $j$ is the value of $x_j$.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    values: Vec<bool>,
    variables_count: usize,
}

impl TruthTable {
    /// Creates a truth table from its values, whose count must be a power of 2.
    ///
    /// # Example
    /// ```rust
    /// use sbox_anf::TruthTable;
    ///
    /// let truth_table = TruthTable::from_values(vec![false, true, true, false]).unwrap();
    /// assert_eq!(truth_table.variables_count(), 2);
    /// assert!(TruthTable::from_values(vec![true; 3]).is_err());
    /// ```
    pub fn from_values(values: Vec<bool>) -> Result<Self, AnfError> {
        let variables_count = variables_count_from_len(values.len())?;
        Ok(TruthTable {
            values,
            variables_count,
        })
    }

    pub(crate) fn from_values_unchecked(values: Vec<bool>, variables_count: usize) -> Self {
        TruthTable {
            values,
            variables_count,
        }
    }

    /// Creates a truth table from an u64 (meaning the Boolean function has 6 or less input variables).
    ///
    /// # Parameters
    /// - `truth_table`: the lower bit represents the output of the Boolean function for the input 0.
    /// - `num_variables`: number of input variables.
    ///
    /// Returns an error if `num_variables` is greater than 6 or if a bit beyond $2^n - 1$ is set.
    pub fn from_u64_truth_table(truth_table: u64, num_variables: usize) -> Result<Self, AnfError> {
        if num_variables > 6 {
            return Err(AnfError::TooBigVariableCount(6));
        }
        if num_variables < 6 && truth_table >> (1 << num_variables) != 0 {
            return Err(AnfError::TooBigTruthTableForVarCount);
        }
        Ok(TruthTable {
            values: bits_from_u64(truth_table, 1 << num_variables),
            variables_count: num_variables,
        })
    }

    /// Creates a truth table from a BigUint, the lower bit representing the output for the input 0.
    ///
    /// Returns an error if `num_variables` is greater than 31 or if a bit beyond $2^n - 1$ is set.
    pub fn from_biguint_truth_table(
        truth_table: &BigUint,
        num_variables: usize,
    ) -> Result<Self, AnfError> {
        if num_variables > 31 {
            return Err(AnfError::TooBigVariableCount(31));
        }
        if truth_table.bits() > (1u64 << num_variables) {
            return Err(AnfError::TooBigTruthTableForVarCount);
        }
        Ok(TruthTable {
            values: bits_from_biguint(truth_table, 1 << num_variables),
            variables_count: num_variables,
        })
    }

    /// Creates a truth table from its hexadecimal representation.
    ///
    /// The string must have a length of $\frac{2^n}{4}$ where $n$ is the number of variables
    /// (so only functions of 2 or more variables can be written this way).
    /// The last hex digit holds the outputs of inputs 0 to 3, input 0 being its least significant bit.
    ///
    /// # Example
    /// ```rust
    /// use sbox_anf::TruthTable;
    ///
    /// // Wolfram's rule 30
    /// let truth_table = TruthTable::from_hex_string_truth_table("1e").unwrap();
    /// assert_eq!(truth_table.variables_count(), 3);
    /// assert_eq!(truth_table.algebraic_normal_form().to_string(), "x0 + x1 + x0 * x1 + x2");
    /// ```
    pub fn from_hex_string_truth_table(hex_truth_table: &str) -> Result<Self, AnfError> {
        if hex_truth_table.len().count_ones() != 1 {
            return Err(AnfError::WrongStringHexTruthTableLength);
        }
        if !hex_truth_table.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AnfError::StringHexParseError);
        }
        let num_variables = (hex_truth_table.len() << 2).trailing_zeros() as usize;
        let truth_table = BigUint::from_str_radix(hex_truth_table, 16)
            .map_err(|_| AnfError::StringHexParseError)?;
        Self::from_biguint_truth_table(&truth_table, num_variables)
    }

    /// Variable count $n$.
    #[inline]
    pub fn variables_count(&self) -> usize {
        self.variables_count
    }

    /// The $2^n$ output values.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Output for the input `input_bits`, the least significant bit being $x_0$. `None` if the input is greater than $2^n - 1$.
    pub fn get(&self, input_bits: usize) -> Option<bool> {
        self.values.get(input_bits).copied()
    }

    /// Output for an assignment. `None` if the assignment doesn't have $n$ variables.
    pub fn evaluate(&self, assignment: &AssignmentVector) -> Option<bool> {
        if assignment.variables_count() != self.variables_count {
            return None;
        }
        self.get(assignment.to_index())
    }

    /// Iterator over the output values, in canonical assignment order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.values.iter().copied()
    }

    /// Returns the truth table as a hexadecimal string, padded with zeros to $\frac{2^n}{4}$ digits (at least one digit).
    ///
    /// # Example
    /// ```rust
    /// use sbox_anf::TruthTable;
    ///
    /// let truth_table = TruthTable::from_u64_truth_table(30, 3).unwrap();
    /// assert_eq!(truth_table.printable_hex_truth_table(), "1e");
    /// ```
    pub fn printable_hex_truth_table(&self) -> String {
        let digits = (self.values.len() >> 2).max(1);
        format!("{:0>1$}", self.biguint_truth_table().to_str_radix(16), digits)
    }

    /// Truth table packed in a BigUint, the lower bit being the output for the input 0.
    pub fn biguint_truth_table(&self) -> BigUint {
        bits_to_biguint(&self.values)
    }

    /// Truth table packed in an u64, if the function has 6 or fewer variables.
    pub fn try_u64_truth_table(&self) -> Option<u64> {
        bits_to_u64(&self.values)
    }

    /// Runs the stage-wise Möbius transform on the truth table.
    pub fn mobius_transform(&self) -> MobiusTransform {
        staged_transform(&self.values, self.variables_count)
    }

    /// Returns the Algebraic Normal Form of the function.
    ///
    /// # Example
    /// ```rust
    /// use sbox_anf::TruthTable;
    ///
    /// let truth_table = TruthTable::from_hex_string_truth_table("7b").unwrap();
    /// assert_eq!(truth_table.algebraic_normal_form().to_string(), "1 + x1 + x0 * x1 + x1 * x2");
    /// ```
    pub fn algebraic_normal_form(&self) -> AnfPolynomial {
        self.mobius_transform().anf_polynomial()
    }
}

/// Create a truth table from its hex string representation
impl TryFrom<&str> for TruthTable {
    type Error = AnfError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex_string_truth_table(value)
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.printable_hex_truth_table())
    }
}
