use crate::mobius::mobius_transform_unchecked;
use crate::utils::{bits_from_biguint, bits_to_biguint, bits_to_u64, variables_count_from_len};
use crate::{AnfError, AssignmentVector, TruthTable};
use itertools::Itertools;
use num_bigint::BigUint;
use std::fmt::Display;

/// Textual conventions used to render an ANF polynomial.
///
/// The default style renders `1 + x0 + x0 * x1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaStyle {
    /// Prefix of each variable, followed by the variable index
    pub variable_prefix: String,
    /// Separator between the variables of a monomial (AND)
    pub product_separator: String,
    /// Separator between monomials (XOR)
    pub sum_separator: String,
    /// Literal for the null polynomial
    pub zero: String,
    /// Literal for the constant monomial
    pub one: String,
}

impl FormulaStyle {
    /// Style without spaces around the product separator: `1 + x0 + x0*x1`.
    pub fn compact() -> Self {
        FormulaStyle {
            product_separator: String::from("*"),
            ..Self::default()
        }
    }
}

impl Default for FormulaStyle {
    fn default() -> Self {
        FormulaStyle {
            variable_prefix: String::from("x"),
            product_separator: String::from(" * "),
            sum_separator: String::from(" + "),
            zero: String::from("0"),
            one: String::from("1"),
        }
    }
}

/// AND product of a subset of the variables, the empty subset being the constant monomial $1$.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Monomial {
    variables: Vec<usize>,
}

impl Monomial {
    /// Monomial $\prod_{j : v_j = 1} x_j$ of an assignment $v$.
    pub fn from_assignment(assignment: &AssignmentVector) -> Self {
        Monomial {
            variables: assignment.set_variables().collect(),
        }
    }

    /// Indices of the variables in the product, in increasing order.
    pub fn variables(&self) -> &[usize] {
        &self.variables
    }

    /// Returns `true` for the constant monomial $1$.
    pub fn is_constant(&self) -> bool {
        self.variables.is_empty()
    }

    /// Renders the monomial, eg. `x0 * x2`, or the `one` literal for the constant monomial.
    pub fn render_with(&self, style: &FormulaStyle) -> String {
        if self.is_constant() {
            return style.one.clone();
        }
        self.variables
            .iter()
            .map(|j| format!("{}{}", style.variable_prefix, j))
            .join(&style.product_separator)
    }
}

impl Display for Monomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_with(&FormulaStyle::default()))
    }
}

/// Renders ANF coefficients as a sum of monomials.
///
/// `enumerated_assignments[i]` designates the monomial whose coefficient is `coefficients[i]`,
/// both being in [crate::enumerate_assignments] order.
/// Monomials appear in coefficient index order, not sorted by degree.
///
/// # Returns
/// The formula, `0` if no coefficient is set, or [AnfError::LengthMismatch] if the two slices don't have the same length.
///
/// # Example
/// ```rust
/// use sbox_anf::{enumerate_assignments, render, AssignmentVector};
///
/// let assignments: Vec<AssignmentVector> = enumerate_assignments(2).collect();
/// assert_eq!(render(&assignments, &[true, false, true, true]).unwrap(), "1 + x1 + x0 * x1");
/// assert_eq!(render(&assignments, &[false; 4]).unwrap(), "0");
/// ```
pub fn render(
    enumerated_assignments: &[AssignmentVector],
    coefficients: &[bool],
) -> Result<String, AnfError> {
    render_with_style(enumerated_assignments, coefficients, &FormulaStyle::default())
}

/// [render] with a custom [FormulaStyle].
pub fn render_with_style(
    enumerated_assignments: &[AssignmentVector],
    coefficients: &[bool],
    style: &FormulaStyle,
) -> Result<String, AnfError> {
    if enumerated_assignments.len() != coefficients.len() {
        return Err(AnfError::LengthMismatch {
            vectors: enumerated_assignments.len(),
            coefficients: coefficients.len(),
        });
    }
    let monomials_str_list: Vec<String> = enumerated_assignments
        .iter()
        .zip(coefficients.iter())
        .filter(|(_, coefficient)| **coefficient)
        .map(|(assignment, _)| Monomial::from_assignment(assignment).render_with(style))
        .collect();
    if monomials_str_list.is_empty() {
        return Ok(style.zero.clone());
    }
    Ok(monomials_str_list.join(style.sum_separator.as_str()))
}

/// Polynomial in Algebraic Normal Form, stored as its $2^n$ coefficients.
///
/// Coefficient $i$ is the coefficient of the monomial of the $i$-th assignment of [crate::enumerate_assignments]:
/// bit $j$ of $i$ set means $x_j$ is part of the monomial.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnfPolynomial {
    coefficients: Vec<bool>,
    num_variables: usize,
}

impl AnfPolynomial {
    /// Creates a polynomial from its coefficients, whose count must be a power of 2.
    pub fn from_coefficients(coefficients: Vec<bool>) -> Result<Self, AnfError> {
        let num_variables = variables_count_from_len(coefficients.len())?;
        Ok(AnfPolynomial {
            coefficients,
            num_variables,
        })
    }

    pub(crate) fn from_coefficients_unchecked(coefficients: Vec<bool>, num_variables: usize) -> Self {
        AnfPolynomial {
            coefficients,
            num_variables,
        }
    }

    /// Creates a polynomial of `num_variables` variables from its coefficients packed in a BigUint, bit $i$ being coefficient $i$.
    ///
    /// Returns an error if `num_variables` is greater than 31, or if a bit beyond $2^n - 1$ is set.
    pub fn from_anf_big(polynomial: &BigUint, num_variables: usize) -> Result<Self, AnfError> {
        if num_variables > 31 {
            return Err(AnfError::TooBigVariableCount(31));
        }
        if polynomial.bits() > (1u64 << num_variables) {
            return Err(AnfError::TooBigTruthTableForVarCount);
        }
        Ok(AnfPolynomial {
            coefficients: bits_from_biguint(polynomial, 1 << num_variables),
            num_variables,
        })
    }

    /// Variable count $n$.
    pub fn variables_count(&self) -> usize {
        self.num_variables
    }

    /// The $2^n$ coefficients.
    pub fn coefficients(&self) -> &[bool] {
        &self.coefficients
    }

    /// Coefficients packed in an u64, if the polynomial has 6 or fewer variables.
    pub fn get_polynomial_small(&self) -> Option<u64> {
        bits_to_u64(&self.coefficients)
    }

    /// Coefficients packed in a BigUint, bit $i$ being coefficient $i$.
    pub fn get_polynomial_big(&self) -> BigUint {
        bits_to_biguint(&self.coefficients)
    }

    /// Monomials with a non-zero coefficient, in coefficient index order.
    pub fn monomials(&self) -> impl Iterator<Item = Monomial> + '_ {
        self.coefficients
            .iter()
            .enumerate()
            .filter(|(_, coefficient)| **coefficient)
            .map(move |(i, _)| {
                Monomial::from_assignment(&AssignmentVector::from_index(i, self.num_variables))
            })
    }

    /// Number of monomials with a non-zero coefficient.
    pub fn monomial_count(&self) -> usize {
        self.coefficients.iter().filter(|coefficient| **coefficient).count()
    }

    /// Renders the polynomial with a custom [FormulaStyle].
    pub fn render_with(&self, style: &FormulaStyle) -> String {
        let monomials_str_list: Vec<String> = self
            .monomials()
            .map(|monomial| monomial.render_with(style))
            .collect();
        if monomials_str_list.is_empty() {
            return style.zero.clone();
        }
        monomials_str_list.join(style.sum_separator.as_str())
    }

    /// Truth table of the Boolean function represented by the polynomial.
    ///
    /// The Möbius transform being an involution, this is the transform of the coefficients.
    pub fn to_truth_table(&self) -> TruthTable {
        let mut values = self.coefficients.clone();
        mobius_transform_unchecked(&mut values, self.num_variables);
        TruthTable::from_values_unchecked(values, self.num_variables)
    }
}

impl Display for AnfPolynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_with(&FormulaStyle::default()))
    }
}

#[cfg(test)]
mod tests {
    use crate::anf_polynom::{render, render_with_style, AnfPolynomial, FormulaStyle, Monomial};
    use crate::{enumerate_assignments, AnfError, AssignmentVector};
    use num_bigint::BigUint;
    use num_traits::{Num, One, Zero};

    fn assignments(variables_count: usize) -> Vec<AssignmentVector> {
        enumerate_assignments(variables_count).collect()
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&assignments(1), &[false, true]).unwrap(), "x0");
        assert_eq!(render(&assignments(1), &[true, false]).unwrap(), "1");
        assert_eq!(render(&assignments(2), &[false, false, false, true]).unwrap(), "x0 * x1");
        assert_eq!(render(&assignments(3), &[false; 8]).unwrap(), "0");
        assert_eq!(render(&assignments(0), &[true]).unwrap(), "1");
        assert_eq!(render(&assignments(0), &[false]).unwrap(), "0");
        assert_eq!(render(&[], &[]).unwrap(), "0");
    }

    #[test]
    fn test_render_index_order() {
        // x0*x1 (index 3) comes before x2 (index 4) even though it has a higher degree
        let coefficients = [false, true, true, true, true, false, false, false];
        assert_eq!(
            render(&assignments(3), &coefficients).unwrap(),
            "x0 + x1 + x0 * x1 + x2"
        );
    }

    #[test]
    fn test_render_length_mismatch() {
        assert_eq!(
            render(&assignments(2), &[true, false]),
            Err(AnfError::LengthMismatch {
                vectors: 4,
                coefficients: 2
            })
        );
    }

    #[test]
    fn test_render_with_style() {
        let style = FormulaStyle {
            variable_prefix: String::from("a"),
            product_separator: String::from("&"),
            sum_separator: String::from(" ^ "),
            zero: String::from("false"),
            one: String::from("true"),
        };
        let coefficients = [true, false, false, true];
        assert_eq!(
            render_with_style(&assignments(2), &coefficients, &style).unwrap(),
            "true ^ a0&a1"
        );
        assert_eq!(
            render_with_style(&assignments(2), &[false; 4], &style).unwrap(),
            "false"
        );
        assert_eq!(
            render_with_style(&assignments(2), &coefficients, &FormulaStyle::compact()).unwrap(),
            "1 + x0*x1"
        );
    }

    #[test]
    fn test_monomial() {
        let monomial = Monomial::from_assignment(&AssignmentVector::from_index(0b1010, 4));
        assert_eq!(monomial.variables(), &[1, 3]);
        assert!(!monomial.is_constant());
        assert_eq!(monomial.to_string(), "x1 * x3");

        let monomial = Monomial::from_assignment(&AssignmentVector::zero(4));
        assert!(monomial.is_constant());
        assert_eq!(monomial.to_string(), "1");
    }

    #[test]
    fn test_from_coefficients() {
        let anf_polynomial = AnfPolynomial::from_coefficients(vec![true, false, false, true]).unwrap();
        assert_eq!(anf_polynomial.variables_count(), 2);
        assert_eq!(anf_polynomial.monomial_count(), 2);

        assert_eq!(
            AnfPolynomial::from_coefficients(vec![true; 6]),
            Err(AnfError::InvalidLength(6))
        );
        assert_eq!(
            AnfPolynomial::from_coefficients(vec![]),
            Err(AnfError::InvalidLength(0))
        );
    }

    #[test]
    fn test_get_polynomial_small() {
        let anf_polynomial = AnfPolynomial::from_anf_big(&BigUint::from(30u32), 3).unwrap();
        assert_eq!(anf_polynomial.get_polynomial_small(), Some(30));

        let anf_polynomial = AnfPolynomial::from_anf_big(
            &BigUint::from_str_radix("7969817CC5893BA6AC326E47619F5AD0", 16).unwrap(),
            7,
        )
        .unwrap();
        assert_eq!(anf_polynomial.get_polynomial_small(), None);
    }

    #[test]
    fn test_get_polynomial_big() {
        let anf_polynomial = AnfPolynomial::from_anf_big(&BigUint::from(30u32), 3).unwrap();
        assert_eq!(anf_polynomial.get_polynomial_big(), BigUint::from(30u32));

        let polynomial = BigUint::from_str_radix("7969817CC5893BA6AC326E47619F5AD0", 16).unwrap();
        let anf_polynomial = AnfPolynomial::from_anf_big(&polynomial, 7).unwrap();
        assert_eq!(anf_polynomial.get_polynomial_big(), polynomial);
    }

    #[test]
    fn test_from_anf_big_errors() {
        assert_eq!(
            AnfPolynomial::from_anf_big(&BigUint::from(0x1ffu32), 3),
            Err(AnfError::TooBigTruthTableForVarCount)
        );
        assert_eq!(
            AnfPolynomial::from_anf_big(&BigUint::one(), 32),
            Err(AnfError::TooBigVariableCount(31))
        );
    }

    #[test]
    fn test_to_string() {
        let anf_polynomial = AnfPolynomial::from_anf_big(&BigUint::from(30u32), 3).unwrap();
        assert_eq!(anf_polynomial.to_string(), "x0 + x1 + x0 * x1 + x2");

        let anf_polynomial = AnfPolynomial::from_anf_big(&BigUint::from(31u32), 3).unwrap();
        assert_eq!(anf_polynomial.to_string(), "1 + x0 + x1 + x0 * x1 + x2");

        let anf_polynomial = AnfPolynomial::from_anf_big(&BigUint::zero(), 3).unwrap();
        assert_eq!(anf_polynomial.to_string(), "0");

        let anf_polynomial = AnfPolynomial::from_anf_big(&BigUint::one(), 3).unwrap();
        assert_eq!(anf_polynomial.to_string(), "1");

        let anf_polynomial = AnfPolynomial::from_anf_big(&BigUint::from(142u32), 3).unwrap();
        assert_eq!(anf_polynomial.render_with(&FormulaStyle::compact()), "x0 + x1 + x0*x1 + x0*x1*x2");
    }

    #[test]
    fn test_render_matches_polynomial() {
        for polynomial in 0u32..256 {
            let anf_polynomial = AnfPolynomial::from_anf_big(&BigUint::from(polynomial), 3).unwrap();
            assert_eq!(
                render(&assignments(3), anf_polynomial.coefficients()).unwrap(),
                anf_polynomial.to_string()
            );
        }
    }

    #[test]
    fn test_to_truth_table() {
        // rule 30
        let anf_polynomial = AnfPolynomial::from_anf_big(&BigUint::from(30u32), 3).unwrap();
        assert_eq!(anf_polynomial.to_truth_table().printable_hex_truth_table(), "1e");

        let anf_polynomial = AnfPolynomial::from_anf_big(&BigUint::from(142u32), 3).unwrap();
        assert_eq!(anf_polynomial.to_truth_table().printable_hex_truth_table(), "6e");

        let anf_polynomial = AnfPolynomial::from_anf_big(&BigUint::zero(), 4).unwrap();
        assert_eq!(anf_polynomial.to_truth_table().printable_hex_truth_table(), "0000");
    }
}
