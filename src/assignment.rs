//! Input assignments of a Boolean function.

use std::fmt::Display;

/// A value of the $n$ input variables of a Boolean function, $v \in \mathbb{F}_2^n$.
///
/// Index $j$ holds the value of variable $x_j$, so the vector is stored least significant bit first:
/// the assignment `[true, false, true]` is the integer `0b101 = 5`.
///
/// The same type is used to designate a monomial of the ANF: the assignment at index $i$ of the
/// canonical enumeration corresponds to the product of every $x_j$ for which bit $j$ is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssignmentVector {
    bits: Vec<bool>,
}

impl AssignmentVector {
    /// All-zero assignment of `variables_count` variables, the first one of the canonical enumeration.
    pub fn zero(variables_count: usize) -> Self {
        AssignmentVector {
            bits: vec![false; variables_count],
        }
    }

    /// Wraps raw bits, `bits[j]` being the value of $x_j$.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        AssignmentVector { bits }
    }

    /// Assignment of `variables_count` variables encoding `index` in base 2, least significant bit first.
    ///
    /// Bits of `index` above `variables_count` are ignored.
    pub fn from_index(index: usize, variables_count: usize) -> Self {
        AssignmentVector {
            bits: (0..variables_count)
                .map(|j| index.checked_shr(j as u32).unwrap_or(0) & 1 == 1)
                .collect(),
        }
    }

    /// Number of variables $n$.
    #[inline]
    pub fn variables_count(&self) -> usize {
        self.bits.len()
    }

    /// Value of variable $x_j$, `false` for any `j` past the last variable.
    #[inline]
    pub fn bit(&self, j: usize) -> bool {
        self.bits.get(j).copied().unwrap_or(false)
    }

    /// Raw bits, least significant first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Positional encoding of the assignment, $\sum_j v_j 2^j$.
    ///
    /// Only meaningful for fewer than `usize::BITS` variables, higher bits are lost.
    pub fn to_index(&self) -> usize {
        self.bits
            .iter()
            .rev()
            .fold(0usize, |index, &bit| (index << 1) | bit as usize)
    }

    /// Returns `true` if every variable set in `self` is also set in `other`, ie $self \preceq other$ bitwise.
    ///
    /// Variables missing from the shorter vector are considered unset.
    pub fn is_covered_by(&self, other: &AssignmentVector) -> bool {
        self.bits
            .iter()
            .enumerate()
            .all(|(j, &bit)| !bit || other.bit(j))
    }

    /// Indices $j$ of the variables set in the assignment, in increasing order.
    pub fn set_variables(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, bit)| **bit)
            .map(|(j, _)| j)
    }

    /// Binary counter increment: flips the lowest 0 to 1 and clears every 1 below it.
    ///
    /// Returns `false` when the carry runs out of the vector, the assignment is then back to all zeros.
    pub(crate) fn increment(&mut self) -> bool {
        for bit in self.bits.iter_mut() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return true;
            }
        }
        false
    }
}

/// Prints the assignment most significant variable first, like a binary number: `x2 x1 x0 = 1 0 1` prints `101`.
impl Display for AssignmentVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &bit in self.bits.iter().rev() {
            write!(f, "{}", bit as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::AssignmentVector;

    #[test]
    fn test_from_index() {
        let assignment = AssignmentVector::from_index(5, 3);
        assert_eq!(assignment.bits(), &[true, false, true]);
        assert_eq!(assignment.to_index(), 5);

        let assignment = AssignmentVector::from_index(0xff, 4);
        assert_eq!(assignment.bits(), &[true, true, true, true]);
        assert_eq!(assignment.to_index(), 15);

        let assignment = AssignmentVector::from_index(1, 0);
        assert_eq!(assignment.variables_count(), 0);
        assert_eq!(assignment.to_index(), 0);
    }

    #[test]
    fn test_bit() {
        let assignment = AssignmentVector::from_bits(vec![false, true]);
        assert!(!assignment.bit(0));
        assert!(assignment.bit(1));
        assert!(!assignment.bit(2));
    }

    #[test]
    fn test_is_covered_by() {
        let x0 = AssignmentVector::from_index(0b001, 3);
        let x0_x2 = AssignmentVector::from_index(0b101, 3);
        let x1 = AssignmentVector::from_index(0b010, 3);
        let constant = AssignmentVector::zero(3);

        assert!(x0.is_covered_by(&x0_x2));
        assert!(x0.is_covered_by(&x0));
        assert!(!x0_x2.is_covered_by(&x0));
        assert!(!x1.is_covered_by(&x0_x2));
        assert!(constant.is_covered_by(&x1));
        assert!(constant.is_covered_by(&constant));
    }

    #[test]
    fn test_set_variables() {
        let assignment = AssignmentVector::from_index(0b1101, 4);
        assert_eq!(assignment.set_variables().collect::<Vec<_>>(), vec![0, 2, 3]);

        let assignment = AssignmentVector::zero(4);
        assert_eq!(assignment.set_variables().count(), 0);
    }

    #[test]
    fn test_increment() {
        let mut assignment = AssignmentVector::from_index(0b011, 3);
        assert!(assignment.increment());
        assert_eq!(assignment.to_index(), 0b100);

        let mut assignment = AssignmentVector::from_index(0b111, 3);
        assert!(!assignment.increment());
        assert_eq!(assignment, AssignmentVector::zero(3));

        let mut assignment = AssignmentVector::zero(0);
        assert!(!assignment.increment());
    }

    #[test]
    fn test_display() {
        assert_eq!(AssignmentVector::from_index(0b0110, 4).to_string(), "0110");
        assert_eq!(AssignmentVector::from_index(1, 1).to_string(), "1");
        assert_eq!(AssignmentVector::zero(0).to_string(), "");
    }
}
