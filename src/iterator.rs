//! Canonical enumeration of input assignments.

use crate::AssignmentVector;
use std::iter::FusedIterator;

/// Iterator over the $2^n$ assignments of $n$ variables, in canonical order.
///
/// The first assignment is the all-zero vector, each following one is obtained by a binary counter
/// increment of its predecessor. The $i$-th assignment is thus the base-2 encoding of $i$,
/// least significant bit stored at index 0.
///
/// With 0 variables, the iterator yields a single empty assignment.
///
/// Example:
/// ```rust
/// use sbox_anf::enumerate_assignments;
///
/// let mut iterator = enumerate_assignments(2);
/// assert_eq!(iterator.next().unwrap().bits(), &[false, false]);
/// assert_eq!(iterator.next().unwrap().bits(), &[true, false]);
/// assert_eq!(iterator.next().unwrap().bits(), &[false, true]);
/// assert_eq!(iterator.next().unwrap().bits(), &[true, true]);
/// assert_eq!(iterator.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct AssignmentIterator {
    next_assignment: Option<AssignmentVector>,
    remaining: Option<usize>,
}

impl AssignmentIterator {
    pub(crate) fn new(variables_count: usize) -> Self {
        AssignmentIterator {
            next_assignment: Some(AssignmentVector::zero(variables_count)),
            remaining: u32::try_from(variables_count)
                .ok()
                .and_then(|shift| 1usize.checked_shl(shift)),
        }
    }
}

impl Iterator for AssignmentIterator {
    type Item = AssignmentVector;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next_assignment.take()?;
        let mut successor = current.clone();
        if successor.increment() {
            self.next_assignment = Some(successor);
        }
        self.remaining = self.remaining.map(|remaining| remaining - 1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for AssignmentIterator {}

/// Enumerates the $2^n$ assignments of `variables_count` variables in canonical order.
///
/// Collect the iterator to get the assignment list used by [crate::render].
pub fn enumerate_assignments(variables_count: usize) -> AssignmentIterator {
    AssignmentIterator::new(variables_count)
}
