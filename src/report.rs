use crate::{AnfError, AssignmentVector};
use itertools::Itertools;

/// Tabulates a truth table next to its Möbius transform stages, one assignment per line.
///
/// The header lists the variables from the most significant one, the output, then stages `S1` to `Sn`.
/// Each line ends with a newline.
///
/// # Returns
/// The table, or [AnfError::LengthMismatch] if `values` or a stage doesn't have one value per assignment.
///
/// # Example
/// ```rust
/// use sbox_anf::{enumerate_assignments, tabulate, transform, AssignmentVector};
///
/// let values = [false, true, true, true];
/// let assignments: Vec<AssignmentVector> = enumerate_assignments(2).collect();
/// let transform = transform(&values).unwrap();
/// let table = tabulate("y", &assignments, &values, transform.stages()).unwrap();
/// assert_eq!(table.lines().next(), Some("x1 x0 y S1 S2"));
/// assert_eq!(table.lines().last(), Some("1  1  1  0  1"));
/// ```
pub fn tabulate(
    output_name: &str,
    assignments: &[AssignmentVector],
    values: &[bool],
    stages: &[Vec<bool>],
) -> Result<String, AnfError> {
    if let Some(mismatch) = std::iter::once(values.len())
        .chain(stages.iter().map(Vec::len))
        .find(|len| *len != assignments.len())
    {
        return Err(AnfError::LengthMismatch {
            vectors: assignments.len(),
            coefficients: mismatch,
        });
    }

    let variables_count = assignments
        .first()
        .map_or(0, AssignmentVector::variables_count);
    let header = (0..variables_count)
        .rev()
        .map(|j| format!("x{}", j))
        .chain(std::iter::once(output_name.to_string()))
        .chain((1..=stages.len()).map(|s| format!("S{}", s)))
        .join(" ");

    let mut table = header;
    table.push('\n');
    for (i, assignment) in assignments.iter().enumerate() {
        let row = assignment
            .bits()
            .iter()
            .rev()
            .copied()
            .chain(std::iter::once(values[i]))
            .chain(stages.iter().map(|stage| stage[i]))
            .map(|bit| bit as u8)
            .join("  ");
        table.push_str(&row);
        table.push('\n');
    }
    Ok(table)
}
