//! Transformation script reconstruction and replay

use super::table::{DistanceTable, Step};
use crate::core::Transform;
use std::iter;

/// Reconstruct one minimum-length script turning `a` into `b`
///
/// Walks from cell (len(a), len(b)) back to (0, 0). Equal characters are
/// passed diagonally for free; otherwise the walk takes the first step the
/// table marked as minimal, in the order Transpose, Replace, Delete, Insert.
/// Every step lands on a cell whose cost accounts for the rest of the path,
/// so the script length always equals `table.distance()` and each cell is
/// visited at most once.
///
/// # Panics
/// Panics if `table` was not built for words of these lengths.
///
/// # Examples
/// ```
/// use distle::align::{DistanceTable, reconstruct};
/// use distle::core::Transform;
///
/// let cat: Vec<char> = "cat".chars().collect();
/// let act: Vec<char> = "act".chars().collect();
/// let table = DistanceTable::build(&cat, &act);
///
/// assert_eq!(reconstruct(&cat, &act, &table), vec![Transform::Transpose]);
/// ```
#[must_use]
pub fn reconstruct(a: &[char], b: &[char], table: &DistanceTable) -> Vec<Transform> {
    assert!(
        table.rows() == a.len() + 1 && table.cols() == b.len() + 1,
        "distance table is {}x{}, words need {}x{}",
        table.rows(),
        table.cols(),
        a.len() + 1,
        b.len() + 1
    );

    let mut script = Vec::with_capacity(table.distance());
    let (mut row, mut col) = (a.len(), b.len());

    while row > 0 || col > 0 {
        if row == 0 {
            script.extend(iter::repeat_n(Transform::Insert, col));
            break;
        }
        if col == 0 {
            script.extend(iter::repeat_n(Transform::Delete, row));
            break;
        }
        if a[row - 1] == b[col - 1] {
            row -= 1;
            col -= 1;
            continue;
        }

        match table.predecessors(row, col).first_edit() {
            Step::Transpose => {
                script.push(Transform::Transpose);
                row -= 2;
                col -= 2;
            }
            Step::Replace | Step::Match => {
                script.push(Transform::Replace);
                row -= 1;
                col -= 1;
            }
            Step::Delete => {
                script.push(Transform::Delete);
                row -= 1;
            }
            Step::Insert => {
                script.push(Transform::Insert);
                col -= 1;
            }
        }
    }

    debug_assert_eq!(script.len(), table.distance());
    script
}

/// Build the table for `a` → `b` and reconstruct its script
///
/// # Examples
/// ```
/// use distle::align::get_transformation_list;
/// use distle::core::Transform::{Insert, Replace};
///
/// assert_eq!(get_transformation_list("cat", "cats"), vec![Insert]);
/// assert_eq!(get_transformation_list("kitten", "sitting"), vec![Insert, Replace, Replace]);
/// assert!(get_transformation_list("dog", "dog").is_empty());
/// ```
#[must_use]
pub fn get_transformation_list(a: &str, b: &str) -> Vec<Transform> {
    if a == b {
        return Vec::new();
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let table = DistanceTable::build(&a, &b);
    reconstruct(&a, &b, &table)
}

/// Apply `script` to `a`, reading characters of `b` where the script needs them
///
/// Uses the same cursor rules as [`reconstruct`]: cursors start at the ends
/// of both words, equal characters are copied for free, and each tag consumes
/// characters as follows:
/// - `I` copies the current character of `b`
/// - `D` drops the current character of `a`
/// - `R` writes the current character of `b` in place of `a`'s
/// - `T` swaps the last two characters of `a`, which must be `b`'s two reversed
///
/// Returns `None` when the script runs past either word, a swap doesn't line
/// up, or characters are left over once the tags run out.
///
/// # Examples
/// ```
/// use distle::align::{get_transformation_list, replay};
///
/// let script = get_transformation_list("form", "from");
/// assert_eq!(replay("form", "from", &script).as_deref(), Some("from"));
/// assert_eq!(replay("form", "from", &[]), None);
/// ```
#[must_use]
pub fn replay(a: &str, b: &str, script: &[Transform]) -> Option<String> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (mut row, mut col) = (a.len(), b.len());
    // Built back to front
    let mut produced = Vec::with_capacity(b.len());
    let mut tags = script.iter();

    loop {
        while row > 0 && col > 0 && a[row - 1] == b[col - 1] {
            produced.push(a[row - 1]);
            row -= 1;
            col -= 1;
        }

        let Some(&tag) = tags.next() else {
            break;
        };

        match tag {
            Transform::Insert => {
                col = col.checked_sub(1)?;
                produced.push(b[col]);
            }
            Transform::Delete => {
                row = row.checked_sub(1)?;
            }
            Transform::Replace => {
                row = row.checked_sub(1)?;
                col = col.checked_sub(1)?;
                produced.push(b[col]);
            }
            Transform::Transpose => {
                if row < 2 || col < 2 || a[row - 1] != b[col - 2] || a[row - 2] != b[col - 1] {
                    return None;
                }
                produced.push(a[row - 2]);
                produced.push(a[row - 1]);
                row -= 2;
                col -= 2;
            }
        }
    }

    if row != 0 || col != 0 {
        return None;
    }

    produced.reverse();
    Some(produced.into_iter().collect())
}
