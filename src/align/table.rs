//! Distance table construction
//!
//! Restricted Damerau-Levenshtein (optimal string alignment): insert, delete,
//! replace and adjacent transposition, each costing 1.
//!
//! Besides the cost of every cell, the table records which predecessor steps
//! achieved that minimum. Reconstruction follows only those marks, so it never
//! has to re-derive optimality.

/// A move from a cell back to one of its predecessors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Diagonal move over two equal characters, free
    Match,
    /// Back two rows and two columns over a swapped pair
    Transpose,
    /// Diagonal move over two different characters
    Replace,
    /// Up one row
    Delete,
    /// Left one column
    Insert,
}

impl Step {
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of steps that reach a cell at its minimal cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Predecessors(u8);

impl Predecessors {
    #[inline]
    #[must_use]
    pub const fn contains(self, step: Step) -> bool {
        self.0 & step.bit() != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    fn insert(&mut self, step: Step) {
        self.0 |= step.bit();
    }

    /// First marked edit in the fixed tie-break order Transpose, Replace, Delete, Insert
    ///
    /// Only meaningful for cells whose last characters differ; such a cell
    /// always has at least one edit marked, and Insert is what remains when
    /// the other three are not.
    #[must_use]
    pub const fn first_edit(self) -> Step {
        if self.contains(Step::Transpose) {
            Step::Transpose
        } else if self.contains(Step::Replace) {
            Step::Replace
        } else if self.contains(Step::Delete) {
            Step::Delete
        } else {
            Step::Insert
        }
    }
}

/// Dynamic-programming table for one (guess, target) pair
///
/// Cell (i, j) holds the minimum cost of turning the first `i` characters of
/// the row word into the first `j` characters of the column word. Built once,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    rows: usize,
    cols: usize,
    costs: Vec<usize>,
    predecessors: Vec<Predecessors>,
}

impl DistanceTable {
    /// Build the table for `row_word` → `col_word`
    ///
    /// # Examples
    /// ```
    /// use distle::align::DistanceTable;
    ///
    /// let kitten: Vec<char> = "kitten".chars().collect();
    /// let sitting: Vec<char> = "sitting".chars().collect();
    /// let table = DistanceTable::build(&kitten, &sitting);
    ///
    /// assert_eq!(table.rows(), 7);
    /// assert_eq!(table.cols(), 8);
    /// assert_eq!(table.distance(), 3);
    /// ```
    #[must_use]
    pub fn build(row_word: &[char], col_word: &[char]) -> Self {
        let rows = row_word.len() + 1;
        let cols = col_word.len() + 1;
        let mut costs = vec![0; rows * cols];
        let mut predecessors = vec![Predecessors::default(); rows * cols];

        // Row 0: pure insertions, column 0: pure deletions
        for col in 1..cols {
            costs[col] = col;
            predecessors[col].insert(Step::Insert);
        }
        for row in 1..rows {
            costs[row * cols] = row;
            predecessors[row * cols].insert(Step::Delete);
        }

        for row in 1..rows {
            for col in 1..cols {
                let row_char = row_word[row - 1];
                let col_char = col_word[col - 1];
                let matched = row_char == col_char;

                let diagonal = costs[(row - 1) * cols + col - 1] + usize::from(!matched);
                let delete = costs[(row - 1) * cols + col] + 1;
                let insert = costs[row * cols + col - 1] + 1;

                // A swap always costs exactly 1, even when the swapped characters also match
                let swapped = row > 1
                    && col > 1
                    && row_char == col_word[col - 2]
                    && row_word[row - 2] == col_char;
                let transpose = swapped.then(|| costs[(row - 2) * cols + col - 2] + 1);

                let mut best = diagonal.min(delete).min(insert);
                if let Some(cost) = transpose {
                    best = best.min(cost);
                }

                let cell = &mut predecessors[row * cols + col];
                if diagonal == best {
                    cell.insert(if matched { Step::Match } else { Step::Replace });
                }
                if transpose == Some(best) {
                    cell.insert(Step::Transpose);
                }
                if delete == best {
                    cell.insert(Step::Delete);
                }
                if insert == best {
                    cell.insert(Step::Insert);
                }

                costs[row * cols + col] = best;
            }
        }

        Self {
            rows,
            cols,
            costs,
            predecessors,
        }
    }

    /// Edit distance between the two words (the final cell)
    #[inline]
    #[must_use]
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Number of rows: row word length + 1
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns: column word length + 1
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Cost at cell (row, col)
    ///
    /// # Panics
    /// Panics if the cell lies outside the table
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
        self.costs[row * self.cols + col]
    }

    /// Steps that reach cell (row, col) at its minimal cost
    ///
    /// # Panics
    /// Panics if the cell lies outside the table
    #[inline]
    #[must_use]
    pub fn predecessors(&self, row: usize, col: usize) -> Predecessors {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
        self.predecessors[row * self.cols + col]
    }

    /// All costs of one row
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`
    #[must_use]
    pub fn row(&self, row: usize) -> &[usize] {
        &self.costs[row * self.cols..(row + 1) * self.cols]
    }
}

/// Build the distance table for two strings
#[must_use]
pub fn build_table(a: &str, b: &str) -> DistanceTable {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    DistanceTable::build(&a, &b)
}

/// Minimum number of inserts, deletes, replacements and adjacent swaps turning `a` into `b`
///
/// Identical strings short-circuit to 0 without building a table.
///
/// # Examples
/// ```
/// use distle::align::edit_distance;
///
/// assert_eq!(edit_distance("cat", "cat"), 0);
/// assert_eq!(edit_distance("cat", "cats"), 1);
/// assert_eq!(edit_distance("cat", "act"), 1);
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// ```
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    build_table(a, b).distance()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vs_empty() {
        let table = build_table("", "");
        assert_eq!(table.rows(), 1);
        assert_eq!(table.cols(), 1);
        assert_eq!(table.distance(), 0);
    }

    #[test]
    fn empty_vs_nonempty_is_length() {
        assert_eq!(edit_distance("", "dog"), 3);
        assert_eq!(edit_distance("dog", ""), 3);
        assert_eq!(edit_distance("", "café"), 4);
    }

    #[test]
    fn base_row_and_column_are_identity_costs() {
        let table = build_table("abc", "wxyz");
        assert_eq!(table.row(0), &[0, 1, 2, 3, 4]);
        for row in 0..table.rows() {
            assert_eq!(table.get(row, 0), row);
        }
        assert!(table.predecessors(0, 3).contains(Step::Insert));
        assert!(table.predecessors(2, 0).contains(Step::Delete));
        assert!(table.predecessors(0, 0).is_empty());
    }

    #[test]
    fn known_distances() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("sunday", "saturday"), 3);
        assert_eq!(edit_distance("cat", "dog"), 3);
        assert_eq!(edit_distance("cat", "cot"), 1);
    }

    #[test]
    fn transposition_counts_once() {
        assert_eq!(edit_distance("cat", "act"), 1);
        assert_eq!(edit_distance("abcdef", "badcfe"), 3);
        // Restricted: a swapped pair can't be edited again, so this needs 3
        assert_eq!(edit_distance("ca", "abc"), 3);
    }

    #[test]
    fn transposition_marked_only_when_minimal() {
        let table = build_table("cat", "act");
        let marks = table.predecessors(2, 2);
        assert!(marks.contains(Step::Transpose));
        assert!(!marks.contains(Step::Match));
    }

    #[test]
    fn swap_of_equal_characters_is_never_free() {
        // At (2, 2) of "aa" vs "aa" the swap condition holds; it must cost 1 and lose to the match
        let table = build_table("aa", "aa");
        let marks = table.predecessors(2, 2);
        assert!(marks.contains(Step::Match));
        assert!(!marks.contains(Step::Transpose));
        assert_eq!(table.distance(), 0);
    }

    #[test]
    fn matching_cell_keeps_diagonal_cost() {
        let table = build_table("kitten", "sitting");
        // 'i' == 'i' at (2, 2)
        assert_eq!(table.get(2, 2), table.get(1, 1));
        assert!(table.predecessors(2, 2).contains(Step::Match));
    }

    #[test]
    fn first_edit_follows_tie_break_order() {
        let mut marks = Predecessors::default();
        marks.insert(Step::Insert);
        assert_eq!(marks.first_edit(), Step::Insert);
        marks.insert(Step::Delete);
        assert_eq!(marks.first_edit(), Step::Delete);
        marks.insert(Step::Replace);
        assert_eq!(marks.first_edit(), Step::Replace);
        marks.insert(Step::Transpose);
        assert_eq!(marks.first_edit(), Step::Transpose);
    }

    #[test]
    fn distance_counts_characters() {
        assert_eq!(edit_distance("café", "cafe"), 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_out_of_bounds_panics() {
        let table = build_table("ab", "c");
        let _ = table.get(3, 0);
    }
}
