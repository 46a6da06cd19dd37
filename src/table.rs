use std::cmp::max;


/// Longest-common-subsequence lengths for every pair of prefixes of two sequences.
///
/// `get(i, j)` is the LCS length of `x[..i]` and `y[..j]`.
pub(crate) struct ComparisonTable {
    cols: usize,
    cells: Vec<usize>,
}

impl ComparisonTable {
    pub fn new<T: PartialEq>(x: &[T], y: &[T]) -> Self {
        let cols = y.len() + 1;
        let mut cells = vec![0; (x.len() + 1) * cols];
        for i in 1..=x.len() {
            for j in 1..=y.len() {
                cells[i * cols + j] = if x[i - 1] == y[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    max(cells[(i - 1) * cols + j], cells[i * cols + (j - 1)])
                };
            }
        }
        Self { cols, cells }
    }
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }
}
