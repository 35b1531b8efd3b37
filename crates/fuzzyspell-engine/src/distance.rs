// Restricted Damerau-Levenshtein (optimal string alignment) distance
//
// Counts single-character insertions, deletions, substitutions and
// transpositions of two adjacent characters, each at cost 1. A transposed
// pair is never edited again, which is what makes the metric "restricted":
// distance("ca", "abc") is 3 here, not 2.

use crate::DistanceError;

/// Compute the restricted Damerau-Levenshtein distance between two strings.
///
/// Comparison is exact `char` equality; callers fold case beforehand.
///
/// ```
/// use fuzzyspell_engine::distance;
///
/// assert_eq!(distance("ab", "ba"), Ok(1));
/// assert_eq!(distance("nayway", "anyway"), Ok(1));
/// assert_eq!(distance("", "abc"), Ok(3));
/// ```
pub fn distance(a: &str, b: &str) -> Result<usize, DistanceError> {
    DistanceTable::new().distance(a, b)
}

/// Reusable working memory for distance computations.
///
/// A suggestion scan computes thousands of distances against the same query;
/// keeping one table per scan lets the DP matrix and the decoded character
/// buffers be allocated once and grown only when a longer candidate shows up.
#[derive(Debug, Default)]
pub struct DistanceTable {
    /// Row-major `(len(a)+1) x (len(b)+1)` matrix.
    cells: Vec<usize>,
    left: Vec<char>,
    right: Vec<char>,
}

impl DistanceTable {
    /// Create an empty table. No memory is allocated until first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance between two strings.
    pub fn distance(&mut self, a: &str, b: &str) -> Result<usize, DistanceError> {
        let Self { cells, left, right } = self;
        decode_into(left, a);
        decode_into(right, b);
        fill(cells, left, right)
    }

    /// Distance between an already decoded query and a candidate string.
    pub fn distance_to(&mut self, query: &[char], candidate: &str) -> Result<usize, DistanceError> {
        let Self { cells, right, .. } = self;
        decode_into(right, candidate);
        fill(cells, query, right)
    }
}

fn decode_into(buf: &mut Vec<char>, s: &str) {
    buf.clear();
    buf.extend(s.chars());
}

/// Fill the DP matrix for `a` x `b` and return the bottom-right cell.
fn fill(cells: &mut Vec<usize>, a: &[char], b: &[char]) -> Result<usize, DistanceError> {
    if a.is_empty() {
        return Ok(b.len());
    }
    if b.is_empty() {
        return Ok(a.len());
    }

    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let oom = DistanceError::OutOfMemory { rows, cols };
    let size = rows.checked_mul(cols).ok_or(oom.clone())?;

    cells.clear();
    cells.try_reserve_exact(size).map_err(|_| oom)?;
    cells.resize(size, 0);

    let at = |i: usize, j: usize| i * cols + j;

    for i in 0..rows {
        cells[at(i, 0)] = i;
    }
    for j in 0..cols {
        cells[at(0, j)] = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            let mut best = (cells[at(i - 1, j)] + 1) // deletion
                .min(cells[at(i, j - 1)] + 1) // insertion
                .min(cells[at(i - 1, j - 1)] + cost); // substitution or match

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(cells[at(i - 2, j - 2)] + 1); // transposition
            }

            cells[at(i, j)] = best;
        }
    }

    Ok(cells[at(rows - 1, cols - 1)])
}
