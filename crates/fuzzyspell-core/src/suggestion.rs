// Ranked suggestion result type

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A dictionary word proposed as a correction, with its edit distance from
/// the query.
///
/// Suggestions order by ascending distance, then by ordinal (`char`-wise)
/// comparison of the word. This is the order `Speller::suggest` returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested dictionary word (lowercase).
    pub word: String,
    /// Restricted Damerau-Levenshtein distance from the normalized query.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: impl Into<String>, distance: usize) -> Self {
        Self {
            word: word.into(),
            distance,
        }
    }

    /// Display score in percent: each edit costs ten points, floored at zero.
    pub fn similarity(&self) -> u8 {
        100usize.saturating_sub(self.distance.saturating_mul(10)) as u8
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.distance)
    }
}
