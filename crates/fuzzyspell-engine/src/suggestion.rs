// Bounded suggestion collection
//
// The scan offers every in-tolerance candidate to a collector that enforces
// the suggestion cap. Two policies exist: keep the first N matches in
// dictionary order and stop scanning, or scan everything and keep the N best.

use std::collections::BinaryHeap;

use fuzzyspell_core::Suggestion;
use serde::{Deserialize, Serialize};

use crate::SuggestError;

/// What happens once the suggestion cap is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapPolicy {
    /// Keep the first N matches in dictionary order and stop the scan.
    ///
    /// Cheap, but which words survive depends on dictionary order: a better
    /// match stored after the cutoff is never seen.
    #[default]
    FirstFound,
    /// Scan the whole dictionary and keep the N smallest under the
    /// `(distance, word)` order.
    BestN,
}

/// Tracks the suggestions found so far during one scan.
#[derive(Debug)]
pub struct SuggestionCollector {
    max_suggestions: usize,
    policy: CapPolicy,
    /// Max-heap on `(distance, word)`: the root is the worst kept suggestion.
    kept: BinaryHeap<Suggestion>,
}

impl SuggestionCollector {
    /// Create a collector holding at most `max_suggestions` results.
    pub fn new(max_suggestions: usize, policy: CapPolicy) -> Self {
        Self {
            max_suggestions,
            policy,
            kept: BinaryHeap::new(),
        }
    }

    /// Returns `true` if the scan should stop: the cap is reached under the
    /// first-found policy.
    pub fn should_stop(&self) -> bool {
        self.policy == CapPolicy::FirstFound && self.is_full()
    }

    /// Whether the cap has been reached.
    pub fn is_full(&self) -> bool {
        self.kept.len() >= self.max_suggestions
    }

    /// Offer an in-tolerance candidate.
    ///
    /// Under `FirstFound` a full collector ignores the candidate; under
    /// `BestN` it replaces the current worst suggestion if it ranks better.
    /// The word is only copied when it is kept.
    pub fn offer(&mut self, word: &str, distance: usize) -> Result<(), SuggestError> {
        if !self.is_full() {
            self.kept
                .try_reserve(1)
                .map_err(|_| SuggestError::OutOfMemory {
                    requested: self.kept.len() + 1,
                })?;
            self.kept.push(Suggestion::new(word, distance));
            return Ok(());
        }
        if self.policy == CapPolicy::FirstFound {
            return Ok(());
        }
        let ranks_better = match self.kept.peek() {
            Some(worst) => (distance, word) < (worst.distance, worst.word.as_str()),
            None => false,
        };
        if ranks_better {
            self.kept.pop();
            self.kept.push(Suggestion::new(word, distance));
        }
        Ok(())
    }

    /// Number of suggestions kept so far.
    pub fn len(&self) -> usize {
        self.kept.len()
    }

    /// Whether nothing has been kept yet.
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }

    /// Return the cap.
    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    /// Consume the collector and return the suggestions sorted ascending by
    /// distance, then by word.
    pub fn into_sorted(self) -> Vec<Suggestion> {
        self.kept.into_sorted_vec()
    }
}
