// Speller: top-level engine owning a dictionary.
//
// Loads a word list, answers exact membership queries and ranks dictionary
// words by edit distance to a query. Each Speller owns its own dictionary;
// any number of independent instances may coexist.
//
// Design notes:
// - Loading builds a complete Dictionary before touching `self`, then swaps
//   it in. A failed load clears the engine instead of keeping stale words.
// - Queries take `&self` and allocate only per-call working memory, so a
//   loaded Speller can be queried from several threads at once.
// - Options apply to the next load or query; changing `max_word_len` does
//   not re-filter an already loaded dictionary.

use std::io::BufRead;
use std::path::Path;

use fuzzyspell_core::character::normalize_word;
use fuzzyspell_core::{DEFAULT_MAX_SUGGESTIONS, MAX_WORD_LEN, Suggestion};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::dictionary::{Dictionary, LoadStats};
use crate::distance::DistanceTable;
use crate::suggestion::{CapPolicy, SuggestionCollector};
use crate::text::TextReport;
use crate::{LoadError, SuggestError};

/// Engine-wide options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellerOptions {
    /// Word length bound in characters. Dictionary lines folding to this
    /// many characters or more are dropped; queries are truncated to one
    /// less.
    pub max_word_len: usize,
    /// Maximum number of suggestions returned by one query.
    pub max_suggestions: usize,
    /// Behavior once `max_suggestions` is reached.
    pub cap_policy: CapPolicy,
}

impl Default for SpellerOptions {
    fn default() -> Self {
        Self {
            max_word_len: MAX_WORD_LEN,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            cap_policy: CapPolicy::FirstFound,
        }
    }
}

/// Per-query suggestion constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestParams {
    /// Inclusive maximum edit distance.
    pub tolerance: usize,
    /// Inclusive maximum difference between candidate and query length.
    pub length_tolerance: usize,
}

impl SuggestParams {
    pub fn new(tolerance: usize, length_tolerance: usize) -> Self {
        Self {
            tolerance,
            length_tolerance,
        }
    }
}

impl Default for SuggestParams {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

/// Spell checking engine over one in-memory dictionary.
#[derive(Debug, Clone, Default)]
pub struct Speller {
    dictionary: Dictionary,
    options: SpellerOptions,
}

impl Speller {
    /// Create an engine with no dictionary and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with no dictionary and the given options.
    pub fn with_options(options: SpellerOptions) -> Self {
        Self {
            dictionary: Dictionary::new(),
            options,
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Replace the dictionary with the words of a text file.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<LoadStats, LoadError> {
        let built = Dictionary::from_path(path, self.options.max_word_len);
        self.install(built)
    }

    /// Replace the dictionary with the lines of a reader.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<LoadStats, LoadError> {
        let built = Dictionary::from_reader(reader, self.options.max_word_len, "<reader>");
        self.install(built)
    }

    /// Replace the dictionary with the given raw lines.
    pub fn load_lines<I, S>(&mut self, lines: I) -> Result<LoadStats, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let built = Dictionary::from_lines(lines, self.options.max_word_len);
        self.install(built)
    }

    /// Install a finished load, or clear the engine if the load failed.
    pub(crate) fn install(
        &mut self,
        built: Result<(Dictionary, LoadStats), LoadError>,
    ) -> Result<LoadStats, LoadError> {
        match built {
            Ok((dictionary, stats)) => {
                self.dictionary = dictionary;
                debug!(words = stats.accepted, "dictionary installed");
                Ok(stats)
            }
            Err(e) => {
                self.clear();
                Err(e)
            }
        }
    }

    /// Drop the dictionary. The engine then behaves as never loaded.
    pub fn clear(&mut self) {
        self.dictionary = Dictionary::new();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Check whether a word is in the dictionary.
    ///
    /// The word is truncated to the length bound and lowercased first. With
    /// no dictionary loaded every word is reported as incorrect.
    pub fn is_correct(&self, word: &str) -> bool {
        if self.dictionary.is_empty() {
            debug!("is_correct called without a dictionary");
            return false;
        }
        let query = normalize_word(word, self.options.max_word_len);
        let found = self.dictionary.contains(&query);
        debug!(word = %query, found, "is_correct");
        found
    }

    /// Rank dictionary words by edit distance to `word`.
    ///
    /// Only candidates at least as long as the normalized query and at most
    /// `length_tolerance` characters longer are scored; those within
    /// `tolerance` edits are returned, ascending by distance, then by word.
    pub fn suggest(
        &self,
        word: &str,
        tolerance: usize,
        length_tolerance: usize,
    ) -> Result<Vec<Suggestion>, SuggestError> {
        self.suggest_with(word, SuggestParams::new(tolerance, length_tolerance))
    }

    /// [`Speller::suggest`] with parameters bundled.
    pub fn suggest_with(
        &self,
        word: &str,
        params: SuggestParams,
    ) -> Result<Vec<Suggestion>, SuggestError> {
        let query = normalize_word(word, self.options.max_word_len);
        let query_chars: Vec<char> = query.chars().collect();
        let query_len = query_chars.len();

        let mut table = DistanceTable::new();
        let mut collector =
            SuggestionCollector::new(self.options.max_suggestions, self.options.cap_policy);
        let mut scored = 0usize;

        for entry in &self.dictionary {
            if collector.should_stop() {
                debug!(
                    cap = collector.max_suggestions(),
                    "suggestion cap reached, scan stopped early"
                );
                break;
            }

            let len = entry.char_len();
            if len < query_len || len - query_len > params.length_tolerance {
                continue;
            }

            let distance = table.distance_to(&query_chars, entry.as_str())?;
            scored += 1;
            trace!(candidate = entry.as_str(), distance, "scored");

            if distance <= params.tolerance {
                collector.offer(entry.as_str(), distance)?;
            }
        }

        let suggestions = collector.into_sorted();
        debug!(
            word = %query,
            tolerance = params.tolerance,
            length_tolerance = params.length_tolerance,
            scored,
            found = suggestions.len(),
            "suggest"
        );
        Ok(suggestions)
    }

    /// Spell check a whole text. See [`TextReport`].
    pub fn check_text(&self, text: &str) -> TextReport {
        TextReport::check(self, text)
    }

    // =========================================================================
    // State and options
    // =========================================================================

    /// Whether a non-empty dictionary is loaded.
    pub fn is_loaded(&self) -> bool {
        !self.dictionary.is_empty()
    }

    /// Number of dictionary words, duplicates included.
    pub fn word_count(&self) -> usize {
        self.dictionary.len()
    }

    /// Borrow the current dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Current options.
    pub fn options(&self) -> &SpellerOptions {
        &self.options
    }

    /// Replace all options.
    pub fn set_options(&mut self, options: SpellerOptions) {
        self.options = options;
    }

    /// Set the maximum number of suggestions per query.
    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.options.max_suggestions = max_suggestions;
    }

    /// Set the policy applied once the suggestion cap is reached.
    pub fn set_cap_policy(&mut self, cap_policy: CapPolicy) {
        self.options.cap_policy = cap_policy;
    }

    /// Set the word length bound for subsequent loads and queries.
    pub fn set_max_word_len(&mut self, max_word_len: usize) {
        self.options.max_word_len = max_word_len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DistanceError;

    fn speller(words: &[&str]) -> Speller {
        let mut speller = Speller::new();
        speller.load_lines(words.iter().copied()).unwrap();
        speller
    }

    fn words(list: &[Suggestion]) -> Vec<&str> {
        list.iter().map(|s| s.word.as_str()).collect()
    }

    // -- is_correct --

    #[test]
    fn unloaded_engine_knows_no_words() {
        let speller = Speller::new();
        assert!(!speller.is_loaded());
        assert!(!speller.is_correct("anything"));
        assert!(!speller.is_correct(""));
    }

    #[test]
    fn is_correct_folds_case() {
        let speller = speller(&["Anyway", "ant"]);
        assert!(speller.is_correct("anyway"));
        assert!(speller.is_correct("ANYWAY"));
        assert!(speller.is_correct("Ant"));
        assert!(!speller.is_correct("nayway"));
    }

    #[test]
    fn is_correct_truncates_long_queries() {
        let stored = "a".repeat(MAX_WORD_LEN - 1);
        let speller = speller(&[stored.as_str()]);
        let query = "A".repeat(MAX_WORD_LEN + 10);
        assert!(speller.is_correct(&query));
    }

    // -- suggest --

    #[test]
    fn suggest_on_empty_dictionary_is_empty() {
        let speller = Speller::new();
        assert!(speller.suggest("anything", 3, 3).unwrap().is_empty());
    }

    #[test]
    fn suggest_reference_scenario() {
        let speller = speller(&["anyway", "any", "ant", "away"]);
        let found = speller.suggest("nayway", 3, 2).unwrap();
        assert_eq!(found, vec![Suggestion::new("anyway", 1)]);
    }

    #[test]
    fn suggest_skips_shorter_candidates() {
        let speller = speller(&["cat", "cats", "ca"]);
        let found = speller.suggest("cat", 5, 5).unwrap();
        assert_eq!(words(&found), ["cat", "cats"]);
    }

    #[test]
    fn suggest_respects_length_window() {
        let speller = speller(&["cat", "cats", "catsup", "catalog"]);
        let found = speller.suggest("cat", 10, 1).unwrap();
        assert_eq!(words(&found), ["cat", "cats"]);
    }

    #[test]
    fn suggest_respects_tolerance() {
        let speller = speller(&["cart", "cast", "bark"]);
        // cart: 1, cast: 1, bark: 3
        let found = speller.suggest("cat", 1, 2).unwrap();
        assert_eq!(words(&found), ["cart", "cast"]);
        assert!(found.iter().all(|s| s.distance <= 1));
    }

    #[test]
    fn suggest_normalizes_query() {
        let speller = speller(&["anyway"]);
        let found = speller.suggest("NAYWAY", 2, 0).unwrap();
        assert_eq!(found, vec![Suggestion::new("anyway", 1)]);
    }

    #[test]
    fn suggest_ties_sort_by_word() {
        let speller = speller(&["cut", "cot", "cab"]);
        let found = speller.suggest("cat", 1, 0).unwrap();
        assert_eq!(words(&found), ["cab", "cot", "cut"]);
    }

    #[test]
    fn first_found_cap_depends_on_order() {
        let mut speller = speller(&["cut", "cot", "cat"]);
        speller.set_max_suggestions(2);
        let found = speller.suggest("cat", 1, 0).unwrap();
        // "cat" (distance 0) comes after the cutoff.
        assert_eq!(words(&found), ["cot", "cut"]);
    }

    #[test]
    fn best_n_cap_finds_global_best() {
        let mut speller = speller(&["cut", "cot", "cat"]);
        speller.set_max_suggestions(2);
        speller.set_cap_policy(CapPolicy::BestN);
        let found = speller.suggest("cat", 1, 0).unwrap();
        assert_eq!(words(&found), ["cat", "cot"]);
        assert_eq!(found[0].distance, 0);
    }

    #[test]
    fn suggest_with_default_params() {
        let speller = speller(&["anyway", "anyways"]);
        let found = speller.suggest_with("nayway", SuggestParams::default()).unwrap();
        // anyways: transposition + insertion
        assert_eq!(found, vec![Suggestion::new("anyway", 1), Suggestion::new("anyways", 2)]);
    }

    #[test]
    fn distance_failure_aborts_suggest() {
        // Two 3M-char words need a ~9e12-cell table, which cannot be allocated.
        let len = 3_000_000;
        let mut speller = Speller::with_options(SpellerOptions {
            max_word_len: usize::MAX,
            ..SpellerOptions::default()
        });
        speller.load_lines(["a".repeat(len)]).unwrap();

        let err = speller.suggest(&"b".repeat(len), 0, 0).unwrap_err();
        assert_eq!(
            err,
            SuggestError::Distance(DistanceError::OutOfMemory {
                rows: len + 1,
                cols: len + 1,
            })
        );
    }

    // -- loading --

    #[test]
    fn reload_replaces_previous_words() {
        let mut speller = speller(&["alpha", "shared"]);
        speller.load_lines(["beta", "shared"]).unwrap();
        assert!(!speller.is_correct("alpha"));
        assert!(speller.is_correct("beta"));
        assert!(speller.is_correct("shared"));
        assert_eq!(speller.word_count(), 2);
    }

    #[test]
    fn failed_load_leaves_engine_empty() {
        let mut speller = speller(&["alpha"]);
        let err = speller.load_path("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LoadError::Unreadable { .. }));
        assert!(!speller.is_loaded());
        assert!(!speller.is_correct("alpha"));
    }

    #[test]
    fn clear_drops_dictionary() {
        let mut speller = speller(&["alpha"]);
        speller.clear();
        assert_eq!(speller.word_count(), 0);
        assert!(!speller.is_correct("alpha"));
    }

    #[test]
    fn instances_are_independent() {
        let a = speller(&["alpha"]);
        let b = speller(&["beta"]);
        assert!(a.is_correct("alpha") && !a.is_correct("beta"));
        assert!(b.is_correct("beta") && !b.is_correct("alpha"));
    }

    #[test]
    fn load_reader_reports_stats() {
        let mut speller = Speller::new();
        let stats = speller
            .load_reader(std::io::Cursor::new("One\n\nTwo\r\n"))
            .unwrap();
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.blank, 1);
        assert!(speller.is_correct("two"));
    }

    #[test]
    fn max_word_len_applies_to_next_load() {
        let mut speller = Speller::new();
        speller.set_max_word_len(4);
        speller.load_lines(["abc", "abcd"]).unwrap();
        assert_eq!(speller.word_count(), 1);
        assert!(speller.is_correct("abc"));
        // Queries are truncated to three characters as well.
        assert!(speller.is_correct("abcdef"));
    }

    #[test]
    fn speller_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Speller>();
    }

    #[test]
    fn options_roundtrip_through_json() {
        let options = SpellerOptions {
            max_word_len: 20,
            max_suggestions: 5,
            cap_policy: CapPolicy::BestN,
        };
        let json = serde_json::to_string(&options).unwrap();
        let back: SpellerOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
        let partial: SpellerOptions = serde_json::from_str(r#"{"max_suggestions": 7}"#).unwrap();
        assert_eq!(partial.max_suggestions, 7);
        assert_eq!(partial.max_word_len, MAX_WORD_LEN);
    }
}
