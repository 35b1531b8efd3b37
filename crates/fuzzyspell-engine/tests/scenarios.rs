//! End-to-end scenarios: loading from files, reloading, option changes and
//! whole-text checks through the public API.

use std::io::Write;
use std::path::PathBuf;

use fuzzyspell_engine::{
    CapPolicy, LoadError, LoadStats, Speller, SpellerOptions, Suggestion, distance,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/words.txt")
}

fn write_word_list(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn fixture_load_reports_what_was_dropped() {
    let mut speller = Speller::new();
    let stats = speller.load_path(fixture_path()).unwrap();
    assert_eq!(
        stats,
        LoadStats {
            accepted: 40,
            too_long: 1,
            blank: 1,
            lossy: 0,
        }
    );
    assert_eq!(speller.word_count(), 40);
    // "Spelling" appears twice after folding.
    assert_eq!(speller.dictionary().distinct_len(), 39);
    assert!(speller.is_loaded());
}

#[test]
fn crlf_and_case_are_normalized() {
    let mut speller = Speller::new();
    speller.load_path(fixture_path()).unwrap();
    // First line of the fixture is "Anyway\r\n".
    assert!(speller.is_correct("anyway"));
    assert!(speller.is_correct("ANYWAY"));
    assert!(!speller.is_correct("anyway\r"));
    assert!(!speller.is_correct(""));
}

#[test]
fn three_word_scenario() {
    let file = write_word_list(b"anyway\nany\naway\n");
    let mut speller = Speller::new();
    speller.load_path(file.path()).unwrap();

    assert!(speller.is_correct("Anyway"));
    assert!(!speller.is_correct("nayway"));
    assert_eq!(
        speller.suggest("nayway", 3, 2).unwrap(),
        vec![Suggestion::new("anyway", 1)]
    );
    assert_eq!(distance("nayway", "any").unwrap(), 4);
    assert_eq!(distance("nayway", "away").unwrap(), 2);
}

#[test]
fn duplicates_are_suggested_twice() {
    let mut speller = Speller::new();
    speller.load_path(fixture_path()).unwrap();
    let found = speller.suggest("speling", 1, 1).unwrap();
    assert_eq!(
        found,
        vec![Suggestion::new("spelling", 1), Suggestion::new("spelling", 1)]
    );
}

#[test]
fn missing_file_is_unreadable_and_clears() {
    let mut speller = Speller::new();
    speller.load_path(fixture_path()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let err = speller.load_path(&missing).unwrap_err();
    assert!(matches!(err, LoadError::Unreadable { .. }));
    assert!(err.to_string().contains("nope.txt"));

    assert!(!speller.is_loaded());
    assert!(!speller.is_correct("anyway"));
    assert!(speller.suggest("anyway", 2, 2).unwrap().is_empty());
}

#[test]
fn reload_replaces_previous_words() {
    let first = write_word_list(b"alpha\nbeta\n");
    let second = write_word_list(b"gamma\n");

    let mut speller = Speller::new();
    speller.load_path(first.path()).unwrap();
    assert!(speller.is_correct("alpha"));

    speller.load_path(second.path()).unwrap();
    assert!(!speller.is_correct("alpha"));
    assert!(speller.is_correct("gamma"));
    assert_eq!(speller.word_count(), 1);
}

#[test]
fn empty_file_loads_as_empty_dictionary() {
    let file = write_word_list(b"");
    let mut speller = Speller::new();
    let stats = speller.load_path(file.path()).unwrap();
    assert_eq!(stats.accepted, 0);
    assert!(!speller.is_loaded());
    assert!(!speller.is_correct("anything"));
}

#[test]
fn invalid_utf8_lines_are_kept_lossily() {
    let file = write_word_list(b"caf\xe9\nplain\n");
    let mut speller = Speller::new();
    let stats = speller.load_path(file.path()).unwrap();
    assert_eq!(stats.lossy, 1);
    assert_eq!(stats.accepted, 2);
    assert!(speller.is_correct("plain"));
    assert!(speller.is_correct("caf\u{FFFD}"));
}

#[test]
fn file_without_trailing_newline() {
    let file = write_word_list(b"first\nlast");
    let mut speller = Speller::new();
    speller.load_path(file.path()).unwrap();
    assert!(speller.is_correct("last"));
    assert_eq!(speller.word_count(), 2);
}

#[test]
fn best_n_and_first_found_differ_on_order() {
    // The closer match sits after the cutoff in dictionary order.
    let words = ["cart", "care", "cat"];

    let mut first = Speller::with_options(SpellerOptions {
        max_suggestions: 1,
        ..SpellerOptions::default()
    });
    first.load_lines(words).unwrap();
    assert_eq!(
        first.suggest("cat", 1, 1).unwrap(),
        vec![Suggestion::new("cart", 1)]
    );

    let mut best = Speller::with_options(SpellerOptions {
        max_suggestions: 1,
        cap_policy: CapPolicy::BestN,
        ..SpellerOptions::default()
    });
    best.load_lines(words).unwrap();
    assert_eq!(
        best.suggest("cat", 1, 1).unwrap(),
        vec![Suggestion::new("cat", 0)]
    );
}

#[test]
fn text_check_on_fixture() {
    let mut speller = Speller::new();
    speller.load_path(fixture_path()).unwrap();

    let report = speller.check_text("Teh quick brown fox, becuase.");
    assert_eq!(report.word_count, 5);
    assert_eq!(report.error_count, 2);
    assert_eq!(report.accuracy(), 60);

    let (index, token) = report.misspelled().next().unwrap();
    assert_eq!(token.text, "Teh");
    let best = speller.suggest(&token.text, 1, 1).unwrap();
    assert_eq!(best[0].word, "the");
    assert_eq!(
        report.replace(index, &best[0].word).unwrap(),
        "the quick brown fox, becuase."
    );
}

#[test]
fn independent_spellers_do_not_share_state() {
    let mut a = Speller::new();
    let mut b = Speller::new();
    a.load_lines(["alpha"]).unwrap();
    b.load_lines(["beta"]).unwrap();
    assert!(a.is_correct("alpha") && !a.is_correct("beta"));
    assert!(b.is_correct("beta") && !b.is_correct("alpha"));
}
