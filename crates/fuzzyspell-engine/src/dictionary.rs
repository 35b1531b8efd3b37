// In-memory word list: normalization of raw lines, bounded storage, loading
//
// Words are kept in source order (duplicates included) for the suggestion
// scan. A hash index over the same storage answers exact membership without
// walking the list.

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::hash::BuildHasher;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fuzzyspell_core::character::{fold_lower, strip_line_ending};
use hashbrown::{DefaultHashBuilder, HashTable};
use tracing::{info, warn};

use crate::LoadError;

/// A single dictionary entry: an immutable lowercase word and its length in
/// characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryWord {
    text: Box<str>,
    char_len: usize,
}

impl DictionaryWord {
    fn new(text: String) -> Self {
        let char_len = text.chars().count();
        Self {
            text: text.into_boxed_str(),
            char_len,
        }
    }

    /// The word text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the word in characters.
    pub fn char_len(&self) -> usize {
        self.char_len
    }
}

/// Counters describing what a load kept and what it dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines stored as dictionary words.
    pub accepted: usize,
    /// Lines dropped because the folded word reached the length bound.
    pub too_long: usize,
    /// Lines that were empty after stripping the line terminator.
    pub blank: usize,
    /// Lines that were not valid UTF-8 and were decoded lossily.
    pub lossy: usize,
}

/// An ordered, read-only word list.
#[derive(Clone, Default)]
pub struct Dictionary {
    words: Vec<DictionaryWord>,
    /// Indices into `words`, one per distinct word.
    index: HashTable<usize>,
    hasher: DefaultHashBuilder,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from raw lines (already split, terminators allowed).
    pub fn from_lines<I, S>(lines: I, max_word_len: usize) -> Result<(Self, LoadStats), LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = DictionaryBuilder::new(max_word_len);
        for line in lines {
            builder.push_line(line.as_ref())?;
        }
        Ok(builder.finish())
    }

    /// Build a dictionary from a buffered reader, one word per line.
    ///
    /// `origin` names the source in error messages.
    pub fn from_reader<R: BufRead>(
        mut reader: R,
        max_word_len: usize,
        origin: &str,
    ) -> Result<(Self, LoadStats), LoadError> {
        let mut builder = DictionaryBuilder::new(max_word_len);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| LoadError::Unreadable {
                    origin: origin.to_string(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                builder.stats.lossy += 1;
            }
            builder.push_line(&line)?;
        }
        let (dictionary, stats) = builder.finish();
        if stats.lossy > 0 {
            warn!(origin, lines = stats.lossy, "dictionary contains invalid UTF-8");
        }
        Ok((dictionary, stats))
    }

    /// Build a dictionary from a text file, one word per line.
    pub fn from_path(
        path: impl AsRef<Path>,
        max_word_len: usize,
    ) -> Result<(Self, LoadStats), LoadError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|source| LoadError::Unreadable {
            origin: origin.clone(),
            source,
        })?;
        let (dictionary, stats) = Self::from_reader(BufReader::new(file), max_word_len, &origin)?;
        info!(
            path = %origin,
            words = stats.accepted,
            too_long = stats.too_long,
            blank = stats.blank,
            "dictionary loaded"
        );
        Ok((dictionary, stats))
    }

    /// Exact membership test against the stored (lowercase) words.
    pub fn contains(&self, word: &str) -> bool {
        let hash = self.hasher.hash_one(word);
        self.index
            .find(hash, |&i| self.words[i].as_str() == word)
            .is_some()
    }

    /// Iterate over the words in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, DictionaryWord> {
        self.words.iter()
    }

    /// Number of stored words, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct words.
    pub fn distinct_len(&self) -> usize {
        self.index.len()
    }

    /// Whether no words are stored.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("words", &self.words.len())
            .field("distinct", &self.index.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a DictionaryWord;
    type IntoIter = std::slice::Iter<'a, DictionaryWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Incremental dictionary construction with fallible growth.
///
/// The word table and its index grow on demand (amortized doubling); a
/// failed growth is reported instead of dropping the word.
#[derive(Debug)]
pub struct DictionaryBuilder {
    dictionary: Dictionary,
    max_word_len: usize,
    stats: LoadStats,
}

impl DictionaryBuilder {
    /// Create a builder that keeps words shorter than `max_word_len` chars.
    pub fn new(max_word_len: usize) -> Self {
        Self {
            dictionary: Dictionary::new(),
            max_word_len,
            stats: LoadStats::default(),
        }
    }

    /// Normalize one raw line and append it if it qualifies.
    ///
    /// The line is cut at its first `\n`/`\r`, folded to lowercase and kept
    /// only when shorter than the length bound. Over-long words are dropped
    /// whole, never truncated.
    pub fn push_line(&mut self, line: &str) -> Result<(), LoadError> {
        let word = fold_lower(strip_line_ending(line));
        if word.is_empty() {
            self.stats.blank += 1;
            return Ok(());
        }
        let entry = DictionaryWord::new(word);
        if entry.char_len() >= self.max_word_len {
            self.stats.too_long += 1;
            return Ok(());
        }
        self.push(entry)
    }

    fn push(&mut self, entry: DictionaryWord) -> Result<(), LoadError> {
        let Dictionary {
            words,
            index,
            hasher,
        } = &mut self.dictionary;
        let requested = words.len() + 1;

        words
            .try_reserve(1)
            .map_err(|_| LoadError::OutOfMemory { requested })?;

        let hash = hasher.hash_one(entry.as_str());
        let known = index
            .find(hash, |&i| words[i].as_str() == entry.as_str())
            .is_some();
        if !known {
            index
                .try_reserve(1, |&i| hasher.hash_one(words[i].as_str()))
                .map_err(|_| LoadError::OutOfMemory { requested })?;
            index.insert_unique(hash, words.len(), |&i| hasher.hash_one(words[i].as_str()));
        }

        words.push(entry);
        self.stats.accepted += 1;
        Ok(())
    }

    /// Number of words accepted so far.
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    /// Whether no word has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Finish construction.
    pub fn finish(self) -> (Dictionary, LoadStats) {
        (self.dictionary, self.stats)
    }
}
