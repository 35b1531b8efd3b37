// SharedSpeller: a Speller behind a reader-writer lock
//
// Queries take the read lock and run in parallel. A reload reads and builds
// the new dictionary without holding any lock, then takes the write lock only
// to swap it in, so readers see either the old or the new word list.

use std::io::BufRead;
use std::path::Path;

use fuzzyspell_core::Suggestion;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dictionary::{Dictionary, LoadStats};
use crate::speller::{Speller, SuggestParams};
use crate::text::TextReport;
use crate::{LoadError, SuggestError};

/// Thread-safe wrapper for hosting one `Speller` across threads.
#[derive(Debug, Default)]
pub struct SharedSpeller {
    inner: RwLock<Speller>,
}

impl SharedSpeller {
    pub fn new(speller: Speller) -> Self {
        Self {
            inner: RwLock::new(speller),
        }
    }

    /// Replace the dictionary with the words of a text file.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<LoadStats, LoadError> {
        let max_word_len = self.inner.read().options().max_word_len;
        let built = Dictionary::from_path(path, max_word_len);
        self.inner.write().install(built)
    }

    /// Replace the dictionary with the lines of a reader.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<LoadStats, LoadError> {
        let max_word_len = self.inner.read().options().max_word_len;
        let built = Dictionary::from_reader(reader, max_word_len, "<reader>");
        self.inner.write().install(built)
    }

    /// Replace the dictionary with the given raw lines.
    pub fn load_lines<I, S>(&self, lines: I) -> Result<LoadStats, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let max_word_len = self.inner.read().options().max_word_len;
        let built = Dictionary::from_lines(lines, max_word_len);
        self.inner.write().install(built)
    }

    pub fn is_correct(&self, word: &str) -> bool {
        self.inner.read().is_correct(word)
    }

    pub fn suggest(
        &self,
        word: &str,
        tolerance: usize,
        length_tolerance: usize,
    ) -> Result<Vec<Suggestion>, SuggestError> {
        self.inner.read().suggest(word, tolerance, length_tolerance)
    }

    pub fn suggest_with(
        &self,
        word: &str,
        params: SuggestParams,
    ) -> Result<Vec<Suggestion>, SuggestError> {
        self.inner.read().suggest_with(word, params)
    }

    pub fn check_text(&self, text: &str) -> TextReport {
        self.inner.read().check_text(text)
    }

    /// Shared access for several queries against one dictionary snapshot.
    pub fn read(&self) -> RwLockReadGuard<'_, Speller> {
        self.inner.read()
    }

    /// Exclusive access, e.g. to change options.
    pub fn write(&self) -> RwLockWriteGuard<'_, Speller> {
        self.inner.write()
    }

    pub fn into_inner(self) -> Speller {
        self.inner.into_inner()
    }
}

impl From<Speller> for SharedSpeller {
    fn from(speller: Speller) -> Self {
        Self::new(speller)
    }
}
