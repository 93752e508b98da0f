//! The candidate word list.

use std::path::Path;
use std::sync::Arc;

use crate::error::GameError;

/// The word list bundled into the binary.
const BUNDLED_WORDS: &str = include_str!("../../assets/words.txt");

/// An ordered, non-empty list of candidate words, immutable for the process
/// lifetime and shared read-only.
///
/// Construction normalises each line (trim, lowercase) and drops blanks; an
/// empty result is rejected, so every `Dictionary` value upholds the
/// non-empty invariant by construction.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Arc<Vec<String>>,
}

impl Dictionary {
    /// The word list bundled with the game.
    ///
    /// # Errors
    ///
    /// [`GameError::EmptyDictionary`] if the bundled resource somehow holds
    /// no usable words.
    pub fn bundled() -> Result<Self, GameError> {
        Self::from_lines(BUNDLED_WORDS.lines())
    }

    /// Loads a word list from a newline-separated file.
    ///
    /// # Errors
    ///
    /// [`GameError::DictionaryIo`] if the file cannot be read, or
    /// [`GameError::EmptyDictionary`] if it holds no usable words.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_lines(contents.lines())
    }

    /// Builds a word list from lines of text.
    ///
    /// # Errors
    ///
    /// [`GameError::EmptyDictionary`] if no usable word remains after
    /// normalisation.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        if words.is_empty() {
            return Err(GameError::EmptyDictionary);
        }
        tracing::debug!(words = words.len(), "loaded dictionary");
        Ok(Self {
            words: Arc::new(words),
        })
    }

    /// Number of candidate words; always at least 1.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`; callers draw indices from a
    /// [`WordPicker`](super::WordPicker), whose contract keeps them in
    /// range.
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// All candidate words, in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
