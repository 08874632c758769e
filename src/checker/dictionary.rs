use crate::checker::suggestions::{Similarity, SuggestionEngine};
use crate::CheckStatus;
use std::collections::HashSet;
use tracing::debug;

/// Common functionality for anything that can classify and correct words.
pub trait SpellingManager {
    /// Check a word against the manager.
    fn check(&self, word: &str) -> CheckStatus;

    fn is_correct(&self, word: &str) -> bool {
        self.check(word) == CheckStatus::Correct
    }

    fn add(&mut self, word: &str);

    fn add_many<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        for word in words {
            self.add(word.as_ref());
        }
    }

    fn remove(&mut self, word: &str);

    /// Suggestions for a word, most likely first.
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// A manager with no opinion about anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpelling;

impl SpellingManager for NullSpelling {
    fn check(&self, _word: &str) -> CheckStatus {
        CheckStatus::Unknown
    }

    fn add(&mut self, _word: &str) {}

    fn remove(&mut self, _word: &str) {}

    fn suggest(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Word-list dictionary with case-sensitive and case-insensitive entries.
///
/// Lower-case words are matched regardless of case, words that change when
/// lower-cased must match exactly. A leading `!` forces an all-lowercase
/// word to be case-sensitive; [`Dictionary::list`] uses the same convention
/// so its output can be fed straight back into [`Dictionary::add`].
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    sensitive: HashSet<String>,
    insensitive: HashSet<String>,
    engine: SuggestionEngine,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary by passing every word through [`Dictionary::add`].
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        dictionary.extend(words);
        dictionary
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.engine.threshold = threshold;
        self
    }

    pub fn with_similarity(mut self, similarity: Similarity) -> Self {
        self.engine.similarity = similarity;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.engine.threshold
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.engine.threshold = threshold;
    }

    pub fn sensitive(&self) -> &HashSet<String> {
        &self.sensitive
    }

    pub fn insensitive(&self) -> &HashSet<String> {
        &self.insensitive
    }

    pub fn len(&self) -> usize {
        self.sensitive.len() + self.insensitive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensitive.is_empty() && self.insensitive.is_empty()
    }

    /// Add a word, choosing the collection from its spelling.
    ///
    /// A word that changes when lower-cased is case-sensitive. Otherwise a
    /// leading `!` is stripped and the rest is stored case-sensitive, and
    /// everything else is stored lower-cased as case-insensitive.
    pub fn add(&mut self, word: &str) {
        if is_blank(word) {
            return;
        }

        if has_case_distinction(word) {
            self.add_case_sensitive(word);
        } else if let Some(rest) = word.strip_prefix('!') {
            self.add_case_sensitive(rest);
        } else {
            self.add_case_insensitive(word);
        }
    }

    pub fn add_many<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add(word.as_ref());
        }
    }

    /// No check is made against the case-insensitive entries.
    pub fn add_case_sensitive(&mut self, word: &str) {
        if !is_blank(word) {
            self.sensitive.insert(word.to_string());
        }
    }

    /// No check is made against the case-sensitive entries.
    pub fn add_case_insensitive(&mut self, word: &str) {
        if !is_blank(word) {
            self.insensitive.insert(word.to_lowercase());
        }
    }

    /// Remove `word` exactly from the case-sensitive entries and its
    /// lower-cased form from the case-insensitive ones.
    pub fn remove(&mut self, word: &str) {
        if !is_blank(word) {
            self.remove_case_sensitive(word);
            self.remove_case_insensitive(&word.to_lowercase());
        }
    }

    pub fn remove_case_sensitive(&mut self, word: &str) {
        if !is_blank(word) {
            self.sensitive.remove(word);
        }
    }

    pub fn remove_case_insensitive(&mut self, word: &str) {
        if !is_blank(word) {
            self.insensitive.remove(word);
        }
    }

    pub fn check(&self, word: &str) -> CheckStatus {
        if self.sensitive.contains(word) || self.insensitive.contains(&word.to_lowercase()) {
            CheckStatus::Correct
        } else {
            CheckStatus::Unknown
        }
    }

    pub fn is_correct(&self, word: &str) -> bool {
        self.check(word) == CheckStatus::Correct
    }

    pub fn suggest(&self, word: &str) -> Vec<String> {
        let suggestions = self
            .engine
            .suggest(word, &self.sensitive, &self.insensitive);

        debug!(
            word,
            candidates = self.len(),
            found = suggestions.len(),
            "generated suggestions"
        );

        suggestions
    }

    /// All entries as one sorted list suitable for re-adding.
    pub fn list(&self) -> Vec<String> {
        let mut list: Vec<String> = self
            .sensitive
            .iter()
            .map(|word| {
                if !has_case_distinction(word) {
                    format!("!{}", word)
                } else {
                    word.clone()
                }
            })
            .chain(self.insensitive.iter().cloned())
            .collect();

        list.sort();
        list
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        self.add_many(words);
    }
}

impl SpellingManager for Dictionary {
    fn check(&self, word: &str) -> CheckStatus {
        Dictionary::check(self, word)
    }

    fn add(&mut self, word: &str) {
        Dictionary::add(self, word);
    }

    fn remove(&mut self, word: &str) {
        Dictionary::remove(self, word);
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        Dictionary::suggest(self, word)
    }
}

// Shared by `add` and `list` so listed entries classify the same way again.
fn has_case_distinction(word: &str) -> bool {
    word != word.to_lowercase()
}

fn is_blank(word: &str) -> bool {
    word.trim().is_empty()
}
