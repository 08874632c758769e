pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod error;

pub use checker::dictionary::{Dictionary, NullSpelling, SpellingManager};
pub use checker::suggestions::{CaseProfile, SuggestionEngine};
pub use checker::tokenizer::{is_word, Tokenizer, WordTokenizer};
pub use checker::BufferChecker;
pub use config::Config;
pub use error::{Error, Result};

use serde::{Deserialize, Serialize};

/// Outcome of checking a single word against a spelling manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The manager has no opinion about the word.
    Unknown,
    Correct,
    /// Reserved for managers that keep explicit negative lists.
    Incorrect,
}

/// A word located in a buffer along with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Character offset of the first character.
    pub start: usize,
    /// Character offset one past the last character.
    pub end: usize,
    /// UTF-8 byte offset matching `start`.
    pub byte_start: usize,
    /// UTF-8 byte offset matching `end`, so `&buffer[byte_start..byte_end] == text`.
    pub byte_end: usize,
    pub status: CheckStatus,
}

impl Token {
    pub fn is_correct(&self) -> bool {
        self.status == CheckStatus::Correct
    }
}
