pub mod dictionary;
pub mod suggestions;
pub mod tokenizer;

use crate::error::{Error, Result};
use crate::Token;
use dictionary::SpellingManager;
use tokenizer::{is_word, Tokenizer, WordTokenizer};
use tracing::{debug, warn};

/// Checks the contents of a buffer against a spelling manager, producing the
/// position and status of every word in it.
pub struct BufferChecker<'a> {
    manager: &'a dyn SpellingManager,
    tokenizer: &'a dyn Tokenizer,
}

impl<'a> BufferChecker<'a> {
    /// Checker using the default [`WordTokenizer`].
    pub fn new(manager: &'a dyn SpellingManager) -> Self {
        Self {
            manager,
            tokenizer: &WordTokenizer,
        }
    }

    pub fn with_tokenizer(manager: &'a dyn SpellingManager, tokenizer: &'a dyn Tokenizer) -> Self {
        Self { manager, tokenizer }
    }

    pub fn tokenizer(&self) -> &'a dyn Tokenizer {
        self.tokenizer
    }

    /// Tokenize and classify `buffer`.
    ///
    /// The tokenizer does not report positions, so each token is located by
    /// searching forward from the end of the previous one. Repeated words are
    /// therefore matched left to right. A token that cannot be found is a
    /// broken tokenizer and is reported as [`Error::TokenNotFound`].
    pub fn check(&self, buffer: &str) -> Result<Vec<Token>> {
        if buffer.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut byte_cursor = 0;
        let mut char_cursor = 0;
        let mut results = Vec::new();

        for text in self.tokenizer.tokenize(buffer) {
            // Punctuation-only fragments are not words
            if !is_word(&text) {
                continue;
            }

            let Some(found) = buffer[byte_cursor..].find(text.as_str()) else {
                warn!(token = text.as_str(), position = char_cursor, "token not found in buffer");
                return Err(Error::TokenNotFound {
                    token: text,
                    position: char_cursor,
                });
            };

            let byte_start = byte_cursor + found;
            let byte_end = byte_start + text.len();
            let start = char_cursor + buffer[byte_cursor..byte_start].chars().count();
            let end = start + text.chars().count();

            byte_cursor = byte_end;
            char_cursor = end;

            let status = self.manager.check(&text);

            results.push(Token {
                text,
                start,
                end,
                byte_start,
                byte_end,
                status,
            });
        }

        debug!(tokens = results.len(), "checked buffer");

        Ok(results)
    }
}
