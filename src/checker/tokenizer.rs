// Word tokenization for buffer checking.
//
// Tokenizers only hand back text; positions are recovered later by the
// buffer checker, so any splitting strategy can be plugged in.

use lazy_static::lazy_static;
use regex::Regex;

// Letters, marks, decimal digits, letter-like numerals, connector
// punctuation, and the symbols of the Enclosed Alphanumerics block.
const WORD_CHAR: &str = r"[\p{L}\p{M}\p{Nd}\p{Nl}\p{Pc}[\x{2460}-\x{24FF}&&\p{So}]]";

// Apostrophes allowed inside a word ("don't", "Rutejìmo's").
const INNER_PUNCTUATION: &str = r"['\x{2019}]";

lazy_static! {
    static ref WORD_TOKEN: Regex = Regex::new(&format!(
        "{c}+(?:{p}{c}+)?",
        c = WORD_CHAR,
        p = INNER_PUNCTUATION
    ))
    .expect("word token pattern is valid");
    static ref WORD_CHAR_RE: Regex = Regex::new(WORD_CHAR).expect("word character pattern is valid");
}

/// Splits a buffer into candidate tokens without reporting offsets.
pub trait Tokenizer {
    fn tokenize(&self, buffer: &str) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, buffer: &str) -> Vec<String> {
        self(buffer)
    }
}

/// Default Unicode-aware tokenizer.
///
/// Emits every word in order, along with the non-whitespace fragments found
/// between words (punctuation such as `.` or `。`). Callers that only want
/// words filter the output with [`is_word`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, buffer: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut last = 0;

        for word in WORD_TOKEN.find_iter(buffer) {
            push_gap(&mut tokens, &buffer[last..word.start()]);
            tokens.push(word.as_str().to_string());
            last = word.end();
        }

        push_gap(&mut tokens, &buffer[last..]);
        tokens
    }
}

fn push_gap(tokens: &mut Vec<String>, gap: &str) {
    tokens.extend(gap.split_whitespace().map(str::to_string));
}

/// Returns true if the candidate contains at least one word character.
pub fn is_word(candidate: &str) -> bool {
    WORD_CHAR_RE.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        WordTokenizer.tokenize(text)
    }

    #[test]
    fn test_english_sentence() {
        assert_eq!(tokenize("I like cheese."), vec!["I", "like", "cheese", "."]);
    }

    #[test]
    fn test_contraction() {
        assert_eq!(
            tokenize("I don't cheese."),
            vec!["I", "don't", "cheese", "."]
        );
        assert_eq!(tokenize("it\u{2019}s"), vec!["it\u{2019}s"]);
    }

    #[test]
    fn test_accented_possessive() {
        assert_eq!(
            tokenize("Rutejìmo's heart slammed"),
            vec!["Rutejìmo's", "heart", "slammed"]
        );
    }

    #[test]
    fn test_apostrophe_joins_only_once() {
        assert_eq!(tokenize("rock'n'roll"), vec!["rock'n", "'", "roll"]);
    }

    #[test]
    fn test_leading_and_trailing_apostrophes() {
        assert_eq!(tokenize("'tis dogs'"), vec!["'", "tis", "dogs", "'"]);
    }

    #[test]
    fn test_japanese_sentence() {
        assert_eq!(
            tokenize("私 は チーズ が 好き です。"),
            vec!["私", "は", "チーズ", "が", "好き", "です", "。"]
        );
    }

    #[test]
    fn test_hindi_marks_stay_in_word() {
        assert_eq!(tokenize("नमी नमस्ते नम्र"), vec!["नमी", "नमस्ते", "नम्र"]);
    }

    #[test]
    fn test_connector_and_numerals() {
        assert_eq!(tokenize("snake_case 42 Ⅻ"), vec!["snake_case", "42", "Ⅻ"]);
    }

    #[test]
    fn test_enclosed_alphanumerics() {
        // Circled letters are So inside the block, circled digits are No.
        assert!(is_word("Ⓐ"));
        assert!(!is_word("①"));
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("don't"));
        assert!(is_word("...a"));
        assert!(!is_word("."));
        assert!(!is_word("。"));
        assert!(!is_word("--"));
        assert!(!is_word(""));
    }

    #[test]
    fn test_whitespace_only() {
        assert!(tokenize("   \n\t").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_closure_tokenizer() {
        let splitter = |text: &str| text.split(',').map(str::to_string).collect::<Vec<_>>();
        assert_eq!(splitter.tokenize("a,b"), vec!["a", "b"]);
    }
}
