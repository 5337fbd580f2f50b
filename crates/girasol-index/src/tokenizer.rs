//! Text normalization and stemming
//!
//! Pipeline applied to every document and every question:
//! 1. Lowercase
//! 2. Replace every character outside the locale alphabet (and whitespace) with a space
//! 3. Split on whitespace, drop tokens shorter than the minimum length
//! 4. Reduce each token to its stem

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static SPANISH_FILTER_RE: OnceLock<Regex> = OnceLock::new();
static DEFAULT_TOKENIZER: OnceLock<Tokenizer> = OnceLock::new();

/// Reduces a single lowercase token to its stem.
pub trait Stem {
    fn stem(&self, token: &str) -> String;
}

impl Stem for Stemmer {
    fn stem(&self, token: &str) -> String {
        Stemmer::stem(self, token).into_owned()
    }
}

/// Language used for both the character filter and the stemmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Spanish,
}

impl Locale {
    pub fn algorithm(self) -> Algorithm {
        match self {
            Locale::Spanish => Algorithm::Spanish,
        }
    }

    /// Matches every character that is not part of the alphabet or whitespace.
    pub fn char_filter(self) -> &'static Regex {
        match self {
            Locale::Spanish => SPANISH_FILTER_RE
                .get_or_init(|| Regex::new(r"[^a-záéíóúüñ\s]").unwrap()),
        }
    }

    pub fn stemmer(self) -> Stemmer {
        Stemmer::create(self.algorithm())
    }
}

pub struct Tokenizer {
    locale: Locale,
    stemmer: Box<dyn Stem + Send + Sync>,
    min_token_len: usize,
}

impl Tokenizer {
    /// Snowball stemmer for `locale`, tokens of at least 2 characters.
    pub fn new(locale: Locale) -> Self {
        Self::with_stemmer(locale, Box::new(locale.stemmer()))
    }

    /// Use a custom stemmer. Its language must match the locale alphabet.
    pub fn with_stemmer(locale: Locale, stemmer: Box<dyn Stem + Send + Sync>) -> Self {
        Self {
            locale,
            stemmer,
            min_token_len: 2,
        }
    }

    pub fn min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    /// Normalize `text` and return its stems in original order.
    ///
    /// Total over all strings: empty or fully filtered input yields an empty vector.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let cleaned = self.locale.char_filter().replace_all(&lower, " ");

        cleaned
            .split_whitespace()
            .filter(|t| t.chars().count() >= self.min_token_len)
            .map(|t| self.stemmer.stem(t))
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// Tokenize with the default Spanish tokenizer.
pub fn normalize_and_stem(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER
        .get_or_init(Tokenizer::default)
        .tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl Stem for Identity {
        fn stem(&self, token: &str) -> String {
            token.to_string()
        }
    }

    fn unstemmed() -> Tokenizer {
        Tokenizer::with_stemmer(Locale::Spanish, Box::new(Identity))
    }

    #[test]
    fn test_lowercase_and_filter() {
        let tokens = unstemmed().tokenize("¿Dónde juegan el Perro y el GATO?");
        assert_eq!(tokens, vec!["dónde", "juegan", "el", "perro", "el", "gato"]);
    }

    #[test]
    fn test_filtered_chars_split_tokens() {
        let tokens = unstemmed().tokenize("perro,gato;niños123parque");
        assert_eq!(tokens, vec!["perro", "gato", "niños", "parque"]);
    }

    #[test]
    fn test_single_letters_dropped() {
        let tokens = unstemmed().tokenize("a y o el");
        assert_eq!(tokens, vec!["el"]);
    }

    #[test]
    fn test_accented_length_counts_chars() {
        // "él" is two characters even though it is three bytes
        let tokens = unstemmed().tokenize("él ñ");
        assert_eq!(tokens, vec!["él"]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(normalize_and_stem("").is_empty());
        assert!(normalize_and_stem("   \n\t").is_empty());
        assert!(normalize_and_stem("¿?¡! 123 ... x").is_empty());
    }

    #[test]
    fn test_spanish_stems() {
        let stems = normalize_and_stem("perro gato juegan");
        assert_eq!(stems, vec!["perr", "gat", "jueg"]);
    }

    #[test]
    fn test_morphological_variants_share_stem() {
        let stems = normalize_and_stem("perro perros");
        assert_eq!(stems[0], stems[1]);
    }

    #[test]
    fn test_custom_min_len() {
        let tokens = unstemmed().min_token_len(4).tokenize("el gato come pan");
        assert_eq!(tokens, vec!["gato", "come"]);
    }

    #[test]
    fn test_deterministic() {
        let text = "Los pájaros cantan hermosas melodías al amanecer.";
        assert_eq!(normalize_and_stem(text), normalize_and_stem(text));
    }
}
