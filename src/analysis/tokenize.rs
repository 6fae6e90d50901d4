//! Word tokenization
//!
//! Splits raw text into an ordered sequence of word tokens. Unicode word
//! boundaries keep apostrophes inside contractions ("don't" stays one token)
//! and drop punctuation, the same shape of output the downstream stemmer,
//! singularizer, and tagger expect.

use unicode_segmentation::UnicodeSegmentation;

/// Tokenize text into word tokens, preserving input order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(ToString::to_string).collect()
}
