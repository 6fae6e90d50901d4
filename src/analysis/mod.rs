//! Text analysis engine
//!
//! Composes the wrapped linguistic capabilities into one report: AFINN
//! sentiment scoring (`sentiment` crate), Unicode word tokenization, Snowball
//! stemming (`rust-stemmers`), singularization (`Inflector`), and noun
//! extraction via the part-of-speech tagger. The engine is built once at
//! startup and is read-only afterwards, so it can be shared freely across
//! request tasks.

mod tagger;
mod tokenize;

pub use tagger::{LexiconError, TaggedToken, Tagger};
pub use tokenize::tokenize;

use inflector::string::singularize::to_singular;
use rust_stemmers::{Algorithm, Stemmer};
use serde::Serialize;

/// Sign-based classification of a sentiment score. Zero is Neutral, not
/// Negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    #[serde(rename = "Happy Statement")]
    Happy,
    #[serde(rename = "Negative Statement")]
    Negative,
    #[serde(rename = "Neutral Statement")]
    Neutral,
}

/// Classify a raw sentiment score by sign.
pub fn classify(score: f32) -> SentimentLabel {
    if score > 0.0 {
        SentimentLabel::Happy
    } else if score < 0.0 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Full analysis of one input text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub sentiment_score: f32,
    pub sentiment_message: SentimentLabel,
    pub tokens: Vec<String>,
    pub stemmed_words: Vec<String>,
    pub singular_words: Vec<String>,
    pub nouns: Vec<String>,
}

pub struct Analyzer {
    stemmer: Stemmer,
    tagger: Tagger,
}

impl Analyzer {
    pub fn new() -> Result<Self, LexiconError> {
        Ok(Self {
            stemmer: Stemmer::create(Algorithm::English),
            tagger: Tagger::load()?,
        })
    }

    /// Run every capability over the text and assemble the report.
    ///
    /// `stemmed_words` and `singular_words` are computed token-by-token with
    /// no filtering, so they always match `tokens` in length and order;
    /// `nouns` is the order-preserving subset of tokens tagged `NN*`.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let score = sentiment::analyze(text.to_string()).score;

        let tokens = tokenize(text);

        let stemmed_words = tokens
            .iter()
            .map(|token| self.stemmer.stem(&token.to_lowercase()).into_owned())
            .collect();

        let singular_words = tokens.iter().map(|token| to_singular(token)).collect();

        let nouns = self
            .tagger
            .tag(&tokens)
            .into_iter()
            .filter(|tagged| tagger::is_noun(&tagged.tag))
            .map(|tagged| tagged.token)
            .collect();

        AnalysisReport {
            sentiment_score: score,
            sentiment_message: classify(score),
            tokens,
            stemmed_words,
            singular_words,
            nouns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        Analyzer::new().expect("engine should build")
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(3.0), SentimentLabel::Happy);
        assert_eq!(classify(-2.0), SentimentLabel::Negative);
        assert_eq!(classify(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_serialization() {
        let json = serde_json::to_string(&SentimentLabel::Happy).expect("serializable");
        assert_eq!(json, "\"Happy Statement\"");
        let json = serde_json::to_string(&SentimentLabel::Neutral).expect("serializable");
        assert_eq!(json, "\"Neutral Statement\"");
    }

    #[test]
    fn test_parallel_sequences_same_length() {
        let report = analyzer().analyze("The cats were running quickly through gardens");
        assert_eq!(report.tokens.len(), report.stemmed_words.len());
        assert_eq!(report.tokens.len(), report.singular_words.len());
    }

    #[test]
    fn test_nouns_are_ordered_subset_of_tokens() {
        let report = analyzer().analyze("the cats and dogs run in the garden");
        let mut cursor = 0;
        for noun in &report.nouns {
            let pos = report.tokens[cursor..]
                .iter()
                .position(|t| t == noun)
                .expect("noun must appear in remaining tokens");
            cursor += pos + 1;
        }
    }

    #[test]
    fn test_noun_extraction() {
        let report = analyzer().analyze("the cats and dogs run in the garden");
        assert_eq!(report.nouns, vec!["cats", "dogs", "garden"]);
    }

    #[test]
    fn test_stemming_and_singularizing() {
        let report = analyzer().analyze("cats running");
        assert_eq!(report.stemmed_words, vec!["cat", "run"]);
        assert_eq!(report.singular_words, vec!["cat", "running"]);
    }

    #[test]
    fn test_positive_sentiment() {
        let report = analyzer().analyze("I love this beautiful amazing day");
        assert!(report.sentiment_score > 0.0);
        assert_eq!(report.sentiment_message, SentimentLabel::Happy);
    }

    #[test]
    fn test_negative_sentiment() {
        let report = analyzer().analyze("I hate this horrible terrible mess");
        assert!(report.sentiment_score < 0.0);
        assert_eq!(report.sentiment_message, SentimentLabel::Negative);
    }

    #[test]
    fn test_neutral_sentiment() {
        let report = analyzer().analyze("the table is brown");
        assert_eq!(report.sentiment_score, 0.0);
        assert_eq!(report.sentiment_message, SentimentLabel::Neutral);
    }

    #[test]
    fn test_whitespace_only_text_yields_empty_sequences() {
        let report = analyzer().analyze("   ");
        assert!(report.tokens.is_empty());
        assert!(report.stemmed_words.is_empty());
        assert!(report.singular_words.is_empty());
        assert!(report.nouns.is_empty());
        assert_eq!(report.sentiment_message, SentimentLabel::Neutral);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = analyzer().analyze("good dog");
        let value = serde_json::to_value(&report).expect("serializable");
        assert!(value.get("sentimentScore").is_some());
        assert!(value.get("sentimentMessage").is_some());
        assert!(value.get("stemmedWords").is_some());
        assert!(value.get("singularWords").is_some());
        assert!(value.get("nouns").is_some());
    }
}
