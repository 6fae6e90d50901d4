//! Part-of-speech tagging
//!
//! A small lexicon-driven tagger in the Brill shape: every token gets an
//! initial tag from the embedded lexicon (falling back to suffix heuristics,
//! with nouns as the default category for unknown words), then a contextual
//! rule pass corrects tags using the neighboring token. Tags follow the Penn
//! Treebank codes; anything starting with `NN` is a noun.
//!
//! The lexicon and rule set are parsed once at startup and never mutated.

use std::collections::HashMap;
use thiserror::Error;

static LEXICON_JSON: &str = include_str!("../../data/lexicon.json");

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to parse embedded lexicon: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("embedded lexicon is empty")]
    Empty,
}

/// A token paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

/// Contextual correction rule applied after initial tagging.
#[derive(Debug, Clone)]
enum ContextRule {
    /// Retag `from` as `to` when the previous token carries tag `prev`.
    AfterTag {
        prev: &'static str,
        from: &'static str,
        to: &'static str,
    },
    /// Retag `from` as `to` when the previous token (lowercased) is `prev`.
    AfterWord {
        prev: &'static str,
        from: &'static str,
        to: &'static str,
    },
}

fn default_rules() -> Vec<ContextRule> {
    vec![
        // infinitives: "to run"
        ContextRule::AfterTag {
            prev: "TO",
            from: "NN",
            to: "VB",
        },
        // modal + base verb: "will change"
        ContextRule::AfterTag {
            prev: "MD",
            from: "NN",
            to: "VB",
        },
        // determiner promotes a base verb to a noun: "the run"
        ContextRule::AfterTag {
            prev: "DT",
            from: "VB",
            to: "NN",
        },
        // perfect aspect: "have walked" / "had walked"
        ContextRule::AfterWord {
            prev: "have",
            from: "VBD",
            to: "VBN",
        },
        ContextRule::AfterWord {
            prev: "has",
            from: "VBD",
            to: "VBN",
        },
        ContextRule::AfterWord {
            prev: "had",
            from: "VBD",
            to: "VBN",
        },
    ]
}

pub struct Tagger {
    lexicon: HashMap<String, String>,
    rules: Vec<ContextRule>,
}

impl Tagger {
    /// Parse the embedded lexicon and build the rule set.
    pub fn load() -> Result<Self, LexiconError> {
        let lexicon: HashMap<String, String> = serde_json::from_str(LEXICON_JSON)?;
        if lexicon.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(Self {
            lexicon,
            rules: default_rules(),
        })
    }

    /// Tag every token, preserving input order.
    pub fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = tokens
            .iter()
            .map(|token| TaggedToken {
                token: token.clone(),
                tag: self.initial_tag(token),
            })
            .collect();
        self.apply_rules(&mut tagged);
        tagged
    }

    fn initial_tag(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        if let Some(tag) = self.lexicon.get(&lower) {
            return tag.clone();
        }
        suffix_tag(token, &lower).to_string()
    }

    /// One left-to-right pass; each rule sees already-corrected left context.
    fn apply_rules(&self, tagged: &mut [TaggedToken]) {
        for i in 1..tagged.len() {
            let prev_tag = tagged[i - 1].tag.clone();
            let prev_word = tagged[i - 1].token.to_lowercase();
            for rule in &self.rules {
                match rule {
                    ContextRule::AfterTag { prev, from, to } => {
                        if prev_tag == *prev && tagged[i].tag == *from {
                            tagged[i].tag = (*to).to_string();
                            break;
                        }
                    }
                    ContextRule::AfterWord { prev, from, to } => {
                        if prev_word == *prev && tagged[i].tag == *from {
                            tagged[i].tag = (*to).to_string();
                            break;
                        }
                    }
                }
            }
        }
    }
}

/// Whether a tag denotes a noun category (NN, NNS, NNP, NNPS).
pub fn is_noun(tag: &str) -> bool {
    tag.starts_with("NN")
}

/// Heuristic tag for words outside the lexicon. Nouns are the default
/// category, matching the tagger bootstrap this service replaces.
fn suffix_tag(token: &str, lower: &str) -> &'static str {
    if token.chars().next().is_some_and(|c| c.is_ascii_digit()) || token.parse::<f64>().is_ok() {
        return "CD";
    }
    if token.chars().next().is_some_and(char::is_uppercase) {
        return "NNP";
    }
    if lower.len() > 4 && lower.ends_with("ing") {
        return "VBG";
    }
    if lower.len() > 3 && lower.ends_with("ed") {
        return "VBD";
    }
    if lower.len() > 3 && lower.ends_with("ly") {
        return "RB";
    }
    if ["ous", "ful", "ive"].iter().any(|s| lower.ends_with(s))
        || ["able", "ible"].iter().any(|s| lower.len() > 5 && lower.ends_with(s))
    {
        return "JJ";
    }
    if lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us") && !lower.ends_with("is") {
        return "NNS";
    }
    "NN"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_all(tagger: &Tagger, words: &[&str]) -> Vec<String> {
        let tokens: Vec<String> = words.iter().map(ToString::to_string).collect();
        tagger.tag(&tokens).into_iter().map(|t| t.tag).collect()
    }

    #[test]
    fn test_lexicon_words() {
        let tagger = Tagger::load().expect("lexicon should parse");
        assert_eq!(tag_all(&tagger, &["the"]), vec!["DT"]);
        assert_eq!(tag_all(&tagger, &["often"]), vec!["RB"]);
        assert_eq!(tag_all(&tagger, &["beautiful"]), vec!["JJ"]);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let tagger = Tagger::load().expect("lexicon should parse");
        // "The" hits the lexicon before the capitalization heuristic
        assert_eq!(tag_all(&tagger, &["The", "I"]), vec!["DT", "PRP"]);
    }

    #[test]
    fn test_unknown_words_default_to_nouns() {
        let tagger = Tagger::load().expect("lexicon should parse");
        assert_eq!(tag_all(&tagger, &["fox"]), vec!["NN"]);
        assert_eq!(tag_all(&tagger, &["foxes"]), vec!["NNS"]);
        assert_eq!(tag_all(&tagger, &["London"]), vec!["NNP"]);
    }

    #[test]
    fn test_suffix_heuristics() {
        let tagger = Tagger::load().expect("lexicon should parse");
        assert_eq!(tag_all(&tagger, &["jumping"]), vec!["VBG"]);
        assert_eq!(tag_all(&tagger, &["jumped"]), vec!["VBD"]);
        assert_eq!(tag_all(&tagger, &["quickly"]), vec!["RB"]);
        assert_eq!(tag_all(&tagger, &["gracious"]), vec!["JJ"]);
        assert_eq!(tag_all(&tagger, &["42"]), vec!["CD"]);
    }

    #[test]
    fn test_infinitive_rule() {
        let tagger = Tagger::load().expect("lexicon should parse");
        // "dance" is out of lexicon: NN initially, VB after "to"
        assert_eq!(tag_all(&tagger, &["to", "dance"]), vec!["TO", "VB"]);
    }

    #[test]
    fn test_determiner_rule() {
        let tagger = Tagger::load().expect("lexicon should parse");
        // "run" is a lexicon verb, promoted to noun after a determiner
        assert_eq!(tag_all(&tagger, &["the", "run"]), vec!["DT", "NN"]);
    }

    #[test]
    fn test_perfect_aspect_rule() {
        let tagger = Tagger::load().expect("lexicon should parse");
        assert_eq!(
            tag_all(&tagger, &["had", "walked"]),
            vec!["VBD", "VBN"]
        );
    }

    #[test]
    fn test_noun_tag_predicate() {
        assert!(is_noun("NN"));
        assert!(is_noun("NNS"));
        assert!(is_noun("NNP"));
        assert!(!is_noun("VB"));
        assert!(!is_noun("N"));
    }

    #[test]
    fn test_empty_input() {
        let tagger = Tagger::load().expect("lexicon should parse");
        assert!(tagger.tag(&[]).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let tagger = Tagger::load().expect("lexicon should parse");
        let tokens: Vec<String> = ["the", "lazy", "dog"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let tagged = tagger.tag(&tokens);
        let words: Vec<&str> = tagged.iter().map(|t| t.token.as_str()).collect();
        assert_eq!(words, vec!["the", "lazy", "dog"]);
    }
}
