//! Lexicon configuration
//!
//! The candidate extractor is driven by closed word sets: articles and
//! contracted determiners, reflexive/object pronouns, and fixed two-word
//! idioms. These are static configuration, loaded from TOML so the
//! extractor can be tested against synthetic vocabularies and users can
//! supply their own lists for other target languages.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::error::{CoreError, Result};

/// TOML shape of a lexicon file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Language identification
    pub metadata: MetadataConfig,
    /// Definite/indefinite/partitive determiners and elided forms
    pub articles: WordListConfig,
    /// Reflexive and 1st/2nd person object pronouns
    pub reflexives: WordListConfig,
    /// Fixed two-word phrases extracted as a unit
    #[serde(default)]
    pub idioms: PhraseListConfig,
}

/// Language code and display name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Short language code, e.g. "fr"
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// A flat word list section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordListConfig {
    /// The words, matched case-insensitively
    pub words: Vec<String>,
}

/// A list of fixed multi-word phrases
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhraseListConfig {
    /// Each phrase must be exactly two whitespace-separated words
    #[serde(default)]
    pub phrases: Vec<String>,
}

/// Validated, lookup-ready lexicon
#[derive(Debug, Clone)]
pub struct Lexicon {
    articles: HashSet<String>,
    reflexives: HashSet<String>,
    idioms: HashSet<(String, String)>,
    idiom_firsts: HashSet<String>,
}

impl Lexicon {
    /// Build from a parsed configuration, validating idiom shape
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        let articles = lower_set(&config.articles.words);
        let reflexives = lower_set(&config.reflexives.words);

        let mut idioms = HashSet::new();
        let mut idiom_firsts = HashSet::new();
        for phrase in &config.idioms.phrases {
            let lowered = phrase.to_lowercase();
            let mut words = lowered.split_whitespace();
            match (words.next(), words.next(), words.next()) {
                (Some(first), Some(second), None) => {
                    idiom_firsts.insert(first.to_string());
                    idioms.insert((first.to_string(), second.to_string()));
                }
                _ => {
                    return Err(CoreError::InvalidLexicon {
                        reason: format!("idiom '{phrase}' is not a two-word phrase"),
                    });
                }
            }
        }

        Ok(Self {
            articles,
            reflexives,
            idioms,
            idiom_firsts,
        })
    }

    /// Parse and validate a TOML lexicon file
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LexiconConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Build directly from word slices, for tests and embedding callers
    pub fn from_parts(articles: &[&str], reflexives: &[&str], idioms: &[&str]) -> Result<Self> {
        let config = LexiconConfig {
            metadata: MetadataConfig {
                code: "custom".to_string(),
                name: "Custom".to_string(),
            },
            articles: WordListConfig {
                words: articles.iter().map(|w| w.to_string()).collect(),
            },
            reflexives: WordListConfig {
                words: reflexives.iter().map(|w| w.to_string()).collect(),
            },
            idioms: PhraseListConfig {
                phrases: idioms.iter().map(|p| p.to_string()).collect(),
            },
        };
        Self::from_config(&config)
    }

    /// The embedded French lexicon
    pub fn french() -> Result<&'static Lexicon> {
        static FRENCH: OnceLock<std::result::Result<Lexicon, String>> = OnceLock::new();
        FRENCH
            .get_or_init(|| {
                Lexicon::from_toml_str(embedded_french()).map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|msg| CoreError::InvalidLexicon {
                reason: msg.clone(),
            })
    }

    /// Look up an embedded lexicon by language code
    pub fn for_language(code: &str) -> Result<&'static Lexicon> {
        match code {
            "fr" | "french" => Self::french(),
            _ => Err(CoreError::UnknownLanguage {
                code: code.to_string(),
            }),
        }
    }

    /// Is the lowercase word an article/determiner?
    pub fn is_article(&self, lower: &str) -> bool {
        self.articles.contains(lower)
    }

    /// Is the lowercase word a reflexive/object pronoun?
    pub fn is_reflexive(&self, lower: &str) -> bool {
        self.reflexives.contains(lower)
    }

    /// Does the word anchor a two-word candidate (article or pronoun)?
    pub fn anchors_pair(&self, lower: &str) -> bool {
        self.is_article(lower) || self.is_reflexive(lower)
    }

    /// Is the lowercase pair a fixed idiom?
    pub fn is_idiom(&self, first: &str, second: &str) -> bool {
        self.idioms
            .contains(&(first.to_string(), second.to_string()))
    }

    /// Is the lowercase word the first word of any fixed idiom?
    pub fn is_idiom_first(&self, lower: &str) -> bool {
        self.idiom_firsts.contains(lower)
    }
}

fn lower_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

/// Embedded French lexicon source
pub fn embedded_french() -> &'static str {
    include_str!("../configs/lexicons/french.toml")
}
