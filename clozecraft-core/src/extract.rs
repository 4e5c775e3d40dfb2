//! Candidate extraction
//!
//! Scans the text for foreign-language word tokens and produces a
//! deduplicated, order-preserving list of cloze candidates. Single tokens
//! expand into multi-word candidates when they anchor a fixed idiom, an
//! article/determiner pair, or a reflexive-pronoun construction.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::lexicon::Lexicon;
use crate::script::is_foreign_letter;

/// Word-token grammar: a foreign letter followed by letters, apostrophes
/// (ASCII and typographic) and hyphens. Anchoring on a letter keeps bare
/// punctuation runs from ever becoming tokens; elided articles like `l'`
/// keep their apostrophe so lexicon lookups see them as written.
pub(crate) fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[A-Za-zÀ-ÖØ-öø-ÿ][A-Za-zÀ-ÖØ-öø-ÿ'’\-]*")
            .expect("word pattern is a valid regex")
    })
}

/// Extract cloze candidates from `text`, in first-appearance order.
///
/// Multi-word candidates come first, ordered by where their first token
/// appears, then the leftover single words. Deduplication is
/// case-insensitive on the lowercase form; the first-seen casing is kept
/// for display.
pub fn extract_candidates(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let tokens: Vec<&str> = word_pattern().find_iter(text).map(|m| m.as_str()).collect();
    let lowers: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut combos: Vec<String> = Vec::new();
    let mut consumed = vec![false; tokens.len()];

    fn emit(phrase: String, seen: &mut HashSet<String>, combos: &mut Vec<String>) {
        let key = phrase.to_lowercase();
        if seen.insert(key) {
            combos.push(phrase);
        }
    }

    for i in 0..tokens.len() {
        let mut idiom_here = false;

        if i + 1 < tokens.len() && lexicon.is_idiom(&lowers[i], &lowers[i + 1]) {
            emit(
                format!("{} {}", tokens[i], tokens[i + 1]),
                &mut seen,
                &mut combos,
            );
            consumed[i] = true;
            consumed[i + 1] = true;
            idiom_here = true;
        }

        // An idiom match wins over the article-pair rule for this pair.
        if !idiom_here && i + 1 < tokens.len() && lexicon.anchors_pair(&lowers[i]) {
            emit(
                format!("{} {}", tokens[i], tokens[i + 1]),
                &mut seen,
                &mut combos,
            );
            consumed[i] = true;
            consumed[i + 1] = true;
        }

        // Reflexive constructions span three words around the pronoun,
        // e.g. "il se lave". Articles deliberately do not trigger this:
        // a determiner in the middle of a triple is almost always the
        // start of an ordinary pair emitted above.
        if i + 2 < tokens.len() && lexicon.is_reflexive(&lowers[i + 1]) {
            emit(
                format!("{} {} {}", tokens[i], tokens[i + 1], tokens[i + 2]),
                &mut seen,
                &mut combos,
            );
            consumed[i] = true;
            consumed[i + 1] = true;
            consumed[i + 2] = true;
        }
    }

    let mut singles: Vec<String> = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if consumed[i] || lexicon.is_reflexive(&lowers[i]) || lexicon.is_idiom_first(&lowers[i]) {
            continue;
        }
        let cleaned = trim_non_letters(token);
        if cleaned.chars().count() < 2 {
            continue;
        }
        let key = cleaned.to_lowercase();
        if seen.insert(key) {
            singles.push(cleaned.to_string());
        }
    }

    combos.extend(singles);
    combos
}

/// Strip leading/trailing non-letter characters (edge apostrophes and
/// hyphens the token grammar allowed through). Internal ones stay.
fn trim_non_letters(token: &str) -> &str {
    token
        .trim_start_matches(|ch| !is_foreign_letter(ch))
        .trim_end_matches(|ch| !is_foreign_letter(ch))
}
