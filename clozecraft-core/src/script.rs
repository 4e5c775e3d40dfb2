//! Script classification
//!
//! Classifies single characters into the script categories the builders
//! work with: foreign (Latin with accents), ideographic (CJK), digit, and
//! punctuation/everything-else. Digits carry no script of their own and
//! are typed from their neighbors, see [`digit_context`].

/// Script category of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Latin letters including the accented ranges used by French
    Foreign,
    /// CJK Unified Ideographs
    Ideographic,
    /// ASCII digit, typed contextually by the builders
    Digit,
    /// Whitespace, punctuation, symbols - everything else
    Punct,
}

/// Classify a single character by script
pub fn classify_char(ch: char) -> Script {
    if is_foreign_letter(ch) {
        Script::Foreign
    } else if is_ideograph(ch) {
        Script::Ideographic
    } else if ch.is_ascii_digit() {
        Script::Digit
    } else {
        Script::Punct
    }
}

/// Latin letter relevant to the target learning language.
///
/// ASCII letters plus the Latin-1 accented ranges (À-Ö, Ø-ö, ø-ÿ). The
/// gaps at U+00D7/U+00F7 are the multiplication and division signs.
pub fn is_foreign_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || matches!(ch, '\u{00C0}'..='\u{00D6}' | '\u{00D8}'..='\u{00F6}' | '\u{00F8}'..='\u{00FF}')
}

/// CJK Unified Ideographs block (U+4E00–U+9FFF)
pub fn is_ideograph(ch: char) -> bool {
    matches!(ch, '\u{4E00}'..='\u{9FFF}')
}

/// Resolve a digit's script from its neighborhood.
///
/// Looks outward from position `pos` in `chars` (backward first, then
/// forward), skipping whitespace and other digits, for the nearest
/// script-bearing character. Bare numerals with no such neighbor default
/// to ideographic so they are read with the base-language voice.
pub fn digit_context(chars: &[char], pos: usize) -> Script {
    let skip = |ch: &char| ch.is_whitespace() || ch.is_ascii_digit();

    let before = chars[..pos].iter().rev().find(|ch| !skip(ch));
    let neighbor = match before {
        Some(ch) => Some(*ch),
        None => chars[pos + 1..].iter().find(|ch| !skip(ch)).copied(),
    };

    match neighbor.map(classify_char) {
        Some(Script::Foreign) => Script::Foreign,
        Some(Script::Ideographic) | None => Script::Ideographic,
        // The scan stops at the first non-space non-digit character,
        // so a punctuation neighbor resolves to the base language.
        Some(_) => Script::Ideographic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_are_foreign() {
        assert_eq!(classify_char('a'), Script::Foreign);
        assert_eq!(classify_char('Z'), Script::Foreign);
    }

    #[test]
    fn accented_letters_are_foreign() {
        for ch in ['é', 'à', 'ç', 'ô', 'ü', 'À', 'Ö', 'Ø', 'ÿ'] {
            assert_eq!(classify_char(ch), Script::Foreign, "{ch}");
        }
    }

    #[test]
    fn multiplication_and_division_signs_are_punct() {
        assert_eq!(classify_char('\u{00D7}'), Script::Punct);
        assert_eq!(classify_char('\u{00F7}'), Script::Punct);
    }

    #[test]
    fn cjk_is_ideographic() {
        assert_eq!(classify_char('中'), Script::Ideographic);
        assert_eq!(classify_char('你'), Script::Ideographic);
        assert_eq!(classify_char('\u{4E00}'), Script::Ideographic);
        assert_eq!(classify_char('\u{9FFF}'), Script::Ideographic);
    }

    #[test]
    fn digits_and_punct() {
        assert_eq!(classify_char('7'), Script::Digit);
        assert_eq!(classify_char(' '), Script::Punct);
        assert_eq!(classify_char('！'), Script::Punct);
        assert_eq!(classify_char('。'), Script::Punct);
        // Other scripts degrade to punct rather than failing
        assert_eq!(classify_char('д'), Script::Punct);
        assert_eq!(classify_char('ع'), Script::Punct);
    }

    #[test]
    fn digit_context_prefers_backward_neighbor() {
        let chars: Vec<char> = "第2课".chars().collect();
        assert_eq!(digit_context(&chars, 1), Script::Ideographic);

        let chars: Vec<char> = "page 2".chars().collect();
        assert_eq!(digit_context(&chars, 5), Script::Foreign);
    }

    #[test]
    fn digit_context_falls_forward_when_nothing_behind() {
        let chars: Vec<char> = "2 pages".chars().collect();
        assert_eq!(digit_context(&chars, 0), Script::Foreign);

        let chars: Vec<char> = "2 课".chars().collect();
        assert_eq!(digit_context(&chars, 0), Script::Ideographic);
    }

    #[test]
    fn lone_digit_defaults_to_ideographic() {
        let chars: Vec<char> = "42".chars().collect();
        assert_eq!(digit_context(&chars, 0), Script::Ideographic);
        assert_eq!(digit_context(&chars, 1), Script::Ideographic);
    }
}
