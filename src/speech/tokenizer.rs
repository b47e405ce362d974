//! Splitting text into speech-service sized pieces
//!
//! The translate speech endpoint accepts at most [`MAX_CHARS`] characters per
//! request. Text is cut at natural pauses first, then long pieces are cut
//! at word boundaries.

/// Maximum characters per speech request
pub const MAX_CHARS: usize = 100;

/// Characters that end a spoken phrase on their own
const TONE_MARKS: &str = "?!？！";
const OTHER_PUNCTUATION: &str = "¡()[]¿…‥،;—。，、：\n";

/// Split `text` into request-sized tokens
///
/// Tokens keep their trailing punctuation, are trimmed, and never exceed
/// [`MAX_CHARS`] characters. Punctuation-only fragments are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    split_phrases(text.trim())
        .into_iter()
        .flat_map(|phrase| minimize(&phrase, MAX_CHARS))
        .map(|token| token.trim().to_string())
        .filter(|token| !is_punctuation_only(token))
        .collect()
}

fn split_phrases(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut phrases = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);
        let next = chars.get(i + 1).copied();

        let boundary = if TONE_MARKS.contains(ch) || OTHER_PUNCTUATION.contains(ch) {
            true
        } else if ch == '.' || ch == ',' {
            // "3.14" and "e.g." stay together, "end. Next" splits
            next.map_or(true, char::is_whitespace)
        } else if ch == ':' {
            // Times like 10:30 stay together
            !next.map_or(false, |c| c.is_ascii_digit())
        } else {
            false
        };

        if boundary {
            phrases.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        phrases.push(current);
    }
    phrases
}

/// Cut `text` into pieces of at most `max` characters, preferring spaces
fn minimize(text: &str, max: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest: Vec<char> = text.trim_start_matches(' ').chars().collect();

    while rest.len() > max {
        let cut = rest[..max]
            .iter()
            .rposition(|&c| c == ' ')
            .filter(|&idx| idx > 0)
            .unwrap_or(max);
        pieces.push(rest[..cut].iter().collect());

        let tail: String = rest[cut..].iter().collect();
        rest = tail.trim_start_matches(' ').chars().collect();
    }

    pieces.push(rest.into_iter().collect());
    pieces
}

fn is_punctuation_only(token: &str) -> bool {
    token.chars().all(|c| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_token() {
        assert_eq!(tokenize("Hello world"), vec!["Hello world"]);
    }

    #[test]
    fn test_splits_on_sentence_punctuation() {
        assert_eq!(
            tokenize("Hola. ¿Qué tal? Bien, gracias!"),
            vec!["Hola.", "Qué tal?", "Bien,", "gracias!"]
        );
    }

    #[test]
    fn test_keeps_decimals_and_times() {
        assert_eq!(tokenize("Pi is 3.14 at 10:30"), vec!["Pi is 3.14 at 10:30"]);
    }

    #[test]
    fn test_newlines_split() {
        assert_eq!(tokenize("line one\nline two"), vec!["line one", "line two"]);
    }

    #[test]
    fn test_long_text_respects_limit() {
        let text = "word ".repeat(70);
        let tokens = tokenize(&text);

        assert!(tokens.len() > 1);
        for token in &tokens {
            assert!(token.chars().count() <= MAX_CHARS);
            assert!(!token.starts_with(' '));
        }
        assert_eq!(tokens.join(" "), text.trim());
    }

    #[test]
    fn test_long_word_hard_split() {
        let text = "x".repeat(250);
        let tokens = tokenize(&text);
        assert_eq!(
            tokens.iter().map(|t| t.chars().count()).collect::<Vec<_>>(),
            vec![100, 100, 50]
        );
    }

    #[test]
    fn test_multibyte_counts_chars() {
        let text = "é".repeat(150);
        let tokens = tokenize(&text);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].chars().count(), 100);
    }

    #[test]
    fn test_punctuation_only_dropped() {
        assert!(tokenize("...!?").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
