//! Sentence and word helpers shared by the signature styles
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add title_case for style-tag display
//! - 1.0.0: Extracted from duplicated splitting logic in the style functions

/// Split text into sentences.
///
/// A boundary is a `.`, `!` or `?` followed by whitespace; the punctuation
/// stays with its sentence and the whitespace run is consumed. Text without
/// terminal punctuation is one sentence. Empty and whitespace-only segments
/// are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let boundary = matches!(chars.peek(), Some(&(_, next)) if next.is_whitespace());
        if !boundary {
            continue;
        }
        let end = i + ch.len_utf8();
        if !text[start..end].trim().is_empty() {
            sentences.push(&text[start..end]);
        }
        start = end;
        while let Some(&(j, c)) = chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            chars.next();
            start = j + c.len_utf8();
        }
    }

    if start < text.len() && !text[start..].trim().is_empty() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Capitalize a word: first character upper-cased, the rest lowered.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Turn a snake_case tag into a display title: `formal_intelligent` becomes
/// `Formal Intelligent`.
pub fn title_case(tag: &str) -> String {
    tag.replace('_', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let sentences = split_sentences("First one. Second one! Third one?");
        assert_eq!(sentences, vec!["First one.", "Second one!", "Third one?"]);
    }

    #[test]
    fn test_split_no_terminal_punctuation() {
        assert_eq!(split_sentences("no punctuation here"), vec!["no punctuation here"]);
    }

    #[test]
    fn test_split_trailing_punctuation_kept() {
        assert_eq!(split_sentences("Just one sentence."), vec!["Just one sentence."]);
    }

    #[test]
    fn test_split_punctuation_inside_word_ignored() {
        // "3.5" has no whitespace after the dot, so it is not a boundary
        assert_eq!(split_sentences("Version 3.5 shipped. Finally!"), vec![
            "Version 3.5 shipped.",
            "Finally!"
        ]);
    }

    #[test]
    fn test_split_consumes_whitespace_run() {
        assert_eq!(split_sentences("One.   Two."), vec!["One.", "Two."]);
    }

    #[test]
    fn test_split_empty_and_whitespace() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_split_stacked_punctuation() {
        assert_eq!(split_sentences("Really!? Yes."), vec!["Really!?", "Yes."]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hello"), "Hello");
        assert_eq!(capitalize("HELLO"), "Hello");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_multibyte() {
        assert_eq!(capitalize("привет"), "Привет");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("formal_intelligent"), "Formal Intelligent");
        assert_eq!(title_case("tech_elite"), "Tech Elite");
        assert_eq!(title_case("normal"), "Normal");
    }
}
