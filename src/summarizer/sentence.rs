// src/summarizer/sentence.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
// One or more sentence-terminal characters in a row form a single boundary
static SENTENCE_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]+").expect("Failed to compile SENTENCE_BOUNDARY_RE")
});

/// Whitespace for tokenizing and trimming: ASCII blanks, line terminators,
/// Unicode space separators and the byte-order mark. U+0085 (NEL) is not
/// whitespace here.
pub fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' '
            | '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}'
            | '\u{3000}' | '\u{FEFF}'
    )
}

/// Splits `text` on runs of [`is_space`], skipping empty tokens.
pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_space).filter(|token| !token.is_empty())
}

/// Splits `text` into trimmed sentences, keeping document order.
///
/// Fragments whose trimmed length is `min_chars` characters or fewer are
/// dropped. Every returned slice borrows directly from `text`.
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<&str> {
    SENTENCE_BOUNDARY_RE
        .split(text)
        .map(|fragment| fragment.trim_matches(is_space))
        .filter(|fragment| fragment.chars().count() > min_chars)
        .collect()
}
