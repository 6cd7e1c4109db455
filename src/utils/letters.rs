use once_cell::sync::Lazy;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Relative weights of the Twi rack letters.
/// Vowels dominate the pool so that most racks can form a word.
pub static LETTER_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    vec![
        ('a', 6.0),
        ('e', 3.0),
        ('ɛ', 2.0),
        ('o', 2.0),
        ('ɔ', 2.0),
        ('k', 1.0),
        ('n', 1.0),
        ('s', 1.0),
        ('t', 1.0),
        ('p', 1.0),
        ('m', 1.0),
        ('u', 1.0),
        ('w', 1.0),
        ('y', 1.0),
    ]
});

/// Case-fold and bring a letter or word into canonical composed form (NFC).
///
/// Both the board and the dictionary go through this before any comparison, so
/// `"Ɛ"`, `"ɛ"` and decomposed accented forms all compare equal to their
/// canonical lowercase spelling.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().nfc().collect()
}

/// Whether `text` is one letter: a base character followed only by combining marks.
pub fn is_single_letter(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(base) if !is_combining_mark(base) => chars.all(is_combining_mark),
        _ => false,
    }
}

/// Calculate the cumulative distribution for weighted random selection
pub fn get_cumulative_distribution() -> Vec<(char, f32)> {
    let mut cumulative = 0.0;
    LETTER_DISTRIBUTION
        .iter()
        .map(|(ch, weight)| {
            cumulative += weight;
            (*ch, cumulative)
        })
        .collect()
}

/// Check whether a letter can appear on a generated rack
#[cfg(test)]
pub fn is_rack_letter(letter: char) -> bool {
    LETTER_DISTRIBUTION.iter().any(|(ch, _)| *ch == letter)
}
