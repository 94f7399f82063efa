//! Pythagorean letter values.
//!
//! Letters cycle through 1..=9 in alphabet order (A=1 … I=9, J=1 … R=9, S=1 … Z=8).
//! Letters are upper-cased first, so `ß` counts as `SS`. Anything else outside A–Z,
//! accented Latin letters included, weighs nothing.

use serde::{Deserialize, Serialize};

/// Weight of each letter, indexed by `letter - 'A'`.
const LETTER_WEIGHTS: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A..I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J..R
    1, 2, 3, 4, 5, 6, 7, 8, // S..Z
];

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Which letters of a text take part in a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterFilter {
    All,
    VowelsOnly,
    ConsonantsOnly,
}

impl LetterFilter {
    fn accepts(self, c: char) -> bool {
        match self {
            Self::All => true,
            Self::VowelsOnly => is_vowel(c),
            Self::ConsonantsOnly => !is_vowel(c),
        }
    }
}

/// Case-insensitive vowel test (A, E, I, O, U).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_uppercase())
}

/// Pythagorean weight of `c`, or `None` when `c` is not an A–Z letter.
pub fn letter_weight(c: char) -> Option<u32> {
    let upper = c.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| LETTER_WEIGHTS[(upper as u8 - b'A') as usize])
}

/// Alphabetic characters of `text`, upper-cased. One letter may expand to several.
fn upper_letters(text: &str) -> impl Iterator<Item = char> {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
}

/// Weights of the A–Z letters of `text` selected by `filter`, in order.
pub fn letter_contributions(text: &str, filter: LetterFilter) -> Vec<u32> {
    upper_letters(text)
        .filter(|c| filter.accepts(*c))
        .filter_map(letter_weight)
        .collect()
}

/// Raw (unreduced) sum of the weights of the letters of `text` selected by `filter`.
pub fn letter_value(text: &str, filter: LetterFilter) -> u32 {
    letter_contributions(text, filter).into_iter().sum()
}

/// Weight of every alphabetic character of `text`, in order. Accented letters map to 0.
pub fn letter_weights(text: &str) -> Vec<u32> {
    upper_letters(text)
        .map(|c| letter_weight(c).unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_table() {
        let expected = [
            ("AJS", 1),
            ("BKT", 2),
            ("CLU", 3),
            ("DMV", 4),
            ("ENW", 5),
            ("FOX", 6),
            ("GPY", 7),
            ("HQZ", 8),
            ("IR", 9),
        ];
        for (letters, weight) in expected {
            for c in letters.chars() {
                assert_eq!(letter_weight(c), Some(weight), "letter {c}");
            }
        }
        assert_eq!(letter_weight('-'), None);
        assert_eq!(letter_weight('É'), None);
    }

    #[test]
    fn test_letter_value_name_parts() {
        assert_eq!(letter_value("MARCOS", LetterFilter::All), 24);
        assert_eq!(letter_value("Antonio", LetterFilter::All), 34);
        assert_eq!(letter_value("inoue", LetterFilter::All), 28);
        assert_eq!(letter_value("Rosa", LetterFilter::All), 17);
    }

    #[test]
    fn test_letter_value_case_insensitive() {
        assert_eq!(
            letter_value("abc", LetterFilter::All),
            letter_value("ABC", LetterFilter::All)
        );
        assert_eq!(
            letter_value("antonio", LetterFilter::VowelsOnly),
            letter_value("ANTONIO", LetterFilter::VowelsOnly)
        );
    }

    #[test]
    fn test_filters_partition_all() {
        for word in ["Marcos", "Antonio", "Inoue", "Rosa", "Quixotic", "Rhythm", "abcdefghijklmnopqrstuvwxyz"] {
            assert_eq!(
                letter_value(word, LetterFilter::All),
                letter_value(word, LetterFilter::VowelsOnly)
                    + letter_value(word, LetterFilter::ConsonantsOnly),
                "word {word}"
            );
        }
    }

    #[test]
    fn test_non_letters_skipped() {
        assert_eq!(letter_value("D'Ávila-Neto", LetterFilter::All), letter_value("DvilaNeto", LetterFilter::All));
        assert_eq!(letter_value("123 !?", LetterFilter::All), 0);
    }

    #[test]
    fn test_contributions_follow_filter() {
        assert_eq!(letter_contributions("Rosa", LetterFilter::All), vec![9, 6, 1, 1]);
        assert_eq!(letter_contributions("Rosa", LetterFilter::VowelsOnly), vec![6, 1]);
        assert_eq!(letter_contributions("Rosa", LetterFilter::ConsonantsOnly), vec![9, 1]);
    }

    #[test]
    fn test_letter_weights_keeps_accented_as_zero() {
        assert_eq!(letter_weights("Góis"), vec![7, 0, 9, 1]);
        assert_eq!(letter_weights("O'B"), vec![6, 2]);
    }

    #[test]
    fn test_sharp_s_counts_as_double_s() {
        // S1 T2 R9 A1 U3 + ß as S1 S1
        assert_eq!(letter_value("Strauß", LetterFilter::All), 18);
        assert_eq!(letter_value("Strauß", LetterFilter::ConsonantsOnly), 14);
        assert_eq!(letter_weights("ß"), vec![1, 1]);
    }
}
