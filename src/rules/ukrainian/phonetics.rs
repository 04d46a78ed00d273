//! Ukrainian sound changes used by the declension rules.
//!
//! - Consonant alternation г/к/х -> з/ц/с before -і (Ольга -> Ользі).
//! - Velar alternation к/г -> ч/ж in the vocative (Шевченко -> Шевченче).
//! - Osnova (stem) extraction: strip trailing vowels and the soft sign.
//! - Second-declension group detection (hard, mixed, soft).

use super::{CONSONANTS, VOWELS, letter_class};
use crate::LetterClass;
use crate::rules::helpers::in_letters;

/// The Ukrainian apostrophe as written in declined forms.
pub const APOSTROPHE: &str = "’";

/// Noun group inside the second declension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclensionGroup {
    /// Stem on a hard non-sibilant: Петро, Тарас.
    Hard,
    /// Stem on a hard sibilant: Тиміш, Кущ.
    Mixed,
    /// Anything soft or softened: Андрій, Соловей, Швець.
    Soft,
}

/// г к х -> з ц с
pub fn alternate_gkh(letter: &str) -> &str {
    match letter {
        "г" => "з",
        "к" => "ц",
        "х" => "с",
        other => other,
    }
}

/// к г -> ч ж
pub fn alternate_velar(letter: &str) -> &str {
    match letter {
        "к" => "ч",
        "г" => "ж",
        other => other,
    }
}

/// Anything that is neither a letter nor a space counts as an apostrophe
/// (Валер'я, Мар’я).
pub fn is_apostrophe(letter: &str) -> bool {
    !in_letters(letter, " бвгджзйклмнпрстфхцчшщаеиоуіїєюя")
}

fn strips_from_osnova(c: char) -> bool {
    VOWELS.contains(c) || c == 'ь'
}

/// Word with its trailing vowels and soft signs removed.
pub fn osnova(word: &str) -> &str {
    word.trim_end_matches(strips_from_osnova)
}

/// Group of a second-declension noun, judged by the last letter of the
/// osnova and the first letter of the ending that follows it.
pub fn declension_group(word: &str) -> DeclensionGroup {
    let stem = osnova(word);
    let ending_soft =
        word[stem.len()..].chars().next().is_some_and(|c| letter_class(c).contains(LetterClass::ALWAYS_SOFT));
    let stem_class = stem.chars().next_back().map(letter_class).unwrap_or(LetterClass::empty());

    if stem_class.contains(LetterClass::NON_SIBILANT) && !ending_soft {
        DeclensionGroup::Hard
    } else if stem_class.contains(LetterClass::SIBILANT) && !ending_soft {
        DeclensionGroup::Mixed
    } else {
        DeclensionGroup::Soft
    }
}

/// Whether `letter` is a Ukrainian consonant.
pub fn is_consonant(letter: &str) -> bool {
    in_letters(letter, CONSONANTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternations() {
        assert_eq!(alternate_gkh("г"), "з");
        assert_eq!(alternate_gkh("к"), "ц");
        assert_eq!(alternate_gkh("х"), "с");
        assert_eq!(alternate_gkh("т"), "т");
        assert_eq!(alternate_velar("к"), "ч");
        assert_eq!(alternate_velar("г"), "ж");
        assert_eq!(alternate_velar("х"), "х");
    }

    #[test]
    fn osnova_strips_vowels_and_soft_sign() {
        assert_eq!(osnova("марія"), "мар");
        assert_eq!(osnova("олесь"), "олес");
        assert_eq!(osnova("петро"), "петр");
        assert_eq!(osnova("тарас"), "тарас");
        assert_eq!(osnova("ая"), "");
    }

    #[test]
    fn groups() {
        assert_eq!(declension_group("петро"), DeclensionGroup::Hard);
        assert_eq!(declension_group("тиміш"), DeclensionGroup::Mixed);
        assert_eq!(declension_group("андрій"), DeclensionGroup::Soft);
        assert_eq!(declension_group("олесь"), DeclensionGroup::Soft);
        assert_eq!(declension_group("гнатюк"), DeclensionGroup::Hard);
    }

    #[test]
    fn apostrophe_detection() {
        assert!(is_apostrophe("'"));
        assert!(is_apostrophe("’"));
        assert!(is_apostrophe("ь"));
        assert!(!is_apostrophe("р"));
        assert!(!is_apostrophe("і"));
    }
}
