//! Russian rule set: six cases, build `20180918-1`.

pub(crate) mod detect;
pub(crate) mod rules;

#[cfg(test)]
mod tests;

use crate::language::{DeclensionRule, Language, LanguageRules, LetterClass, RoleScores};
use crate::{Gender, GenderProbability, Role, WordRecord};

pub(crate) const CASE_COUNT: usize = 6;
pub(crate) const VOWELS: &str = "аеёиоуыэюя";
pub(crate) const CONSONANTS: &str = "бвгджзйклмнпрстфхцчшщ";

const BUILD: &str = "20180918-1";
const CASE_LABELS: [&str; CASE_COUNT] =
    ["Именительный", "Родительный", "Дательный", "Винительный", "Творительный", "Предложный"];

#[derive(Debug, Clone, Copy, Default)]
pub struct Russian;

impl LanguageRules for Russian {
    fn language(&self) -> Language {
        Language::Russian
    }

    fn case_count(&self) -> usize {
        CASE_COUNT
    }

    fn build(&self) -> &'static str {
        BUILD
    }

    fn case_labels(&self) -> &'static [&'static str] {
        &CASE_LABELS
    }

    fn letter_class(&self, letter: char) -> LetterClass {
        let mut class = LetterClass::empty();
        if VOWELS.contains(letter) {
            class |= LetterClass::VOWEL;
        }
        if CONSONANTS.contains(letter) {
            class |= LetterClass::CONSONANT;
        }
        class
    }

    fn detect_role(&self, word: &WordRecord) -> RoleScores {
        detect::role_scores(word.value(), word.position())
    }

    fn gender_probability(&self, role: Role, word: &str) -> GenderProbability {
        match role {
            Role::GivenName => detect::gender_by_given_name(word),
            Role::FamilyName => detect::gender_by_family_name(word),
            Role::Patronymic => detect::gender_by_patronymic(word),
            Role::Undetermined => GenderProbability::default(),
        }
    }

    fn declension_chain(&self, gender: Gender, role: Role) -> &'static [DeclensionRule] {
        rules::chain(gender, role)
    }
}
