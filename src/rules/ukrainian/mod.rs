//! Ukrainian rule set: seven cases (the seventh is the vocative), build
//! `11071222`.

pub(crate) mod detect;
pub(crate) mod phonetics;
pub(crate) mod rules;


use crate::language::{DeclensionRule, Language, LanguageRules, LetterClass, RoleScores};
use crate::{Gender, GenderProbability, Role, WordRecord};

pub(crate) const CASE_COUNT: usize = 7;
pub(crate) const VOWELS: &str = "аеиоуіїєюя";
pub(crate) const CONSONANTS: &str = "бвгджзйклмнпрстфхцчшщ";
const SIBILANTS: &str = "жчшщ";
const NON_SIBILANTS: &str = "бвгдзклмнпрстфхц";
const ALWAYS_SOFT: &str = "ьюяєї";
pub(crate) const LABIALS: &str = "мвпбф";

const BUILD: &str = "11071222";
const CASE_LABELS: [&str; CASE_COUNT] =
    ["Називний", "Родовий", "Давальний", "Знахідний", "Орудний", "Місцевий", "Кличний"];

/// Alphabet classes of a Ukrainian letter.
pub(crate) fn letter_class(letter: char) -> LetterClass {
    let mut class = LetterClass::empty();
    for (letters, flag) in [
        (VOWELS, LetterClass::VOWEL),
        (CONSONANTS, LetterClass::CONSONANT),
        (SIBILANTS, LetterClass::SIBILANT),
        (NON_SIBILANTS, LetterClass::NON_SIBILANT),
        (ALWAYS_SOFT, LetterClass::ALWAYS_SOFT),
        (LABIALS, LetterClass::LABIAL),
    ] {
        if letters.contains(letter) {
            class |= flag;
        }
    }
    class
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ukrainian;

impl LanguageRules for Ukrainian {
    fn language(&self) -> Language {
        Language::Ukrainian
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
        letter_class(letter)
    }

    fn detect_role(&self, word: &WordRecord) -> RoleScores {
        detect::role_scores(word.value())
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
