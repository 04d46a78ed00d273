//! Language rule-set interface.
//!
//! Every supported language plugs into the engine through [`LanguageRules`].
//! The engine owns the pipeline (classify, resolve gender, decline, restore
//! capitalization); a rule set only answers per-word questions:
//!
//! ```text
//! detect_role(word)            -> RoleScores      (which part of the name?)
//! gender_probability(role, w)  -> GenderProbability
//! declension_chain(gender, r)  -> &[DeclensionRule] (tried in order)
//! ```
//!
//! Rule sets are stateless `'static` values, so one instance is shared by all
//! engines of that language.

use crate::rules::{russian::Russian, ukrainian::Ukrainian};
use crate::{Error, Gender, GenderProbability, Role, WordRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

bitflags::bitflags! {
    /// Alphabet classes a letter belongs to in a given language.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LetterClass: u8 {
        const VOWEL        = 1 << 0;
        const CONSONANT    = 1 << 1;
        /// Ukrainian шиплячі: ж ч ш щ.
        const SIBILANT     = 1 << 2;
        /// Ukrainian нешиплячі.
        const NON_SIBILANT = 1 << 3;
        /// Ukrainian letters that are always soft: ь ю я є ї.
        const ALWAYS_SOFT  = 1 << 4;
        /// Ukrainian губні: м в п б ф.
        const LABIAL       = 1 << 5;
    }
}

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Russian,
    Ukrainian,
}

static RUSSIAN: Russian = Russian;
static UKRAINIAN: Ukrainian = Ukrainian;

impl Language {
    /// The rule set implementing this language.
    pub fn rules(self) -> &'static dyn LanguageRules {
        match self {
            Language::Russian => &RUSSIAN,
            Language::Ukrainian => &UKRAINIAN,
        }
    }

    /// Version string of the language's rule tables.
    pub fn build(self) -> &'static str {
        self.rules().build()
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::Ukrainian => "uk",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "rus" | "russian" => Ok(Language::Russian),
            "uk" | "ua" | "ukr" | "ukrainian" => Ok(Language::Ukrainian),
            other => Err(Error::UnknownLanguage(other.to_string())),
        }
    }
}

/// Likelihood scores for each name part. Higher wins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoleScores {
    pub given: f32,
    pub family: f32,
    pub patronymic: f32,
}

impl RoleScores {
    /// Highest score wins; ties prefer given name, then family name.
    pub fn winner(&self) -> Role {
        let max = self.given.max(self.family).max(self.patronymic);
        if self.given == max {
            Role::GivenName
        } else if self.family == max {
            Role::FamilyName
        } else {
            Role::Patronymic
        }
    }
}

/// Result of a matching declension rule: lower-case forms for every case of
/// the language (index 0 is the nominative) and the sub-rule number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declension {
    pub forms: Vec<String>,
    pub rule: u16,
}

impl Declension {
    pub fn new(forms: Vec<String>, rule: u16) -> Self {
        Self { forms, rule }
    }
}

/// A numbered rule in a chain. `apply` receives the lower-cased word and
/// returns `None` when its condition does not hold.
#[derive(Clone, Copy)]
pub struct DeclensionRule {
    pub number: u16,
    pub apply: fn(&str) -> Option<Declension>,
}

impl fmt::Debug for DeclensionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclensionRule").field("number", &self.number).field("apply", &"<function>").finish()
    }
}

/// Capabilities a language must provide to the engine.
pub trait LanguageRules: Send + Sync {
    fn language(&self) -> Language;

    /// Number of grammatical cases, including the nominative.
    fn case_count(&self) -> usize;

    /// Version of the rule tables.
    fn build(&self) -> &'static str;

    /// Localized case names, one per case.
    fn case_labels(&self) -> &'static [&'static str];

    /// Alphabet classes of a single letter.
    fn letter_class(&self, letter: char) -> LetterClass;

    /// Score how likely `word` is a given name, family name or patronymic.
    fn detect_role(&self, word: &WordRecord) -> RoleScores;

    /// Gender evidence carried by `word`, read according to its role.
    fn gender_probability(&self, role: Role, word: &str) -> GenderProbability;

    /// Rules for (gender, role), tried in order until one matches.
    fn declension_chain(&self, gender: Gender, role: Role) -> &'static [DeclensionRule];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_parse() {
        assert_eq!("ru".parse::<Language>().unwrap(), Language::Russian);
        assert_eq!("UA".parse::<Language>().unwrap(), Language::Ukrainian);
        assert_eq!(" ukrainian ".parse::<Language>().unwrap(), Language::Ukrainian);
        assert_eq!("de".parse::<Language>(), Err(Error::UnknownLanguage("de".to_string())));
    }

    #[test]
    fn rule_sets_report_case_counts_and_builds() {
        assert_eq!(Language::Russian.rules().case_count(), 6);
        assert_eq!(Language::Ukrainian.rules().case_count(), 7);
        assert_eq!(Language::Russian.build(), "20180918-1");
        assert_eq!(Language::Ukrainian.build(), "11071222");
        assert_eq!(Language::Russian.rules().case_labels().len(), 6);
        assert_eq!(Language::Ukrainian.rules().case_labels().len(), 7);
    }

    #[test]
    fn role_ties_prefer_given_then_family() {
        assert_eq!(RoleScores::default().winner(), Role::GivenName);
        assert_eq!(RoleScores { given: 0.0, family: 0.4, patronymic: 0.4 }.winner(), Role::FamilyName);
        assert_eq!(RoleScores { given: 0.5, family: 0.5, patronymic: 0.0 }.winner(), Role::GivenName);
        assert_eq!(RoleScores { given: 0.0, family: 0.7, patronymic: 3.0 }.winner(), Role::Patronymic);
    }

    #[test]
    fn letter_classes_differ_per_language() {
        let ru = Language::Russian.rules();
        let uk = Language::Ukrainian.rules();
        assert!(ru.letter_class('ы').contains(LetterClass::VOWEL));
        assert!(uk.letter_class('ї').contains(LetterClass::VOWEL | LetterClass::ALWAYS_SOFT));
        assert!(uk.letter_class('ш').contains(LetterClass::CONSONANT | LetterClass::SIBILANT));
        assert!(uk.letter_class('в').contains(LetterClass::LABIAL | LetterClass::NON_SIBILANT));
        assert!(uk.letter_class('’').is_empty());
    }
}
