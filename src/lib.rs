//! Rule-based declension of Russian and Ukrainian personal names.
//!
//! Given a full name (or its parts), the engine works out which word is the
//! family name, the given name and the patronymic, infers the person's
//! gender from spelling, and produces every grammatical case while keeping
//! the original capitalization.
//!
//! ```
//! use namecase::{Case, Gender, NameCase};
//!
//! let mut nc = NameCase::russian();
//! assert_eq!(nc.query_case("Иванов Иван Иванович", Case::Genitive, Gender::Unknown), "Иванова Ивана Ивановича");
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod errors;
mod language;
mod rules;
mod word;

pub use api::{DeclensionResponse, NameCase, VERSION};
pub use engine::PrepareMetrics;
pub use errors::Error;
pub use language::{Language, LanguageRules, LetterClass};
pub use word::{CapitalizationMask, WordCollection, WordRecord};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

// --- Core types -------------------------------------------------------------

/// Grammatical gender of the person a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    /// Not decided yet. Passed to queries it means "detect automatically".
    #[default]
    Unknown,
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Unknown => "unknown",
            Gender::Male => "male",
            Gender::Female => "female",
        })
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "auto" | "unknown" => Ok(Gender::Unknown),
            "m" | "male" | "man" => Ok(Gender::Male),
            "f" | "w" | "female" | "woman" => Ok(Gender::Female),
            other => Err(Error::UnknownGender(other.to_string())),
        }
    }
}

/// Which part of a full name a word is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Undetermined,
    GivenName,
    FamilyName,
    Patronymic,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Undetermined => "undetermined",
            Role::GivenName => "given name",
            Role::FamilyName => "family name",
            Role::Patronymic => "patronymic",
        })
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "given" | "name" | "first" => Ok(Role::GivenName),
            "family" | "surname" | "last" => Ok(Role::FamilyName),
            "patronymic" | "patr" | "middle" => Ok(Role::Patronymic),
            other => Err(Error::UnknownRole(other.to_string())),
        }
    }
}

/// Grammatical case. `Vocative` only exists in Ukrainian; Russian rule sets
/// answer it with an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    /// Russian prepositional, Ukrainian locative.
    Prepositional,
    Vocative,
}

impl Case {
    pub const ALL: [Case; 7] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
        Case::Vocative,
    ];

    /// Index of this case in a declined-forms array.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Case> {
        Self::ALL.get(index).copied()
    }
}

/// Accumulated, non-normalized evidence for each gender.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GenderProbability {
    pub masculine: f32,
    pub feminine: f32,
}

impl GenderProbability {
    pub const fn new(masculine: f32, feminine: f32) -> Self {
        Self { masculine, feminine }
    }

    /// Male only when masculine evidence is strictly greater; ties go to female.
    pub fn decide(&self) -> Gender {
        if self.masculine > self.feminine { Gender::Male } else { Gender::Female }
    }
}

impl Add for GenderProbability {
    type Output = GenderProbability;

    fn add(self, rhs: Self) -> Self::Output {
        GenderProbability { masculine: self.masculine + rhs.masculine, feminine: self.feminine + rhs.feminine }
    }
}

impl AddAssign for GenderProbability {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Which declension sub-rule produced a word's forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RuleId {
    /// Declension has not run for this word.
    #[default]
    Pending,
    /// Numbered sub-rule of the language's chain (e.g. 203, 604).
    Matched(u16),
    /// No rule matched; every case equals the nominative.
    Unchanged,
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleId::Pending => f.write_str("-"),
            RuleId::Matched(id) => write!(f, "{id}"),
            RuleId::Unchanged => f.write_str("unchanged"),
        }
    }
}
