use crate::engine::{self, PrepareMetrics, Stage};
use crate::{Case, Error, Gender, Language, LanguageRules, Role, WordCollection, WordRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Library version, reported alongside the rule-set build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Declension engine for one language.
///
/// Words are added either one role at a time (`set_given_name`, ...) or as a
/// whole name (`load_full_name`), then read back in any case. Preparation
/// (role detection, gender, declension) runs lazily on the first read and is
/// reused until the words change.
///
/// # Example
/// ```
/// use namecase::{Case, NameCase};
///
/// let mut nc = NameCase::ukrainian();
/// nc.set_full_name("Шевченко", "Тарас", "Григорович");
/// assert_eq!(nc.family_case(Case::Vocative), "Шевченче");
/// assert_eq!(nc.given_case(Case::Dative), "Тарасові");
/// ```
pub struct NameCase {
    rules: &'static dyn LanguageRules,
    words: WordCollection,
    stage: Stage,
}

impl fmt::Debug for NameCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameCase")
            .field("language", &self.rules.language())
            .field("words", &self.words)
            .field("stage", &self.stage)
            .finish()
    }
}

impl Default for NameCase {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl NameCase {
    pub fn new(language: Language) -> Self {
        Self { rules: language.rules(), words: WordCollection::new(), stage: Stage::Empty }
    }

    pub fn russian() -> Self {
        Self::new(Language::Russian)
    }

    pub fn ukrainian() -> Self {
        Self::new(Language::Ukrainian)
    }

    pub fn language(&self) -> Language {
        self.rules.language()
    }

    /// Number of cases every form list has (6 for Russian, 7 for Ukrainian).
    pub fn case_count(&self) -> usize {
        self.rules.case_count()
    }

    pub fn case_labels(&self) -> &'static [&'static str] {
        self.rules.case_labels()
    }

    /// Version of the active rule set.
    pub fn language_build(&self) -> &'static str {
        self.rules.build()
    }

    // --- Mutators -----------------------------------------------------------

    /// Drop every word.
    pub fn full_reset(&mut self) -> &mut Self {
        self.words = WordCollection::new();
        self.stage = Stage::Empty;
        self
    }

    fn push_role(&mut self, text: &str, role: Role) -> &mut Self {
        let text = text.trim();
        if !text.is_empty() {
            self.words.push(WordRecord::with_role(text, role));
            self.stage = Stage::Empty;
        }
        self
    }

    /// Add a given name. Blank input is ignored.
    pub fn set_given_name(&mut self, text: &str) -> &mut Self {
        self.push_role(text, Role::GivenName)
    }

    pub fn set_family_name(&mut self, text: &str) -> &mut Self {
        self.push_role(text, Role::FamilyName)
    }

    /// Alias of [`NameCase::set_family_name`].
    pub fn set_last_name(&mut self, text: &str) -> &mut Self {
        self.set_family_name(text)
    }

    pub fn set_patronymic_name(&mut self, text: &str) -> &mut Self {
        self.push_role(text, Role::Patronymic)
    }

    /// Force `gender` on every word currently held. Forms are recomputed on
    /// the next read.
    pub fn set_gender(&mut self, gender: Gender) -> &mut Self {
        for word in self.words.iter_mut() {
            word.gender = gender;
        }
        self.stage = Stage::Empty;
        self
    }

    /// Add all three parts. The given name is stored first.
    pub fn set_full_name(&mut self, family: &str, given: &str, patronymic: &str) -> &mut Self {
        self.set_given_name(given);
        self.set_family_name(family);
        self.set_patronymic_name(patronymic)
    }

    /// Replace the current words with the words of `text`, roles to be
    /// detected. Whitespace runs count as one separator.
    pub fn load_full_name(&mut self, text: &str) -> &mut Self {
        self.full_reset();
        let normalized = regex!(r"\s+").replace_all(text.trim(), " ");
        if !normalized.is_empty() {
            for (i, part) in normalized.split(' ').enumerate() {
                self.words.push(WordRecord::with_position(part, i + 1));
            }
        }
        self
    }

    // --- Accessors ----------------------------------------------------------

    fn prepared(&mut self) -> &WordCollection {
        engine::prepare(self.rules, &mut self.words, &mut self.stage, Stage::Declined);
        &self.words
    }

    /// Prepare the current words, reporting how long each step took.
    pub fn prepare_with_metrics(&mut self) -> PrepareMetrics {
        engine::prepare_with_metrics(self.rules, &mut self.words, &mut self.stage)
    }

    /// Gender of the first word, `Unknown` when there are no words.
    pub fn detect_gender(&mut self) -> Gender {
        engine::prepare(self.rules, &mut self.words, &mut self.stage, Stage::Classified);
        self.words.get(0).map(WordRecord::gender).unwrap_or_default()
    }

    fn cases_of(&mut self, role: Role) -> Option<Vec<String>> {
        self.prepared().by_role(role).forms().map(<[String]>::to_vec)
    }

    fn case_of(&mut self, role: Role, case: Case) -> String {
        self.prepared().by_role(role).form(case).to_string()
    }

    /// All forms of the given name, `None` if no word has that role.
    pub fn given_cases(&mut self) -> Option<Vec<String>> {
        self.cases_of(Role::GivenName)
    }

    pub fn family_cases(&mut self) -> Option<Vec<String>> {
        self.cases_of(Role::FamilyName)
    }

    pub fn patronymic_cases(&mut self) -> Option<Vec<String>> {
        self.cases_of(Role::Patronymic)
    }

    /// One form of the given name; empty if absent.
    pub fn given_case(&mut self, case: Case) -> String {
        self.case_of(Role::GivenName, case)
    }

    pub fn family_case(&mut self, case: Case) -> String {
        self.case_of(Role::FamilyName, case)
    }

    pub fn patronymic_case(&mut self, case: Case) -> String {
        self.case_of(Role::Patronymic, case)
    }

    /// Every word in `case`, joined by single spaces in input order.
    pub fn full_case(&mut self, case: Case) -> String {
        let joined = self.prepared().iter().map(|w| w.form(case)).collect::<Vec<_>>().join(" ");
        joined.trim_end().to_string()
    }

    /// [`NameCase::full_case`] for every case of the language.
    pub fn full_cases(&mut self) -> Vec<String> {
        let count = self.case_count();
        Case::ALL[..count].iter().map(|&case| self.full_case(case)).collect()
    }

    /// The words as prepared so far.
    pub fn word_collection(&self) -> &WordCollection {
        &self.words
    }

    // --- One-shot queries ---------------------------------------------------

    pub fn query(&mut self, full_name: &str) -> Vec<String> {
        self.query_with(full_name, Gender::Unknown)
    }

    /// Decline a whole name. `Gender::Unknown` means "detect".
    pub fn query_with(&mut self, full_name: &str, gender: Gender) -> Vec<String> {
        self.load_with_gender(full_name, gender);
        self.full_cases()
    }

    pub fn query_case(&mut self, full_name: &str, case: Case, gender: Gender) -> String {
        self.load_with_gender(full_name, gender);
        self.full_case(case)
    }

    fn load_with_gender(&mut self, full_name: &str, gender: Gender) {
        self.load_full_name(full_name);
        if gender != Gender::Unknown {
            self.set_gender(gender);
        }
    }

    fn load_part(&mut self, role: Role, text: &str, gender: Gender) {
        self.full_reset();
        self.push_role(text, role);
        if gender != Gender::Unknown {
            self.set_gender(gender);
        }
    }

    /// Decline a single word with a known role.
    ///
    /// With `Role::Undetermined` the role is detected like any word of a full
    /// name. Blank input gives `None`.
    pub fn query_part(&mut self, role: Role, text: &str, gender: Gender) -> Option<Vec<String>> {
        self.load_part(role, text, gender);
        self.prepared().get(0).and_then(|w| w.forms()).map(<[String]>::to_vec)
    }

    pub fn query_part_case(&mut self, role: Role, text: &str, case: Case, gender: Gender) -> String {
        self.load_part(role, text, gender);
        self.prepared().get(0).map(|w| w.form(case).to_string()).unwrap_or_default()
    }

    pub fn query_given_name(&mut self, text: &str) -> Option<Vec<String>> {
        self.query_part(Role::GivenName, text, Gender::Unknown)
    }

    pub fn query_family_name(&mut self, text: &str) -> Option<Vec<String>> {
        self.query_part(Role::FamilyName, text, Gender::Unknown)
    }

    pub fn query_patronymic_name(&mut self, text: &str) -> Option<Vec<String>> {
        self.query_part(Role::Patronymic, text, Gender::Unknown)
    }
}

/// Serializable answer for a full-name request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclensionResponse {
    pub version: String,
    #[serde(rename = "languageBuild")]
    pub language_build: String,
    pub cases: Vec<String>,
}

impl DeclensionResponse {
    /// Decline `text` with auto-detected gender. Blank input is rejected.
    pub fn for_full_name(language: Language, text: &str) -> Result<Self, Error> {
        Self::for_full_name_with(language, text, Gender::Unknown)
    }

    pub fn for_full_name_with(language: Language, text: &str, gender: Gender) -> Result<Self, Error> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        let cases = NameCase::new(language).query_with(text, gender);
        Ok(Self { version: VERSION.to_string(), language_build: language.build().to_string(), cases })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleId;

    #[test]
    fn full_name_is_split_and_classified() {
        let mut nc = NameCase::russian();
        assert_eq!(nc.query_case("Иванов  Иван\tИванович ", Case::Genitive, Gender::Unknown), "Иванова Ивана Ивановича");

        let words = nc.word_collection();
        let roles: Vec<Role> = words.iter().map(WordRecord::role).collect();
        assert_eq!(roles, [Role::FamilyName, Role::GivenName, Role::Patronymic]);
        let positions: Vec<usize> = words.iter().map(WordRecord::position).collect();
        assert_eq!(positions, [1, 2, 3]);
        assert!(words.iter().all(|w| w.gender() == Gender::Male));
    }

    #[test]
    fn reads_are_idempotent() {
        let mut nc = NameCase::russian();
        nc.set_full_name("Пушкин", "Александр", "Сергеевич");
        let first = nc.given_cases();
        assert_eq!(first, nc.given_cases());
        assert_eq!(nc.family_case(Case::Instrumental), "Пушкиным");
        assert_eq!(nc.family_case(Case::Instrumental), "Пушкиным");
        assert_eq!(nc.patronymic_case(Case::Genitive), "Сергеевича");
        assert_eq!(nc.detect_gender(), Gender::Male);
    }

    #[test]
    fn form_count_matches_language() {
        let mut ru = NameCase::russian();
        assert_eq!(ru.query("Иванов Иван").len(), 6);
        assert!(ru.word_collection().iter().all(|w| w.forms().map(<[String]>::len) == Some(6)));

        let mut uk = NameCase::ukrainian();
        assert_eq!(uk.query("Шевченко Тарас").len(), 7);
        assert_eq!(uk.query_case("Шевченко Тарас Григорович", Case::Genitive, Gender::Unknown), "Шевченка Тараса Григоровича");
    }

    #[test]
    fn nominative_keeps_the_input() {
        let mut nc = NameCase::russian();
        let cases = nc.query("иВаНоВ Smith");
        assert_eq!(cases[0], "иВаНоВ Smith");
    }

    #[test]
    fn capitalization_survives_declension() {
        let mut nc = NameCase::russian();
        assert_eq!(nc.query_case("ИВАНОВ ИВАН", Case::Genitive, Gender::Unknown), "ИВАНОВА ИВАНА");
        assert_eq!(nc.query_case("иванов иван", Case::Genitive, Gender::Unknown), "иванова ивана");
        assert_eq!(nc.query_case("Иванов Иван", Case::Dative, Gender::Unknown), "Иванову Ивану");
    }

    #[test]
    fn unmatched_word_repeats_nominative() {
        let mut nc = NameCase::russian();
        let forms = nc.query_given_name("Smith").unwrap();
        assert!(forms.iter().all(|f| f == "Smith"));
        assert_eq!(nc.word_collection().get(0).map(WordRecord::rule), Some(RuleId::Unchanged));
    }

    #[test]
    fn gender_override_beats_detection() {
        let mut nc = NameCase::russian();
        assert_eq!(nc.query_part_case(Role::GivenName, "Саша", Case::Instrumental, Gender::Unknown), "Сашей");
        assert_eq!(nc.query_part_case(Role::GivenName, "Саша", Case::Instrumental, Gender::Male), "Сашой");
    }

    #[test]
    fn set_gender_invalidates_prepared_forms() {
        let mut nc = NameCase::russian();
        nc.set_given_name("Саша");
        assert_eq!(nc.given_case(Case::Instrumental), "Сашей");
        nc.set_gender(Gender::Male);
        assert_eq!(nc.given_case(Case::Instrumental), "Сашой");
    }

    #[test]
    fn single_part_queries() {
        let mut nc = NameCase::russian();
        assert_eq!(nc.query_family_name("Иванова").unwrap()[2], "Ивановой");
        assert_eq!(nc.query_given_name("Ольга").unwrap()[2], "Ольге");
        assert_eq!(nc.query_patronymic_name("Ильич").unwrap()[4], "Ильичом");

        let mut uk = NameCase::ukrainian();
        assert_eq!(uk.query_given_name("Ольга").unwrap()[2], "Ользі");
    }

    #[test]
    fn blank_and_absent_parts() {
        let mut nc = NameCase::russian();
        assert_eq!(nc.query("   "), vec![String::new(); 6]);
        assert_eq!(nc.detect_gender(), Gender::Unknown);
        assert_eq!(nc.query_given_name("  "), None);

        nc.full_reset().set_given_name("Иван").set_patronymic_name(" ");
        assert_eq!(nc.word_collection().len(), 1);
        assert_eq!(nc.patronymic_cases(), None);
        assert_eq!(nc.patronymic_case(Case::Genitive), "");
        assert_eq!(nc.given_case(Case::Vocative), "");
    }

    #[test]
    fn response_serializes_language_build() {
        let response = DeclensionResponse::for_full_name(Language::Russian, "Иванов Иван").unwrap();
        assert_eq!(response.cases.len(), 6);
        assert_eq!(response.cases[1], "Иванова Ивана");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["languageBuild"], "20180918-1");
        assert_eq!(json["version"], VERSION);

        assert_eq!(DeclensionResponse::for_full_name(Language::Ukrainian, " \t"), Err(Error::EmptyInput));
    }
}
