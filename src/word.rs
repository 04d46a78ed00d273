//! Name-part tokens and the collection that holds them for one query.

use crate::{Case, Gender, GenderProbability, Role, RuleId};
use once_cell::sync::Lazy;

/// Which letters of the original word were upper-case.
///
/// Built once from the raw token and reapplied to every declined form, so
/// `ИВАНОВ` declines to `ИВАНОВА` and `Иванов` to `Иванова`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapitalizationMask {
    upper: Vec<bool>,
    all_upper: bool,
}

impl CapitalizationMask {
    /// Any non-letter (a hyphen, an apostrophe) clears the all-upper flag, so
    /// `ПЕТРОВ-ВОДКИН` keeps its bitmap and longer endings stay lower-case.
    pub fn of(word: &str) -> Self {
        let upper: Vec<bool> = word.chars().map(|c| !c.to_lowercase().eq(std::iter::once(c))).collect();
        let all_upper = upper.iter().all(|&u| u);
        Self { upper, all_upper }
    }

    /// Number of letters the mask covers.
    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    pub fn is_all_upper(&self) -> bool {
        self.all_upper
    }

    pub fn is_upper_at(&self, index: usize) -> bool {
        self.upper.get(index).copied().unwrap_or(false)
    }

    /// Re-case a lower-case form. Letters past the end of the mask (endings
    /// longer than the original word) stay as they are.
    pub fn apply(&self, form: &str) -> String {
        if self.all_upper {
            return form.to_uppercase();
        }

        let mut out = String::with_capacity(form.len());
        for (idx, c) in form.chars().enumerate() {
            if self.is_upper_at(idx) {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// One word of a name together with everything the engine learned about it.
#[derive(Debug, Clone)]
pub struct WordRecord {
    raw: String,
    value: String,
    mask: CapitalizationMask,
    pub(crate) role: Role,
    pub(crate) gender_probability: GenderProbability,
    pub(crate) gender: Gender,
    pub(crate) forms: Option<Vec<String>>,
    pub(crate) rule: RuleId,
    pub(crate) position: usize,
}

impl WordRecord {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            value: raw.to_lowercase(),
            mask: CapitalizationMask::of(raw),
            role: Role::Undetermined,
            gender_probability: GenderProbability::default(),
            gender: Gender::Unknown,
            forms: None,
            rule: RuleId::Pending,
            position: 1,
        }
    }

    pub(crate) fn with_role(raw: &str, role: Role) -> Self {
        Self { role, ..Self::new(raw) }
    }

    pub(crate) fn with_position(raw: &str, position: usize) -> Self {
        Self { position, ..Self::new(raw) }
    }

    /// The word as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lower-cased working form the rules operate on.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn mask(&self) -> &CapitalizationMask {
        &self.mask
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn gender_probability(&self) -> GenderProbability {
        self.gender_probability
    }

    pub fn rule(&self) -> RuleId {
        self.rule
    }

    /// 1-based position among the words of a split full name.
    pub fn position(&self) -> usize {
        self.position
    }

    /// All declined forms, `None` until declension has run (or for the
    /// placeholder returned for an absent role).
    pub fn forms(&self) -> Option<&[String]> {
        self.forms.as_deref()
    }

    /// One declined form, empty when not available.
    pub fn form(&self, case: Case) -> &str {
        self.forms.as_ref().and_then(|f| f.get(case.index())).map(String::as_str).unwrap_or("")
    }

    pub fn is_gender_resolved(&self) -> bool {
        self.gender != Gender::Unknown
    }

    /// Store lower-case forms, restoring the original capitalization.
    pub(crate) fn set_forms(&mut self, forms: Vec<String>, rule: RuleId) {
        self.forms = Some(forms.iter().map(|f| self.mask.apply(f)).collect());
        self.rule = rule;
    }
}

static PLACEHOLDER: Lazy<WordRecord> = Lazy::new(|| WordRecord::new(""));

/// Ordered words of the current query.
#[derive(Debug, Clone, Default)]
pub struct WordCollection {
    words: Vec<WordRecord>,
}

impl WordCollection {
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn push(&mut self, word: WordRecord) {
        self.words.push(word);
    }

    pub fn get(&self, index: usize) -> Option<&WordRecord> {
        self.words.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordRecord> {
        self.words.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, WordRecord> {
        self.words.iter_mut()
    }

    /// First word with `role`, or an empty placeholder without forms.
    pub fn by_role(&self, role: Role) -> &WordRecord {
        self.words.iter().find(|w| w.role == role).unwrap_or(&*PLACEHOLDER)
    }

    pub fn contains_role(&self, role: Role) -> bool {
        self.words.iter().any(|w| w.role == role)
    }
}

impl<'a> IntoIterator for &'a WordCollection {
    type Item = &'a WordRecord;
    type IntoIter = std::slice::Iter<'a, WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_records_title_case() {
        let mask = CapitalizationMask::of("Иванов");
        assert_eq!(mask.len(), 6);
        assert!(mask.is_upper_at(0));
        assert!(!mask.is_upper_at(1));
        assert!(!mask.is_all_upper());
        assert_eq!(mask.apply("иванова"), "Иванова");
    }

    #[test]
    fn mask_upper_cases_whole_word() {
        let mask = CapitalizationMask::of("ПЕТРОВ");
        assert!(mask.is_all_upper());
        assert_eq!(mask.apply("петровым"), "ПЕТРОВЫМ");
    }

    #[test]
    fn mask_leaves_letters_past_its_length() {
        let mask = CapitalizationMask::of("иВ");
        assert_eq!(mask.apply("ивана"), "иВана");
    }

    #[test]
    fn mask_with_hyphen_is_not_all_upper() {
        let mask = CapitalizationMask::of("ПЕТРОВ-ВОДКИН");
        assert!(!mask.is_all_upper());
        assert!(!mask.is_upper_at(6));
        assert_eq!(mask.apply("петров-водкина"), "ПЕТРОВ-ВОДКИНа");
    }

    #[test]
    fn record_lowercases_working_value() {
        let word = WordRecord::new("ОЛЬГА");
        assert_eq!(word.raw(), "ОЛЬГА");
        assert_eq!(word.value(), "ольга");
        assert_eq!(word.role(), Role::Undetermined);
        assert_eq!(word.gender(), Gender::Unknown);
        assert_eq!(word.rule(), RuleId::Pending);
        assert!(word.forms().is_none());
        assert_eq!(word.form(Case::Dative), "");
    }

    #[test]
    fn set_forms_restores_mask() {
        let mut word = WordRecord::new("Лев");
        word.set_forms(vec!["лев".into(), "льва".into()], RuleId::Matched(202));
        assert_eq!(word.forms().unwrap(), &["Лев".to_string(), "Льва".to_string()]);
        assert_eq!(word.form(Case::Genitive), "Льва");
        assert_eq!(word.form(Case::Vocative), "");
    }

    #[test]
    fn by_role_returns_first_match_or_placeholder() {
        let mut words = WordCollection::new();
        words.push(WordRecord::with_role("Иван", Role::GivenName));
        words.push(WordRecord::with_role("Пётр", Role::GivenName));

        assert_eq!(words.by_role(Role::GivenName).raw(), "Иван");

        let missing = words.by_role(Role::Patronymic);
        assert_eq!(missing.raw(), "");
        assert!(missing.forms().is_none());
        assert!(!words.contains_role(Role::Patronymic));
    }
}
