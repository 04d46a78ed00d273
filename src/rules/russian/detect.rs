//! Russian role and gender heuristics.
//!
//! Scores are hand-tuned weights: each matching suffix pattern adds a fixed
//! amount to one of the candidates. Exception lists push well-known names far
//! above any suffix evidence.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{CONSONANTS, VOWELS};

use crate::GenderProbability;
use crate::language::RoleScores;
use crate::rules::helpers::{char_len, in_letters, in_list, last, last_from};

const LETTERS: &str = "аеёиоуыэюябвгджзйклмнпрстфхцчшщ";
const CONSONANTS_SOFT: &str = "бвгджзйклмнпрстфхцчшщь";

/// For each second-to-last letter, the last letters that do NOT hint at a
/// family name.
static SECOND_LETTER_EXCLUDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("а", "взйкмнпрстфя"),
        ("б", "а"),
        ("в", "аь"),
        ("г", "а"),
        ("д", "ар"),
        ("е", "бвгдйлмня"),
        ("ё", "бвгдйлмня"),
        ("ж", ""),
        ("з", "а"),
        ("и", "гдйклмнопрсфя"),
        ("й", "ля"),
        ("к", "аст"),
        ("л", "аилоья"),
        ("м", "аип"),
        ("н", "ат"),
        ("о", "вдлнпртя"),
        ("п", "п"),
        ("р", "адикпть"),
        ("с", "атуя"),
        ("т", "аор"),
        ("у", "дмр"),
        ("ф", "аь"),
        ("х", "а"),
        ("ц", "а"),
        ("ч", ""),
        ("ш", "а"),
        ("щ", ""),
        ("ъ", ""),
        ("ы", "дн"),
        ("ь", "я"),
        ("э", ""),
        ("ю", ""),
        ("я", "нс"),
    ])
});

const GIVEN_NAME_EXCEPTIONS: &[&str] =
    &["лев", "яков", "маша", "ольга", "еремей", "исак", "исаак", "ева", "ирина", "элькин", "мерлин"];

const SOFT_SIGN_GIVEN_NAMES: &[&str] = &["лазарь", "игорь", "любовь"];

const INA_GIVEN_NAMES: &[&str] = &[
    "мальвина",
    "антонина",
    "альбина",
    "агриппина",
    "фаина",
    "карина",
    "марина",
    "валентина",
    "калина",
    "аделина",
    "алина",
    "ангелина",
    "галина",
    "каролина",
    "павлина",
    "полина",
    "элина",
    "мина",
    "нина",
];

const FAMILY_ENDINGS_2: &[&str] = &[
    "ов", "ин", "ев", "ёв", "ый", "ын", "ой", "ук", "як", "ца", "ун", "ок", "ая", "га", "ёк", "ив", "ус", "ак", "яр",
    "уз", "ах", "ай",
];

const FAMILY_ENDINGS_3: &[&str] = &[
    "ова", "ева", "ёва", "ына", "шен", "мей", "вка", "шир", "бан", "чий", "кий", "бей", "чан", "ган", "ким", "кан",
    "мар",
];

/// Score a lower-cased word. `position` is its 1-based place in the full
/// name; a patronymic is never the first word.
pub fn role_scores(word: &str, position: usize) -> RoleScores {
    let mut scores = RoleScores::default();
    let last1 = last(word, 1);
    let last2 = last(word, 2);
    let last3 = last(word, 3);
    let before_last = last_from(word, 2, 1);

    if position > 1 && in_list(last3, &["вна", "чна", "вич", "ьич"]) {
        scores.patronymic += 3.0;
    }

    if last2 == "ша" {
        scores.given += 0.5;
    }

    // Letters a given name never ends with.
    if in_letters(last1, "еёжхцочшщъыэю") {
        scores.family += 0.3;
    }

    if in_letters(before_last, LETTERS) {
        let excluded = SECOND_LETTER_EXCLUDES.get(before_last).copied().unwrap_or("");
        if !in_letters(last1, excluded) {
            scores.family += 0.4;
        }
    }

    // Diminutives such as Аня, Галя.
    if last1 == "я" && in_letters(last_from(word, 3, 1), VOWELS) {
        scores.given += 0.5;
    }

    if in_letters(before_last, "жчщъэю") {
        scores.family += 0.3;
    }

    if last1 == "ь" {
        if last_from(word, 3, 2) == "ел" {
            // Нинель, Адель, Асель
            scores.given += 0.7;
        } else if in_list(word, SOFT_SIGN_GIVEN_NAMES) {
            scores.given += 10.0;
        } else {
            scores.family += 0.3;
        }
    } else if in_letters(last1, CONSONANTS_SOFT) && in_letters(before_last, CONSONANTS_SOFT) {
        if !in_list(last2, &["др", "кт", "лл", "пп", "рд", "рк", "рп", "рт", "тр"]) {
            scores.family += 0.25;
        }
    }

    if last3 == "тин" && in_letters(last_from(word, 4, 1), "нст") {
        scores.given += 0.5;
    }

    if in_list(word, GIVEN_NAME_EXCEPTIONS) {
        scores.given += 10.0;
    }

    // Family names on -ли, except Натали and similar.
    if last2 == "ли" && last_from(word, 3, 1) != "а" {
        scores.family += 0.4;
    }

    // Family names on -ян, except Касьян, Куприян, Ян.
    if last2 == "ян" && char_len(word) > 2 && !in_letters(last_from(word, 3, 1), "ьи") {
        scores.family += 0.4;
    }

    if last2 == "ур" && !in_list(word, &["артур", "тимур"]) {
        scores.family += 0.4;
    }

    // Diminutives on -ик.
    if last2 == "ик" {
        if in_letters(last_from(word, 3, 1), "лшхд") {
            scores.given += 0.3;
        } else {
            scores.family += 0.4;
        }
    }

    if last3 == "ина" {
        if in_list(last(word, 7), &["атерина", "ристина"]) || in_list(word, INA_GIVEN_NAMES) {
            scores.given += 10.0;
        } else {
            scores.family += 0.4;
        }
    }

    // Николай
    if last(word, 4) == "олай" {
        scores.given += 0.6;
    }

    if in_list(last2, FAMILY_ENDINGS_2) {
        scores.family += 0.4;
    }

    if in_list(last3, FAMILY_ENDINGS_3) {
        scores.family += 0.4;
    }

    if last(word, 4) == "шена" {
        scores.family += 0.4;
    }

    scores
}

pub fn gender_by_given_name(word: &str) -> GenderProbability {
    let mut prob = GenderProbability::default();
    let last1 = last(word, 1);
    let last2 = last(word, 2);
    let last3 = last(word, 3);

    if last1 == "й" {
        prob.masculine += 0.9;
    }

    if in_list(last2, &["он", "ов", "ав", "ам", "ол", "ан", "рд", "мп"]) {
        prob.masculine += 0.3;
    }

    if in_letters(last1, CONSONANTS) {
        prob.masculine += 0.01;
    }

    if last1 == "ь" {
        prob.masculine += 0.02;
    }

    if in_list(last2, &["вь", "фь", "ль"]) {
        prob.feminine += 0.1;
    }

    if last2 == "ла" {
        prob.feminine += 0.04;
    }

    if in_list(last2, &["то", "ма"]) {
        prob.masculine += 0.01;
    }

    if in_list(last3, &["лья", "вва", "ока", "ука", "ита"]) {
        prob.masculine += 0.2;
    }

    if last3 == "има" {
        prob.feminine += 0.15;
    }

    if in_list(last3, &["лия", "ния", "сия", "дра", "лла", "кла", "опа"]) {
        prob.feminine += 0.5;
    }

    if in_list(last(word, 4), &["льда", "фира", "нина", "лита", "алья"]) {
        prob.feminine += 0.5;
    }

    prob
}

pub fn gender_by_family_name(word: &str) -> GenderProbability {
    let mut prob = GenderProbability::default();

    if in_list(last(word, 2), &["ов", "ин", "ев", "ий", "ёв", "ый", "ын", "ой"]) {
        prob.masculine += 0.4;
    }

    if in_list(last(word, 3), &["ова", "ина", "ева", "ёва", "ына", "мин"]) {
        prob.feminine += 0.4;
    }

    if last(word, 2) == "ая" {
        prob.feminine += 0.4;
    }

    prob
}

/// Patronymics are near-certain: -ич is male, -на is female.
pub fn gender_by_patronymic(word: &str) -> GenderProbability {
    match last(word, 2) {
        "ич" => GenderProbability::new(10.0, 0.0),
        "на" => GenderProbability::new(0.0, 12.0),
        _ => GenderProbability::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn classic_full_name_parts() {
        assert_eq!(role_scores("иванов", 1).winner(), Role::FamilyName);
        assert_eq!(role_scores("иван", 2).winner(), Role::GivenName);
        assert_eq!(role_scores("иванович", 3).winner(), Role::Patronymic);
    }

    #[test]
    fn patronymic_needs_a_preceding_word() {
        assert_ne!(role_scores("иванович", 1).winner(), Role::Patronymic);
    }

    #[test]
    fn exceptions_override_suffixes() {
        assert_eq!(role_scores("ольга", 1).winner(), Role::GivenName);
        assert_eq!(role_scores("игорь", 2).winner(), Role::GivenName);
        assert_eq!(role_scores("екатерина", 2).winner(), Role::GivenName);
        assert_eq!(role_scores("марина", 2).winner(), Role::GivenName);
    }

    #[test]
    fn family_name_suffixes() {
        assert_eq!(role_scores("смирнова", 1).winner(), Role::FamilyName);
        assert_eq!(role_scores("пушкина", 1).winner(), Role::FamilyName);
        assert_eq!(role_scores("шевчук", 1).winner(), Role::FamilyName);
    }

    #[test]
    fn given_name_gender() {
        assert_eq!(gender_by_given_name("андрей").decide(), crate::Gender::Male);
        assert_eq!(gender_by_given_name("наталия").decide(), crate::Gender::Female);
        assert_eq!(gender_by_given_name("ольга"), GenderProbability::default());
    }

    #[test]
    fn family_and_patronymic_gender() {
        assert_eq!(gender_by_family_name("петров").masculine, 0.4);
        assert_eq!(gender_by_family_name("петрова").feminine, 0.4);
        assert_eq!(gender_by_patronymic("сергеевич"), GenderProbability::new(10.0, 0.0));
        assert_eq!(gender_by_patronymic("сергеевна"), GenderProbability::new(0.0, 12.0));
        assert_eq!(gender_by_patronymic("оглы"), GenderProbability::default());
    }
}
