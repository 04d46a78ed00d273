//! Ukrainian declension rules.
//!
//! Forms are `[nominative, genitive, dative, accusative, instrumental,
//! locative, vocative]`. Sub-rule ids follow the Russian scheme: `N01`,
//! `N02`, ... for the branches of rule `N`.

use super::phonetics::{
    APOSTROPHE, DeclensionGroup, alternate_gkh, alternate_velar, declension_group, is_apostrophe, is_consonant,
    osnova,
};
use super::{LABIALS, VOWELS};
use crate::language::{Declension, DeclensionRule};
use crate::rules::helpers::{char_len, drop_last, in_letters, in_list, last, last_from, word_forms};
use crate::{Gender, Role};

fn forms<S: AsRef<str>>(word: &str, endings: &[S], trim: usize, rule: u16) -> Option<Declension> {
    forms_on(word, word, endings, trim, rule)
}

fn forms_on<S: AsRef<str>>(word: &str, base: &str, endings: &[S], trim: usize, rule: u16) -> Option<Declension> {
    Some(Declension::new(word_forms(word, base, endings, trim), rule))
}

/// Endings of first-declension nouns on -а, built around the letter before it.
fn endings_a(before_last: &str) -> [String; 6] {
    let alt = alternate_gkh(before_last);
    [
        format!("{before_last}и"),
        format!("{alt}і"),
        format!("{before_last}у"),
        format!("{before_last}ою"),
        format!("{alt}і"),
        format!("{before_last}о"),
    ]
}

/// Endings of first-declension nouns on a consonant plus -я.
fn endings_ya(before_last: &str) -> [String; 6] {
    let alt = alternate_gkh(before_last);
    [
        format!("{before_last}і"),
        format!("{alt}і"),
        format!("{before_last}ю"),
        format!("{before_last}ею"),
        format!("{alt}і"),
        format!("{before_last}е"),
    ]
}

const ENDINGS_VOWEL_YA: [&str; 6] = ["ї", "ї", "ю", "єю", "ї", "є"];

// --- Male -------------------------------------------------------------------

/// Masculine nouns on -а/-я (Микита, Ілля).
fn male_rule_1(word: &str) -> Option<Declension> {
    let before_last = last_from(word, 2, 1);
    match last(word, 1) {
        "а" => forms(word, &endings_a(before_last), 2, 101),
        "я" if before_last == "і" => forms(word, &ENDINGS_VOWEL_YA, 1, 102),
        "я" => forms(word, &endings_ya(before_last), 2, 103),
        _ => None,
    }
}

/// Names on -р, with і -> о inside the stem (Федір -> Федора).
fn male_rule_2(word: &str) -> Option<Declension> {
    if last(word, 1) != "р" {
        return None;
    }
    if in_list(word, &["ігор", "лазар"]) {
        return forms(word, &["я", "еві", "я", "ем", "еві", "е"], 0, 201);
    }
    let base = if last_from(word, 2, 1) == "і" {
        format!("{}о{}", drop_last(word, 2), last(word, 1))
    } else {
        word.to_string()
    };
    forms_on(word, &base, &["а", "ові", "а", "ом", "ові", "е"], 0, 202)
}

/// Second declension: words on a consonant, -о or -ь.
fn male_rule_3(word: &str) -> Option<Declension> {
    let last1 = last(word, 1);
    if !is_consonant(last1) && !in_letters(last1, "оь") {
        return None;
    }
    let last2 = last(word, 2);
    let before_last = last_from(word, 2, 1);
    let group = declension_group(word);
    let mut stem = osnova(word).to_string();
    let stem_last = last(&stem, 1).to_string();

    // Антін, Прокіп, Тиміш: і shows only in the nominative.
    if stem_last != "й"
        && char_len(&stem) >= 2
        && last_from(&stem, 2, 1) == "і"
        && !in_list(last(&stem, 4), &["світ", "цвіт"])
        && word != "гліб"
        && !in_list(last2, &["ік", "іч"])
    {
        stem = format!("{}о{}", drop_last(&stem, 2), stem_last);
    }

    // Орел -> Орла: е before the final consonant drops out.
    if stem.starts_with('о')
        && last_from(&stem, 2, 1) == "е"
        && !in_letters(&stem_last, "гк")
        && last2 != "сь"
        && !in_list(last2, &["ев", "єв"])
    {
        stem = format!("{}{stem_last}", drop_last(&stem, 2));
    }

    match group {
        DeclensionGroup::Hard => {
            let velar = alternate_velar(&stem_last);
            if last2 == "ок" && last(word, 3) != "оок" {
                forms(word, &["ка", "кові", "ка", "ком", "кові", "че"], 2, 301)
            } else if in_list(last2, &["ов", "ев", "єв"]) && !in_list(word, &["лев", "остромов"]) {
                // Russian family names: Петров -> Петровим
                let endings = [
                    format!("{stem_last}а"),
                    format!("{stem_last}у"),
                    format!("{stem_last}а"),
                    format!("{stem_last}им"),
                    format!("{stem_last}у"),
                    format!("{velar}е"),
                ];
                forms_on(word, &stem, &endings, 1, 302)
            } else if last2 == "ін" {
                forms(word, &["а", "у", "а", "ом", "у", "е"], 0, 303)
            } else {
                let endings = [
                    format!("{stem_last}а"),
                    format!("{stem_last}ові"),
                    format!("{stem_last}а"),
                    format!("{stem_last}ом"),
                    format!("{stem_last}ові"),
                    format!("{velar}е"),
                ];
                forms_on(word, &stem, &endings, 1, 304)
            }
        }
        DeclensionGroup::Mixed => forms_on(word, &stem, &["а", "еві", "а", "ем", "еві", "е"], 0, 305),
        DeclensionGroup::Soft => {
            if last2 == "ей" && in_letters(last_from(word, 3, 1), LABIALS) {
                // Соловей -> Солов’я
                let base = format!("{}{APOSTROPHE}", drop_last(word, 2));
                forms_on(word, &base, &["я", "єві", "я", "єм", "єві", "ю"], 0, 306)
            } else if last1 == "й" || before_last == "і" {
                forms(word, &["я", "єві", "я", "єм", "єві", "ю"], 1, 307)
            } else if word == "швець" {
                forms(word, &["евця", "евцеві", "евця", "евцем", "евцеві", "евцю"], 4, 308)
            } else if last(word, 3) == "ець" {
                forms(word, &["ця", "цеві", "ця", "цем", "цеві", "цю"], 3, 309)
            } else if in_list(last(word, 3), &["єць", "яць"]) {
                forms(word, &["йця", "йцеві", "йця", "йцем", "йцеві", "йцю"], 3, 310)
            } else {
                forms_on(word, &stem, &["я", "еві", "я", "ем", "еві", "ю"], 0, 311)
            }
        }
    }
}

/// Adjectival plural family names (Руді).
fn male_rule_4(word: &str) -> Option<Declension> {
    if last(word, 1) != "і" {
        return None;
    }
    forms(word, &["их", "им", "их", "ими", "их", "і"], 1, 4)
}

/// Adjectival family names on -ий/-ой.
fn male_rule_5(word: &str) -> Option<Declension> {
    if !in_list(last(word, 2), &["ий", "ой"]) {
        return None;
    }
    forms(word, &["ого", "ому", "ого", "им", "ому", "ий"], 2, 5)
}

fn male_patronymic(word: &str) -> Option<Declension> {
    if !in_list(last(word, 2), &["ич", "іч"]) {
        return None;
    }
    forms(word, &["а", "у", "а", "ем", "у", "у"], 0, 1)
}

// --- Female -----------------------------------------------------------------

/// First declension: -а/-я.
fn female_rule_1(word: &str) -> Option<Declension> {
    let before_last = last_from(word, 2, 1);

    if last(word, 4) == "ніга" {
        // -ніга declines as -нога
        let base = format!("{}о", drop_last(word, 3));
        return forms_on(word, &base, &["ги", "зі", "гу", "гою", "зі", "го"], 0, 101);
    }

    match last(word, 1) {
        "а" => forms(word, &endings_a(before_last), 2, 102),
        "я" if in_letters(before_last, VOWELS) || is_apostrophe(before_last) => {
            forms(word, &ENDINGS_VOWEL_YA, 1, 103)
        }
        "я" => forms(word, &endings_ya(before_last), 2, 104),
        _ => None,
    }
}

/// Third declension: feminine nouns on a consonant or -ь (Любов, Нінель).
fn female_rule_2(word: &str) -> Option<Declension> {
    let last1 = last(word, 1);
    if !is_consonant(last1) && last1 != "ь" {
        return None;
    }
    let stem = osnova(word);
    let stem_last = last(stem, 1);

    let apostrophe =
        if in_letters(stem_last, LABIALS) && in_letters(last_from(stem, 2, 1), VOWELS) { APOSTROPHE } else { "" };
    let duplicate = if in_letters(stem_last, "дтзсцлн") { stem_last } else { "" };
    let instrumental = format!("{duplicate}{apostrophe}ю");

    if last1 == "ь" {
        forms_on(word, stem, &["і", "і", "ь", instrumental.as_str(), "і", "е"], 0, 201)
    } else {
        forms_on(word, stem, &["і", "і", "", instrumental.as_str(), "і", "е"], 0, 202)
    }
}

/// Adjectival family names (Донська, Лесна).
fn female_rule_3(word: &str) -> Option<Declension> {
    let before_last = last_from(word, 2, 1);

    if last(word, 2) == "ая" {
        return forms(word, &["ої", "ій", "ую", "ою", "ій", "ая"], 2, 301);
    }

    if last(word, 1) == "а" && (in_letters(before_last, "чнв") || last_from(word, 3, 2) == "ьк") {
        let endings = [
            format!("{before_last}ої"),
            format!("{before_last}ій"),
            format!("{before_last}у"),
            format!("{before_last}ою"),
            format!("{before_last}ій"),
            format!("{before_last}о"),
        ];
        return forms(word, &endings, 2, 302);
    }

    None
}

fn female_patronymic(word: &str) -> Option<Declension> {
    if last(word, 3) != "вна" {
        return None;
    }
    forms(word, &["и", "і", "у", "ою", "і", "о"], 1, 1)
}

static MALE_GIVEN: &[DeclensionRule] = chain![1 => male_rule_1, 2 => male_rule_2, 3 => male_rule_3];
static MALE_FAMILY: &[DeclensionRule] =
    chain![5 => male_rule_5, 1 => male_rule_1, 2 => male_rule_2, 3 => male_rule_3, 4 => male_rule_4];
static MALE_PATRONYMIC: &[DeclensionRule] = chain![1 => male_patronymic];
static FEMALE_GIVEN: &[DeclensionRule] = chain![1 => female_rule_1, 2 => female_rule_2];
static FEMALE_FAMILY: &[DeclensionRule] = chain![3 => female_rule_3, 1 => female_rule_1];
static FEMALE_PATRONYMIC: &[DeclensionRule] = chain![1 => female_patronymic];

pub fn chain(gender: Gender, role: Role) -> &'static [DeclensionRule] {
    match (gender, role) {
        (Gender::Male, Role::GivenName) => MALE_GIVEN,
        (Gender::Male, Role::FamilyName) => MALE_FAMILY,
        (Gender::Male, Role::Patronymic) => MALE_PATRONYMIC,
        (Gender::Female, Role::GivenName) => FEMALE_GIVEN,
        (Gender::Female, Role::FamilyName) => FEMALE_FAMILY,
        (Gender::Female, Role::Patronymic) => FEMALE_PATRONYMIC,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ukrainian::CASE_COUNT;

    fn apply(gender: Gender, role: Role, word: &str) -> Option<Declension> {
        chain(gender, role).iter().find_map(|r| (r.apply)(word))
    }

    #[test]
    fn male_given_names() {
        let cases = [
            ("тарас", 304, ["тарас", "тараса", "тарасові", "тараса", "тарасом", "тарасові", "тарасе"]),
            ("андрій", 307, ["андрій", "андрія", "андрієві", "андрія", "андрієм", "андрієві", "андрію"]),
            ("олесь", 311, ["олесь", "олеся", "олесеві", "олеся", "олесем", "олесеві", "олесю"]),
            ("федір", 202, ["федір", "федора", "федорові", "федора", "федором", "федорові", "федоре"]),
            ("ігор", 201, ["ігор", "ігоря", "ігореві", "ігоря", "ігорем", "ігореві", "ігоре"]),
            ("прокіп", 304, ["прокіп", "прокопа", "прокопові", "прокопа", "прокопом", "прокопові", "прокопе"]),
            ("тиміш", 305, ["тиміш", "тимоша", "тимошеві", "тимоша", "тимошем", "тимошеві", "тимоше"]),
            ("лев", 304, ["лев", "лева", "левові", "лева", "левом", "левові", "леве"]),
            ("орест", 304, ["орест", "ореста", "орестові", "ореста", "орестом", "орестові", "оресте"]),
            ("олег", 304, ["олег", "олега", "олегові", "олега", "олегом", "олегові", "олеже"]),
            ("микита", 101, ["микита", "микити", "микиті", "микиту", "микитою", "микиті", "микито"]),
        ];
        for (word, rule, expected) in cases {
            let d = apply(Gender::Male, Role::GivenName, word).unwrap();
            assert_eq!(d.rule, rule, "given name {word}");
            assert_eq!(d.forms, expected, "given name {word}");
        }
    }

    #[test]
    fn male_family_names() {
        let cases = [
            ("шевченко", 304, "шевченка", "шевченче"),
            ("петров", 302, "петрова", "петрове"),
            ("соловей", 306, "солов’я", "солов’ю"),
            ("швець", 308, "шевця", "шевцю"),
            ("кравець", 309, "кравця", "кравцю"),
            ("заяць", 310, "зайця", "зайцю"),
            ("синок", 301, "синка", "синче"),
            ("орел", 304, "орла", "орле"),
            ("огнев", 302, "огнева", "огневе"),
            ("осеев", 302, "осеева", "осееве"),
            ("білий", 5, "білого", "білий"),
            ("руді", 4, "рудих", "руді"),
            ("пушкін", 303, "пушкіна", "пушкіне"),
        ];
        for (word, rule, genitive, vocative) in cases {
            let d = apply(Gender::Male, Role::FamilyName, word).unwrap();
            assert_eq!(d.rule, rule, "family name {word}");
            assert_eq!((d.forms[1].as_str(), d.forms[6].as_str()), (genitive, vocative), "family name {word}");
            assert_eq!(d.forms.len(), CASE_COUNT);
        }
    }

    #[test]
    fn female_given_names() {
        let d = apply(Gender::Female, Role::GivenName, "ольга").unwrap();
        assert_eq!(d.rule, 102);
        assert_eq!(d.forms, ["ольга", "ольги", "ользі", "ольгу", "ольгою", "ользі", "ольго"]);

        let d = apply(Gender::Female, Role::GivenName, "марія").unwrap();
        assert_eq!((d.rule, d.forms[4].as_str()), (103, "марією"));

        let d = apply(Gender::Female, Role::GivenName, "люба").unwrap();
        assert_eq!((d.rule, d.forms[6].as_str()), (102, "любо"));

        let d = apply(Gender::Female, Role::GivenName, "любов").unwrap();
        assert_eq!(d.rule, 202);
        assert_eq!(d.forms, ["любов", "любові", "любові", "любов", "любов’ю", "любові", "любове"]);

        let d = apply(Gender::Female, Role::GivenName, "нінель").unwrap();
        assert_eq!((d.rule, d.forms[4].as_str()), (201, "нінеллю"));
    }

    #[test]
    fn female_family_names() {
        let d = apply(Gender::Female, Role::FamilyName, "донська").unwrap();
        assert_eq!((d.rule, d.forms[1].as_str()), (302, "донської"));

        let d = apply(Gender::Female, Role::FamilyName, "білоніга").unwrap();
        assert_eq!(d.rule, 101);
        assert_eq!(d.forms, ["білоніга", "білоноги", "білонозі", "білоногу", "білоногою", "білонозі", "білоного"]);

        let d = apply(Gender::Female, Role::FamilyName, "петрова").unwrap();
        assert_eq!((d.rule, d.forms[2].as_str()), (302, "петровій"));

        let d = apply(Gender::Female, Role::FamilyName, "коваль").map(|d| d.rule);
        assert_eq!(d, None);
    }

    #[test]
    fn patronymics() {
        let d = apply(Gender::Male, Role::Patronymic, "григорович").unwrap();
        assert_eq!(d.forms[6], "григоровичу");
        let d = apply(Gender::Female, Role::Patronymic, "петрівна").unwrap();
        assert_eq!(d.forms, ["петрівна", "петрівни", "петрівні", "петрівну", "петрівною", "петрівні", "петрівно"]);
        assert!(apply(Gender::Female, Role::Patronymic, "кизи").is_none());
    }

    #[test]
    fn unknown_gender_has_no_chain() {
        assert!(chain(Gender::Unknown, Role::FamilyName).is_empty());
    }
}
