//! Russian declension rules.
//!
//! Rules are numbered the way they are grouped: `male_rule_N` /
//! `female_rule_N`, each producing sub-rule ids `N01`, `N02`, ... so a word's
//! `RuleId` tells exactly which branch fired. Forms are
//! `[nominative, genitive, dative, accusative, instrumental, prepositional]`.

use super::{CASE_COUNT, CONSONANTS, VOWELS};
use crate::language::{Declension, DeclensionRule};
use crate::rules::helpers::{in_letters, in_list, last, last_from, same_forms, word_forms};
use crate::{Gender, Role};

/// Endings of family names that never decline.
const INDECLINABLE_3: &[&str] = &["ово", "аго", "яго", "ирь"];
const INDECLINABLE_2: &[&str] = &["их", "ых", "ко"];

fn forms(word: &str, endings: &[&str], trim: usize, rule: u16) -> Option<Declension> {
    Some(Declension::new(word_forms(word, word, endings, trim), rule))
}

fn fixed(all: [&str; CASE_COUNT], rule: u16) -> Option<Declension> {
    Some(Declension::new(all.iter().map(|s| s.to_string()).collect(), rule))
}

// --- Male -------------------------------------------------------------------

/// Given names on -ь/-й decline like ordinary masculine nouns.
fn male_rule_1(word: &str) -> Option<Declension> {
    if !in_letters(last(word, 1), "ьй") {
        return None;
    }
    if last_from(word, 2, 1) != "и" {
        forms(word, &["я", "ю", "я", "ем", "е"], 1, 101)
    } else {
        forms(word, &["я", "ю", "я", "ем", "и"], 1, 102)
    }
}

/// Given names on a hard consonant, with Павел and Лев losing their vowel.
fn male_rule_2(word: &str) -> Option<Declension> {
    if !in_letters(last(word, 1), CONSONANTS) {
        return None;
    }
    match word {
        "павел" => fixed(["павел", "павла", "павлу", "павла", "павлом", "павле"], 201),
        "лев" => fixed(["лев", "льва", "льву", "льва", "львом", "льве"], 202),
        _ => forms(word, &["а", "у", "а", "ом", "е"], 0, 203),
    }
}

/// Masculine given names on -а/-я (Никита, Илья).
fn male_rule_3(word: &str) -> Option<Declension> {
    match last(word, 1) {
        "а" if !in_letters(last_from(word, 2, 1), "кшгх") => forms(word, &["ы", "е", "у", "ой", "е"], 1, 301),
        "а" => forms(word, &["и", "е", "у", "ой", "е"], 1, 302),
        "я" => forms(word, &["и", "е", "ю", "ей", "е"], 1, 303),
        _ => None,
    }
}

/// Family names on -ь/-й.
fn male_rule_4(word: &str) -> Option<Declension> {
    if !in_letters(last(word, 1), "ьй") {
        return None;
    }
    let before_last = last_from(word, 2, 1);

    if last(word, 3) == "бей" {
        // Воробей
        forms(word, &["ья", "ью", "ья", "ьем", "ье"], 2, 400)
    } else if last_from(word, 3, 1) == "а" || in_letters(before_last, "ел") {
        forms(word, &["я", "ю", "я", "ем", "е"], 1, 401)
    } else if before_last == "ы" || last_from(word, 3, 1) == "т" {
        // Толстой -> Толстым
        forms(word, &["ого", "ому", "ого", "ым", "ом"], 2, 402)
    } else if last(word, 3) == "чий" {
        // Лесничий
        forms(word, &["ьего", "ьему", "ьего", "ьим", "ьем"], 2, 403)
    } else if !in_letters(before_last, VOWELS) || before_last == "и" {
        forms(word, &["ого", "ому", "ого", "им", "ом"], 2, 404)
    } else {
        Some(Declension::new(same_forms(word, CASE_COUNT), 405))
    }
}

/// Family names on -к; a fleeting -о- or -е- drops out.
fn male_rule_5(word: &str) -> Option<Declension> {
    if last(word, 1) != "к" {
        return None;
    }
    match last_from(word, 2, 1) {
        "о" => forms(word, &["ка", "ку", "ка", "ком", "ке"], 2, 501),
        "е" => forms(word, &["ька", "ьку", "ька", "ьком", "ьке"], 2, 502),
        _ => forms(word, &["а", "у", "а", "ом", "е"], 0, 503),
    }
}

/// Family names on other consonants: the instrumental takes -ем, -ом or -ым.
fn male_rule_6(word: &str) -> Option<Declension> {
    let last1 = last(word, 1);
    if last1 == "ч" {
        forms(word, &["а", "у", "а", "ем", "е"], 0, 601)
    } else if last(word, 2) == "ец" {
        forms(word, &["ца", "цу", "ца", "цом", "це"], 2, 604)
    } else if in_letters(last1, "цсршмхт") {
        forms(word, &["а", "у", "а", "ом", "е"], 0, 602)
    } else if in_letters(last1, CONSONANTS) {
        forms(word, &["а", "у", "а", "ым", "е"], 0, 603)
    } else {
        None
    }
}

/// Family names on -а/-я.
fn male_rule_7(word: &str) -> Option<Declension> {
    match last(word, 1) {
        "а" => match last_from(word, 2, 1) {
            "ш" => forms(word, &["и", "е", "у", "ей", "е"], 1, 701),
            "х" | "к" | "г" => forms(word, &["и", "е", "у", "ой", "е"], 1, 702),
            _ => forms(word, &["ы", "е", "у", "ой", "е"], 1, 703),
        },
        "я" => forms(word, &["ой", "ой", "ую", "ой", "ой"], 2, 704),
        _ => None,
    }
}

/// Indeclinable family names (Дурново, Живаго, Черных, Франко).
fn male_rule_8(word: &str) -> Option<Declension> {
    if in_list(last(word, 3), INDECLINABLE_3) || in_list(last(word, 2), INDECLINABLE_2) {
        Some(Declension::new(same_forms(word, CASE_COUNT), 8))
    } else {
        None
    }
}

fn male_patronymic(word: &str) -> Option<Declension> {
    if word == "ильич" {
        forms(word, &["а", "у", "а", "ом", "е"], 0, 1)
    } else if last(word, 2) == "ич" {
        forms(word, &["а", "у", "а", "ем", "е"], 0, 2)
    } else {
        None
    }
}

// --- Female -----------------------------------------------------------------

/// Given names on -а (but not -иа).
fn female_rule_1(word: &str) -> Option<Declension> {
    if last(word, 1) != "а" || last_from(word, 2, 1) == "и" {
        return None;
    }
    match last_from(word, 2, 1) {
        "ш" => forms(word, &["и", "е", "у", "ей", "е"], 1, 102),
        "х" | "к" | "г" => forms(word, &["и", "е", "у", "ой", "е"], 1, 103),
        _ => forms(word, &["ы", "е", "у", "ой", "е"], 1, 101),
    }
}

/// Given names on -я, -ья, -ия, -ея.
fn female_rule_2(word: &str) -> Option<Declension> {
    if last(word, 1) != "я" {
        return None;
    }
    if last_from(word, 2, 1) != "и" {
        forms(word, &["и", "е", "ю", "ей", "е"], 1, 201)
    } else if word == "ия" || word == "лия" {
        forms(word, &["и", "е", "ю", "ей", "е"], 1, 202)
    } else {
        forms(word, &["и", "и", "ю", "ей", "и"], 1, 202)
    }
}

/// Given names on a soft consonant (Любовь, Нинель).
fn female_rule_3(word: &str) -> Option<Declension> {
    if last(word, 1) != "ь" {
        return None;
    }
    forms(word, &["и", "и", "ь", "ью", "и"], 1, 3)
}

/// Family names on -а/-я.
fn female_rule_4(word: &str) -> Option<Declension> {
    match last(word, 1) {
        "а" => match last_from(word, 2, 1) {
            "г" | "к" => forms(word, &["и", "е", "у", "ой", "е"], 1, 401),
            "ш" => forms(word, &["и", "е", "у", "ей", "е"], 1, 402),
            _ => forms(word, &["ой", "ой", "у", "ой", "ой"], 1, 403),
        },
        "я" => forms(word, &["ой", "ой", "ую", "ой", "ой"], 2, 404),
        _ => None,
    }
}

fn female_patronymic(word: &str) -> Option<Declension> {
    if last(word, 2) == "на" { forms(word, &["ы", "е", "у", "ой", "е"], 1, 1) } else { None }
}

// --- Chains -----------------------------------------------------------------

static MALE_GIVEN: &[DeclensionRule] = chain![1 => male_rule_1, 2 => male_rule_2, 3 => male_rule_3];
static MALE_FAMILY: &[DeclensionRule] =
    chain![8 => male_rule_8, 4 => male_rule_4, 5 => male_rule_5, 6 => male_rule_6, 7 => male_rule_7];
static MALE_PATRONYMIC: &[DeclensionRule] = chain![1 => male_patronymic];
static FEMALE_GIVEN: &[DeclensionRule] = chain![1 => female_rule_1, 2 => female_rule_2, 3 => female_rule_3];
static FEMALE_FAMILY: &[DeclensionRule] = chain![4 => female_rule_4];
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
