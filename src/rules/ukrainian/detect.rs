//! Ukrainian role and gender heuristics.
//!
//! Unlike the Russian detector the word's position is not consulted: a
//! patronymic suffix alone is strong enough evidence.

use super::CONSONANTS;

use crate::GenderProbability;
use crate::language::RoleScores;
use crate::rules::helpers::{in_letters, in_list, last};

const GIVEN_NAME_EXCEPTIONS: &[&str] = &[
    "лев",
    "гаїна",
    "афіна",
    "антоніна",
    "ангеліна",
    "альвіна",
    "альбіна",
    "аліна",
    "павло",
    "олесь",
    "микола",
    "мая",
    "англеліна",
    "елькін",
    "мерлін",
];

const FAMILY_ENDINGS_2: &[&str] = &[
    "ов", "ін", "ев", "єв", "ий", "ин", "ой", "ко", "ук", "як", "ца", "их", "ик", "ун", "ок", "ша", "ая", "га", "єк",
    "аш", "ив", "юк", "ус", "це", "ак", "бр", "яр", "іл", "ів", "ич", "сь", "ей", "нс", "яс", "ер", "ай", "ян", "ах",
    "ць", "ющ", "іс", "ач", "уб", "ох", "юх", "ут", "ча", "ул", "вк", "зь", "уц", "їн", "де", "уз", "юр", "ік", "іч",
    "ро",
];

const FAMILY_ENDINGS_3: &[&str] = &[
    "ова", "ева", "єва", "тих", "рик", "вач", "аха", "шен", "мей", "арь", "вка", "шир", "бан", "чий", "іна", "їна",
    "ька", "ань", "ива", "аль", "ура", "ран", "ало", "ола", "кур", "оба", "оль", "нта", "зій", "ґан", "іло", "шта",
    "юпа", "рна", "бла", "еїн", "има", "мар", "кар", "оха", "чур", "ниш", "ета", "тна", "зур", "нір", "йма", "орж",
    "рба", "іла", "лас", "дід", "роз", "аба", "чан", "ган",
];

const FAMILY_ENDINGS_4: &[&str] = &[
    "ьник", "нчук", "тник", "кирь", "ский", "шена", "шина", "вина", "нина", "гана", "хній", "зюба", "орош", "орон",
    "сило", "руба", "лест", "мара", "обка", "рока", "сика", "одна", "нчар", "вата", "ндар", "грій",
];

/// Score a lower-cased word.
pub fn role_scores(word: &str) -> RoleScores {
    let mut scores = RoleScores::default();
    let last2 = last(word, 2);
    let last3 = last(word, 3);
    let last4 = last(word, 4);

    if in_list(last3, &["вна", "чна", "ліч"]) || in_list(last4, &["ьмич", "ович"]) {
        scores.patronymic += 3.0;
    }

    if last3 == "тин" || in_list(last4, &["ьмич", "юбов", "івна", "явка", "орив", "кіян"]) {
        scores.given += 0.5;
    }

    if in_list(word, GIVEN_NAME_EXCEPTIONS) {
        scores.given += 10.0;
    }

    if in_list(last2, FAMILY_ENDINGS_2) {
        scores.family += 0.4;
    }

    if in_list(last3, FAMILY_ENDINGS_3) {
        scores.family += 0.4;
    }

    if in_list(last4, FAMILY_ENDINGS_4) {
        scores.family += 0.4;
    }

    // Plural-looking family names: Кравці, Руді.
    if last(word, 1) == "і" {
        scores.family += 0.2;
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

    if in_list(word, &["петро", "микола"]) {
        prob.masculine += 30.0;
    }

    if in_list(last2, &["он", "ов", "ав", "ам", "ол", "ан", "рд", "мп", "ко", "ло"]) {
        prob.masculine += 0.5;
    }

    if in_list(last3, &["бов", "нка", "яра", "ила", "опа"]) {
        prob.feminine += 0.5;
    }

    if in_letters(last1, CONSONANTS) {
        prob.masculine += 0.01;
    }

    if last1 == "ь" {
        prob.masculine += 0.02;
    }

    if last2 == "дь" {
        prob.feminine += 0.1;
    }

    if in_list(last3, &["ель", "бов"]) {
        prob.feminine += 0.4;
    }

    prob
}

pub fn gender_by_family_name(word: &str) -> GenderProbability {
    let mut prob = GenderProbability::default();
    let last2 = last(word, 2);

    if in_list(last2, &["ов", "ин", "ев", "єв", "ін", "їн", "ий", "їв", "ів", "ой", "ей"]) {
        prob.masculine += 0.4;
    }

    if in_list(last(word, 3), &["ова", "ина", "ева", "єва", "іна", "мін"]) {
        prob.feminine += 0.4;
    }

    if last2 == "ая" {
        prob.feminine += 0.4;
    }

    prob
}

pub fn gender_by_patronymic(word: &str) -> GenderProbability {
    match last(word, 2) {
        "ич" => GenderProbability::new(10.0, 0.0),
        "на" => GenderProbability::new(0.0, 12.0),
        _ => GenderProbability::default(),
    }
}
