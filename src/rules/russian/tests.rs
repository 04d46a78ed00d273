use crate::{Case, Gender, NameCase, RuleId, WordRecord};

#[test]
fn russian_full_name_examples() {
    // (input, case, expected)
    let cases: Vec<(&str, Case, &str)> = vec![
        ("Иванов Иван Иванович", Case::Nominative, "Иванов Иван Иванович"),
        ("Иванов Иван Иванович", Case::Genitive, "Иванова Ивана Ивановича"),
        ("Иванов Иван Иванович", Case::Instrumental, "Ивановым Иваном Ивановичем"),
        ("Пушкин Александр Сергеевич", Case::Dative, "Пушкину Александру Сергеевичу"),
        ("Толстой Лев Николаевич", Case::Genitive, "Толстого Льва Николаевича"),
        ("Иванова Мария Петровна", Case::Genitive, "Ивановой Марии Петровны"),
        ("Иванова Мария Петровна", Case::Prepositional, "Ивановой Марии Петровне"),
        ("ИВАНОВА МАРИЯ", Case::Dative, "ИВАНОВОЙ МАРИИ"),
        ("Иванов Иван", Case::Vocative, ""),
    ];

    let mut nc = NameCase::russian();
    for (input, case, expected) in cases {
        let got = nc.query_case(input, case, Gender::Unknown);
        assert_eq!(got, expected, "'{}' in {:?} (words: {:#?})", input, case, nc.word_collection());
    }
}

#[test]
fn russian_gender_detection() {
    let cases = [
        ("Иванов Иван Иванович", Gender::Male),
        ("Иванова Мария Петровна", Gender::Female),
        ("Смирнова Ольга", Gender::Female),
        ("Петров", Gender::Male),
    ];

    let mut nc = NameCase::russian();
    for (input, expected) in cases {
        nc.load_full_name(input);
        assert_eq!(nc.detect_gender(), expected, "gender of '{}'", input);
    }
}

#[test]
fn russian_rule_ids_are_recorded() {
    let mut nc = NameCase::russian();
    nc.query("Иванов Иван Иванович Smith");
    let rules: Vec<RuleId> = nc.word_collection().iter().map(WordRecord::rule).collect();
    assert_eq!(rules, [RuleId::Matched(603), RuleId::Matched(203), RuleId::Matched(2), RuleId::Unchanged]);
}

#[test]
fn russian_single_parts() {
    let mut nc = NameCase::russian();
    assert_eq!(
        nc.query_family_name("Иванова").unwrap(),
        ["Иванова", "Ивановой", "Ивановой", "Иванову", "Ивановой", "Ивановой"]
    );
    assert_eq!(nc.query_given_name("Ольга").unwrap(), ["Ольга", "Ольги", "Ольге", "Ольгу", "Ольгой", "Ольге"]);
    assert_eq!(nc.query_given_name("Игорь").unwrap()[1], "Игоря");
}
