//! Character-level suffix helpers.
//!
//! All functions count characters, not bytes. When a word is shorter than
//! the requested suffix, the whole word is returned; the heuristics were
//! tuned against that behaviour.

/// Byte offset of the `n`-th character from the end.
fn tail_start(word: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(word.len());
    }
    word.char_indices().rev().nth(n - 1).map(|(idx, _)| idx)
}

/// The last `length` characters of `word`.
pub fn last(word: &str, length: usize) -> &str {
    match tail_start(word, length) {
        Some(start) => &word[start..],
        None => word,
    }
}

/// `take` characters starting `length` characters from the end.
///
/// `last_from("иванов", 2, 1) == "о"`.
pub fn last_from(word: &str, length: usize, take: usize) -> &str {
    let Some(start) = tail_start(word, length) else {
        return word;
    };
    let tail = &word[start..];
    match tail.char_indices().nth(take) {
        Some((end, _)) => &tail[..end],
        None => tail,
    }
}

/// `word` without its last `count` characters; empty if it is shorter.
pub fn drop_last(word: &str, count: usize) -> &str {
    match tail_start(word, count) {
        Some(end) => &word[..end],
        None => "",
    }
}

pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// True when `needle` is non-empty and occurs in the letter list.
pub fn in_letters(needle: &str, letters: &str) -> bool {
    !needle.is_empty() && letters.contains(needle)
}

/// True when `needle` is non-empty and equals one of `list`.
pub fn in_list(needle: &str, list: &[&str]) -> bool {
    !needle.is_empty() && list.contains(&needle)
}

/// Build all case forms: the nominative `word`, then `base` with its last
/// `trim` characters removed plus one ending per remaining case.
pub fn word_forms<S: AsRef<str>>(word: &str, base: &str, endings: &[S], trim: usize) -> Vec<String> {
    let stem = drop_last(base, trim);
    let mut forms = Vec::with_capacity(endings.len() + 1);
    forms.push(word.to_string());
    forms.extend(endings.iter().map(|e| format!("{stem}{}", e.as_ref())));
    forms
}

/// Every case equal to the nominative.
pub fn same_forms(word: &str, case_count: usize) -> Vec<String> {
    vec![word.to_string(); case_count]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_counts_characters() {
        assert_eq!(last("иванов", 2), "ов");
        assert_eq!(last("иванов", 0), "");
        assert_eq!(last("ян", 3), "ян");
    }

    #[test]
    fn last_from_takes_inner_slice() {
        assert_eq!(last_from("иванов", 2, 1), "о");
        assert_eq!(last_from("нинель", 3, 2), "ел");
        assert_eq!(last_from("я", 3, 1), "я");
    }

    #[test]
    fn drop_last_empties_short_words() {
        assert_eq!(drop_last("ольга", 2), "оль");
        assert_eq!(drop_last("ий", 3), "");
        assert_eq!(drop_last("лев", 0), "лев");
    }

    #[test]
    fn membership_tests() {
        assert!(in_letters("о", "аеёиоуыэюя"));
        assert!(!in_letters("", "аеёиоуыэюя"));
        assert!(in_list("ов", &["ов", "ев"]));
        assert!(!in_list("", &[""]));
    }

    #[test]
    fn word_forms_trims_base_and_appends() {
        let forms = word_forms("анна", "анна", &["ы", "е", "у", "ой", "е"], 1);
        assert_eq!(forms, vec!["анна", "анны", "анне", "анну", "анной", "анне"]);
    }
}
