//! Role detection and gender resolution.
//!
//! Both steps only fill in what is missing: a word added through a role
//! setter keeps its role, and a gender forced by the caller wins over any
//! spelling evidence.

use crate::{Gender, GenderProbability, LanguageRules, Role, WordCollection};

/// Give every undetermined word the role with the highest score.
pub fn detect_roles(rules: &dyn LanguageRules, words: &mut WordCollection) {
    for word in words.iter_mut() {
        if word.role != Role::Undetermined {
            continue;
        }
        let scores = rules.detect_role(word);
        word.role = scores.winner();
        debug_trace!(
            "[role] word=\"{}\" given={:.2} family={:.2} patronymic={:.2} -> {}",
            word.raw(),
            scores.given,
            scores.family,
            scores.patronymic,
            word.role
        );
    }
}

/// Decide one gender for the whole name and store it on every word.
pub fn resolve_gender(rules: &dyn LanguageRules, words: &mut WordCollection) {
    if let Some(preset) = words.iter().map(|w| w.gender()).find(|g| *g != Gender::Unknown) {
        debug_trace!("[gender] preset={preset}");
        set_gender(words, preset);
        return;
    }

    let mut total = GenderProbability::default();
    for word in words.iter_mut() {
        word.gender_probability = rules.gender_probability(word.role, word.value());
        total += word.gender_probability;
    }

    let gender = total.decide();
    debug_trace!("[gender] masculine={:.2} feminine={:.2} -> {gender}", total.masculine, total.feminine);
    set_gender(words, gender);
}

fn set_gender(words: &mut WordCollection, gender: Gender) {
    for word in words.iter_mut() {
        word.gender = gender;
    }
}
