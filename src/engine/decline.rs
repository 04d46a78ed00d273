//! Declension of classified words.

use crate::rules::helpers::same_forms;
use crate::{LanguageRules, RuleId, WordCollection, WordRecord};

pub fn decline_all(rules: &dyn LanguageRules, words: &mut WordCollection) {
    for word in words.iter_mut() {
        decline_word(rules, word);
    }
}

/// Run the word's chain; the first rule that matches wins.
fn decline_word(rules: &dyn LanguageRules, word: &mut WordRecord) {
    let chain = rules.declension_chain(word.gender, word.role);
    let matched = chain.iter().find_map(|rule| (rule.apply)(word.value()).map(|d| (rule.number, d)));

    match matched {
        Some((number, declension)) => {
            debug_assert_eq!(declension.forms.len(), rules.case_count());
            debug_trace!(
                "[decline] word=\"{}\" gender={} role={} chain_rule={} rule={}",
                word.raw(),
                word.gender,
                word.role,
                number,
                declension.rule
            );
            word.set_forms(declension.forms, RuleId::Matched(declension.rule));
        }
        None => {
            debug_trace!(
                "[decline] word=\"{}\" gender={} role={} rule=unchanged (tried {})",
                word.raw(),
                word.gender,
                word.role,
                chain.len()
            );
            let forms = same_forms(word.value(), rules.case_count());
            word.set_forms(forms, RuleId::Unchanged);
        }
    }
}
