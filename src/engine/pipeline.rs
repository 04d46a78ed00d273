//! Stage machine driving classification and declension.

use std::time::Instant;

use super::classify::{detect_roles, resolve_gender};
use super::decline::decline_all;
use super::metrics::PrepareMetrics;
use crate::{LanguageRules, WordCollection};

/// How far the current word set has been prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Stage {
    /// Words changed since the last run (or none were ever prepared).
    #[default]
    Empty,
    /// Roles and gender are known.
    Classified,
    /// Every word carries its forms.
    Declined,
}

/// Advance `words` to at least `target`, skipping steps already done.
pub fn prepare(rules: &dyn LanguageRules, words: &mut WordCollection, stage: &mut Stage, target: Stage) {
    if target >= Stage::Classified && *stage < Stage::Classified {
        detect_roles(rules, words);
        resolve_gender(rules, words);
        *stage = Stage::Classified;
    }
    if target >= Stage::Declined && *stage < Stage::Declined {
        decline_all(rules, words);
        *stage = Stage::Declined;
    }
}

/// Same as [`prepare`] to `Declined`, timing each step.
///
/// Steps that were already done report a zero duration.
pub fn prepare_with_metrics(rules: &dyn LanguageRules, words: &mut WordCollection, stage: &mut Stage) -> PrepareMetrics {
    let start = Instant::now();
    let mut metrics = PrepareMetrics { words: words.len(), ..PrepareMetrics::default() };

    if *stage < Stage::Classified {
        let t = Instant::now();
        prepare(rules, words, stage, Stage::Classified);
        metrics.classify = t.elapsed();
    }
    if *stage < Stage::Declined {
        let t = Instant::now();
        prepare(rules, words, stage, Stage::Declined);
        metrics.decline = t.elapsed();
        metrics.unchanged = words.iter().filter(|w| w.rule() == crate::RuleId::Unchanged).count();
    }

    metrics.total = start.elapsed();
    metrics
}
