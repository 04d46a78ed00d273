//! Preparation engine.
//!
//! Everything between "words were added" and "forms can be read" lives here,
//! split into focused submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! WordCollection (raw words, maybe preset roles/gender)
//!        │
//!        │  classify::detect_roles        (classify.rs)
//!        │    - score each undetermined word: given / family / patronymic
//!        │    - highest score wins, ties: given > family > patronymic
//!        │
//!        │  classify::resolve_gender      (classify.rs)
//!        │    - a preset gender spreads to every word, or
//!        │    - per-role probabilities are summed and compared
//!        v
//!   Stage::Classified
//!        │
//!        │  decline::decline_all          (decline.rs)
//!        │    - pick the chain for (gender, role)
//!        │    - first matching rule produces the forms
//!        │    - no match: every case equals the nominative
//!        │    - capitalization mask restored on each form
//!        v
//!   Stage::Declined
//! ```
//!
//! `pipeline::prepare` is the only entry point: it looks at the current
//! [`Stage`] and runs only the missing steps, so repeated reads are free.
//! Any mutation of the word set drops the stage back to `Empty`.
//!
//! ## Debugging
//!
//! Set `NAMECASE_DEBUG_RULES=1` to print role scores, gender decisions and
//! the rule that declined each word.

#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/decline.rs"]
mod decline;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/pipeline.rs"]
mod pipeline;

pub use metrics::PrepareMetrics;
pub use pipeline::{Stage, prepare, prepare_with_metrics};
