//! Per-language rule sets.
//!
//! Each language lives in its own module with the same layout:
//!
//! - `detect.rs`: role and gender heuristics (weighted suffix tests plus
//!   exception lists).
//! - `rules.rs`: numbered declension rules and the (gender, role) chain table.
//! - `tests.rs`: table-driven expectations for whole names.
//!
//! `helpers.rs` holds the suffix arithmetic shared by both languages.

pub(crate) mod helpers;
pub(crate) mod russian;
pub(crate) mod ukrainian;
