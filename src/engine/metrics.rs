//! Preparation metrics.
//!
//! Collected only by `prepare_with_metrics`, which the CLI's `--verbose`
//! report uses. The normal accessor path never touches `Instant`.

use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrepareMetrics {
    /// Total elapsed time for the call.
    pub total: Duration,
    /// Role detection plus gender resolution.
    pub classify: Duration,
    /// Running the declension chains.
    pub decline: Duration,
    /// Words in the collection.
    pub words: usize,
    /// Words no rule matched (all cases equal the nominative).
    pub unchanged: usize,
}
