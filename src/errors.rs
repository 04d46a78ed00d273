/// Errors raised at the edges of the crate: parsing user-supplied codes and
/// rejecting empty requests. Declension itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown language '{0}' (expected ru or uk)")]
    UnknownLanguage(String),

    #[error("unknown gender '{0}' (expected male, female or auto)")]
    UnknownGender(String),

    #[error("unknown name part '{0}' (expected given, family or patronymic)")]
    UnknownRole(String),

    #[error("no name provided")]
    EmptyInput,
}
