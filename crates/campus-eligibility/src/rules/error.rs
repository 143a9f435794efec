use super::validation::ValidationErrors;

/// Failure surfaced by the engine facade before any verdict is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EligibilityError {
    #[error("unknown tier '{0}': expected one of pg, ug, diploma")]
    UnknownTier(String),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}
