use thiserror::Error;

/// Caller-contract violations reported by the matching engine.
///
/// Empty wardrobes and searches with no qualifying outfit are not errors;
/// they come back as empty result sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid category '{0}' (expected top, pants, shoes or jacket)")]
    InvalidCategory(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("malformed wardrobe snapshot: {0}")]
    MalformedSnapshot(String),
}
