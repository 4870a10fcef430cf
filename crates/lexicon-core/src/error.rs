//! Error types for lexicon construction and lookups.

/// Lexicon errors.
///
/// Exactly two kinds exist, and they are never conflated: a malformed
/// argument is `InvalidInput`, a well-formed term that is simply absent is
/// `NotFound`. Callers match on the variant to tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    /// Malformed construction input or lookup argument (empty or
    /// whitespace-only string, or a non-string shape at the serde
    /// boundary). Carries the offending (trimmed) key where one exists.
    #[error("invalid input: {reason}")]
    InvalidInput {
        reason: String,
        key: Option<String>,
    },

    /// Well-formed term absent from the table. Carries the normalized
    /// (trimmed) term that was probed.
    #[error("term not found: {term}")]
    NotFound { term: String },
}

impl LexiconError {
    /// Whether the error reports a malformed argument.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Whether the error reports an absent term.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
            key: None,
        }
    }

    pub(crate) fn invalid_key(reason: impl Into<String>, key: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
            key: Some(key.into()),
        }
    }

    pub(crate) fn not_found(term: impl Into<String>) -> Self {
        Self::NotFound { term: term.into() }
    }
}

/// Result type for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;
