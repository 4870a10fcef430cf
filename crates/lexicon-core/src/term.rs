//! Term normalization.
//!
//! Every key at construction time and every lookup argument passes through
//! the same hygiene: trim surrounding whitespace, reject anything that is
//! empty once trimmed. Comparison always happens on the trimmed form.

use crate::error::{LexiconError, LexiconResult};

/// Normalize a lookup argument.
pub(crate) fn normalize_lookup(term: &str) -> LexiconResult<&str> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Err(LexiconError::invalid_input(
            "term must not be empty or whitespace-only",
        ));
    }
    Ok(trimmed)
}

/// Normalize a construction key. Same rule as [`normalize_lookup`], worded
/// for the construction side.
pub(crate) fn normalize_key(key: &str) -> LexiconResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(LexiconError::invalid_input(
            "keys must not be empty or whitespace-only",
        ));
    }
    Ok(trimmed)
}

/// Normalize a definition. Names the owning key on rejection so the caller
/// can tell which entry was bad.
pub(crate) fn normalize_value<'a>(key: &str, value: &'a str) -> LexiconResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LexiconError::invalid_key(
            format!("value for '{key}' must not be empty or whitespace-only"),
            key,
        ));
    }
    Ok(trimmed)
}
