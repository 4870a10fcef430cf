//! Frozen, deterministic vocabulary lookup.
//!
//! A [`Lexicon`] is an immutable table of `term -> definition` string pairs,
//! validated once at construction and answering only exact (trimmed)
//! matches afterwards:
//!
//! - Keys and definitions are trimmed on the way in; empty or
//!   whitespace-only entries are rejected outright.
//! - Two keys that trim to the same string are a strip-collision and fail
//!   construction, never a silent overwrite.
//! - A malformed query argument ([`LexiconError::InvalidInput`]) is kept
//!   distinct from a well-formed term that simply is not in the table
//!   ([`LexiconError::NotFound`]).
//! - The same input always builds the same lexicon. Lookups are exact
//!   matches over trimmed input; nothing mutates after construction.
//!
//! # Quick Start
//!
//! ```
//! use lexicon_core::Lexicon;
//!
//! # fn main() -> anyhow::Result<()> {
//! let lexicon = Lexicon::new([
//!     ("ALLOW", "Permission to proceed"),
//!     ("DENY", "Permission refused"),
//! ])?;
//!
//! assert!(lexicon.has("ALLOW")?);
//! assert_eq!(lexicon.get(" DENY ")?, "Permission refused");
//! assert_eq!(lexicon.validate("ALLOW")?, "ALLOW");
//!
//! // Absence is a typed error, not a panic or a default.
//! assert!(lexicon.get("MAYBE").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Error model
//!
//! Every fallible operation returns [`LexiconResult`]. There are exactly
//! two failure kinds: [`LexiconError::InvalidInput`] for arguments or
//! construction data that violate term hygiene, and
//! [`LexiconError::NotFound`] for a clean term with no entry. Callers that
//! treat the two differently (reject the request vs. fall back) can match
//! on the variant or use [`LexiconError::is_invalid_input`] and
//! [`LexiconError::is_not_found`].

pub mod error;
pub mod lexicon;
mod term;

// Re-export main types
pub use error::{LexiconError, LexiconResult};
pub use lexicon::Lexicon;
