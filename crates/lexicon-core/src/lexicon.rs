//! The frozen vocabulary table.
//!
//! Construction is the only moment anything is checked or allocated; every
//! call after that is a pure read over a private map. There is no mutating
//! method in the public contract, so two threads may share a [`Lexicon`]
//! freely once it exists.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::{LexiconError, LexiconResult};
use crate::term;

/// A frozen, deterministic vocabulary.
///
/// Built once from `(term, definition)` string pairs via [`Lexicon::new`].
/// Keys and values are stored trimmed; lookups trim their argument and
/// match exactly. Nothing is inferred on a miss and nothing mutates after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    terms: HashMap<String, String>,
}

impl Lexicon {
    /// Build a lexicon from `(term, definition)` pairs.
    ///
    /// Accepts any materialized string-to-string mapping: a `HashMap`, a
    /// `BTreeMap`, an array or `Vec` of pairs. Validation is a single pass
    /// over the input, failing fast on the first violation encountered
    /// (the input's own iteration order decides which violation is
    /// reported when several exist):
    ///
    /// - a key that is empty or whitespace-only after trimming,
    /// - a value that is empty or whitespace-only after trimming (the
    ///   error names the offending key),
    /// - two keys that trim to the same string, a strip-collision (the
    ///   error names the colliding key and the normalized form).
    ///
    /// # Examples
    ///
    /// ```
    /// use lexicon_core::Lexicon;
    ///
    /// let lexicon = Lexicon::new([
    ///     ("ALLOW", "Permission to proceed"),
    ///     ("DENY", "Permission refused"),
    /// ])?;
    /// assert_eq!(lexicon.len(), 2);
    /// # Ok::<(), lexicon_core::LexiconError>(())
    /// ```
    pub fn new<I, K, V>(terms: I) -> LexiconResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let terms = terms.into_iter();
        let mut normalized: HashMap<String, String> =
            HashMap::with_capacity(terms.size_hint().0);

        for (key, value) in terms {
            let trimmed_key = term::normalize_key(key.as_ref())?;
            let trimmed_value = term::normalize_value(trimmed_key, value.as_ref())?;

            if normalized.contains_key(trimmed_key) {
                return Err(LexiconError::invalid_key(
                    format!(
                        "strip-collision: '{}' normalizes to '{}' which already exists",
                        key.as_ref(),
                        trimmed_key
                    ),
                    trimmed_key,
                ));
            }

            normalized.insert(trimmed_key.to_string(), trimmed_value.to_string());
        }

        debug!(terms = normalized.len(), "lexicon constructed");
        Ok(Self { terms: normalized })
    }

    /// Whether `term` exists in the lexicon.
    ///
    /// The argument is trimmed before comparison. An empty or
    /// whitespace-only argument fails with [`LexiconError::InvalidInput`]
    /// instead of reporting `false`.
    pub fn has(&self, term: &str) -> LexiconResult<bool> {
        let trimmed = term::normalize_lookup(term)?;
        Ok(self.terms.contains_key(trimmed))
    }

    /// The definition for `term`.
    ///
    /// Fails with [`LexiconError::InvalidInput`] for a malformed argument
    /// and with [`LexiconError::NotFound`] (carrying the trimmed term) for
    /// a well-formed term absent from the table.
    pub fn get(&self, term: &str) -> LexiconResult<&str> {
        let trimmed = term::normalize_lookup(term)?;
        self.terms
            .get(trimmed)
            .map(String::as_str)
            .ok_or_else(|| LexiconError::not_found(trimmed))
    }

    /// Confirm membership and return the canonical (trimmed) form of
    /// `term` in one call.
    ///
    /// Same failure semantics as [`Lexicon::get`].
    pub fn validate(&self, term: &str) -> LexiconResult<&str> {
        let trimmed = term::normalize_lookup(term)?;
        self.terms
            .get_key_value(trimmed)
            .map(|(key, _)| key.as_str())
            .ok_or_else(|| LexiconError::not_found(trimmed))
    }

    /// All `(term, definition)` pairs, in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.terms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All terms, in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.keys().map(String::as_str)
    }

    /// All definitions, in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.values().map(String::as_str)
    }

    /// Number of terms in the lexicon.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the lexicon holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Serialize for Lexicon {
    /// Serializes as a string-to-string map with keys in sorted order, so
    /// equal lexicons always produce identical output.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ordered: BTreeMap<&str, &str> = self
            .terms
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        ordered.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Lexicon {
    /// Deserializes a string-to-string map and funnels it through
    /// [`Lexicon::new`], so a document that parses but violates term
    /// hygiene is rejected with the constructor's error text. The sorted
    /// proxy makes the first reported violation deterministic for a given
    /// document.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
