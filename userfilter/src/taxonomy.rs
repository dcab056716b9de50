//! The lookup contract shared by every taxonomy table.
//!
//! Implementations are generated by `#[derive(Taxonomy)]`; the derive checks
//! key and value uniqueness at compile time, so the runtime side only has to
//! answer lookups.

use log::trace;

use crate::errors::{TaxonomyError, TaxonomyResult};

/// A closed table of `key -> value` entries backed by a unit enum.
///
/// Entries are `'static`, immutable and safe to read from any thread.
pub trait Taxonomy: Copy + Eq + Send + Sync + Sized + 'static {
    /// Table name used in diagnostics, e.g. `USER_FILTER_FIELD`.
    const TABLE: &'static str;

    /// Every entry in declaration order. Always the same slice.
    fn all() -> &'static [Self];

    /// Symbolic key, e.g. `USER_TYPE`.
    fn key(self) -> &'static str;

    /// Value paired with the key: a display label or a discriminator.
    fn value(self) -> &'static str;

    fn lookup_key(key: &str) -> Option<Self>;

    fn lookup_value(value: &str) -> Option<Self>;

    /// Resolve a symbolic key, failing with [`TaxonomyError::UnknownKey`].
    fn from_key(key: &str) -> TaxonomyResult<Self> {
        Self::lookup_key(key).ok_or_else(|| {
            trace!("lookup of unknown key {key:?} in {}", Self::TABLE);
            TaxonomyError::UnknownKey {
                table: Self::TABLE,
                key: key.to_string(),
            }
        })
    }

    /// Resolve a value back to its entry, failing with [`TaxonomyError::UnknownValue`].
    fn from_value(value: &str) -> TaxonomyResult<Self> {
        Self::lookup_value(value).ok_or_else(|| {
            trace!("lookup of unknown value {value:?} in {}", Self::TABLE);
            TaxonomyError::UnknownValue {
                table: Self::TABLE,
                value: value.to_string(),
            }
        })
    }

    /// `(key, value)` pairs in table order.
    fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::all().iter().map(|entry| (entry.key(), entry.value()))
    }
}
