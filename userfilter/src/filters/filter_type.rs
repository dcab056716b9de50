use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

use crate::errors::{TaxonomyError, TaxonomyResult};
use crate::Taxonomy;

/// How a filter field's value is interpreted and compared.
///
/// The discriminator (`"int_range"`, ...) is the stable identifier used when
/// filter criteria are serialized, so serde uses it as the wire name.
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Taxonomy)]
#[serde(rename_all = "snake_case")]
#[taxonomy(table = "USER_FILTER_TYPE")]
pub enum FilterType {
    #[taxonomy(value = "int_range")]
    IntRange,
    #[taxonomy(value = "date_range")]
    DateRange,
    #[taxonomy(value = "discrete")]
    Discrete,
    #[taxonomy(value = "boolean_mapping")]
    BooleanMapping,
}

impl FilterType {
    #[inline]
    pub fn key(self) -> &'static str {
        Taxonomy::key(self)
    }

    #[inline]
    pub fn discriminator(self) -> &'static str {
        Taxonomy::value(self)
    }

    pub fn from_discriminator(discriminator: &str) -> TaxonomyResult<Self> {
        Self::from_value(discriminator)
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminator())
    }
}

impl FromStr for FilterType {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

/// Discriminator for a symbolic type key such as `"DATE_RANGE"`.
pub fn type_discriminator(key: &str) -> TaxonomyResult<&'static str> {
    FilterType::from_key(key).map(FilterType::discriminator)
}

/// All filter types in table order.
pub fn all_types() -> &'static [FilterType] {
    FilterType::all()
}
