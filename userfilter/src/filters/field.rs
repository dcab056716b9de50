use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

use crate::errors::{TaxonomyError, TaxonomyResult};
use crate::Taxonomy;

/// Attribute of a user record that can be used as a filter criterion.
///
/// Serializes as its symbolic key (`"USER_TYPE"`); [`fmt::Display`] renders
/// the human-readable label.
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Taxonomy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[taxonomy(table = "USER_FILTER_FIELD")]
pub enum FilterField {
    #[taxonomy(value = "Created")]
    Created,
    #[taxonomy(value = "User Type")]
    UserType,
    #[taxonomy(value = "Gender")]
    Gender,
    #[taxonomy(value = "Balance")]
    Balance,
}

impl FilterField {
    #[inline]
    pub fn key(self) -> &'static str {
        Taxonomy::key(self)
    }

    /// Display label, e.g. `"User Type"`.
    #[inline]
    pub fn label(self) -> &'static str {
        Taxonomy::value(self)
    }

    pub fn from_label(label: &str) -> TaxonomyResult<Self> {
        Self::from_value(label)
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterField {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

/// Display label for a symbolic field key such as `"BALANCE"`.
pub fn field_label(key: &str) -> TaxonomyResult<&'static str> {
    FilterField::from_key(key).map(FilterField::label)
}

/// All filter fields in table order.
pub fn all_fields() -> &'static [FilterField] {
    FilterField::all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_table() {
        assert_eq!(FilterField::Created.label(), "Created");
        assert_eq!(FilterField::UserType.label(), "User Type");
        assert_eq!(FilterField::Gender.label(), "Gender");
        assert_eq!(FilterField::Balance.label(), "Balance");
    }

    #[test]
    fn keys_are_screaming_snake_case() {
        let keys: Vec<&str> = all_fields().iter().map(|field| field.key()).collect();
        assert_eq!(keys, ["CREATED", "USER_TYPE", "GENDER", "BALANCE"]);
    }

    #[test]
    fn display_uses_label_and_from_str_uses_key() {
        assert_eq!(FilterField::UserType.to_string(), "User Type");
        assert_eq!("GENDER".parse::<FilterField>(), Ok(FilterField::Gender));
        assert!("Gender".parse::<FilterField>().is_err());
    }

    #[test]
    fn reverse_lookup_by_label() {
        assert_eq!(FilterField::from_label("Balance"), Ok(FilterField::Balance));
        assert_eq!(
            FilterField::from_label("balance"),
            Err(TaxonomyError::UnknownValue {
                table: "USER_FILTER_FIELD",
                value: "balance".to_string(),
            })
        );
    }
}
