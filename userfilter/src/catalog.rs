//! Serializable snapshot of both filter tables.
//!
//! A client that renders filter widgets needs the same keys, labels and
//! discriminators the server uses. [`Catalog::current`] captures them in table
//! order so they can be shipped as JSON instead of being duplicated by hand.

use serde::Serialize;
#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

use crate::filters::{FilterField, FilterType, all_fields, all_types};

#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    pub key: &'static str,
    pub label: &'static str,
}

impl From<FilterField> for FieldEntry {
    fn from(field: FilterField) -> Self {
        Self {
            key: field.key(),
            label: field.label(),
        }
    }
}

#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeEntry {
    pub key: &'static str,
    pub discriminator: &'static str,
}

impl From<FilterType> for TypeEntry {
    fn from(kind: FilterType) -> Self {
        Self {
            key: kind.key(),
            discriminator: kind.discriminator(),
        }
    }
}

#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub fields: Vec<FieldEntry>,
    pub types: Vec<TypeEntry>,
}

impl Catalog {
    pub fn current() -> Self {
        Self {
            fields: all_fields().iter().copied().map(FieldEntry::from).collect(),
            types: all_types().iter().copied().map(TypeEntry::from).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_follows_table_order() {
        let catalog = Catalog::current();
        assert_eq!(catalog.fields.len(), 4);
        assert_eq!(catalog.types.len(), 4);
        assert_eq!(
            catalog.fields[1],
            FieldEntry {
                key: "USER_TYPE",
                label: "User Type"
            }
        );
        assert_eq!(catalog.types[3].discriminator, "boolean_mapping");
    }

    #[test]
    fn compact_json_shape() {
        let json = Catalog::current().to_json().expect("catalog serializes");
        assert!(json.starts_with(r#"{"fields":[{"key":"CREATED","label":"Created"}"#), "{json}");
        assert!(json.contains(r#""types":[{"key":"INT_RANGE","discriminator":"int_range"}"#), "{json}");
    }
}
