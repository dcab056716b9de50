use anyhow::Result;
use comfy_table::Table;
use serde::Serialize;
use userfilter::{FilterField, FilterType, Taxonomy};

use crate::examples::ExampleGroup;
use crate::output::{GlobalOptions, OutputManager, TableDisplay, themed_table};

pub const FIELD_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "List filter fields",
    commands: &["userfilter fields", "userfilter --output json fields"],
}];

pub const TYPE_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "List filter types",
    commands: &["userfilter types", "userfilter --output compact types"],
}];

#[derive(Debug, Serialize)]
pub struct ListingEntry {
    pub key: &'static str,
    pub value: &'static str,
}

/// Every entry of one taxonomy table
#[derive(Debug, Serialize)]
pub struct TableListing {
    pub table: &'static str,
    #[serde(skip)]
    pub value_header: &'static str,
    pub entries: Vec<ListingEntry>,
}

impl TableListing {
    pub fn of<T: Taxonomy>(value_header: &'static str) -> Self {
        Self {
            table: T::TABLE,
            value_header,
            entries: T::entries().map(|(key, value)| ListingEntry { key, value }).collect(),
        }
    }
}

impl TableDisplay for TableListing {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options, &["Key", self.value_header]);
        for entry in &self.entries {
            table.add_row(vec![entry.key, entry.value]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}={}", entry.key, entry.value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn handle_fields(output: &OutputManager) -> Result<()> {
    output.display(&TableListing::of::<FilterField>("Label"))
}

pub fn handle_types(output: &OutputManager) -> Result<()> {
    output.display(&TableListing::of::<FilterType>("Discriminator"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_listing_in_table_order() {
        let listing = TableListing::of::<FilterField>("Label");
        assert_eq!(listing.table, "USER_FILTER_FIELD");
        assert_eq!(
            listing.to_compact(),
            "CREATED=Created USER_TYPE=User Type GENDER=Gender BALANCE=Balance"
        );
    }

    #[test]
    fn type_listing_json_omits_header() {
        let listing = TableListing::of::<FilterType>("Discriminator");
        let json = serde_json::to_value(&listing).expect("listing serializes");
        assert_eq!(json["table"], "USER_FILTER_TYPE");
        assert_eq!(json["entries"][2]["key"], "DISCRETE");
        assert_eq!(json["entries"][2]["value"], "discrete");
        assert!(json.get("value_header").is_none());
    }
}
