use anyhow::Result;
use comfy_table::Table;
use serde::Serialize;
use userfilter::{FilterField, FilterType, Taxonomy, TaxonomyResult, field_label, type_discriminator};

use crate::examples::ExampleGroup;
use crate::output::{GlobalOptions, OutputManager, TableDisplay, themed_table};

pub const LABEL_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Resolve a field key",
    commands: &["userfilter label USER_TYPE", "userfilter --output compact label BALANCE"],
}];

pub const DISCRIMINATOR_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Resolve a type key",
    commands: &["userfilter discriminator DATE_RANGE"],
}];

#[derive(Debug, Serialize)]
pub struct LookupResult {
    pub table: &'static str,
    pub key: String,
    pub value: &'static str,
}

impl TableDisplay for LookupResult {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options, &["Table", "Key", "Value"]);
        table.add_row(vec![self.table, self.key.as_str(), self.value]);
        table
    }

    fn to_compact(&self) -> String {
        self.value.to_string()
    }
}

fn resolve<T: Taxonomy>(key: &str, lookup: fn(&str) -> TaxonomyResult<&'static str>) -> TaxonomyResult<LookupResult> {
    Ok(LookupResult {
        table: T::TABLE,
        key: key.to_string(),
        value: lookup(key)?,
    })
}

pub fn handle_label(key: &str, output: &OutputManager) -> Result<()> {
    let result = resolve::<FilterField>(key, field_label)?;
    output.verbose(&format!("{} resolved in {}", result.key, result.table));
    output.display(&result)
}

pub fn handle_discriminator(key: &str, output: &OutputManager) -> Result<()> {
    let result = resolve::<FilterType>(key, type_discriminator)?;
    output.verbose(&format!("{} resolved in {}", result.key, result.table));
    output.display(&result)
}
