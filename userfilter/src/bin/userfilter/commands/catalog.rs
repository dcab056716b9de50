use anyhow::Result;
use userfilter::Catalog;

use crate::examples::ExampleGroup;
use crate::output::{OutputFormat, OutputManager};

pub const EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Export both tables for a client",
    commands: &["userfilter catalog > filters.json", "userfilter --output compact catalog"],
}];

/// Prints the catalog as JSON; `compact` selects single-line JSON.
pub fn handle_catalog(output: &OutputManager) -> Result<()> {
    let catalog = Catalog::current();
    let rendered = match output.options.output_format {
        OutputFormat::Compact => catalog.to_json()?,
        OutputFormat::Table | OutputFormat::Json => catalog.to_json_pretty()?,
    };
    output.raw(&rendered);
    Ok(())
}
