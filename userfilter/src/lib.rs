//! User filter taxonomy.
//!
//! Two closed, process-wide tables drive user filtering: the filter fields a
//! user record can be filtered on (`USER_FILTER_FIELD`) and the filter types
//! that say how a field's value is compared (`USER_FILTER_TYPE`). Both are
//! plain enums, so typed lookups cannot fail; string keys coming from outside
//! the process are resolved through [`field_label`] and [`type_discriminator`],
//! which report [`TaxonomyError::UnknownKey`] for anything outside the table.

extern crate self as userfilter;

pub mod catalog;
pub mod errors;
pub mod filters;
pub mod taxonomy;

pub use catalog::{Catalog, FieldEntry, TypeEntry};
pub use errors::*;
pub use filters::{FilterField, FilterType, all_fields, all_types, field_label, type_discriminator};
pub use taxonomy::Taxonomy;
pub use userfilter_macros::Taxonomy;
