use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Fields, Ident, LitStr, Result, parse_macro_input};

mod parsed;

use parsed::ParsedTaxonomy;

/// Derive a closed lookup table from a unit-only enum.
///
/// The enum names its table with `#[taxonomy(table = "...")]` and every variant
/// carries `#[taxonomy(value = "...")]`. A variant's symbolic key defaults to the
/// SCREAMING_SNAKE_CASE form of its name and may be overridden with
/// `#[taxonomy(key = "...")]`.
///
/// Keys and values must be non-empty and unique within the table; violations
/// are reported at compile time.
///
/// # Example
///
/// ```text
/// #[derive(Clone, Copy, PartialEq, Eq, Taxonomy)]
/// #[taxonomy(table = "USER_FILTER_TYPE")]
/// pub enum FilterType {
///     #[taxonomy(value = "int_range")]
///     IntRange,
///     #[taxonomy(value = "discrete")]
///     Discrete,
/// }
///
/// // Generated:
/// // - FilterType::all() == &[IntRange, Discrete]
/// // - FilterType::IntRange.key() == "INT_RANGE"
/// // - FilterType::lookup_value("discrete") == Some(Discrete)
/// ```
#[proc_macro_derive(Taxonomy, attributes(taxonomy))]
pub fn derive_taxonomy(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedTaxonomy::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
