//! The user filter tables.
//!
//! Nothing here associates a field with the filter type that applies to it;
//! that mapping belongs to the code building filter criteria.

pub mod field;
pub mod filter_type;

pub use field::*;
pub use filter_type::*;
