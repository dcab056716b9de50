pub mod catalog;
pub mod list;
pub mod lookup;
