//! Mapping module - copying values between types and into tabular form.

mod data_table;
mod object_mapper;

#[cfg(test)]
mod mapping_tests;

pub use data_table::DataTable;
pub use object_mapper::{map_all, map_to, property_dictionary};
