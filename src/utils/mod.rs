//! Shared utilities: ordered maps and output file helpers.

pub mod ordered_map;
pub mod script;

pub use ordered_map::OrderedMap;
pub use script::{write_executable_script, write_yaml};
