mod loader;

pub mod fields;
pub mod structs;

pub use loader::{config_candidates, find_config_path, find_config_path_in};
pub use structs::*;
