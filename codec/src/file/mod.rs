pub mod error;
pub mod toml_file;
