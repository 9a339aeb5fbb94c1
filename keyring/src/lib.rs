pub mod address;
pub mod config;
pub mod error;
pub mod logger;
pub mod system_keys;
