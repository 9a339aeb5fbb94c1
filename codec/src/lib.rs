pub mod encode;
pub mod crypto;
pub mod file;
