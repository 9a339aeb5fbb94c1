pub mod bech32;
pub mod bits;
pub mod error;
pub mod systems;
