//! Momentum indicators: PVO

pub mod pvo;

pub use pvo::*;
