//! Volume indicators computed over daily aggregates

pub mod momentum;
pub mod trend;

pub use momentum::*;
pub use trend::*;
