//! Numeric helpers shared by the indicator and analysis layers

pub mod math;
