//! Table transforms from raw trade records to analysis rows

pub mod daily;
pub mod ranking;

pub use daily::*;
pub use ranking::*;
