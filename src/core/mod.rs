//! Web layer: startup, page layout and HTTP routing

pub mod bootstrap;
pub mod dashboard;
pub mod http;

pub use bootstrap::*;
pub use dashboard::*;
pub use http::*;
