//! FINRA Reg SHO daily short sale volume API

pub mod client;
pub mod error;
pub mod messages;

pub use client::*;
pub use error::FinraError;
pub use messages::{CompareFilter, CompareType, QueryRequest};
