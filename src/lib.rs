//! Short volume dashboard: FINRA Reg SHO daily short sale volume, a
//! Percentage Volume Oscillator over total volume, and a small web UI.

pub mod analysis;
pub mod charts;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;

pub use error::{DashboardError, Result};
