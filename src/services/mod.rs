//! External data sources

pub mod finra;
pub mod short_volume;

pub use finra::FinraClient;
pub use short_volume::ShortVolumeProvider;
