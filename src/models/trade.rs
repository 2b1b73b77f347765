use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One Reg SHO row: a symbol's volume on one day at one reporting facility.
///
/// The serde renames are the fixed mapping from FINRA's wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    #[serde(rename = "reportingFacilityCode", default, deserialize_with = "null_as_default")]
    pub exchange: String,
    #[serde(rename = "totalParQuantity")]
    pub total_volume: f64,
    #[serde(rename = "shortParQuantity")]
    pub short_volume: f64,
    #[serde(rename = "marketCode", default, deserialize_with = "null_as_default")]
    pub market: String,
    #[serde(rename = "tradeReportDate")]
    pub date: NaiveDate,
    #[serde(rename = "securitiesInformationProcessorSymbolIdentifier")]
    pub symbol: String,
    #[serde(rename = "shortExemptParQuantity", default, deserialize_with = "null_as_default")]
    pub exempt_volume: f64,
}

/// Optional columns may be absent or `null`; both read as the zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Volumes summed over every facility for one date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyVolume {
    pub date: NaiveDate,
    pub total_volume: f64,
    pub short_volume: f64,
    pub exempt_volume: f64,
}

impl DailyVolume {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            total_volume: 0.0,
            short_volume: 0.0,
            exempt_volume: 0.0,
        }
    }

    pub fn add(&mut self, record: &TradeRecord) {
        self.total_volume += record.total_volume;
        self.short_volume += record.short_volume;
        self.exempt_volume += record.exempt_volume;
    }

    /// Total minus short volume; negative when the source data is inconsistent
    pub fn long_volume(&self) -> f64 {
        self.total_volume - self.short_volume
    }
}

/// A daily aggregate with its oscillator columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvoPoint {
    #[serde(flatten)]
    pub volume: DailyVolume,
    pub ema_fast: f64,
    pub ema_slow: f64,
    /// `None` where the slow EMA is zero
    pub pvo: Option<f64>,
    /// `None` until the first defined oscillator value
    pub signal: Option<f64>,
}

/// Per-symbol oscillator table in ascending date order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolSeries {
    pub symbol: String,
    pub points: Vec<PvoPoint>,
    pub latest_day: NaiveDate,
}

impl SymbolSeries {
    pub fn latest_day_label(&self) -> String {
        self.latest_day.format("%Y-%m-%d").to_string()
    }
}
