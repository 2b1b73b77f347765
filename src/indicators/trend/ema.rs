//! EMA (Exponential Moving Average) of daily total volume

use crate::common::math;
use crate::models::DailyVolume;

/// EMA of total volume for every day, oldest first
pub fn calculate_volume_ema(days: &[DailyVolume], span: usize) -> Vec<f64> {
    let volumes: Vec<f64> = days.iter().map(|d| d.total_volume).collect();
    math::ema_series(&volumes, span)
}

/// Calculate several volume EMAs at once, in the order of `spans`
pub fn calculate_volume_emas(days: &[DailyVolume], spans: &[usize]) -> Vec<Vec<f64>> {
    spans
        .iter()
        .map(|&span| calculate_volume_ema(days, span))
        .collect()
}
