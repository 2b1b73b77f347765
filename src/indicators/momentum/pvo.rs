//! PVO (Percentage Volume Oscillator) indicator

use crate::common::math;
use crate::config::{PVO_FAST_SPAN, PVO_SIGNAL_SPAN, PVO_SLOW_SPAN};
use crate::indicators::trend::calculate_volume_ema;
use crate::models::{DailyVolume, PvoPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PvoParams {
    pub fast_span: usize,
    pub slow_span: usize,
    pub signal_span: usize,
}

impl Default for PvoParams {
    fn default() -> Self {
        Self {
            fast_span: PVO_FAST_SPAN,
            slow_span: PVO_SLOW_SPAN,
            signal_span: PVO_SIGNAL_SPAN,
        }
    }
}

/// Calculate the PVO table
///
/// PVO = 100 * (EMA(fast) - EMA(slow)) / EMA(slow)
/// Signal = EMA(signal) of PVO
///
/// `days` must be in ascending date order. A zero slow EMA leaves that
/// day's PVO undefined; the signal line carries across it.
pub fn calculate_pvo(days: &[DailyVolume], params: PvoParams) -> Vec<PvoPoint> {
    let fast = calculate_volume_ema(days, params.fast_span);
    let slow = calculate_volume_ema(days, params.slow_span);

    let pvo: Vec<Option<f64>> = fast
        .iter()
        .zip(&slow)
        .map(|(&f, &s)| math::percentage(f - s, s))
        .collect();
    let signal = math::ema_series_sparse(&pvo, params.signal_span);

    days.iter()
        .enumerate()
        .map(|(i, day)| PvoPoint {
            volume: *day,
            ema_fast: fast[i],
            ema_slow: slow[i],
            pvo: pvo[i],
            signal: signal[i],
        })
        .collect()
}

/// Calculate PVO with default spans (12, 26, 9)
pub fn calculate_pvo_default(days: &[DailyVolume]) -> Vec<PvoPoint> {
    calculate_pvo(days, PvoParams::default())
}
