//! Unit tests for volume EMA

use chrono::NaiveDate;
use shortvol::indicators::trend::{calculate_volume_ema, calculate_volume_emas};
use shortvol::models::DailyVolume;

fn create_test_days(volumes: &[f64]) -> Vec<DailyVolume> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    volumes
        .iter()
        .enumerate()
        .map(|(i, &v)| DailyVolume {
            date: start + chrono::Days::new(i as u64),
            total_volume: v,
            short_volume: v / 2.0,
            exempt_volume: 0.0,
        })
        .collect()
}

#[test]
fn test_volume_ema_uses_total_volume() {
    let days = create_test_days(&[100.0, 200.0]);
    let ema = calculate_volume_ema(&days, 12);
    assert_eq!(ema[0], 100.0);
    assert!((ema[1] - 1500.0 / 13.0).abs() < 1e-9);
}

#[test]
fn test_calculate_multiple_emas() {
    let days = create_test_days(&[100.0, 200.0, 150.0]);
    let emas = calculate_volume_emas(&days, &[12, 26]);
    assert_eq!(emas.len(), 2);
    assert!(emas.iter().all(|e| e.len() == 3));
    // the slower average lags further behind a rising series
    assert!(emas[0][1] > emas[1][1]);
}
