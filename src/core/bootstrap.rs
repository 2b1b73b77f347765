//! Startup sequence
//!
//! Order: fetch the default symbol, fetch the ranking for its latest day,
//! derive the choice set and build the initial charts. The server starts
//! only after this returns.

use tracing::info;

use crate::core::dashboard::Dashboard;
use crate::error::Result;
use crate::models::Symbol;
use crate::services::ShortVolumeProvider;

pub async fn bootstrap(
    provider: &(dyn ShortVolumeProvider + Send + Sync),
    default_symbol: &Symbol,
) -> Result<Dashboard> {
    info!(symbol = %default_symbol, "Bootstrap: fetching default symbol");
    let series = provider.fetch_symbol_series(default_symbol).await?;

    info!(day = %series.latest_day, "Bootstrap: fetching most shorted ranking");
    let ranking = provider.fetch_most_shorted(series.latest_day).await?;

    let dashboard = Dashboard::new(default_symbol.clone(), &series, &ranking);
    info!(
        choices = dashboard.choices.len(),
        ranking_day = %dashboard.ranking_day,
        "Bootstrap: dashboard ready"
    );
    Ok(dashboard)
}
