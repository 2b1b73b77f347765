//! Shared fixtures: FINRA-shaped rows and wiremock mounts

use serde_json::{json, Value};
use shortvol::services::finra::client::REG_SHO_DAILY_PATH;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LATEST_DAY: &str = "2024-05-10";

pub fn finra_row(symbol: &str, date: &str, facility: &str, total: f64, short: f64) -> Value {
    json!({
        "reportingFacilityCode": facility,
        "totalParQuantity": total,
        "shortParQuantity": short,
        "marketCode": "Q",
        "tradeReportDate": date,
        "securitiesInformationProcessorSymbolIdentifier": symbol,
        "shortExemptParQuantity": 0.0
    })
}

/// Five trading days across two facilities, newest day = LATEST_DAY
pub fn symbol_rows(symbol: &str) -> Value {
    let days = ["2024-05-06", "2024-05-07", "2024-05-08", "2024-05-09", LATEST_DAY];
    let volumes = [100.0, 200.0, 150.0, 300.0, 250.0];
    let rows: Vec<Value> = days
        .iter()
        .zip(volumes)
        .flat_map(|(day, volume)| {
            vec![
                finra_row(symbol, day, "N", volume - 50.0, 20.0),
                finra_row(symbol, day, "Q", 50.0, 10.0),
            ]
        })
        .collect();
    Value::Array(rows)
}

pub fn ranking_rows() -> Value {
    json!([
        finra_row("TSLA", LATEST_DAY, "N", 3_000_000.0, 2_400_000.0),
        finra_row("TSLA", LATEST_DAY, "Q", 2_000_000.0, 600_000.0),
        finra_row("AAPL", LATEST_DAY, "N", 4_000_000.0, 1_000_000.0),
        finra_row("GME", LATEST_DAY, "N", 1_000_001.0, 900_000.0),
        finra_row("EDGE", LATEST_DAY, "N", 1_000_000.0, 999_000.0),
    ])
}

pub fn symbol_query(symbol: &str) -> Value {
    json!({
        "compareFilters": [{
            "compareType": "equal",
            "fieldName": "securitiesInformationProcessorSymbolIdentifier",
            "fieldValue": symbol
        }]
    })
}

pub fn ranking_query(day: &str) -> Value {
    json!({
        "compareFilters": [
            { "compareType": "equal", "fieldName": "tradeReportDate", "fieldValue": day },
            { "compareType": "greater", "fieldName": "totalParQuantity", "fieldValue": 1000000 }
        ],
        "limit": 5000
    })
}

pub async fn mock_query(server: &MockServer, query: Value, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(REG_SHO_DAILY_PATH))
        .and(header("accept", "application/json"))
        .and(body_json(query))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mock_symbol(server: &MockServer, symbol: &str) {
    mock_query(
        server,
        symbol_query(symbol),
        ResponseTemplate::new(200).set_body_json(symbol_rows(symbol)),
    )
    .await;
}

pub async fn mock_ranking(server: &MockServer) {
    mock_query(
        server,
        ranking_query(LATEST_DAY),
        ResponseTemplate::new(200).set_body_json(ranking_rows()),
    )
    .await;
}

/// FINRA answers an unknown symbol with 204 and no body
pub async fn mock_unknown_symbol(server: &MockServer, symbol: &str) {
    mock_query(server, symbol_query(symbol), ResponseTemplate::new(204)).await;
}
