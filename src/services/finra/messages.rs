//! Request payloads for the FINRA query API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::{RANKING_LIMIT, RANKING_MIN_VOLUME};
use crate::models::Symbol;

pub const FIELD_SYMBOL: &str = "securitiesInformationProcessorSymbolIdentifier";
pub const FIELD_TRADE_REPORT_DATE: &str = "tradeReportDate";
pub const FIELD_TOTAL_VOLUME: &str = "totalParQuantity";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareType {
    Equal,
    Greater,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareFilter {
    pub compare_type: CompareType,
    pub field_name: String,
    pub field_value: Value,
}

impl CompareFilter {
    pub fn equal(field_name: &str, field_value: Value) -> Self {
        Self {
            compare_type: CompareType::Equal,
            field_name: field_name.to_string(),
            field_value,
        }
    }

    pub fn greater(field_name: &str, field_value: Value) -> Self {
        Self {
            compare_type: CompareType::Greater,
            field_name: field_name.to_string(),
            field_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub compare_filters: Vec<CompareFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl QueryRequest {
    /// Every row for one symbol
    pub fn symbol(symbol: &Symbol) -> Self {
        Self {
            compare_filters: vec![CompareFilter::equal(FIELD_SYMBOL, json!(symbol.as_str()))],
            limit: None,
        }
    }

    /// Rows of one day with more than a million shares traded
    pub fn most_shorted(day: NaiveDate) -> Self {
        Self {
            compare_filters: vec![
                CompareFilter::equal(
                    FIELD_TRADE_REPORT_DATE,
                    json!(day.format("%Y-%m-%d").to_string()),
                ),
                CompareFilter::greater(FIELD_TOTAL_VOLUME, json!(RANKING_MIN_VOLUME as u64)),
            ],
            limit: Some(RANKING_LIMIT),
        }
    }
}
