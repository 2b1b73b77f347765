use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum FinraError {
    #[error("FINRA request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("FINRA response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No short volume data for {0}")]
    NoData(String),
}
