use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProlomError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Symbol '{0}' is not in the alphabet")]
    Symbol(char),
}

pub type ProlomResult<T> = Result<T, ProlomError>;
