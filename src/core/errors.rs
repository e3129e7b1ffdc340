use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordmineError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(Box<csv::Error>),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("AnkiConnect error: {0}")]
    AnkiConnect(String),

    #[error("Vocabulary file error: {0}")]
    DataFormat(String),
}

impl From<std::io::Error> for WordmineError {
    fn from(error: std::io::Error) -> Self {
        WordmineError::Io(Box::new(error))
    }
}

impl From<csv::Error> for WordmineError {
    fn from(error: csv::Error) -> Self {
        WordmineError::Csv(Box::new(error))
    }
}

impl From<reqwest::Error> for WordmineError {
    fn from(error: reqwest::Error) -> Self {
        WordmineError::Reqwest(Box::new(error))
    }
}
