use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Reference table error: {0}")]
    Reference(String),

    #[error("Root directory not found: {0}")]
    RootNotFound(String),

    #[error("{0}")]
    Other(String),
}
