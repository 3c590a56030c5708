use thiserror::Error;

#[derive(Error, Debug)]
pub enum OddsError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid assignment '{0}': expected NAME=VALUE")]
    InvalidAssignment(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, OddsError>;
