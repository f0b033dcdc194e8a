use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Item at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Invalid(#[from] serde_json::Error),
}
