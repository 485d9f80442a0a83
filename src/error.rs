use thiserror::Error;

/// Unified error type for kong-data.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("request params carry neither an id nor a name")]
    MissingIdentifier,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("encode error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}
