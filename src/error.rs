use std::path::PathBuf;

/// Errors related to configuration loading and parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config at {}: {message}", path.display())]
    ParseError { path: PathBuf, message: String },
}

/// Errors produced by the marketplace API client.
///
/// Transport failures and unparseable bodies are the only client-originated
/// failure modes; HTTP status codes are not inspected, so a 4xx/5xx body
/// that happens to match the expected shape is returned as data.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Cannot reach the AgentHub API: {message}")]
    Connection { message: String },

    #[error("Malformed response from {path}: {message}")]
    MalformedResponse { path: String, message: String },
}
