use thiserror::Error;

/// Result type alias for ipscout operations
pub type Result<T> = std::result::Result<T, ReconError>;

/// Errors that can occur while querying a service or running a scanner
#[derive(Error, Debug)]
pub enum ReconError {
    /// A required credential is not present in the environment
    #[error("{var} environment variable is not set")]
    MissingApiKey {
        /// Name of the environment variable
        var: &'static str,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Remote service answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// Remote service has no record for the address
    #[error("not found: {0}")]
    NotFound(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// nmap XML could not be parsed
    #[error("XML error: {0}")]
    Xml(String),

    /// A section of a loosely-typed response is missing or has the wrong shape
    #[error("missing or malformed field: {0}")]
    MissingField(&'static str),

    /// Scanner binary could not be started
    #[error("failed to run {tool}: {source}")]
    Spawn {
        /// Binary name or path
        tool: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Scanner ran but exited unsuccessfully
    #[error("{tool} exited with {status}")]
    ScannerFailed {
        /// Binary name or path
        tool: String,
        /// Exit status description
        status: String,
        /// Merged stdout and stderr
        output: String,
    },
}

impl ReconError {
    /// Returns true if the error comes from missing or invalid configuration
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::MissingApiKey { .. } | Self::Config(_))
    }

    /// Returns true if the response arrived but could not be decoded
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Xml(_) | Self::MissingField(_))
    }

    /// Returns true if the error comes from a scanner subprocess
    #[must_use]
    pub const fn is_subprocess_error(&self) -> bool {
        matches!(self, Self::Spawn { .. } | Self::ScannerFailed { .. })
    }

    /// Returns the HTTP status code if the remote service answered
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Raw scanner output attached to the error, if any
    #[must_use]
    pub fn scanner_output(&self) -> Option<&str> {
        match self {
            Self::ScannerFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}
