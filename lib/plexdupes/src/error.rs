use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlexError>;

#[derive(Debug, Error)]
pub enum PlexError {
    #[error("Plex connection is not configured: missing {0}")]
    NotConfigured(&'static str),

    #[error("Invalid server address: {0}")]
    Url(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Could not read response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("Failed to decode {document} document: {source}")]
    Decode {
        document: &'static str,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlexError {
    /// Process exit status for this error.
    ///
    /// Network failures keep status 1; every other kind gets its own code.
    pub fn exit_code(&self) -> u8 {
        match self {
            PlexError::Transport(_) | PlexError::Api { .. } => 1,
            PlexError::NotConfigured(_) | PlexError::Url(_) => 2,
            PlexError::Read(_) => 3,
            PlexError::Decode { .. } => 4,
            PlexError::Io(_) | PlexError::Json(_) => 5,
        }
    }
}
