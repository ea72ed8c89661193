use std::path::PathBuf;

/// Errors from retrieving or decoding a portfolio document.
///
/// The `Display` text is the human-readable description kept alongside the
/// fallback document when a load fails.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The authenticated source has no credential to send.
    #[error("GitHub token not found in configuration")]
    MissingCredential,

    /// The HTTP request itself failed (network, DNS, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("{source_name} returned HTTP {status}: {body}")]
    Status {
        source_name: &'static str,
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The payload is not a valid portfolio document.
    #[error("Invalid portfolio document: {0}")]
    Decode(#[from] serde_json::Error),

    /// The contents API returned content that is not valid base64.
    #[error("Invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The contents API returned an encoding other than base64.
    #[error("Unsupported content encoding '{0}'")]
    UnsupportedEncoding(String),

    /// The decoded content is not UTF-8 text.
    #[error("Decoded content is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The bundled document file could not be read.
    #[error("Failed to read bundled document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
