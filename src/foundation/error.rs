/// Convenience result type used across chromeify.
pub type ChromeifyResult<T> = Result<T, ChromeifyError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ChromeifyError {
    /// A theme tile or other bundled asset could not be loaded or decoded.
    #[error("asset load error ({piece}): {message}")]
    AssetLoad {
        /// Name of the asset that failed.
        piece: String,
        /// Underlying failure, flattened to text.
        message: String,
    },

    /// User-supplied content is not a decodable raster image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Output encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// The drop-shadow (or other) post-processing step failed.
    #[error("post-process error: {0}")]
    PostProcess(String),

    /// Invalid user-provided parameters or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChromeifyError {
    /// Build a [`ChromeifyError::AssetLoad`] value.
    pub fn asset_load(piece: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::AssetLoad {
            piece: piece.into(),
            message: message.to_string(),
        }
    }

    /// Build a [`ChromeifyError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ChromeifyError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ChromeifyError::PostProcess`] value.
    pub fn post_process(msg: impl Into<String>) -> Self {
        Self::PostProcess(msg.into())
    }

    /// Build a [`ChromeifyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the error was caused by bad caller input rather than an internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Validation(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
