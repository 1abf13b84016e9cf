//! Error types for list formatting.

/// Errors produced while configuring or running a render.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bullet option outside `-`, `*`, `+`.
    #[error("invalid bullet {0:?}: expected one of \"-\", \"*\", \"+\"")]
    InvalidBullet(String),

    /// Ordered marker option outside `.`, `)`.
    #[error("invalid ordered marker {0:?}: expected one of \".\", \")\"")]
    InvalidOrderedMarker(String),

    /// Options file could not be parsed.
    #[error("options error: {0}")]
    Options(#[from] toml::de::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
