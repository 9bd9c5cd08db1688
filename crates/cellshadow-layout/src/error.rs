//! Error types for cellshadow-layout.

use thiserror::Error;

/// Errors raised while loading or validating a [`ShadowConfig`](crate::ShadowConfig).
///
/// The correction passes themselves never fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML parse error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse or serialize error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Viewport size below zero.
    #[error("Invalid window size: {0} (must be >= 0)")]
    NegativeWindowSize(i32),

    /// Render offset below zero.
    #[error("Invalid render offset: {0} (must be >= 0)")]
    NegativeRenderOffset(i32),
}
