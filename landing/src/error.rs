//! Error type shared by the browser-facing helpers.
//!
//! Nothing here ever reaches the visitor: callers log the error and fall
//! back (reveal immediately, skip the copy, keep the default subscriber).

use thiserror::Error;

/// Failures of the thin browser glue around the page.
#[derive(Debug, Error)]
pub enum LandingError {
    /// No `window` global: native rendering, tests or a worker context.
    #[error("browser window is not available")]
    NoWindow,

    /// `new IntersectionObserver(..)` threw.
    #[error("intersection observer unavailable: {0}")]
    Observer(String),

    /// A global tracing subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}

/// Result alias for the landing crate.
pub type Result<T> = std::result::Result<T, LandingError>;
