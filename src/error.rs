use thiserror::Error;

/// Errors from the recipe read request.
///
/// Any of these surfaces as the full not-found view; there is no retry and
/// no partial rendering.
#[derive(Error, Debug)]
pub enum RecipeFetchError {
    /// Network failure or malformed response body
    #[error("failed to fetch recipe: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered 404 for the requested id
    #[error("recipe {0} not found")]
    NotFound(String),
}

/// Errors from the image synthesis request.
///
/// These never fail the recipe load; the card renders with an inline
/// placeholder instead.
#[derive(Error, Debug)]
pub enum ImageGenerationError {
    /// Network failure or malformed response body
    #[error("image request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("image service rejected the request: {0}")]
    Rejected(String),

    /// Success status but no image URL in the output
    #[error("image service returned no output")]
    EmptyOutput,
}

/// Top-level error for the library entry points and the CLI
#[derive(Error, Debug)]
pub enum ViewError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Recipe fetch failed
    #[error(transparent)]
    Fetch(#[from] RecipeFetchError),

    /// Writing the exported document failed
    #[error("failed to export document: {0}")]
    Export(#[from] std::io::Error),
}
