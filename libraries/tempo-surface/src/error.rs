use thiserror::Error;

/// Errors reported by the collaborators the renderer consumes
///
/// The renderer itself never surfaces these to its caller: a failing
/// collaborator degrades the render instead.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Controller handle could not be acquired or read
    #[error("Controller unavailable: {0}")]
    Controller(String),

    /// Artwork could not be fetched or decoded
    #[error("Artwork fetch failed: {0}")]
    Artwork(String),

    /// Surface host rejected an operation
    #[error("Surface host error: {0}")]
    Host(String),
}

/// Result type for surface operations
pub type Result<T> = std::result::Result<T, SurfaceError>;
