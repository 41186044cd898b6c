use thiserror::Error;

/// Failures of the window demo lifecycle. Each variant carries the
/// message reported by the platform layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("failed to initialize video subsystem: {0}")]
    Init(String),

    #[error("failed to create window: {0}")]
    WindowCreation(String),

    #[error("failed to acquire drawing target: {0}")]
    SurfaceAcquisition(String),

    /// Recoverable for single triangle lines, fatal for the fill step.
    #[error("draw call failed: {0}")]
    Draw(String),

    #[error("failed to destroy window: {0}")]
    Teardown(String),
}

pub type Result<T> = std::result::Result<T, Error>;
