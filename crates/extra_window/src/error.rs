//! Window management errors

use thiserror::Error;

/// Errors reported by the windowing capability layer.
#[derive(Error, Debug)]
pub enum WindowError {
    /// The native windowing library failed to initialize.
    #[error("window system initialization failed")]
    InitializationFailed,

    /// The native layer could not create a window or its rendering context.
    #[error("native window creation failed")]
    CreationFailed,
}

/// Convenience alias for window operations that can fail.
pub type WindowResult<T> = Result<T, WindowError>;
