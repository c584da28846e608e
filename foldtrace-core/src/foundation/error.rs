/// Convenience result type used across Foldtrace.
pub type FoldtraceResult<T> = Result<T, FoldtraceError>;

/// Top-level error taxonomy used by renderer APIs.
#[derive(thiserror::Error, Debug)]
pub enum FoldtraceError {
    /// Invalid scene configuration or render-request input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Degenerate camera basis (eye/target coincide, forward parallel to world-up).
    #[error("camera error: {0}")]
    Camera(String),

    /// Renderer-internal failures (worker pool construction, buffer sizing).
    #[error("render error: {0}")]
    Render(String),

    /// PNG serialization or output IO failures at the encoding boundary.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FoldtraceError {
    /// Build a [`FoldtraceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FoldtraceError::Camera`] value.
    pub fn camera(msg: impl Into<String>) -> Self {
        Self::Camera(msg.into())
    }

    /// Build a [`FoldtraceError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FoldtraceError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
