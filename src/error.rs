use thiserror::Error;

/// Errors raised by the drawing engine.
///
/// All of them are recoverable: the host is expected to log the error and
/// return the engine to the idle state (no active stroke).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An operation was invoked outside its valid lifecycle
    #[error("Invalid state for {operation}: {reason}")]
    InvalidState {
        operation: &'static str,
        reason: &'static str,
    },

    /// A point with a NaN or infinite coordinate was supplied
    #[error("Point ({x}, {y}) is not finite")]
    NonFinitePoint { x: f32, y: f32 },

    /// Engine configuration could not be parsed or is out of range
    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    pub(crate) fn invalid_state(operation: &'static str, reason: &'static str) -> Self {
        Self::InvalidState { operation, reason }
    }

    /// True for lifecycle errors, which the host recovers from by cancelling the drag
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
