use thiserror::Error;

/// Error taxonomy for the session engine.
///
/// `SideEffect` is only ever produced by event sinks; the engine logs and
/// swallows it, so public engine methods never return it.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("persistence: {0}")]
    Persistence(String),

    #[error("side effect: {0}")]
    SideEffect(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        EngineError::Validation(msg.into())
    }

    pub fn session_not_found(id: &str) -> Self {
        EngineError::NotFound(format!("session {id}"))
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        EngineError::Persistence(msg.into())
    }
}
