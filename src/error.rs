//! Scene configuration errors
//!
//! Every failure in the scene core is a programming or configuration mistake:
//! the scene registry is fully known at startup, so nothing here is retryable.

use thiserror::Error;

/// Errors raised by the scene manager
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// A transition or lookup named a scene that was never registered
    #[error("unknown scene `{0}`")]
    UnknownScene(String),

    /// Two scenes were registered under the same name
    #[error("scene `{0}` is already registered")]
    DuplicateScene(String),

    /// A per-frame call arrived before the first scene change
    #[error("no active scene; call change_scene first")]
    NoActiveScene,
}

pub type SceneResult<T> = Result<T, SceneError>;
