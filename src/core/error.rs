//=========================================================================
// Error Taxonomy
//=========================================================================
//
// Recoverable conditions raised by the state machine and the logger.
//
// None of these are fatal: the operation that detects one logs it and
// becomes a no-op. The values are still returned so callers (and tests)
// can tell which condition occurred.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::io;
use std::path::PathBuf;

use thiserror::Error;

//=== StateError ==========================================================

/// Conditions rejected by [`StateManager`](crate::core::state::StateManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// `change_state` was called without a target state.
    #[error("attempted to change to an absent state")]
    InvalidTransition,

    /// `pause` was called while a pause overlay is already active.
    #[error("game is already paused")]
    DoublePause,

    /// `resume` was called while not paused.
    #[error("game is not paused")]
    ResumeWithoutPause,

    /// `resume` found no saved pre-pause state.
    #[error("no state was saved before the pause")]
    NoSavedState,
}

impl StateError {
    /// Severity the manager logs this condition with.
    pub fn level(&self) -> crate::core::logger::LogLevel {
        use crate::core::logger::LogLevel;
        match self {
            Self::DoublePause | Self::ResumeWithoutPause => LogLevel::Warning,
            Self::InvalidTransition | Self::NoSavedState => LogLevel::Error,
        }
    }
}

//=== LogError ============================================================

/// Logger failures. Reported on the console, never propagated past the logger.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("logger already initialized")]
    AlreadyInitialized,

    #[error("logger not initialized, message dropped")]
    NotInitialized,

    #[error("unable to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to write to log file: {0}")]
    Write(#[source] io::Error),

    #[error("error while closing log file: {0}")]
    Close(#[source] io::Error),
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logger::LogLevel;

    #[test]
    fn pause_misuse_is_a_warning() {
        assert_eq!(StateError::DoublePause.level(), LogLevel::Warning);
        assert_eq!(StateError::ResumeWithoutPause.level(), LogLevel::Warning);
    }

    #[test]
    fn missing_states_are_errors() {
        assert_eq!(StateError::InvalidTransition.level(), LogLevel::Error);
        assert_eq!(StateError::NoSavedState.level(), LogLevel::Error);
    }

    #[test]
    fn open_error_mentions_path() {
        let err = LogError::Open {
            path: PathBuf::from("/nowhere/log.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let text = err.to_string();
        assert!(text.contains("/nowhere/log.txt"));
        assert!(text.contains("missing"));
    }
}
