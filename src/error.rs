use crate::types::WorkoutKind;
use thiserror::Error;

/// Errors raised while turning a sensor package into a workout.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout type: {0:?} (expected one of SWM, RUN, WLK)")]
    UnknownWorkoutType(String),

    #[error("{kind} expects {expected} readings, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("invalid {field} reading {value}: {reason}")]
    InvalidReading {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type WorkoutResult<T> = Result<T, WorkoutError>;
