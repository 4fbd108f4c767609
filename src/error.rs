//! Error taxonomy for the goalie engine.
//!
//! Three classes, none of them retried:
//! - configuration errors, surfaced at construction;
//! - invalid histories handed to the reaction tracker (caller bug);
//! - strategy labels outside the five known ones.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GoalieError {
    #[error("invalid field configuration: {reason}")]
    InvalidField { reason: String },

    #[error("prior strength must be a positive integer, got {value}")]
    InvalidPriorStrength { value: u32 },

    #[error("invalid lag configuration: {reason}")]
    InvalidLag { reason: String },

    #[error("field yields no critical points (ball starts at x={ball_start_x}, goalie at x={bar_x})")]
    NoCriticalPoints { ball_start_x: f64, bar_x: f64 },

    #[error("could not parse configuration: {0}")]
    Parse(String),

    #[error("invalid history: {positions} positions vs {times} timestamps")]
    InvalidHistory { positions: usize, times: usize },

    #[error("unknown strategy label: {0:?}")]
    UnknownStrategyLabel(String),
}

impl GoalieError {
    /// True for everything that can only come out of building a goalie.
    pub fn is_configuration(&self) -> bool {
        match self {
            GoalieError::InvalidField { .. }
            | GoalieError::InvalidPriorStrength { .. }
            | GoalieError::InvalidLag { .. }
            | GoalieError::NoCriticalPoints { .. }
            | GoalieError::Parse(_) => true,
            GoalieError::InvalidHistory { .. } | GoalieError::UnknownStrategyLabel(_) => false,
        }
    }

    pub(crate) fn field(reason: impl Into<String>) -> Self {
        GoalieError::InvalidField { reason: reason.into() }
    }

    pub(crate) fn lag(reason: impl Into<String>) -> Self {
        GoalieError::InvalidLag { reason: reason.into() }
    }
}

impl From<serde_json::Error> for GoalieError {
    fn from(e: serde_json::Error) -> Self {
        GoalieError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GoalieError>;
