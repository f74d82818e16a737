//! Reading-progress state machine for a single review.
//!
//! This is a replace-on-transition machine: nothing mutates in place, every
//! transition returns a fresh [`ReviewState`] stamped with the current time.
//! Any state is reachable from any state; the only guard is that moving to
//! `Completed` requires a completion timestamp.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::time;

/// Discrete reading progress, exchanged over the wire as 0/1/2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ReviewStateKind {
    NotYet = 0,
    InProgress = 1,
    Completed = 2,
}

impl ReviewStateKind {
    pub fn from_i32(value: i32) -> AppResult<Self> {
        match value {
            0 => Ok(ReviewStateKind::NotYet),
            1 => Ok(ReviewStateKind::InProgress),
            2 => Ok(ReviewStateKind::Completed),
            other => Err(AppError::domain_validation(
                "ReviewStateKind",
                format!("convert is failed from int. value:{other}"),
            )),
        }
    }
}

impl From<ReviewStateKind> for i32 {
    fn from(kind: ReviewStateKind) -> Self {
        kind as i32
    }
}

impl TryFrom<i32> for ReviewStateKind {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        ReviewStateKind::from_i32(value)
    }
}

impl std::fmt::Display for ReviewStateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStateKind::NotYet => write!(f, "not_yet"),
            ReviewStateKind::InProgress => write!(f, "in_progress"),
            ReviewStateKind::Completed => write!(f, "completed"),
        }
    }
}

/// State plus completion bookkeeping. `completed_at` is set exactly when the
/// state is `Completed`; reopening a finished review clears it again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    state: ReviewStateKind,
    completed_at: Option<DateTime<FixedOffset>>,
    last_modified_at: DateTime<FixedOffset>,
}

impl ReviewState {
    /// Fresh `NotYet` state stamped with the current time.
    pub fn new() -> Self {
        Self {
            state: ReviewStateKind::NotYet,
            completed_at: None,
            last_modified_at: time::now_jst(),
        }
    }

    /// Rehydrates a persisted state without re-running transition rules.
    pub fn from_parts(
        state: ReviewStateKind,
        completed_at: Option<DateTime<FixedOffset>>,
        last_modified_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            state,
            completed_at,
            last_modified_at,
        }
    }

    /// Applies a transition, returning the replacement state.
    ///
    /// A `Completed` target requires `completed_at`, which is normalized to
    /// JST. Every other target clears the completion timestamp.
    pub fn update(
        &self,
        target: ReviewStateKind,
        completed_at: Option<DateTime<FixedOffset>>,
    ) -> AppResult<ReviewState> {
        match target {
            ReviewStateKind::InProgress => Ok(Self {
                state: ReviewStateKind::InProgress,
                completed_at: None,
                last_modified_at: time::now_jst(),
            }),
            ReviewStateKind::Completed => {
                let completed_at = completed_at.ok_or_else(|| {
                    AppError::domain_validation(
                        "ReviewState",
                        "try to set completed. but datetime is none.",
                    )
                })?;
                Ok(Self {
                    state: ReviewStateKind::Completed,
                    completed_at: Some(time::to_jst(completed_at)),
                    last_modified_at: time::now_jst(),
                })
            }
            ReviewStateKind::NotYet => Ok(Self {
                state: ReviewStateKind::NotYet,
                completed_at: None,
                last_modified_at: time::now_jst(),
            }),
        }
    }

    pub fn state(&self) -> ReviewStateKind {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == ReviewStateKind::Completed
    }

    pub fn completed_at(&self) -> Option<DateTime<FixedOffset>> {
        self.completed_at
    }

    pub fn last_modified_at(&self) -> DateTime<FixedOffset> {
        self.last_modified_at
    }
}

impl Default for ReviewState {
    fn default() -> Self {
        Self::new()
    }
}
