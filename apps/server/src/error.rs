use thiserror::Error;

use crate::domain::errors::DomainError;

/// Edge-level error taxonomy. Every rejected command maps to exactly one
/// variant and is reported only to the client that issued it; none of them
/// affect the room or the other clients.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Malformed envelope, unknown type, missing required field.
    #[error("protocol error: {detail}")]
    Protocol { detail: String },
    /// Room lookup/membership failures (full, not found, not joined).
    #[error("{detail}")]
    Room { detail: String },
    /// No seat assignable (shielded by the full-room check).
    #[error("{detail}")]
    Seat { detail: String },
    /// Game lifecycle misuse (start without four players, double start).
    #[error("cannot start game: {detail}")]
    State { detail: String },
    /// Rule machine rejections: wrong phase, wrong turn, illegal card,
    /// invalid bid.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    pub fn protocol(detail: impl Into<String>) -> Self {
        Self::Protocol {
            detail: detail.into(),
        }
    }

    pub fn room(detail: impl Into<String>) -> Self {
        Self::Room {
            detail: detail.into(),
        }
    }

    pub fn seat(detail: impl Into<String>) -> Self {
        Self::Seat {
            detail: detail.into(),
        }
    }

    pub fn state(detail: impl Into<String>) -> Self {
        Self::State {
            detail: detail.into(),
        }
    }
}
