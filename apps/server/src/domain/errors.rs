use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rule-level rejection reasons. Commands that fail with one of these have
/// not modified any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    PhaseMismatch,
    OutOfTurn,
    CardNotInHand,
    MustFollowSuit,
    MustTrump,
    MustOvertrump,
    MustUndertrump,
    SuitRequired,
    RefusedSuit,
    BeloteNotHeld,
    NotBeloteHolder,
    BeloteComplete,
    ParseCard(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::PhaseMismatch => write!(f, "not allowed in the current phase"),
            DomainError::OutOfTurn => write!(f, "not your turn"),
            DomainError::CardNotInHand => write!(f, "card not in hand"),
            DomainError::MustFollowSuit => write!(f, "must follow the lead suit"),
            DomainError::MustTrump => write!(f, "must play a trump"),
            DomainError::MustOvertrump => write!(f, "must play a higher trump"),
            DomainError::MustUndertrump => write!(f, "must still play a trump"),
            DomainError::SuitRequired => write!(f, "a suit is required to take in the second round"),
            DomainError::RefusedSuit => write!(f, "that suit was already turned down"),
            DomainError::BeloteNotHeld => {
                write!(f, "belote requires both the trump king and queen")
            }
            DomainError::NotBeloteHolder => {
                write!(f, "only the belote holder may announce rebelote")
            }
            DomainError::BeloteComplete => write!(f, "belote has already been fully announced"),
            DomainError::ParseCard(s) => write!(f, "parse card: {s}"),
        }
    }
}

impl Error for DomainError {}
