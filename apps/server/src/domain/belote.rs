//! The belote/rebelote declaration (trump king + queen, 20 points).

use crate::domain::cards_types::{Card, PlayerId, Rank};
use crate::domain::errors::DomainError;
use crate::domain::rules::BELOTE_BONUS;
use crate::domain::state::{team_of, DealState, Phase};

/// Record an announcement by `who`. The first announcement claims the
/// declaration and is verified against the cards the player was dealt; the
/// second, by the same player, completes it. The 20 points are credited to
/// the holder's team when the deal is scored.
pub fn announce(state: &mut DealState, who: PlayerId) -> Result<(), DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::PhaseMismatch);
    }
    let Some(trump) = state.trump_suit else {
        return Err(DomainError::PhaseMismatch);
    };

    match state.belote.stage {
        0 => {
            let dealt = &state.dealt_hands[who as usize];
            let has_pair = dealt.contains(&Card::new(trump, Rank::King))
                && dealt.contains(&Card::new(trump, Rank::Queen));
            if !has_pair {
                return Err(DomainError::BeloteNotHeld);
            }
            state.belote.stage = 1;
            state.belote.holder = Some(who);
            state.belote.team = Some(team_of(who));
            state.belote.points = BELOTE_BONUS;
            Ok(())
        }
        1 => {
            if state.belote.holder != Some(who) {
                return Err(DomainError::NotBeloteHolder);
            }
            state.belote.stage = 2;
            Ok(())
        }
        _ => Err(DomainError::BeloteComplete),
    }
}
