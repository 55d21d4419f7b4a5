//! Trick play transitions.

use crate::domain::cards_logic::{trick_points, trick_winner};
use crate::domain::cards_types::{Card, PlayerId};
use crate::domain::errors::DomainError;
use crate::domain::legality::check_play;
use crate::domain::scoring::finalize_deal;
use crate::domain::state::{next_player, team_of, DealState, Phase, Trick};

/// Play `card` for `who`, enforcing turn order and the legality rules.
/// On the fourth card the trick resolves: the winner leads next and their
/// team collects the points; the eighth resolution closes the deal.
pub fn play_card(state: &mut DealState, who: PlayerId, card: Card) -> Result<(), DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::PhaseMismatch);
    }
    if state.current_player != who {
        return Err(DomainError::OutOfTurn);
    }
    check_play(state, who, card)?;
    let Some(trump) = state.trump_suit else {
        return Err(DomainError::PhaseMismatch);
    };

    let hand = &mut state.hands[who as usize];
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::CardNotInHand);
    };
    hand.remove(pos);

    // A resolved trick stays visible until the next card starts a new one.
    if state.trick.as_ref().map_or(true, |t| t.is_complete()) {
        state.trick = Some(Trick::new(who));
    }
    let Some(trick) = state.trick.as_mut() else {
        return Err(DomainError::PhaseMismatch);
    };
    trick.plays.push((who, card));

    if !trick.is_complete() {
        state.current_player = next_player(who);
        return Ok(());
    }

    let Some(winner) = trick_winner(&trick.plays, trump) else {
        return Err(DomainError::PhaseMismatch);
    };
    trick.winner = Some(winner);
    let points = trick_points(&trick.plays, trump);
    state.deal_scores[team_of(winner)] += points;
    state.current_player = winner;

    if state.hands.iter().all(|h| h.is_empty()) {
        finalize_deal(state, winner);
    }
    Ok(())
}
