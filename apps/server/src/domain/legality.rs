//! Pure legality oracle for card plays.
//!
//! Encodes the belote obligations: follow the lead suit when able; when
//! void, cut with a trump unless the partner is master; over a cut, play a
//! higher trump when able, a lower one when not. The oracle never mutates
//! its inputs; turn enforcement is `tricks::play_card`'s job.

use crate::domain::cards_logic::{hand_has_suit, trick_winner, trump_strength};
use crate::domain::cards_types::{Card, PlayerId};
use crate::domain::errors::DomainError;
use crate::domain::state::{same_team, DealState, Phase};

/// Decide whether `who` may play `card` into the current trick.
pub fn check_play(state: &DealState, who: PlayerId, card: Card) -> Result<(), DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::PhaseMismatch);
    }
    let hand = state.hand(who);
    if !hand.contains(&card) {
        return Err(DomainError::CardNotInHand);
    }
    let Some(trump) = state.trump_suit else {
        return Err(DomainError::PhaseMismatch);
    };

    // Leading a trick (none open, or the previous one is complete and about
    // to be replaced): any card in hand goes.
    let open_trick = state
        .trick
        .as_ref()
        .filter(|t| !t.plays.is_empty() && !t.is_complete());
    let Some(trick) = open_trick else {
        return Ok(());
    };
    let Some(lead) = trick.lead_suit() else {
        return Ok(());
    };

    let master = trick_winner(&trick.plays, trump);
    let partner_is_master = master.is_some_and(|w| same_team(w, who));
    let top_trump = trick
        .plays
        .iter()
        .filter(|&&(_, c)| c.suit == trump)
        .map(|&(_, c)| trump_strength(c.rank))
        .max();

    // Following the lead suit.
    if card.suit == lead {
        if lead != trump {
            return Ok(());
        }
        // Trump was led: overtrump when able, unless the partner is master.
        let Some(top) = top_trump else {
            return Ok(());
        };
        if partner_is_master {
            return Ok(());
        }
        let can_overtrump = hand
            .iter()
            .any(|c| c.suit == trump && trump_strength(c.rank) > top);
        if can_overtrump && trump_strength(card.rank) <= top {
            return Err(DomainError::MustOvertrump);
        }
        return Ok(());
    }

    // Void of the lead suit is required before anything else is allowed.
    if hand_has_suit(hand, lead) {
        return Err(DomainError::MustFollowSuit);
    }

    // No lead suit and no trumps: free discard.
    if !hand_has_suit(hand, trump) {
        return Ok(());
    }

    match top_trump {
        // Nobody has cut yet.
        None => {
            if partner_is_master || card.suit == trump {
                Ok(())
            } else {
                Err(DomainError::MustTrump)
            }
        }
        // The trick has already been cut.
        Some(top) => {
            if partner_is_master {
                return Ok(());
            }
            let can_overtrump = hand
                .iter()
                .any(|c| c.suit == trump && trump_strength(c.rank) > top);
            if can_overtrump {
                if card.suit == trump && trump_strength(card.rank) > top {
                    Ok(())
                } else {
                    Err(DomainError::MustOvertrump)
                }
            } else if card.suit == trump {
                // Unable to beat the cut, but still obliged to trump.
                Ok(())
            } else {
                Err(DomainError::MustUndertrump)
            }
        }
    }
}

/// Cards `who` could legally play right now, sorted for display. Empty
/// outside the playing phase. Turn order is not considered.
pub fn legal_moves(state: &DealState, who: PlayerId) -> Vec<Card> {
    if state.phase != Phase::Playing {
        return Vec::new();
    }
    let mut moves: Vec<Card> = state
        .hand(who)
        .iter()
        .copied()
        .filter(|&c| check_play(state, who, c).is_ok())
        .collect();
    moves.sort();
    moves
}
