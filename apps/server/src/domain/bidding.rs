//! Deal start and the two-round trump auction.

use rand::Rng;

use crate::domain::cards_types::{Card, PlayerId, Suit};
use crate::domain::dealing::shuffled_deck;
use crate::domain::errors::DomainError;
use crate::domain::rules::{FIRST_DEAL, FULL_HAND, PLAYERS, TEAMS};
use crate::domain::state::{next_player, BeloteState, BidRound, DealState, Phase};

/// An auction action: take the trump on offer (naming a suit in the second
/// round) or pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidAction {
    Take { suit: Option<Suit> },
    Pass,
}

/// Start a fresh deal: shuffle, five cards around from the dealer's left,
/// then turn the next card face up as the proposed trump.
pub fn start_deal<R: Rng + ?Sized>(
    dealer: PlayerId,
    deal_number: u32,
    match_scores: [u32; TEAMS],
    rng: &mut R,
) -> DealState {
    let mut deck = shuffled_deck(rng);
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for i in 0..PLAYERS {
        let seat = (dealer as usize + 1 + i) % PLAYERS;
        hands[seat] = deck.split_off(deck.len() - FIRST_DEAL);
    }
    let turned_card = deck.pop();
    let proposed_trump = turned_card.map(|c| c.suit);
    let first_bidder = next_player(dealer);

    DealState {
        phase: Phase::Bidding(BidRound::First),
        dealer,
        current_player: first_bidder,
        deck,
        hands,
        dealt_hands: Default::default(),
        turned_card,
        proposed_trump,
        trump_suit: None,
        trump_chooser: None,
        bidding_player: Some(first_bidder),
        passes: 0,
        trick: None,
        deal_scores: [0; TEAMS],
        match_scores,
        deal_number,
        belote: BeloteState::default(),
    }
}

/// Apply an auction action for `who`. Four passes in the first round reopen
/// the auction on any suit; four passes in the second throw the cards in
/// and redeal with the same dealer.
pub fn bid<R: Rng + ?Sized>(
    state: &mut DealState,
    who: PlayerId,
    action: BidAction,
    rng: &mut R,
) -> Result<(), DomainError> {
    let Phase::Bidding(round) = state.phase else {
        return Err(DomainError::PhaseMismatch);
    };
    if state.bidding_player != Some(who) {
        return Err(DomainError::OutOfTurn);
    }

    match action {
        BidAction::Take { suit } => {
            let trump = match round {
                // The first round offers exactly the turned card's suit; a
                // suit in the payload is ignored.
                BidRound::First => {
                    let Some(proposed) = state.proposed_trump else {
                        return Err(DomainError::PhaseMismatch);
                    };
                    proposed
                }
                BidRound::Second => {
                    let Some(named) = suit else {
                        return Err(DomainError::SuitRequired);
                    };
                    if Some(named) == state.proposed_trump {
                        return Err(DomainError::RefusedSuit);
                    }
                    named
                }
            };
            take(state, who, trump);
            Ok(())
        }
        BidAction::Pass => {
            state.passes += 1;
            if state.passes < PLAYERS as u8 {
                let next = next_player(who);
                state.bidding_player = Some(next);
                state.current_player = next;
                return Ok(());
            }
            match round {
                BidRound::First => {
                    let first_bidder = next_player(state.dealer);
                    state.phase = Phase::Bidding(BidRound::Second);
                    state.bidding_player = Some(first_bidder);
                    state.current_player = first_bidder;
                    state.passes = 0;
                }
                BidRound::Second => {
                    *state = start_deal(
                        state.dealer,
                        state.deal_number + 1,
                        state.match_scores,
                        rng,
                    );
                }
            }
            Ok(())
        }
    }
}

/// Complete the deal for the taker: the turned card joins their hand, every
/// hand is topped up to eight in dealer-relative order, and play opens with
/// the player left of the dealer.
fn take(state: &mut DealState, who: PlayerId, trump: Suit) {
    state.trump_suit = Some(trump);
    state.trump_chooser = Some(who);

    if let Some(card) = state.turned_card.take() {
        state.hands[who as usize].push(card);
    }
    for i in 0..PLAYERS {
        let seat = (state.dealer as usize + 1 + i) % PLAYERS;
        while state.hands[seat].len() < FULL_HAND {
            let Some(card) = state.deck.pop() else { break };
            state.hands[seat].push(card);
        }
    }
    state.dealt_hands = state.hands.clone();

    state.proposed_trump = None;
    state.bidding_player = None;
    state.passes = 0;
    state.phase = Phase::Playing;
    state.current_player = next_player(state.dealer);
}
