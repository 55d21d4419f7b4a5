//! Shared builders for domain tests.

use crate::domain::cards_types::{Card, PlayerId, Suit};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{BeloteState, DealState, Phase, Trick};

pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|t| t.parse().expect("hardcoded valid card token"))
        .collect()
}

/// A mid-play state with fixed hands and trump. Dealer 3, so seat 0 opens
/// the first trick. `dealt_hands` mirrors `hands`.
pub fn playing_state(hands: [Vec<Card>; PLAYERS], trump: Suit) -> DealState {
    DealState {
        phase: Phase::Playing,
        dealer: 3,
        current_player: 0,
        deck: Vec::new(),
        dealt_hands: hands.clone(),
        hands,
        turned_card: None,
        proposed_trump: None,
        trump_suit: Some(trump),
        trump_chooser: Some(0),
        bidding_player: None,
        passes: 0,
        trick: None,
        deal_scores: [0; 2],
        match_scores: [0; 2],
        deal_number: 1,
        belote: BeloteState::default(),
    }
}

/// Install an open trick directly, bypassing `play_card`, and point the
/// turn at the next seat to act.
pub fn with_open_trick(state: &mut DealState, leader: PlayerId, plays: &[(PlayerId, &str)]) {
    let mut trick = Trick::new(leader);
    for &(p, token) in plays {
        trick
            .plays
            .push((p, token.parse().expect("hardcoded valid card token")));
    }
    state.current_player = (leader as usize + plays.len()) as u8 % PLAYERS as u8;
    state.trick = Some(trick);
}
