//! Per-viewer snapshots of a deal.
//!
//! Each seated player receives their own view: their full hand, hand counts
//! for everyone else, and the public facts of the deal. The engine state
//! itself never crosses the wire.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, PlayerId, Suit};
use crate::domain::legality::legal_moves;
use crate::domain::rules::{PLAYERS, TEAMS};
use crate::domain::state::{BidRound, DealState, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseView {
    BiddingFirstRound,
    BiddingSecondRound,
    Playing,
    Finished,
}

impl From<Phase> for PhaseView {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Bidding(BidRound::First) => PhaseView::BiddingFirstRound,
            Phase::Bidding(BidRound::Second) => PhaseView::BiddingSecondRound,
            Phase::Playing => PhaseView::Playing,
            Phase::Finished => PhaseView::Finished,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrickView {
    pub leader: PlayerId,
    pub plays: Vec<(PlayerId, Card)>,
    pub winner: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeloteView {
    pub stage: u8,
    pub team: Option<usize>,
}

/// What one seat is shown after every accepted command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealSnapshot {
    pub phase: PhaseView,
    pub deal_number: u32,
    pub dealer: PlayerId,
    pub current_player: PlayerId,
    pub your_seat: PlayerId,
    pub your_hand: Vec<Card>,
    pub hand_counts: [u8; PLAYERS],
    pub turned_card: Option<Card>,
    pub proposed_trump: Option<Suit>,
    pub trump_suit: Option<Suit>,
    pub trump_chooser: Option<PlayerId>,
    pub bidding_player: Option<PlayerId>,
    pub trick: Option<TrickView>,
    /// Cards the viewer could legally play right now; empty when it is not
    /// their turn.
    pub playable: Vec<Card>,
    pub deal_scores: [u16; TEAMS],
    pub match_scores: [u32; TEAMS],
    pub belote: BeloteView,
}

/// Build the view `viewer` is allowed to see.
pub fn snapshot_for(state: &DealState, viewer: PlayerId) -> DealSnapshot {
    let mut hand_counts = [0u8; PLAYERS];
    for (i, hand) in state.hands.iter().enumerate() {
        hand_counts[i] = hand.len() as u8;
    }
    let mut your_hand = state.hand(viewer).to_vec();
    your_hand.sort();
    let playable = if state.current_player == viewer {
        legal_moves(state, viewer)
    } else {
        Vec::new()
    };

    DealSnapshot {
        phase: state.phase.into(),
        deal_number: state.deal_number,
        dealer: state.dealer,
        current_player: state.current_player,
        your_seat: viewer,
        your_hand,
        hand_counts,
        turned_card: state.turned_card,
        proposed_trump: state.proposed_trump,
        trump_suit: state.trump_suit,
        trump_chooser: state.trump_chooser,
        bidding_player: state.bidding_player,
        trick: state.trick.as_ref().map(|t| TrickView {
            leader: t.leader,
            plays: t.plays.clone(),
            winner: t.winner,
        }),
        playable,
        deal_scores: state.deal_scores,
        match_scores: state.match_scores,
        belote: BeloteView {
            stage: state.belote.stage,
            team: state.belote.team,
        },
    }
}
