//! Deal state container and seat arithmetic.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, PlayerId, Suit};
use crate::domain::rules::{PLAYERS, TEAMS};

/// The two auction rounds: the turned card's suit is on offer first, then
/// any other suit may be named.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum BidRound {
    First,
    Second,
}

/// Deal progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Bidding(BidRound),
    Playing,
    Finished,
}

/// One trick: up to four plays in seat order starting from the leader.
/// A completed trick keeps its winner and stays in place until the next
/// card starts a fresh one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    pub leader: PlayerId,
    pub plays: Vec<(PlayerId, Card)>,
    pub winner: Option<PlayerId>,
}

impl Trick {
    pub fn new(leader: PlayerId) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(PLAYERS),
            winner: None,
        }
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|&(_, c)| c.suit)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }
}

/// Belote/rebelote declaration progress.
/// stage 0 = nothing announced, 1 = belote, 2 = rebelote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeloteState {
    pub holder: Option<PlayerId>,
    pub stage: u8,
    pub points: u16,
    pub team: Option<usize>,
}

/// The full per-deal state. Transitions live in `bidding`, `tricks`,
/// `belote` and `scoring`; they validate completely before mutating, so a
/// rejected command leaves this untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealState {
    pub phase: Phase,
    pub dealer: PlayerId,
    pub current_player: PlayerId,
    pub deck: Vec<Card>,
    pub hands: [Vec<Card>; PLAYERS],
    /// Hands as they stood when play began (eight cards each); belote
    /// verification reads these after cards have been played away.
    pub dealt_hands: [Vec<Card>; PLAYERS],
    pub turned_card: Option<Card>,
    pub proposed_trump: Option<Suit>,
    pub trump_suit: Option<Suit>,
    pub trump_chooser: Option<PlayerId>,
    pub bidding_player: Option<PlayerId>,
    pub passes: u8,
    pub trick: Option<Trick>,
    pub deal_scores: [u16; TEAMS],
    pub match_scores: [u32; TEAMS],
    pub deal_number: u32,
    pub belote: BeloteState,
}

impl DealState {
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player as usize]
    }
}

/// Next seat clockwise (0 -> 1 -> 2 -> 3 -> 0).
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    (p + 1) % PLAYERS as u8
}

/// Team index of a seat: 0 for seats {0, 2}, 1 for seats {1, 3}.
#[inline]
pub fn team_of(p: PlayerId) -> usize {
    (p % 2) as usize
}

#[inline]
pub fn partner_of(p: PlayerId) -> PlayerId {
    (p + 2) % PLAYERS as u8
}

#[inline]
pub fn same_team(a: PlayerId, b: PlayerId) -> bool {
    team_of(a) == team_of(b)
}
