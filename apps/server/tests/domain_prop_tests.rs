//! Property-based tests for trick-winner and play-legality rules.
//!
//! Developer notes:
//! - Increase cases locally with PROPTEST_CASES=800.
//! - The oracle comparator is independent of the engine's comparison code
//!   to catch regressions in either.

use std::collections::HashSet;
use std::env;

use belote_server::domain::bidding::{bid, start_deal, BidAction};
use belote_server::domain::cards_logic::{card_beats, trick_winner};
use belote_server::domain::dealing::full_deck;
use belote_server::domain::legality::{check_play, legal_moves};
use belote_server::domain::tricks::play_card;
use belote_server::domain::{Card, Phase, PlayerId, Rank, Suit};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Independent trick-winner oracle: rank every play by
/// (is_trump, follows_lead, strength) and take the maximum. Strength tables
/// are written out separately from the engine's.
fn oracle_trick_winner(plays: &[(PlayerId, Card)], trump: Suit) -> PlayerId {
    assert_eq!(plays.len(), 4, "oracle requires a complete trick");
    let lead = plays[0].1.suit;

    fn trump_score(r: Rank) -> u8 {
        match r {
            Rank::Jack => 8,
            Rank::Nine => 7,
            Rank::Ace => 6,
            Rank::Ten => 5,
            Rank::King => 4,
            Rank::Queen => 3,
            Rank::Eight => 2,
            Rank::Seven => 1,
        }
    }
    fn plain_score(r: Rank) -> u8 {
        match r {
            Rank::Ace => 8,
            Rank::Ten => 7,
            Rank::King => 6,
            Rank::Queen => 5,
            Rank::Jack => 4,
            Rank::Nine => 3,
            Rank::Eight => 2,
            Rank::Seven => 1,
        }
    }
    let key = |c: Card| {
        if c.suit == trump {
            (2u8, trump_score(c.rank))
        } else if c.suit == lead {
            (1, plain_score(c.rank))
        } else {
            (0, 0)
        }
    };

    let mut best = 0;
    for i in 1..plays.len() {
        if key(plays[i].1) > key(plays[best].1) {
            best = i;
        }
    }
    plays[best].0
}

fn four_distinct_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(full_deck(), 4).prop_shuffle()
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn trick_winner_matches_the_oracle(cards in four_distinct_cards(), trump in any_suit()) {
        let plays: Vec<(PlayerId, Card)> = cards
            .into_iter()
            .enumerate()
            .map(|(i, c)| (i as PlayerId, c))
            .collect();
        let winner = trick_winner(&plays, trump).expect("four plays have a winner");
        prop_assert_eq!(winner, oracle_trick_winner(&plays, trump));
    }

    #[test]
    fn card_beats_is_antisymmetric(cards in four_distinct_cards(), trump in any_suit(), lead in any_suit()) {
        let (a, b) = (cards[0], cards[1]);
        prop_assert!(!(card_beats(a, b, lead, trump) && card_beats(b, a, lead, trump)));
    }

    /// Deal, take, then play random legal cards to the end. At every step a
    /// player to act has a legal card, the oracle is deterministic, the
    /// card universe stays intact, and the finished deal totals 162.
    #[test]
    fn random_playouts_preserve_the_invariants(seed in any::<u64>(), passes in 0u8..4) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = start_deal(0, 1, [0, 0], &mut rng);
        for _ in 0..passes {
            let bidder = state.bidding_player.expect("bidding in progress");
            bid(&mut state, bidder, BidAction::Pass, &mut rng).unwrap();
        }
        let bidder = state.bidding_player.expect("bidding in progress");
        bid(&mut state, bidder, BidAction::Take { suit: None }, &mut rng).unwrap();

        let mut played_counts = [0usize; 4];
        let mut played_cards: Vec<Card> = Vec::new();
        while state.phase == Phase::Playing {
            let actor = state.current_player;
            let moves = legal_moves(&state, actor);
            prop_assert!(!moves.is_empty(), "player to act has no legal card");
            for &m in &moves {
                prop_assert_eq!(check_play(&state, actor, m), check_play(&state, actor, m));
            }
            let card = moves[rng.next_u32() as usize % moves.len()];
            play_card(&mut state, actor, card).unwrap();
            played_counts[actor as usize] += 1;
            played_cards.push(card);

            let mut seen: HashSet<Card> = HashSet::new();
            for hand in &state.hands {
                for &c in hand {
                    prop_assert!(seen.insert(c), "duplicate card in hands");
                }
            }
            for &c in &played_cards {
                prop_assert!(seen.insert(c), "played card still in a hand");
            }
            prop_assert_eq!(seen.len(), 32);
            for seat in 0..4 {
                prop_assert_eq!(state.hands[seat].len() + played_counts[seat], 8);
            }
        }

        prop_assert_eq!(state.phase, Phase::Finished);
        prop_assert_eq!(state.deal_scores[0] + state.deal_scores[1], 162);
    }
}
