use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::bidding::{bid, start_deal, BidAction};
use crate::domain::errors::DomainError;
use crate::domain::rules::{DECK_SIZE, FIRST_DEAL, FULL_HAND, PLAYERS};
use crate::domain::state::{BidRound, Phase};
use crate::domain::{DealState, Suit};

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

fn assert_card_universe(state: &DealState) {
    let mut seen: HashSet<_> = HashSet::new();
    let mut total = 0;
    for hand in &state.hands {
        for card in hand {
            assert!(seen.insert(*card), "duplicate card {card}");
        }
        total += hand.len();
    }
    for card in &state.deck {
        assert!(seen.insert(*card), "duplicate card {card}");
        total += 1;
    }
    if let Some(card) = state.turned_card {
        assert!(seen.insert(card), "duplicate card {card}");
        total += 1;
    }
    if let Some(trick) = &state.trick {
        total += trick.plays.len();
    }
    assert_eq!(total, DECK_SIZE);
}

#[test]
fn fresh_deal_shape() {
    let mut rng = rng();
    let state = start_deal(0, 1, [0, 0], &mut rng);

    assert_eq!(state.phase, Phase::Bidding(BidRound::First));
    assert_eq!(state.dealer, 0);
    assert_eq!(state.bidding_player, Some(1));
    assert_eq!(state.current_player, 1);
    for hand in &state.hands {
        assert_eq!(hand.len(), FIRST_DEAL);
    }
    let turned = state.turned_card.expect("turned card present during bidding");
    assert_eq!(state.proposed_trump, Some(turned.suit));
    assert_eq!(state.deck.len(), DECK_SIZE - PLAYERS * FIRST_DEAL - 1);
    assert_eq!(state.deal_scores, [0, 0]);
    assert!(state.trump_suit.is_none());
    assert_card_universe(&state);
}

#[test]
fn first_round_take_completes_the_deal() {
    let mut rng = rng();
    let mut state = start_deal(0, 1, [0, 0], &mut rng);
    let proposed = state.proposed_trump;

    bid(&mut state, 1, BidAction::Pass, &mut rng).unwrap();
    bid(&mut state, 2, BidAction::Take { suit: None }, &mut rng).unwrap();

    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.trump_suit, proposed);
    assert_eq!(state.trump_chooser, Some(2));
    assert!(state.turned_card.is_none());
    assert!(state.proposed_trump.is_none());
    assert!(state.bidding_player.is_none());
    assert!(state.deck.is_empty());
    for hand in &state.hands {
        assert_eq!(hand.len(), FULL_HAND);
    }
    assert_eq!(state.dealt_hands, state.hands);
    // The player left of the dealer opens the first trick.
    assert_eq!(state.current_player, 1);
    assert_card_universe(&state);
}

#[test]
fn first_round_take_ignores_a_named_suit() {
    let mut rng = rng();
    let mut state = start_deal(0, 1, [0, 0], &mut rng);
    let proposed = state.proposed_trump.expect("proposed trump set");
    let other = Suit::ALL
        .into_iter()
        .find(|&s| s != proposed)
        .expect("another suit exists");

    bid(&mut state, 1, BidAction::Take { suit: Some(other) }, &mut rng).unwrap();
    assert_eq!(state.trump_suit, Some(proposed));
}

#[test]
fn four_passes_open_the_second_round() {
    let mut rng = rng();
    let mut state = start_deal(0, 1, [0, 0], &mut rng);

    for seat in [1, 2, 3, 0] {
        bid(&mut state, seat, BidAction::Pass, &mut rng).unwrap();
    }
    assert_eq!(state.phase, Phase::Bidding(BidRound::Second));
    assert_eq!(state.bidding_player, Some(1));
    assert_eq!(state.passes, 0);
    assert!(state.turned_card.is_some());
}

#[test]
fn second_round_take_requires_a_different_suit() {
    let mut rng = rng();
    let mut state = start_deal(0, 1, [0, 0], &mut rng);
    let proposed = state.proposed_trump.expect("proposed trump set");
    let other = Suit::ALL
        .into_iter()
        .find(|&s| s != proposed)
        .expect("another suit exists");

    for seat in [1, 2, 3, 0] {
        bid(&mut state, seat, BidAction::Pass, &mut rng).unwrap();
    }
    assert_eq!(
        bid(&mut state, 1, BidAction::Take { suit: None }, &mut rng),
        Err(DomainError::SuitRequired)
    );
    assert_eq!(
        bid(
            &mut state,
            1,
            BidAction::Take {
                suit: Some(proposed)
            },
            &mut rng
        ),
        Err(DomainError::RefusedSuit)
    );
    bid(&mut state, 1, BidAction::Take { suit: Some(other) }, &mut rng).unwrap();
    assert_eq!(state.trump_suit, Some(other));
    assert_eq!(state.phase, Phase::Playing);
    assert_card_universe(&state);
}

#[test]
fn eight_passes_redeal_with_the_same_dealer() {
    let mut rng = rng();
    let mut state = start_deal(2, 5, [140, 260], &mut rng);

    for _ in 0..2 {
        for i in 0..PLAYERS as u8 {
            let seat = (3 + i) % PLAYERS as u8;
            bid(&mut state, seat, BidAction::Pass, &mut rng).unwrap();
        }
    }

    assert_eq!(state.phase, Phase::Bidding(BidRound::First));
    assert_eq!(state.dealer, 2);
    assert_eq!(state.bidding_player, Some(3));
    assert_eq!(state.deal_number, 6);
    assert_eq!(state.match_scores, [140, 260]);
    assert_eq!(state.deal_scores, [0, 0]);
    assert_card_universe(&state);
}

#[test]
fn bids_are_rejected_out_of_turn_and_out_of_phase() {
    let mut rng = rng();
    let mut state = start_deal(0, 1, [0, 0], &mut rng);

    assert_eq!(
        bid(&mut state, 3, BidAction::Pass, &mut rng),
        Err(DomainError::OutOfTurn)
    );
    bid(&mut state, 1, BidAction::Take { suit: None }, &mut rng).unwrap();
    assert_eq!(
        bid(&mut state, 2, BidAction::Pass, &mut rng),
        Err(DomainError::PhaseMismatch)
    );
}

#[test]
fn rejected_bids_leave_the_state_untouched() {
    let mut rng = rng();
    let mut state = start_deal(0, 1, [0, 0], &mut rng);
    let before = state.clone();
    assert!(bid(&mut state, 2, BidAction::Pass, &mut rng).is_err());
    assert_eq!(state, before);
}

#[test]
fn deal_state_round_trips_through_serde() {
    let mut rng = rng();
    let mut state = start_deal(1, 3, [52, 88], &mut rng);
    bid(&mut state, 2, BidAction::Take { suit: None }, &mut rng).unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let parsed: DealState = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, state);
}
