use crate::domain::errors::DomainError;
use crate::domain::test_state_helpers::{parse_cards, playing_state};
use crate::domain::tricks::play_card;
use crate::domain::{Card, Phase, Suit};

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

/// Two synthetic tricks: spades around, then diamonds around. Hearts trump,
/// never played.
fn two_trick_state() -> crate::domain::DealState {
    playing_state(
        [
            parse_cards(&["A\u{2660}", "7\u{2666}"]),
            parse_cards(&["10\u{2660}", "8\u{2666}"]),
            parse_cards(&["K\u{2660}", "9\u{2666}"]),
            parse_cards(&["Q\u{2660}", "J\u{2666}"]),
        ],
        Suit::Hearts,
    )
}

#[test]
fn winner_takes_points_and_leads_next() {
    let mut state = two_trick_state();
    play_card(&mut state, 0, card("A\u{2660}")).unwrap();
    assert_eq!(state.current_player, 1);
    play_card(&mut state, 1, card("10\u{2660}")).unwrap();
    play_card(&mut state, 2, card("K\u{2660}")).unwrap();
    play_card(&mut state, 3, card("Q\u{2660}")).unwrap();

    // A + 10 + K + Q of a plain suit: 11 + 10 + 4 + 3.
    assert_eq!(state.deal_scores, [28, 0]);
    assert_eq!(state.current_player, 0);
    let trick = state.trick.as_ref().expect("completed trick kept in place");
    assert!(trick.is_complete());
    assert_eq!(trick.winner, Some(0));
}

#[test]
fn completed_trick_is_replaced_by_the_next_play() {
    let mut state = two_trick_state();
    for (seat, token) in [
        (0, "A\u{2660}"),
        (1, "10\u{2660}"),
        (2, "K\u{2660}"),
        (3, "Q\u{2660}"),
    ] {
        play_card(&mut state, seat, card(token)).unwrap();
    }
    play_card(&mut state, 0, card("7\u{2666}")).unwrap();
    let trick = state.trick.as_ref().expect("fresh trick open");
    assert_eq!(trick.leader, 0);
    assert_eq!(trick.plays.len(), 1);
    assert!(trick.winner.is_none());
}

#[test]
fn final_trick_closes_the_deal_with_the_bonus() {
    let mut state = two_trick_state();
    for (seat, token) in [
        (0, "A\u{2660}"),
        (1, "10\u{2660}"),
        (2, "K\u{2660}"),
        (3, "Q\u{2660}"),
    ] {
        play_card(&mut state, seat, card(token)).unwrap();
    }
    for (seat, token) in [
        (0, "7\u{2666}"),
        (1, "8\u{2666}"),
        (2, "9\u{2666}"),
        (3, "J\u{2666}"),
    ] {
        play_card(&mut state, seat, card(token)).unwrap();
    }

    // Jack of diamonds wins 2 points, plus the last-trick 10.
    assert_eq!(state.phase, Phase::Finished);
    assert_eq!(state.deal_scores, [28, 12]);
    assert_eq!(state.match_scores, [28, 12]);
    assert!(state.hands.iter().all(|h| h.is_empty()));
}

#[test]
fn hand_sizes_track_cards_played() {
    let mut state = two_trick_state();
    play_card(&mut state, 0, card("A\u{2660}")).unwrap();
    play_card(&mut state, 1, card("10\u{2660}")).unwrap();
    for (seat, played) in [(0u8, 1), (1, 1), (2, 0), (3, 0)] {
        assert_eq!(state.hand(seat).len() + played, 2);
    }
}

#[test]
fn rejects_out_of_turn_and_unknown_cards() {
    let mut state = two_trick_state();
    assert_eq!(
        play_card(&mut state, 1, card("10\u{2660}")),
        Err(DomainError::OutOfTurn)
    );
    assert_eq!(
        play_card(&mut state, 0, card("A\u{2663}")),
        Err(DomainError::CardNotInHand)
    );
}

#[test]
fn illegal_plays_do_not_mutate() {
    let mut state = playing_state(
        [
            parse_cards(&["A\u{2660}"]),
            parse_cards(&["K\u{2660}", "8\u{2666}"]),
            parse_cards(&["Q\u{2660}"]),
            parse_cards(&["J\u{2660}"]),
        ],
        Suit::Hearts,
    );
    play_card(&mut state, 0, card("A\u{2660}")).unwrap();
    let before = state.clone();
    assert_eq!(
        play_card(&mut state, 1, card("8\u{2666}")),
        Err(DomainError::MustFollowSuit)
    );
    assert_eq!(state, before);
}

#[test]
fn no_plays_after_the_deal_finishes() {
    let mut state = two_trick_state();
    for (seat, token) in [
        (0, "A\u{2660}"),
        (1, "10\u{2660}"),
        (2, "K\u{2660}"),
        (3, "Q\u{2660}"),
        (0, "7\u{2666}"),
        (1, "8\u{2666}"),
        (2, "9\u{2666}"),
        (3, "J\u{2666}"),
    ] {
        play_card(&mut state, seat, card(token)).unwrap();
    }
    assert_eq!(
        play_card(&mut state, 3, card("J\u{2666}")),
        Err(DomainError::PhaseMismatch)
    );
}
