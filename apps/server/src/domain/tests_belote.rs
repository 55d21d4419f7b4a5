use crate::domain::belote::announce;
use crate::domain::errors::DomainError;
use crate::domain::test_state_helpers::{parse_cards, playing_state};
use crate::domain::{Phase, Suit};

fn state_with_pair_at_seat_two() -> crate::domain::DealState {
    playing_state(
        [
            parse_cards(&["A\u{2660}", "7\u{2666}"]),
            parse_cards(&["10\u{2660}", "8\u{2666}"]),
            parse_cards(&["K\u{2665}", "Q\u{2665}"]),
            parse_cards(&["Q\u{2660}", "J\u{2666}"]),
        ],
        Suit::Hearts,
    )
}

#[test]
fn announcement_walks_the_two_stages() {
    let mut state = state_with_pair_at_seat_two();

    announce(&mut state, 2).unwrap();
    assert_eq!(state.belote.stage, 1);
    assert_eq!(state.belote.holder, Some(2));
    assert_eq!(state.belote.team, Some(0));
    assert_eq!(state.belote.points, 20);

    announce(&mut state, 2).unwrap();
    assert_eq!(state.belote.stage, 2);

    assert_eq!(announce(&mut state, 2), Err(DomainError::BeloteComplete));
}

#[test]
fn announcement_is_verified_against_dealt_cards() {
    let mut state = state_with_pair_at_seat_two();
    assert_eq!(announce(&mut state, 0), Err(DomainError::BeloteNotHeld));
    assert_eq!(state.belote.stage, 0);
}

#[test]
fn verification_survives_playing_the_cards_away() {
    // Seat 2 already played the king; the dealt hand still proves the pair.
    let mut state = state_with_pair_at_seat_two();
    state.hands[2] = parse_cards(&["Q\u{2665}"]);
    announce(&mut state, 2).unwrap();
    assert_eq!(state.belote.stage, 1);
}

#[test]
fn rebelote_is_reserved_for_the_holder() {
    let mut state = state_with_pair_at_seat_two();
    announce(&mut state, 2).unwrap();
    assert_eq!(announce(&mut state, 0), Err(DomainError::NotBeloteHolder));
}

#[test]
fn announcements_require_the_playing_phase() {
    let mut state = state_with_pair_at_seat_two();
    state.phase = Phase::Finished;
    assert_eq!(announce(&mut state, 2), Err(DomainError::PhaseMismatch));
}
