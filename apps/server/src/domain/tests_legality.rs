use crate::domain::errors::DomainError;
use crate::domain::legality::{check_play, legal_moves};
use crate::domain::test_state_helpers::{parse_cards, playing_state, with_open_trick};
use crate::domain::{Card, Suit};

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

#[test]
fn leading_a_trick_allows_any_card() {
    let state = playing_state(
        [
            parse_cards(&["A\u{2660}", "7\u{2666}", "8\u{2663}"]),
            parse_cards(&["K\u{2660}"]),
            parse_cards(&["Q\u{2660}"]),
            parse_cards(&["J\u{2660}"]),
        ],
        Suit::Hearts,
    );
    assert_eq!(legal_moves(&state, 0).len(), 3);
}

#[test]
fn must_follow_lead_suit_when_able() {
    let mut state = playing_state(
        [
            parse_cards(&["A\u{2660}"]),
            parse_cards(&["K\u{2660}", "8\u{2666}"]),
            parse_cards(&["Q\u{2660}"]),
            parse_cards(&["J\u{2660}"]),
        ],
        Suit::Hearts,
    );
    with_open_trick(&mut state, 0, &[(0, "A\u{2660}")]);
    assert_eq!(
        check_play(&state, 1, card("8\u{2666}")),
        Err(DomainError::MustFollowSuit)
    );
    assert_eq!(check_play(&state, 1, card("K\u{2660}")), Ok(()));
}

#[test]
fn void_of_lead_against_winning_opponent_must_cut() {
    // Hearts led, opponent master with a plain card; holder of a trump may
    // not discard.
    let mut state = playing_state(
        [
            parse_cards(&["A\u{2665}"]),
            parse_cards(&["7\u{2665}"]),
            parse_cards(&["10\u{2665}"]),
            parse_cards(&["8\u{2663}", "9\u{2666}"]),
        ],
        Suit::Clubs,
    );
    with_open_trick(
        &mut state,
        0,
        &[(0, "A\u{2665}"), (1, "7\u{2665}"), (2, "10\u{2665}")],
    );
    assert_eq!(
        check_play(&state, 3, card("9\u{2666}")),
        Err(DomainError::MustTrump)
    );
    assert_eq!(check_play(&state, 3, card("8\u{2663}")), Ok(()));
}

#[test]
fn void_of_lead_with_partner_master_may_discard() {
    // Same shape, but the partner (seat 1) is master: no forced cut.
    let mut state = playing_state(
        [
            parse_cards(&["7\u{2665}"]),
            parse_cards(&["A\u{2665}"]),
            parse_cards(&["10\u{2665}"]),
            parse_cards(&["8\u{2663}", "9\u{2666}"]),
        ],
        Suit::Clubs,
    );
    with_open_trick(
        &mut state,
        0,
        &[(0, "7\u{2665}"), (1, "A\u{2665}"), (2, "10\u{2665}")],
    );
    assert_eq!(check_play(&state, 3, card("9\u{2666}")), Ok(()));
    assert_eq!(check_play(&state, 3, card("8\u{2663}")), Ok(()));
}

#[test]
fn over_a_cut_must_overtrump_when_able() {
    // Diamonds led, seat 1 cut with the nine; seat 2 is void of diamonds
    // and holds a stronger trump, so only that beats the table.
    let mut state = playing_state(
        [
            parse_cards(&["A\u{2666}"]),
            parse_cards(&["9\u{2663}"]),
            parse_cards(&["7\u{2663}", "J\u{2663}", "K\u{2665}"]),
            parse_cards(&["8\u{2660}"]),
        ],
        Suit::Clubs,
    );
    with_open_trick(&mut state, 0, &[(0, "A\u{2666}"), (1, "9\u{2663}")]);
    assert_eq!(
        check_play(&state, 2, card("7\u{2663}")),
        Err(DomainError::MustOvertrump)
    );
    assert_eq!(
        check_play(&state, 2, card("K\u{2665}")),
        Err(DomainError::MustOvertrump)
    );
    assert_eq!(check_play(&state, 2, card("J\u{2663}")), Ok(()));
}

#[test]
fn over_a_cut_must_undertrump_when_unable_to_beat_it() {
    let mut state = playing_state(
        [
            parse_cards(&["A\u{2666}"]),
            parse_cards(&["J\u{2663}"]),
            parse_cards(&["7\u{2663}", "K\u{2665}"]),
            parse_cards(&["8\u{2660}"]),
        ],
        Suit::Clubs,
    );
    with_open_trick(&mut state, 0, &[(0, "A\u{2666}"), (1, "J\u{2663}")]);
    assert_eq!(
        check_play(&state, 2, card("K\u{2665}")),
        Err(DomainError::MustUndertrump)
    );
    assert_eq!(check_play(&state, 2, card("7\u{2663}")), Ok(()));
}

#[test]
fn over_partners_cut_anything_goes() {
    // Seat 1 cut and holds the highest trump; seat 3 is their partner.
    let mut state = playing_state(
        [
            parse_cards(&["A\u{2666}"]),
            parse_cards(&["9\u{2663}"]),
            parse_cards(&["10\u{2666}"]),
            parse_cards(&["7\u{2663}", "K\u{2665}"]),
        ],
        Suit::Clubs,
    );
    with_open_trick(
        &mut state,
        0,
        &[(0, "A\u{2666}"), (1, "9\u{2663}"), (2, "10\u{2666}")],
    );
    assert_eq!(check_play(&state, 3, card("K\u{2665}")), Ok(()));
    assert_eq!(check_play(&state, 3, card("7\u{2663}")), Ok(()));
}

#[test]
fn trump_lead_requires_climbing_when_able() {
    let mut state = playing_state(
        [
            parse_cards(&["10\u{2663}"]),
            parse_cards(&["7\u{2663}", "J\u{2663}", "A\u{2660}"]),
            parse_cards(&["Q\u{2663}"]),
            parse_cards(&["K\u{2663}"]),
        ],
        Suit::Clubs,
    );
    with_open_trick(&mut state, 0, &[(0, "10\u{2663}")]);
    assert_eq!(
        check_play(&state, 1, card("7\u{2663}")),
        Err(DomainError::MustOvertrump)
    );
    assert_eq!(check_play(&state, 1, card("J\u{2663}")), Ok(()));
    // Holding spades does not matter: clubs were led and seat 1 has clubs.
    assert_eq!(
        check_play(&state, 1, card("A\u{2660}")),
        Err(DomainError::MustFollowSuit)
    );
}

#[test]
fn trump_lead_partner_master_allows_a_low_trump() {
    let mut state = playing_state(
        [
            parse_cards(&["J\u{2663}"]),
            parse_cards(&["10\u{2663}"]),
            parse_cards(&["7\u{2663}", "9\u{2663}"]),
            parse_cards(&["K\u{2663}"]),
        ],
        Suit::Clubs,
    );
    with_open_trick(&mut state, 0, &[(0, "J\u{2663}"), (1, "10\u{2663}")]);
    // Seat 0 (partner of 2) is master with the jack; no forced climb.
    assert_eq!(check_play(&state, 2, card("7\u{2663}")), Ok(()));
}

#[test]
fn free_discard_when_void_of_lead_and_trump() {
    let mut state = playing_state(
        [
            parse_cards(&["A\u{2666}"]),
            parse_cards(&["8\u{2660}", "K\u{2665}"]),
            parse_cards(&["Q\u{2666}"]),
            parse_cards(&["J\u{2666}"]),
        ],
        Suit::Clubs,
    );
    with_open_trick(&mut state, 0, &[(0, "A\u{2666}")]);
    assert_eq!(check_play(&state, 1, card("8\u{2660}")), Ok(()));
    assert_eq!(check_play(&state, 1, card("K\u{2665}")), Ok(()));
}

#[test]
fn rejects_cards_not_in_hand_and_wrong_phase() {
    let mut state = playing_state(
        [
            parse_cards(&["A\u{2660}"]),
            parse_cards(&["K\u{2660}"]),
            parse_cards(&["Q\u{2660}"]),
            parse_cards(&["J\u{2660}"]),
        ],
        Suit::Hearts,
    );
    assert_eq!(
        check_play(&state, 0, card("7\u{2666}")),
        Err(DomainError::CardNotInHand)
    );
    state.phase = crate::domain::Phase::Finished;
    assert_eq!(
        check_play(&state, 0, card("A\u{2660}")),
        Err(DomainError::PhaseMismatch)
    );
}

#[test]
fn completed_trick_means_a_fresh_lead() {
    let mut state = playing_state(
        [
            parse_cards(&["7\u{2666}"]),
            parse_cards(&["K\u{2660}", "8\u{2666}"]),
            parse_cards(&["Q\u{2660}"]),
            parse_cards(&["J\u{2660}"]),
        ],
        Suit::Hearts,
    );
    with_open_trick(
        &mut state,
        0,
        &[
            (0, "A\u{2660}"),
            (1, "10\u{2660}"),
            (2, "9\u{2660}"),
            (3, "8\u{2660}"),
        ],
    );
    state.current_player = 0;
    // Four cards down: the next play opens a new trick, so anything goes.
    assert_eq!(check_play(&state, 0, card("7\u{2666}")), Ok(()));
}

#[test]
fn oracle_is_pure_and_deterministic() {
    let mut state = playing_state(
        [
            parse_cards(&["A\u{2666}"]),
            parse_cards(&["9\u{2663}"]),
            parse_cards(&["7\u{2663}", "J\u{2663}", "K\u{2665}"]),
            parse_cards(&["8\u{2660}"]),
        ],
        Suit::Clubs,
    );
    with_open_trick(&mut state, 0, &[(0, "A\u{2666}"), (1, "9\u{2663}")]);
    let before = state.clone();
    let first = check_play(&state, 2, card("7\u{2663}"));
    let second = check_play(&state, 2, card("7\u{2663}"));
    assert_eq!(first, second);
    assert_eq!(state, before);
}

#[test]
fn legal_moves_never_empty_for_a_non_empty_hand() {
    // A player always has at least one legal card, whatever the obligation.
    let mut state = playing_state(
        [
            parse_cards(&["A\u{2666}"]),
            parse_cards(&["J\u{2663}"]),
            parse_cards(&["7\u{2663}", "K\u{2665}"]),
            parse_cards(&["8\u{2660}", "9\u{2665}"]),
        ],
        Suit::Clubs,
    );
    with_open_trick(&mut state, 0, &[(0, "A\u{2666}"), (1, "J\u{2663}")]);
    for seat in [2u8, 3u8] {
        assert!(!legal_moves(&state, seat).is_empty());
    }
}
