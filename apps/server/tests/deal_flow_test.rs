//! A complete deal driven end to end through the engine API.

use belote_server::domain::belote::announce;
use belote_server::domain::bidding::{bid, start_deal, BidAction};
use belote_server::domain::legality::legal_moves;
use belote_server::domain::tricks::play_card;
use belote_server::domain::{team_of, Card, Phase, Rank};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn complete_deal_totals_162_and_credits_belote() {
    let mut rng = StdRng::seed_from_u64(0xBE1_07E);
    let mut state = start_deal(0, 1, [0, 0], &mut rng);
    bid(&mut state, 1, BidAction::Take { suit: None }, &mut rng).unwrap();
    let trump = state.trump_suit.expect("trump fixed after the take");
    assert_eq!(state.current_player, 1, "left of the dealer opens");

    // Announce belote/rebelote when someone was dealt the trump royals.
    let holder = (0..4u8).find(|&p| {
        let dealt = &state.dealt_hands[p as usize];
        dealt.contains(&Card::new(trump, Rank::King))
            && dealt.contains(&Card::new(trump, Rank::Queen))
    });
    if let Some(p) = holder {
        announce(&mut state, p).unwrap();
        announce(&mut state, p).unwrap();
    }

    while state.phase == Phase::Playing {
        let actor = state.current_player;
        let moves = legal_moves(&state, actor);
        assert!(!moves.is_empty(), "player to act has no legal card");
        play_card(&mut state, actor, moves[0]).unwrap();
    }

    assert_eq!(state.phase, Phase::Finished);
    assert_eq!(state.deal_scores[0] + state.deal_scores[1], 162);

    // The belote 20 lands in the match totals, outside the 162.
    let mut expected = [
        u32::from(state.deal_scores[0]),
        u32::from(state.deal_scores[1]),
    ];
    if let Some(p) = holder {
        expected[team_of(p)] += 20;
        assert_eq!(state.belote.stage, 2);
    }
    assert_eq!(state.match_scores, expected);
}

#[test]
fn playout_visits_eight_tricks() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = start_deal(2, 1, [0, 0], &mut rng);
    bid(&mut state, 3, BidAction::Take { suit: None }, &mut rng).unwrap();

    let mut resolved = 0;
    while state.phase == Phase::Playing {
        let actor = state.current_player;
        let moves = legal_moves(&state, actor);
        play_card(&mut state, actor, moves[0]).unwrap();
        if state
            .trick
            .as_ref()
            .is_some_and(|t| t.is_complete() && t.winner.is_some())
        {
            resolved += 1;
        }
    }
    assert_eq!(resolved, 8);
    assert!(state.hands.iter().all(|h| h.is_empty()));
}
