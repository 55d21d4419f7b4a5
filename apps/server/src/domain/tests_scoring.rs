use crate::domain::scoring::finalize_deal;
use crate::domain::test_state_helpers::playing_state;
use crate::domain::{Phase, Suit};

#[test]
fn last_trick_bonus_and_match_merge() {
    let mut state = playing_state([vec![], vec![], vec![], vec![]], Suit::Hearts);
    state.deal_scores = [100, 52];
    state.match_scores = [10, 20];

    finalize_deal(&mut state, 2);

    assert_eq!(state.deal_scores, [110, 52]);
    assert_eq!(state.deal_scores[0] + state.deal_scores[1], 162);
    assert_eq!(state.match_scores, [120, 72]);
    assert_eq!(state.phase, Phase::Finished);
}

#[test]
fn belote_credit_applies_only_when_complete() {
    let mut partial = playing_state([vec![], vec![], vec![], vec![]], Suit::Hearts);
    partial.deal_scores = [100, 52];
    partial.belote.stage = 1;
    partial.belote.holder = Some(1);
    partial.belote.team = Some(1);
    partial.belote.points = 20;
    finalize_deal(&mut partial, 0);
    assert_eq!(partial.match_scores, [110, 52]);

    let mut complete = playing_state([vec![], vec![], vec![], vec![]], Suit::Hearts);
    complete.deal_scores = [100, 52];
    complete.belote.stage = 2;
    complete.belote.holder = Some(1);
    complete.belote.team = Some(1);
    complete.belote.points = 20;
    finalize_deal(&mut complete, 0);
    // The 20 lands in the match totals; the deal still sums to 162.
    assert_eq!(complete.match_scores, [110, 72]);
    assert_eq!(complete.deal_scores[0] + complete.deal_scores[1], 162);
}

#[test]
fn bonus_goes_to_the_last_winners_team() {
    let mut state = playing_state([vec![], vec![], vec![], vec![]], Suit::Hearts);
    state.deal_scores = [76, 76];
    finalize_deal(&mut state, 3);
    assert_eq!(state.deal_scores, [76, 86]);

    let mut other = playing_state([vec![], vec![], vec![], vec![]], Suit::Hearts);
    other.deal_scores = [76, 76];
    finalize_deal(&mut other, 2);
    assert_eq!(other.deal_scores, [86, 76]);
}
