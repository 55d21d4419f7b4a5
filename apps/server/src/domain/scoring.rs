//! End-of-deal scoring.

use crate::domain::cards_types::PlayerId;
use crate::domain::rules::{LAST_TRICK_BONUS, TEAMS};
use crate::domain::state::{team_of, DealState, Phase};

/// Close out the deal after the eighth trick: dix de der to the last
/// winner's team, deal scores merged into the match totals, and the belote
/// bonus credited on top when fully announced. Deal scores always total
/// 162; the belote 20 rides outside that.
pub fn finalize_deal(state: &mut DealState, last_winner: PlayerId) {
    state.deal_scores[team_of(last_winner)] += LAST_TRICK_BONUS;

    for team in 0..TEAMS {
        state.match_scores[team] += u32::from(state.deal_scores[team]);
    }
    if state.belote.stage == 2 {
        if let Some(team) = state.belote.team {
            state.match_scores[team] += u32::from(state.belote.points);
        }
    }

    state.phase = Phase::Finished;
    state.bidding_player = None;
}
