//! Fixed numeric facts of the game.

pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;
pub const DECK_SIZE: usize = 32;

/// Cards dealt to each player before the auction.
pub const FIRST_DEAL: usize = 5;
/// Hand size once a bidder has taken.
pub const FULL_HAND: usize = 8;

/// Bonus for winning the eighth trick (dix de der).
pub const LAST_TRICK_BONUS: u16 = 10;
/// Value of the belote/rebelote declaration.
pub const BELOTE_BONUS: u16 = 20;

/// Conventional match target. Accumulation only; no terminal state is
/// enforced server-side.
pub const MATCH_TARGET: u32 = 1001;
