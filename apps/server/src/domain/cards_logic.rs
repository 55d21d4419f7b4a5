//! Trick arithmetic: the two belote orderings, card points, trick winner.

use crate::domain::cards_types::{Card, PlayerId, Rank, Suit};

/// Strength inside a plain (non-trump) suit, weakest first:
/// 7 < 8 < 9 < J < Q < K < 10 < A.
pub fn plain_strength(rank: Rank) -> u8 {
    match rank {
        Rank::Seven => 0,
        Rank::Eight => 1,
        Rank::Nine => 2,
        Rank::Jack => 3,
        Rank::Queen => 4,
        Rank::King => 5,
        Rank::Ten => 6,
        Rank::Ace => 7,
    }
}

/// Strength inside the trump suit, weakest first:
/// 7 < 8 < Q < K < 10 < A < 9 < J.
pub fn trump_strength(rank: Rank) -> u8 {
    match rank {
        Rank::Seven => 0,
        Rank::Eight => 1,
        Rank::Queen => 2,
        Rank::King => 3,
        Rank::Ten => 4,
        Rank::Ace => 5,
        Rank::Nine => 6,
        Rank::Jack => 7,
    }
}

/// Point value of one card given the trump suit.
pub fn card_points(card: Card, trump: Suit) -> u16 {
    if card.suit == trump {
        match card.rank {
            Rank::Seven | Rank::Eight => 0,
            Rank::Nine => 14,
            Rank::Ten => 10,
            Rank::Jack => 20,
            Rank::Queen => 3,
            Rank::King => 4,
            Rank::Ace => 11,
        }
    } else {
        match card.rank {
            Rank::Seven | Rank::Eight | Rank::Nine => 0,
            Rank::Ten => 10,
            Rank::Jack => 2,
            Rank::Queen => 3,
            Rank::King => 4,
            Rank::Ace => 11,
        }
    }
}

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// True when `a` beats `b` under the given lead and trump suits.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    if a_trump && b_trump {
        return trump_strength(a.rank) > trump_strength(b.rank);
    }
    // Neither is trump: only cards following the lead can win.
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return plain_strength(a.rank) > plain_strength(b.rank);
    }
    false
}

/// Winner of an ordered sequence of plays; the first play fixes the lead.
/// Works on partial tricks (the current master) as well as complete ones.
pub fn trick_winner(plays: &[(PlayerId, Card)], trump: Suit) -> Option<PlayerId> {
    let (_, first) = *plays.first()?;
    let lead = first.suit;
    let mut best = 0;
    for i in 1..plays.len() {
        if card_beats(plays[i].1, plays[best].1, lead, trump) {
            best = i;
        }
    }
    Some(plays[best].0)
}

/// Point total of the played cards.
pub fn trick_points(plays: &[(PlayerId, Card)], trump: Suit) -> u16 {
    plays.iter().map(|&(_, c)| card_points(c, trump)).sum()
}
