//! Deck construction and shuffling.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::rules::DECK_SIZE;

/// All 32 cards in the fixed enumeration order (suits C, D, H, S; ranks
/// seven up to ace).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// A fresh Fisher-Yates-shuffled deck. The PRNG is injected so deals can be
/// reproduced from a seed in tests.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}
