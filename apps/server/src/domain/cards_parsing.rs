//! Card parsing from string tokens (e.g. "J♥", "10♠").

use std::str::FromStr;

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::errors::DomainError;

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "\u{2663}" => Ok(Suit::Clubs),
            "\u{2666}" => Ok(Suit::Diamonds),
            "\u{2665}" => Ok(Suit::Hearts),
            "\u{2660}" => Ok(Suit::Spades),
            _ => Err(DomainError::ParseCard(format!("invalid suit: {s}"))),
        }
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(DomainError::ParseCard(format!("invalid rank: {s}"))),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    /// A card token is the rank label followed by the suit symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_ch = chars
            .next_back()
            .ok_or_else(|| DomainError::ParseCard("empty card token".to_string()))?;
        let rank = chars.as_str().parse::<Rank>()?;
        let suit = suit_ch.to_string().parse::<Suit>()?;
        Ok(Card { suit, rank })
    }
}

/// Parse a batch of card tokens, failing on the first invalid one.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_tokens() {
        assert_eq!(
            "A\u{2660}".parse::<Card>().unwrap(),
            Card::new(Suit::Spades, Rank::Ace)
        );
        assert_eq!(
            "10\u{2666}".parse::<Card>().unwrap(),
            Card::new(Suit::Diamonds, Rank::Ten)
        );
        assert_eq!(
            "7\u{2663}".parse::<Card>().unwrap(),
            Card::new(Suit::Clubs, Rank::Seven)
        );
    }

    #[test]
    fn rejects_invalid_tokens() {
        for tok in ["", "A", "\u{2660}", "1\u{2665}", "T\u{2665}", "AS", "J h"] {
            assert!(tok.parse::<Card>().is_err(), "token {tok:?} should fail");
        }
    }

    #[test]
    fn display_round_trips() {
        for tok in ["A\u{2660}", "10\u{2666}", "9\u{2663}", "Q\u{2665}"] {
            let card: Card = tok.parse().unwrap();
            assert_eq!(card.to_string(), tok);
        }
    }

    #[test]
    fn batch_parse_fails_on_first_bad_token() {
        assert_eq!(
            try_parse_cards(["A\u{2660}", "K\u{2665}"]).unwrap().len(),
            2
        );
        assert!(try_parse_cards(["A\u{2660}", "XX"]).is_err());
    }
}
