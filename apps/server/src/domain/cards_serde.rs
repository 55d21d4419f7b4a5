//! Serde for card types: suits as their Unicode symbol, ranks as their
//! short label, a card as a `{suit, rank}` object.

use serde::de::Error as DeError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::cards_types::{Card, Rank, Suit};

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Suit>().map_err(|e| D::Error::custom(e.to_string()))
    }
}

impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Rank>().map_err(|e| D::Error::custom(e.to_string()))
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Card", 2)?;
        state.serialize_field("suit", &self.suit)?;
        state.serialize_field("rank", &self.rank)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CardWire {
            suit: Suit,
            rank: Rank,
        }
        let wire = CardWire::deserialize(deserializer)?;
        Ok(Card {
            suit: wire.suit,
            rank: wire.rank,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suit_serializes_to_symbol() {
        assert_eq!(
            serde_json::to_string(&Suit::Hearts).unwrap(),
            "\"\u{2665}\""
        );
        assert_eq!(
            serde_json::from_str::<Suit>("\"\u{2660}\"").unwrap(),
            Suit::Spades
        );
        assert!(serde_json::from_str::<Suit>("\"H\"").is_err());
    }

    #[test]
    fn rank_serializes_to_label() {
        assert_eq!(serde_json::to_string(&Rank::Ten).unwrap(), "\"10\"");
        assert_eq!(serde_json::from_str::<Rank>("\"J\"").unwrap(), Rank::Jack);
        assert!(serde_json::from_str::<Rank>("\"11\"").is_err());
    }

    #[test]
    fn card_round_trips_as_object() {
        let card = Card::new(Suit::Diamonds, Rank::Ten);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "{\"suit\":\"\u{2666}\",\"rank\":\"10\"}");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
    }

    #[test]
    fn card_rejects_missing_fields() {
        assert!(serde_json::from_str::<Card>("{\"suit\":\"\u{2666}\"}").is_err());
        assert!(serde_json::from_str::<Card>("\"10\u{2666}\"").is_err());
    }
}
