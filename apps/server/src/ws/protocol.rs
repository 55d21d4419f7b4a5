//! Wire envelopes: `{"type": ..., "payload": ...}` both directions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cards_types::{Card, Suit};
use crate::domain::snapshot::DealSnapshot;

/// Messages a client may send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ClientMsg {
    #[serde(rename_all = "camelCase")]
    JoinRoom { room_code: String, nickname: String },
    StartGame,
    PlayCard { card: Card },
    ChooseTrump {
        action: BidActionMsg,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        suit: Option<Suit>,
    },
    AnnounceBelote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidActionMsg {
    Take,
    Pass,
}

/// Messages the server sends. `Error` and `GameCancelled` carry
/// human-readable text; everything else is structured state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ServerMsg {
    #[serde(rename_all = "camelCase")]
    RoomUpdate {
        room_code: String,
        players: Vec<RosterEntry>,
    },
    GameState { state: DealSnapshot },
    GameCancelled { message: String },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: Uuid,
    pub nickname: String,
    pub seat: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Rank, Suit};

    #[test]
    fn join_room_envelope_parses() {
        let msg: ClientMsg = serde_json::from_str(
            r#"{"type":"join_room","payload":{"roomCode":"tbl","nickname":"ana"}}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            ClientMsg::JoinRoom {
                room_code: "tbl".to_string(),
                nickname: "ana".to_string(),
            }
        );
    }

    #[test]
    fn payloadless_envelopes_parse() {
        let msg: ClientMsg = serde_json::from_str(r#"{"type":"start_game"}"#).unwrap();
        assert_eq!(msg, ClientMsg::StartGame);
        let msg: ClientMsg = serde_json::from_str(r#"{"type":"announce_belote"}"#).unwrap();
        assert_eq!(msg, ClientMsg::AnnounceBelote);
    }

    #[test]
    fn play_card_envelope_uses_symbols() {
        let msg: ClientMsg = serde_json::from_str(
            "{\"type\":\"play_card\",\"payload\":{\"card\":{\"suit\":\"\u{2665}\",\"rank\":\"10\"}}}",
        )
        .unwrap();
        assert_eq!(
            msg,
            ClientMsg::PlayCard {
                card: Card::new(Suit::Hearts, Rank::Ten)
            }
        );
    }

    #[test]
    fn choose_trump_with_and_without_suit() {
        let take: ClientMsg = serde_json::from_str(
            "{\"type\":\"choose_trump\",\"payload\":{\"action\":\"take\",\"suit\":\"\u{2660}\"}}",
        )
        .unwrap();
        assert_eq!(
            take,
            ClientMsg::ChooseTrump {
                action: BidActionMsg::Take,
                suit: Some(Suit::Spades),
            }
        );
        let pass: ClientMsg =
            serde_json::from_str(r#"{"type":"choose_trump","payload":{"action":"pass"}}"#).unwrap();
        assert_eq!(
            pass,
            ClientMsg::ChooseTrump {
                action: BidActionMsg::Pass,
                suit: None,
            }
        );
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert!(serde_json::from_str::<ClientMsg>(r#"{"type":"resign"}"#).is_err());
        assert!(serde_json::from_str::<ClientMsg>(r#"{"payload":{}}"#).is_err());
    }

    #[test]
    fn server_error_envelope_shape() {
        let json = serde_json::to_string(&ServerMsg::Error {
            message: "not your turn".to_string(),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"type":"error","payload":{"message":"not your turn"}}"#
        );
    }
}
