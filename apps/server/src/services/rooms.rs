//! Room coordinator: table lifecycle, seats, command dispatch, fan-out.
//!
//! The registry is shared across connections; each room body sits behind
//! its own mutex, so commands against one table are serialized while
//! different tables proceed concurrently. Broadcasts are sent inside that
//! critical section, one per-viewer snapshot per seated client.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use actix::prelude::*;
use dashmap::DashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use uuid::Uuid;

use crate::domain::bidding::{self, BidAction};
use crate::domain::cards_types::{Card, PlayerId};
use crate::domain::rules::PLAYERS;
use crate::domain::snapshot::snapshot_for;
use crate::domain::state::{next_player, DealState, Phase};
use crate::domain::{belote, tricks};
use crate::error::AppError;
use crate::utils::room_code::normalize_room_code;
use crate::ws::protocol::{RosterEntry, ServerMsg};

/// Actor message carrying one outbound envelope to a connection.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct Outbound(pub ServerMsg);

struct RoomClient {
    nickname: String,
    recipient: Recipient<Outbound>,
}

pub struct Room {
    code: String,
    clients: HashMap<Uuid, RoomClient>,
    seats: [Option<Uuid>; PLAYERS],
    created_at: Instant,
    deal: Option<DealState>,
    rng: StdRng,
}

impl Room {
    fn new(code: String) -> Self {
        Self {
            code,
            clients: HashMap::new(),
            seats: [None; PLAYERS],
            created_at: Instant::now(),
            deal: None,
            rng: StdRng::from_entropy(),
        }
    }

    fn seat_of(&self, client: Uuid) -> Option<PlayerId> {
        self.seats
            .iter()
            .position(|s| *s == Some(client))
            .map(|i| i as PlayerId)
    }

    fn roster_msg(&self) -> ServerMsg {
        let mut players: Vec<RosterEntry> = Vec::with_capacity(self.clients.len());
        for (seat, slot) in self.seats.iter().enumerate() {
            let Some(id) = slot else { continue };
            let Some(client) = self.clients.get(id) else {
                continue;
            };
            players.push(RosterEntry {
                id: *id,
                nickname: client.nickname.clone(),
                seat: Some(seat as u8),
            });
        }
        ServerMsg::RoomUpdate {
            room_code: self.code.clone(),
            players,
        }
    }

    fn broadcast_all(&self, msg: &ServerMsg) {
        for client in self.clients.values() {
            client.recipient.do_send(Outbound(msg.clone()));
        }
    }

    /// One redacted snapshot per seated viewer.
    fn broadcast_game_state(&self) {
        let Some(deal) = self.deal.as_ref() else {
            return;
        };
        for (seat, slot) in self.seats.iter().enumerate() {
            let Some(id) = slot else { continue };
            let Some(client) = self.clients.get(id) else {
                continue;
            };
            let state = snapshot_for(deal, seat as PlayerId);
            client.recipient.do_send(Outbound(ServerMsg::GameState { state }));
        }
    }
}

/// Seat/dealer parameters for the next deal: the first deal of a table
/// starts at seat 0, later ones rotate the dealer and carry the match
/// totals forward.
fn next_deal_params(previous: Option<&DealState>) -> (PlayerId, u32, [u32; 2]) {
    match previous {
        Some(prev) => (next_player(prev.dealer), prev.deal_number + 1, prev.match_scores),
        None => (0, 1, [0, 0]),
    }
}

pub struct RoomRegistry {
    rooms: DashMap<String, Arc<Mutex<Room>>>,
}

fn lock(room: &Mutex<Room>) -> MutexGuard<'_, Room> {
    room.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    fn room(&self, code: &str) -> Result<Arc<Mutex<Room>>, AppError> {
        self.rooms
            .get(code)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::room("room not found"))
    }

    /// Seat `client` in the room named `code_raw`, creating the room on
    /// first join. Returns the normalized code.
    pub fn join(
        &self,
        code_raw: &str,
        nickname_raw: &str,
        client: Uuid,
        recipient: Recipient<Outbound>,
    ) -> Result<String, AppError> {
        let code = normalize_room_code(code_raw)?;
        let nickname = nickname_raw.trim();
        if nickname.is_empty() {
            return Err(AppError::protocol("nickname must not be empty"));
        }

        let room_arc = self
            .rooms
            .entry(code.clone())
            .or_insert_with(|| {
                info!(room = %code, "room created");
                Arc::new(Mutex::new(Room::new(code.clone())))
            })
            .value()
            .clone();
        let mut room = lock(&room_arc);

        if room.seat_of(client).is_none() {
            let seated = room.seats.iter().flatten().count();
            if seated == PLAYERS {
                return Err(AppError::room("room is full"));
            }
            let Some(idx) = room.seats.iter().position(|s| s.is_none()) else {
                return Err(AppError::seat("no seat available"));
            };
            room.seats[idx] = Some(client);
        }
        room.clients.insert(
            client,
            RoomClient {
                nickname: nickname.to_string(),
                recipient,
            },
        );
        info!(room = %code, client = %client, nickname, "client seated");

        let update = room.roster_msg();
        room.broadcast_all(&update);
        Ok(code)
    }

    /// Remove `client` from the room: vacate the seat, cancel any deal in
    /// progress, drop the room once empty. Used for both disconnects and
    /// moves to another table.
    pub fn leave(&self, code: &str, client: Uuid) {
        let Ok(room_arc) = self.room(code) else {
            return;
        };
        let empty_age = {
            let mut room = lock(&room_arc);
            let Some(gone) = room.clients.remove(&client) else {
                return;
            };
            for slot in room.seats.iter_mut() {
                if *slot == Some(client) {
                    *slot = None;
                }
            }
            info!(room = %code, client = %client, "client left");

            if room.clients.is_empty() {
                Some(room.created_at.elapsed())
            } else {
                // The machine has no substitute players; an abandoned deal
                // cannot continue (see DESIGN.md).
                if room.deal.take().is_some() {
                    room.broadcast_all(&ServerMsg::GameCancelled {
                        message: format!("{} left during the deal", gone.nickname),
                    });
                }
                let update = room.roster_msg();
                room.broadcast_all(&update);
                None
            }
        };
        if let Some(age) = empty_age {
            if self
                .rooms
                .remove_if(code, |_, arc| lock(arc).clients.is_empty())
                .is_some()
            {
                info!(room = %code, age_secs = age.as_secs(), "room closed");
            }
        }
    }

    /// Begin a deal. Requires four seated players and no deal in progress;
    /// a finished deal rolls the dealer and starts the next one.
    pub fn start_game(&self, code: &str, client: Uuid) -> Result<(), AppError> {
        let room_arc = self.room(code)?;
        let mut room = lock(&room_arc);
        if !room.clients.contains_key(&client) {
            return Err(AppError::room("not a member of this room"));
        }
        if room.seats.iter().any(|s| s.is_none()) {
            return Err(AppError::state("four seated players are required"));
        }
        if matches!(&room.deal, Some(deal) if deal.phase != Phase::Finished) {
            return Err(AppError::state("a deal is already in progress"));
        }

        let (dealer, deal_number, match_scores) = next_deal_params(room.deal.as_ref());
        let deal = bidding::start_deal(dealer, deal_number, match_scores, &mut room.rng);
        info!(room = %code, dealer, deal_number, "deal started");
        room.deal = Some(deal);
        room.broadcast_game_state();
        Ok(())
    }

    pub fn play_card(&self, code: &str, client: Uuid, card: Card) -> Result<(), AppError> {
        self.deal_command(code, client, |deal, seat, _| {
            tricks::play_card(deal, seat, card)
        })
    }

    pub fn choose_trump(
        &self,
        code: &str,
        client: Uuid,
        action: BidAction,
    ) -> Result<(), AppError> {
        self.deal_command(code, client, |deal, seat, rng| {
            bidding::bid(deal, seat, action, rng)
        })
    }

    pub fn announce_belote(&self, code: &str, client: Uuid) -> Result<(), AppError> {
        self.deal_command(code, client, |deal, seat, _| belote::announce(deal, seat))
    }

    /// Run one engine command under the room lock and fan the new state out
    /// on success.
    fn deal_command<F>(&self, code: &str, client: Uuid, f: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut DealState, PlayerId, &mut StdRng) -> Result<(), crate::domain::DomainError>,
    {
        let room_arc = self.room(code)?;
        let mut room = lock(&room_arc);
        let seat = room
            .seat_of(client)
            .ok_or_else(|| AppError::room("not seated in this room"))?;
        {
            let room = &mut *room;
            let Some(deal) = room.deal.as_mut() else {
                return Err(AppError::state("no deal in progress"));
            };
            f(deal, seat, &mut room.rng)?;
        }
        room.broadcast_game_state();
        Ok(())
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}
