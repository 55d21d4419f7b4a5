//! Per-connection websocket session actor.
//!
//! Parses inbound envelopes, dispatches them to the room registry, and
//! relays broadcasts back out. Rejections are answered with an `error`
//! envelope to this connection only.

use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::bidding::BidAction;
use crate::error::AppError;
use crate::services::rooms::Outbound;
use crate::state::AppState;
use crate::ws::protocol::{BidActionMsg, ClientMsg, ServerMsg};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(WsSession::new(app_state), &req, stream)
}

pub struct WsSession {
    conn_id: Uuid,
    app_state: web::Data<AppState>,
    room_code: Option<String>,
    last_heartbeat: Instant,
}

impl WsSession {
    fn new(app_state: web::Data<AppState>) -> Self {
        Self {
            conn_id: Uuid::new_v4(),
            app_state,
            room_code: None,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "failed to serialize outbound message"),
        }
    }

    fn send_error(&self, ctx: &mut ws::WebsocketContext<Self>, err: &AppError) {
        Self::send_json(
            ctx,
            &ServerMsg::Error {
                message: err.to_string(),
            },
        );
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(conn_id = %actor.conn_id, "client heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    fn current_room(&self) -> Result<String, AppError> {
        self.room_code
            .clone()
            .ok_or_else(|| AppError::room("join a room first"))
    }

    /// Seat this connection in a room; a seat held in another room is
    /// vacated once the new one is secured.
    fn join_room(
        &mut self,
        ctx: &mut ws::WebsocketContext<Self>,
        code: &str,
        nickname: &str,
    ) -> Result<(), AppError> {
        let recipient = ctx.address().recipient();
        let joined = self
            .app_state
            .rooms()
            .join(code, nickname, self.conn_id, recipient)?;
        if let Some(previous) = self.room_code.take() {
            if previous != joined {
                self.app_state.rooms().leave(&previous, self.conn_id);
            }
        }
        self.room_code = Some(joined);
        Ok(())
    }

    fn handle_command(&mut self, text: &str, ctx: &mut ws::WebsocketContext<Self>) {
        let cmd: ClientMsg = match serde_json::from_str(text) {
            Ok(cmd) => cmd,
            Err(err) => {
                self.send_error(ctx, &AppError::protocol(format!("malformed message: {err}")));
                return;
            }
        };

        let result = match cmd {
            ClientMsg::JoinRoom {
                room_code,
                nickname,
            } => self.join_room(ctx, &room_code, &nickname),
            ClientMsg::StartGame => self
                .current_room()
                .and_then(|code| self.app_state.rooms().start_game(&code, self.conn_id)),
            ClientMsg::PlayCard { card } => self
                .current_room()
                .and_then(|code| self.app_state.rooms().play_card(&code, self.conn_id, card)),
            ClientMsg::ChooseTrump { action, suit } => {
                let action = match action {
                    BidActionMsg::Take => BidAction::Take { suit },
                    BidActionMsg::Pass => BidAction::Pass,
                };
                self.current_room().and_then(|code| {
                    self.app_state
                        .rooms()
                        .choose_trump(&code, self.conn_id, action)
                })
            }
            ClientMsg::AnnounceBelote => self.current_room().and_then(|code| {
                self.app_state
                    .rooms()
                    .announce_belote(&code, self.conn_id)
            }),
        };

        if let Err(err) = result {
            self.send_error(ctx, &err);
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(conn_id = %self.conn_id, "session started");
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(code) = self.room_code.take() {
            self.app_state.rooms().leave(&code, self.conn_id);
        }
        info!(conn_id = %self.conn_id, "session stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();
                self.handle_command(&text, ctx);
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                self.send_error(ctx, &AppError::protocol("binary frames are not supported"));
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(conn_id = %self.conn_id, error = %err, "websocket protocol error");
                ctx.stop();
            }
        }
    }
}

impl Handler<Outbound> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: Outbound, ctx: &mut Self::Context) -> Self::Result {
        Self::send_json(ctx, &msg.0);
    }
}
