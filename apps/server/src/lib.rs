//! Authoritative server for four-player belote tables.
//!
//! Layering: `domain` is the pure rule machine (dealing, auction, legality,
//! tricks, scoring); `services` coordinates rooms and seats on top of it;
//! `ws` adapts both to a JSON-over-websocket protocol.

pub mod domain;
pub mod error;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod utils;
pub mod ws;

pub use error::AppError;
