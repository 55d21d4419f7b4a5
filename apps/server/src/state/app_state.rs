use std::sync::Arc;

use crate::services::rooms::RoomRegistry;

/// Shared application state handed to every connection.
#[derive(Clone)]
pub struct AppState {
    rooms: Arc<RoomRegistry>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(RoomRegistry::new()),
        }
    }

    pub fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
