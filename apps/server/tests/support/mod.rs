pub mod websocket_client;
