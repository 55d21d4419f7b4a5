//! Websocket client utilities for integration tests.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

pub struct WsClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsClient {
    /// Connect to a websocket endpoint, retrying with doubling backoff
    /// until the server accepts or the deadline passes.
    pub async fn connect_retry(
        url: &str,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let deadline = tokio::time::Instant::now() + timeout;
        let mut backoff = Duration::from_millis(2);
        loop {
            match connect_async(url).await {
                Ok((stream, _)) => return Ok(Self { stream }),
                Err(err) if tokio::time::Instant::now() + backoff >= deadline => {
                    return Err(Box::new(err));
                }
                Err(_) => {
                    tokio::time::sleep(backoff).await;
                    backoff = (backoff * 2).min(Duration::from_millis(100));
                }
            }
        }
    }

    pub async fn send_json(&mut self, value: &Value) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.send(Message::Text(value.to_string())).await?;
        Ok(())
    }

    /// Next text frame parsed as JSON; control frames are skipped.
    pub async fn recv_json(
        &mut self,
        timeout: Duration,
    ) -> Result<Value, Box<dyn std::error::Error>> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            let msg = tokio::time::timeout(remaining, self.stream.next())
                .await
                .map_err(|_| "timeout waiting for websocket message")?
                .ok_or("connection closed")??;
            if let Message::Text(text) = msg {
                return Ok(serde_json::from_str(&text)?);
            }
        }
    }

    pub async fn close(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.stream.close(None).await?;
        Ok(())
    }
}
