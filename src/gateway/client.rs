//! Chat gateway client implementation
//!
//! Holds the long-lived real-time session (readiness signal, server ping
//! handling) and maps the four identity operations onto the service's
//! REST surface. Reconnection of a dropped session is the transport's
//! concern, not handled here.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tracing::{info, warn};

use crate::config::constants::http_timeout;
use crate::config::GatewayConfig;
use crate::gateway::errors::{GatewayError, UpdateError};
use crate::gateway::traits::IdentityGateway;
use crate::gateway::types::IdentityTarget;

// =============================================================================
// WebSocket Type Aliases
// =============================================================================

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;
type WsWriter = SplitSink<WsStream, Message>;
type WsReader = SplitStream<WsStream>;

// =============================================================================
// ChatGateway
// =============================================================================

/// Identity service client implementing the IdentityGateway trait
pub struct ChatGateway {
    config: GatewayConfig,
    http: reqwest::Client,
    ready_tx: watch::Sender<bool>,
    ready_rx: watch::Receiver<bool>,
    ws_sender: Mutex<Option<Arc<Mutex<WsWriter>>>>,
    reader_handle: Mutex<Option<JoinHandle<()>>>,
}

impl ChatGateway {
    /// Create a gateway client. Does not connect — call `connect()` after.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_str(&format!("Bot {}", config.token)).map_err(
                |_| GatewayError::AuthRejected("BOT_TOKEN contains invalid characters".to_string()),
            )?,
        );
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(http_timeout())
            .build()
            .map_err(GatewayError::Network)?;

        let (ready_tx, ready_rx) = watch::channel(false);

        Ok(Self {
            config,
            http,
            ready_tx,
            ready_rx,
            ws_sender: Mutex::new(None),
            reader_handle: Mutex::new(None),
        })
    }

    /// Establish the real-time session and authenticate.
    ///
    /// Spawns the reader loop that answers server pings and flips the
    /// readiness flag on the ready event. Failure here is fatal at
    /// startup; the caller logs and exits.
    pub async fn connect(&self) -> Result<(), GatewayError> {
        info!("Connecting to identity gateway");
        let (ws_stream, _) = tokio_tungstenite::connect_async(self.config.ws_url.as_str())
            .await
            .map_err(|e| GatewayError::WebSocket(Box::new(e)))?;

        let (mut ws_writer, ws_reader) = ws_stream.split();

        let identify = serde_json::json!({
            "op": "identify",
            "token": self.config.token,
        });
        ws_writer
            .send(Message::Text(identify.to_string()))
            .await
            .map_err(|e| GatewayError::WebSocket(Box::new(e)))?;

        let writer = Arc::new(Mutex::new(ws_writer));
        *self.ws_sender.lock().await = Some(Arc::clone(&writer));

        let ready_tx = self.ready_tx.clone();
        let handle = tokio::spawn(Self::session_reader_loop(ws_reader, writer, ready_tx));
        *self.reader_handle.lock().await = Some(handle);

        Ok(())
    }

    /// Close the session and stop the reader loop.
    pub async fn disconnect(&self) {
        if let Some(writer) = self.ws_sender.lock().await.take() {
            let _ = writer.lock().await.send(Message::Close(None)).await;
        }
        if let Some(handle) = self.reader_handle.lock().await.take() {
            handle.abort();
        }
        info!("Gateway disconnected");
    }

    async fn session_reader_loop(
        mut reader: WsReader,
        writer: Arc<Mutex<WsWriter>>,
        ready_tx: watch::Sender<bool>,
    ) {
        while let Some(message) = reader.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let value: Value = match serde_json::from_str(&text) {
                        Ok(v) => v,
                        Err(_) => {
                            warn!("Unparseable gateway event, skipping");
                            continue;
                        }
                    };
                    match value.get("op").and_then(Value::as_str) {
                        Some("ready") => {
                            if !*ready_tx.borrow() {
                                info!("Gateway session ready");
                            }
                            let _ = ready_tx.send(true);
                        }
                        Some("ping") => {
                            let pong = serde_json::json!({
                                "op": "pong",
                                "d": value.get("d").cloned().unwrap_or(Value::Null),
                            });
                            let mut w = writer.lock().await;
                            if w.send(Message::Text(pong.to_string())).await.is_err() {
                                warn!("Failed to answer gateway ping");
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Message::Ping(payload)) => {
                    let mut w = writer.lock().await;
                    let _ = w.send(Message::Pong(payload)).await;
                }
                Ok(Message::Close(_)) => {
                    warn!("Gateway session closed by remote");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "Gateway session read error");
                    break;
                }
            }
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.http_url.trim_end_matches('/'), path)
    }

    /// Map a REST response status onto the update error taxonomy.
    fn classify_status(status: reqwest::StatusCode) -> Result<(), UpdateError> {
        if status.is_success() {
            return Ok(());
        }
        match status {
            reqwest::StatusCode::FORBIDDEN => Err(UpdateError::PermissionDenied),
            reqwest::StatusCode::NOT_FOUND => Err(UpdateError::TargetGone),
            other => Err(UpdateError::Transient(format!("status {}", other.as_u16()))),
        }
    }
}

#[async_trait]
impl IdentityGateway for ChatGateway {
    async fn wait_until_ready(&self) {
        let mut rx = self.ready_rx.clone();
        while !*rx.borrow_and_update() {
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    async fn list_targets(&self) -> Result<Vec<IdentityTarget>, GatewayError> {
        let response = self
            .http
            .get(self.endpoint("/api/v1/communities"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(GatewayError::InvalidResponse(format!(
                "community listing returned status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let targets: Vec<IdentityTarget> = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(targets)
    }

    async fn set_member_name(
        &self,
        target: &IdentityTarget,
        name: &str,
    ) -> Result<(), UpdateError> {
        let url = self.endpoint(&format!(
            "/api/v1/communities/{}/members/@me",
            target.community_id
        ));
        let response = self
            .http
            .patch(&url)
            .json(&serde_json::json!({ "nick": name }))
            .send()
            .await
            .map_err(|e| UpdateError::Transient(e.to_string()))?;

        Self::classify_status(response.status())
    }

    async fn clear_status(&self) -> Result<(), UpdateError> {
        let response = self
            .http
            .delete(self.endpoint("/api/v1/me/status"))
            .send()
            .await
            .map_err(|e| UpdateError::Transient(e.to_string()))?;

        Self::classify_status(response.status())
    }

    async fn set_status(&self, text: &str) -> Result<(), UpdateError> {
        let response = self
            .http
            .put(self.endpoint("/api/v1/me/status"))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(|e| UpdateError::Transient(e.to_string()))?;

        Self::classify_status(response.status())
    }
}

// ============================================================================
// Tests
// ============================================================================
