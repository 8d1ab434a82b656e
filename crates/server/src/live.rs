// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Live refresh notifications for dashboard clients.
//!
//! Events are broadcast to all connected WebSocket clients and are purely
//! informational: they tell a client that a refresh finished so it can
//! re-query the snapshot endpoint. No commands are executed over the
//! socket and the events are never authoritative.

use axum::{
    extract::{
        State as AxumState, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures::{SinkExt, stream::StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::AppState;

/// Maximum number of events to buffer in the broadcast channel.
/// If clients cannot keep up, older events will be dropped.
const EVENT_BUFFER_SIZE: usize = 100;

/// Live refresh event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    /// A dashboard refresh completed successfully.
    DashboardRefreshed {
        /// Wall-clock label of the refresh.
        at: String,
        /// Number of rows the feed returned.
        total_rows: usize,
    },
    /// A dashboard refresh failed; the previous data is still being served.
    RefreshFailed {
        /// The failure description.
        message: String,
    },
    /// Connection confirmation (sent on initial connect).
    Connected {
        /// Server wall-clock label.
        at: String,
    },
}

/// Broadcaster for live refresh events.
///
/// A lightweight wrapper around `tokio::sync::broadcast` that lets every
/// connected WebSocket client receive refresh notifications.
#[derive(Clone)]
pub struct RefreshBroadcaster {
    /// The broadcast channel sender.
    tx: broadcast::Sender<LiveEvent>,
}

impl RefreshBroadcaster {
    /// Creates a new event broadcaster.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Broadcasts an event to all connected clients.
    ///
    /// Non-blocking; if no clients are connected the event is silently
    /// dropped.
    pub fn broadcast(&self, event: &LiveEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast live event");
            }
            Err(_) => {
                debug!(?event, "No receivers for live event");
            }
        }
    }

    /// Subscribes to the event stream.
    ///
    /// Events sent before subscription are not received.
    fn subscribe(&self) -> broadcast::Receiver<LiveEvent> {
        self.tx.subscribe()
    }
}

impl Default for RefreshBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles WebSocket upgrade requests for the live event stream.
pub async fn live_events_handler(
    ws: WebSocketUpgrade,
    AxumState(state): AxumState<AppState>,
) -> Response {
    let broadcaster: Arc<RefreshBroadcaster> = state.broadcaster.clone();
    let connected_at: String = state.now_label();
    ws.on_upgrade(move |socket| handle_socket(socket, broadcaster, connected_at))
}

/// Handles an individual WebSocket connection.
///
/// Sends a connection confirmation, then streams refresh events until the
/// client disconnects or an error occurs.
async fn handle_socket(
    socket: WebSocket,
    broadcaster: Arc<RefreshBroadcaster>,
    connected_at: String,
) {
    info!("Client connected to live event stream");

    let (mut sender, mut receiver) = socket.split();
    let mut rx: broadcast::Receiver<LiveEvent> = broadcaster.subscribe();

    let connected_event = LiveEvent::Connected { at: connected_at };
    if let Ok(json) = serde_json::to_string(&connected_event)
        && sender.send(Message::Text(json.into())).await.is_err()
    {
        warn!("Failed to send connection confirmation");
        return;
    }

    // Task for sending events to the client
    let mut send_task = tokio::spawn(async move {
        while let Ok(event) = rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        // Client disconnected
                        break;
                    }
                }
                Err(e) => {
                    error!(?e, "Failed to serialize live event");
                }
            }
        }
    });

    // Task for receiving messages from the client (though we don't expect any)
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(_) | Message::Binary(_)) => {
                    // We don't process commands over WebSocket
                    warn!("Received unexpected message from client, ignoring");
                }
                Ok(Message::Close(_)) => {
                    debug!("Client sent close frame");
                    break;
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {
                    // Ping/pong handled automatically by Axum
                }
                Err(e) => {
                    error!(?e, "WebSocket receive error");
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => {
            debug!("Send task completed");
            recv_task.abort();
        }
        _ = &mut recv_task => {
            debug!("Receive task completed");
            send_task.abort();
        }
    }

    info!("Client disconnected from live event stream");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcaster_creation() {
        let broadcaster = RefreshBroadcaster::new();
        assert_eq!(broadcaster.tx.receiver_count(), 0);
    }

    #[test]
    fn test_broadcast_no_receivers() {
        let broadcaster = RefreshBroadcaster::new();
        // Should not panic when no receivers
        broadcaster.broadcast(&LiveEvent::DashboardRefreshed {
            at: String::from("08:00:00"),
            total_rows: 12,
        });
    }

    #[test]
    fn test_broadcast_with_receiver() {
        let broadcaster = RefreshBroadcaster::new();
        let mut rx = broadcaster.subscribe();

        broadcaster.broadcast(&LiveEvent::DashboardRefreshed {
            at: String::from("08:00:00"),
            total_rows: 12,
        });

        match rx.try_recv() {
            Ok(LiveEvent::DashboardRefreshed { total_rows: 12, .. }) => {}
            other => panic!("Expected DashboardRefreshed, got {other:?}"),
        }
    }

    #[test]
    fn test_event_serialization() {
        let event = LiveEvent::RefreshFailed {
            message: String::from("backend down"),
        };

        let json = match serde_json::to_string(&event) {
            Ok(json) => json,
            Err(e) => panic!("Failed to serialize: {e}"),
        };
        assert!(json.contains("refresh_failed"));

        let deserialized: LiveEvent = match serde_json::from_str(&json) {
            Ok(event) => event,
            Err(e) => panic!("Failed to deserialize: {e}"),
        };
        match deserialized {
            LiveEvent::RefreshFailed { message } => assert_eq!(message, "backend down"),
            _ => panic!("Wrong event type"),
        }
    }
}
