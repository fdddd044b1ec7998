//! Push channel for presence updates.
//!
//! Connects to the Lanyard socket, answers the opcode handshake
//! (hello -> subscribe -> heartbeats) and forwards every presence
//! snapshot to the app loop. Reconnects with a doubling backoff when
//! the connection drops; the loop only ends when the app side of the
//! channel is gone.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::feed::Update;
use crate::lanyard::types::{self, Hello, Presence, SocketMessage};
use crate::logging;

pub const SOCKET_URL: &str = "wss://api.lanyard.rest/socket";

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Cadence used until the server hello announces the real one
const DEFAULT_HEARTBEAT_MS: u64 = 30_000;

/// What a received text frame asks the client to do
#[derive(Debug)]
enum Inbound {
    /// Server hello; reply with a subscribe and adopt its cadence
    Hello { heartbeat_interval: u64 },
    /// Presence snapshot (INIT_STATE or PRESENCE_UPDATE)
    Event(Presence),
    /// Frame or event payload that did not parse
    Malformed,
    /// Anything else (heartbeat acks, unknown events)
    Ignored,
}

fn parse_frame(text: &str) -> Inbound {
    let msg: SocketMessage = match serde_json::from_str(text) {
        Ok(msg) => msg,
        Err(_) => return Inbound::Malformed,
    };

    if msg.op == Some(types::OP_HELLO) {
        let heartbeat_interval = msg
            .d
            .and_then(|d| serde_json::from_value::<Hello>(d).ok())
            .map(|hello| hello.heartbeat_interval)
            .unwrap_or(DEFAULT_HEARTBEAT_MS);
        return Inbound::Hello { heartbeat_interval };
    }

    match msg.t.as_deref() {
        Some(types::EVENT_INIT_STATE) | Some(types::EVENT_PRESENCE_UPDATE) => {
            match msg.d.map(serde_json::from_value::<Presence>) {
                Some(Ok(presence)) => Inbound::Event(presence),
                _ => Inbound::Malformed,
            }
        }
        _ => Inbound::Ignored,
    }
}

fn heartbeat_ticker(ms: u64) -> tokio::time::Interval {
    // A zero period would panic in tokio; never tick faster than 1s
    let period = Duration::from_millis(ms.max(1_000));
    tokio::time::interval_at(tokio::time::Instant::now() + period, period)
}

fn next_backoff(current: Duration) -> Duration {
    let next = current + current;
    if next > MAX_BACKOFF { MAX_BACKOFF } else { next }
}

pub async fn run(url: String, discord_id: String, tx: mpsc::Sender<Update>) {
    let mut backoff = INITIAL_BACKOFF;
    loop {
        let (mut ws, _) = match connect_async(url.as_str()).await {
            Ok(conn) => conn,
            Err(err) => {
                logging::warn(&format!("Presence socket connect failed: {}", err));
                tokio::time::sleep(backoff).await;
                backoff = next_backoff(backoff);
                continue;
            }
        };
        logging::info("Presence socket connected");

        let mut heartbeat = heartbeat_ticker(DEFAULT_HEARTBEAT_MS);

        loop {
            tokio::select! {
                _ = heartbeat.tick() => {
                    let frame = serde_json::json!({"op": types::OP_HEARTBEAT});
                    if ws.send(Message::Text(frame.to_string())).await.is_err() {
                        break;
                    }
                }
                incoming = ws.next() => {
                    match incoming {
                        Some(Ok(Message::Text(text))) => match parse_frame(&text) {
                            Inbound::Hello { heartbeat_interval } => {
                                heartbeat = heartbeat_ticker(heartbeat_interval);
                                let subscribe = serde_json::json!({
                                    "op": types::OP_INITIALIZE,
                                    "d": {"subscribe_to_id": discord_id},
                                });
                                if ws.send(Message::Text(subscribe.to_string())).await.is_err() {
                                    break;
                                }
                            }
                            Inbound::Event(presence) => {
                                // Subscription is proven live; start backoff over
                                backoff = INITIAL_BACKOFF;
                                if tx.send(Update::Presence(presence)).await.is_err() {
                                    let _ = ws.close(None).await;
                                    return;
                                }
                            }
                            Inbound::Malformed => {
                                logging::debug("Discarding malformed presence frame");
                            }
                            Inbound::Ignored => {}
                        },
                        Some(Ok(Message::Close(_))) | None => break,
                        Some(Ok(_)) => {}
                        Some(Err(err)) => {
                            logging::warn(&format!("Presence socket error: {}", err));
                            break;
                        }
                    }
                }
            }
        }

        let _ = ws.close(None).await;
        logging::warn("Presence socket dropped, reconnecting");
        tokio::time::sleep(backoff).await;
        backoff = next_backoff(backoff);
    }
}
