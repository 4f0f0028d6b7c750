//! Push Client
//!
//! Long-lived subscription to the server's event stream. A background thread
//! holds the streaming HTTP connection, parses newline-delimited JSON events,
//! and forwards them over an mpsc channel; the UI thread drains the channel
//! each frame with [`PushClient::poll_events`]. Connection status transitions
//! arrive on a second channel.
//!
//! The thread reconnects with exponential backoff. Teardown signals a watch
//! channel that every await in the loop is raced against, so an idle stream
//! unblocks immediately and [`PushClient::shutdown`] can join the thread; the
//! connection closes together with the poll timer, leaving nothing behind.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::sync::watch;

use crate::app::config::Config;
use crate::shared::{PushEvent, SharedError};

/// Connection status reported by the subscription thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushStatus {
    Connecting,
    Connected,
    Retrying,
    Error(String),
    Disconnected,
}

/// Push stream client for the current session
pub struct PushClient {
    event_receiver: Receiver<PushEvent>,
    status_receiver: Receiver<PushStatus>,
    stop: Arc<AtomicBool>,
    shutdown_tx: watch::Sender<bool>,
    subscription_thread: Option<thread::JoinHandle<()>>,
}

impl PushClient {
    /// Connect the push stream for a user and start the subscription thread
    pub fn connect(config: Config, user_id: &str) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let (status_tx, status_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let stop = Arc::new(AtomicBool::new(false));

        let thread_stop = Arc::clone(&stop);
        let user_id = user_id.to_string();
        let thread = thread::spawn(move || {
            subscribe_to_stream(config, user_id, event_tx, status_tx, thread_stop, shutdown_rx);
        });

        Self {
            event_receiver: event_rx,
            status_receiver: status_rx,
            stop,
            shutdown_tx,
            subscription_thread: Some(thread),
        }
    }

    /// Drain pushed events (non-blocking)
    pub fn poll_events(&self) -> Vec<PushEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Latest status update (non-blocking)
    pub fn poll_status(&self) -> Option<PushStatus> {
        self.status_receiver.try_recv().ok()
    }

    /// Stop the subscription thread and wait for it to exit.
    ///
    /// The shutdown signal interrupts the thread even while it is parked on
    /// an idle stream, so the connection is closed by the time this returns.
    pub fn shutdown(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        let _ = self.shutdown_tx.send(true);
        if let Some(thread) = self.subscription_thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for PushClient {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        let _ = self.shutdown_tx.send(true);
    }
}

/// Hold the streaming connection and forward parsed events
fn subscribe_to_stream(
    config: Config,
    user_id: String,
    event_sender: Sender<PushEvent>,
    status_sender: Sender<PushStatus>,
    stop: Arc<AtomicBool>,
    mut shutdown: watch::Receiver<bool>,
) {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime for push subscription: {}", e);
            return;
        }
    };

    rt.block_on(async {
        let mut reconnect_delay = std::time::Duration::from_millis(1000);
        const MAX_RECONNECT_DELAY: std::time::Duration = std::time::Duration::from_secs(30);

        loop {
            if stop.load(Ordering::SeqCst) {
                break;
            }

            let url = config.api_url(&format!("/events/subscribe/{}", user_id));
            let client = Client::new();

            tracing::info!("[PUSH] subscribing: {}", url);
            let _ = status_sender.send(PushStatus::Connecting);

            let connect_result = tokio::select! {
                result = client.get(&url).header("Subscribe", "true").send() => result,
                _ = shutdown.changed() => break,
            };
            let response = match connect_result {
                Ok(resp) => resp,
                Err(e) => {
                    tracing::warn!("[PUSH] subscribe failed (will retry): {}", e);
                    let _ = status_sender.send(PushStatus::Error(format!("network: {}", e)));
                    let _ = status_sender.send(PushStatus::Retrying);
                    tokio::select! {
                        _ = tokio::time::sleep(reconnect_delay) => {}
                        _ = shutdown.changed() => break,
                    }
                    reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
                    continue;
                }
            };

            if !response.status().is_success() {
                tracing::error!(
                    "[PUSH] subscription failed with status {} (will retry)",
                    response.status()
                );
                let _ = status_sender.send(PushStatus::Error(format!("http: {}", response.status())));
                let _ = status_sender.send(PushStatus::Retrying);
                tokio::select! {
                    _ = tokio::time::sleep(reconnect_delay) => {}
                    _ = shutdown.changed() => break,
                }
                reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
                continue;
            }

            tracing::info!("[PUSH] subscription established for {}", user_id);
            let _ = status_sender.send(PushStatus::Connected);
            reconnect_delay = std::time::Duration::from_millis(1000);

            let mut stream = response.bytes_stream();
            let mut buffer = String::new();

            loop {
                // Raced against the shutdown signal so teardown unblocks an
                // idle stream and drops the connection right away.
                let next_chunk = tokio::select! {
                    chunk = stream.next() => chunk,
                    _ = shutdown.changed() => {
                        let _ = status_sender.send(PushStatus::Disconnected);
                        return;
                    }
                };
                let Some(chunk_result) = next_chunk else {
                    break;
                };
                if stop.load(Ordering::SeqCst) {
                    let _ = status_sender.send(PushStatus::Disconnected);
                    return;
                }

                let chunk = match chunk_result {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        tracing::warn!("[PUSH] stream error: {}", e);
                        break;
                    }
                };

                let chunk_str = match std::str::from_utf8(&chunk) {
                    Ok(s) => s,
                    Err(e) => {
                        tracing::error!("[PUSH] invalid UTF-8 in event stream: {}", e);
                        break;
                    }
                };
                buffer.push_str(chunk_str);

                // Process complete lines; one JSON event per line.
                while let Some(newline_pos) = buffer.find('\n') {
                    let line = buffer[..newline_pos].trim_end_matches('\r').to_string();
                    buffer = buffer[newline_pos + 1..].to_string();

                    if line.is_empty() || line.starts_with(':') {
                        continue;
                    }

                    match serde_json::from_str::<PushEvent>(&line) {
                        Ok(event) => {
                            if event_sender.send(event).is_err() {
                                // Receiver dropped: the owning state is gone.
                                let _ = status_sender.send(PushStatus::Disconnected);
                                return;
                            }
                        }
                        Err(e) => {
                            let err = SharedError::from(e);
                            tracing::warn!("[PUSH] unparseable event dropped: {}", err);
                        }
                    }
                }
            }

            if stop.load(Ordering::SeqCst) {
                break;
            }

            tracing::info!("[PUSH] stream ended, reconnecting");
            let _ = status_sender.send(PushStatus::Retrying);
            tokio::select! {
                _ = tokio::time::sleep(reconnect_delay) => {}
                _ = shutdown.changed() => break,
            }
            reconnect_delay = std::cmp::min(reconnect_delay * 2, MAX_RECONNECT_DELAY);
        }

        let _ = status_sender.send(PushStatus::Disconnected);
    });
}
