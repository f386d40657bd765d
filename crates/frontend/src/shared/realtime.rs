//! Realtime channel: server push over a WebSocket.
//!
//! Each known event bumps the refresh tick of the resource it concerns, so
//! any list of that resource refetches, and may raise a toast. Dropped
//! connections are retried with a capped backoff. One connection is open
//! at a time; its socket is dropped before the next attempt.

use std::collections::BTreeMap;
use std::pin::Pin;

use contracts::shared::realtime::{parse_frame, OutgoingEvent, RealtimeEvent};
use futures::channel::mpsc::{self, UnboundedSender};
use futures::future::poll_fn;
use futures::{Sink, SinkExt, StreamExt};
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::{Message, State};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api_utils::realtime_url;
use super::config::config;
use super::notifications::Notifier;

const RECONNECT_BASE_MS: u32 = 1_000;
const RECONNECT_MAX_MS: u32 = 30_000;

/// Per-resource change counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshTicks {
    ticks: BTreeMap<&'static str, u64>,
}

impl RefreshTicks {
    pub fn get(&self, resource: &str) -> u64 {
        self.ticks.get(resource).copied().unwrap_or(0)
    }

    pub fn bump(&mut self, resource: &'static str) -> u64 {
        let tick = self.ticks.entry(resource).or_insert(0);
        *tick += 1;
        *tick
    }

    /// Applies a received event; returns the resource it refreshed.
    pub fn apply(&mut self, event: RealtimeEvent) -> &'static str {
        let resource = event.resource();
        self.bump(resource);
        resource
    }
}

/// Delay before reconnect attempt `attempt` (0-based).
pub fn reconnect_delay(attempt: u32) -> u32 {
    RECONNECT_BASE_MS
        .saturating_mul(1u32 << attempt.min(5))
        .min(RECONNECT_MAX_MS)
}

/// Queues `frame` for the writer of the open connection, if any.
fn enqueue(outgoing: Option<&UnboundedSender<String>>, frame: String) -> bool {
    outgoing.is_some_and(|tx| tx.unbounded_send(frame).is_ok())
}

#[derive(Clone, Copy)]
pub struct RealtimeContext {
    ticks: RwSignal<RefreshTicks>,
    pub connected: RwSignal<bool>,
    outgoing: StoredValue<Option<UnboundedSender<String>>>,
    attempts: StoredValue<u32>,
}

impl RealtimeContext {
    fn new() -> Self {
        Self {
            ticks: RwSignal::new(RefreshTicks::default()),
            connected: RwSignal::new(false),
            outgoing: StoredValue::new(None),
            attempts: StoredValue::new(0),
        }
    }

    /// Subscribes the current reactive scope to changes of `resource`.
    pub fn track(&self, resource: &str) -> u64 {
        self.ticks.with(|ticks| ticks.get(resource))
    }

    /// Sends `event` if the channel is open; otherwise it is dropped.
    pub fn send(&self, event: OutgoingEvent) {
        let sent = self
            .outgoing
            .try_with_value(|tx| enqueue(tx.as_ref(), event.to_frame()))
            .unwrap_or(false);
        if sent {
            log::debug!("realtime: sent {}", event.name());
        } else {
            log::debug!("realtime: channel closed, dropped {}", event.name());
        }
    }

    fn on_text(&self, text: &str, notifier: Notifier) {
        match parse_frame(text) {
            Some((event, _)) => {
                let resource = self
                    .ticks
                    .try_update(|ticks| ticks.apply(event))
                    .unwrap_or_default();
                log::debug!("realtime: {} -> refresh {}", event.name(), resource);
                if let Some(notice) = event.notice() {
                    notifier.info(notice);
                }
            }
            None => log::debug!("realtime: ignored frame {}", text),
        }
    }

    fn is_disposed(&self) -> bool {
        self.attempts.try_with_value(|_| ()).is_none()
    }

    /// Keeps one connection open until the shell is torn down.
    async fn run(self, url: String, notifier: Notifier) {
        while !self.is_disposed() {
            match WebSocket::open(&url) {
                Ok(mut ws) => {
                    let ready = poll_fn(|cx| Sink::<Message>::poll_ready(Pin::new(&mut ws), cx)).await;
                    if ready.is_ok() && matches!(ws.state(), State::Open) {
                        self.serve(ws, notifier).await;
                    } else {
                        log::warn!("realtime: cannot reach {}", url);
                    }
                }
                Err(err) => log::warn!("realtime: cannot open {}: {}", url, err),
            }

            self.connected.try_set(false);
            self.outgoing.try_set_value(None);
            let Some(attempt) = self.attempts.try_update_value(|n| {
                let current = *n;
                *n += 1;
                current
            }) else {
                return;
            };
            TimeoutFuture::new(reconnect_delay(attempt)).await;
        }
    }

    /// Reads frames until the connection drops. The socket and its
    /// callbacks are released when both halves go out of scope.
    async fn serve(self, ws: WebSocket, notifier: Notifier) {
        self.attempts.try_set_value(0);
        self.connected.try_set(true);
        log::info!("realtime: connected");

        let (mut write, mut read) = ws.split();
        let (tx, mut rx) = mpsc::unbounded::<String>();
        self.outgoing.try_set_value(Some(tx));
        spawn_local(async move {
            while let Some(frame) = rx.next().await {
                if let Err(err) = write.send(Message::Text(frame)).await {
                    log::warn!("realtime: send failed: {}", err);
                    break;
                }
            }
        });

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => self.on_text(&text, notifier),
                Ok(Message::Bytes(_)) => log::debug!("realtime: ignored binary frame"),
                Err(err) => {
                    log::warn!("realtime: closed ({})", err);
                    break;
                }
            }
        }
    }
}

/// Opens the channel (when enabled) and provides [`RealtimeContext`].
pub fn provide_realtime(notifier: Notifier) -> RealtimeContext {
    let ctx = RealtimeContext::new();
    if config().realtime.enabled {
        spawn_local(ctx.run(realtime_url(), notifier));
    } else {
        log::info!("realtime: disabled by configuration");
    }
    provide_context(ctx);
    ctx
}

pub fn use_realtime() -> Option<RealtimeContext> {
    use_context::<RealtimeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_bump_their_resource_only() {
        let mut ticks = RefreshTicks::default();
        assert_eq!(ticks.apply(RealtimeEvent::OrderRequested), "order");
        ticks.apply(RealtimeEvent::OrderRequested);
        ticks.apply(RealtimeEvent::InquiryCreated);

        assert_eq!(ticks.get("order"), 2);
        assert_eq!(ticks.get("inquiry"), 1);
        assert_eq!(ticks.get("customer"), 0);
    }

    #[test]
    fn frames_queue_only_while_a_writer_listens() {
        assert!(!enqueue(None, "{}".into()));

        let (tx, mut rx) = mpsc::unbounded::<String>();
        assert!(enqueue(Some(&tx), r#"{"event":"login-staff"}"#.into()));
        let queued = futures::executor::block_on(rx.next());
        assert_eq!(queued.as_deref(), Some(r#"{"event":"login-staff"}"#));

        drop(rx);
        assert!(!enqueue(Some(&tx), "{}".into()));
    }

    #[test]
    fn reconnect_backs_off_up_to_the_cap() {
        assert_eq!(reconnect_delay(0), 1_000);
        assert_eq!(reconnect_delay(1), 2_000);
        assert_eq!(reconnect_delay(4), 16_000);
        assert_eq!(reconnect_delay(5), 30_000);
        assert_eq!(reconnect_delay(40), 30_000);
    }
}
