//! Debounced scan sessions
//!
//! Keyboard-wedge scanners deliver a payload as a burst of keystrokes. A
//! session coalesces the burst: every [`ScanSession::input`] replaces the
//! pending parse, and only once the buffer has been quiet for the debounce
//! window is it decoded and published on a `watch` channel.
//!
//! Each input gets a sequence number. A parse publishes only if its number is
//! still the newest when it finishes, so a superseded parse can never
//! overwrite a newer result.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::detector::SymbologyDetector;
use crate::error::ParseError;
use crate::models::{ParsedResult, Symbology};
use crate::Decoder;

/// Published outcome of one debounced parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUpdate {
    /// Sequence number of the input that produced this update
    pub seq: u64,
    /// Buffer that was parsed
    pub input: String,
    /// Detected symbology
    pub symbology: Option<Symbology>,
    /// Parse result or failure
    pub outcome: Result<ParsedResult, ParseError>,
}

impl SessionUpdate {
    /// Check if the parsed buffer was a QR code
    pub fn is_qr(&self) -> bool {
        self.symbology == Some(Symbology::Qr) && self.outcome.is_ok()
    }
}

struct SessionState {
    seq: u64,
    pending: Option<JoinHandle<()>>,
}

struct Shared {
    decoder: Decoder,
    state: Mutex<SessionState>,
    updates: watch::Sender<Option<SessionUpdate>>,
}

impl Shared {
    fn publish(&self, seq: u64, input: String) {
        let (symbology, outcome) = match self.decoder.decode(&input) {
            Ok(scan) => (scan.symbology, Ok(scan.result)),
            Err(err) => (SymbologyDetector::detect(&input), Err(err)),
        };

        let mut state = self.state.lock();
        if state.seq != seq {
            tracing::debug!(seq, current = state.seq, "discarding superseded parse");
            return;
        }
        state.pending = None;
        tracing::debug!(seq, ok = outcome.is_ok(), "publishing scan");
        self.updates.send_replace(Some(SessionUpdate {
            seq,
            input,
            symbology,
            outcome,
        }));
    }
}

/// Per-scanner session that debounces input before parsing
///
/// Must be used from within a Tokio runtime; `input` spawns the pending parse.
pub struct ScanSession {
    shared: Arc<Shared>,
    debounce: Duration,
}

impl ScanSession {
    /// Create a session with the default decoder and its debounce window
    pub fn new() -> Self {
        Self::with_decoder(Decoder::new())
    }

    /// Create a session around a specific decoder
    pub fn with_decoder(decoder: Decoder) -> Self {
        let debounce = decoder.config().debounce;
        let (updates, _) = watch::channel(None);
        Self {
            shared: Arc::new(Shared {
                decoder,
                state: Mutex::new(SessionState {
                    seq: 0,
                    pending: None,
                }),
                updates,
            }),
            debounce,
        }
    }

    /// Quiet period before the buffer is parsed
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Record the latest accumulated buffer and reschedule the parse.
    ///
    /// Any parse still waiting for an earlier buffer is aborted. Returns the
    /// sequence number assigned to this input.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn input(&self, buffer: impl Into<String>) -> u64 {
        let buffer = buffer.into();
        let mut state = self.shared.state.lock();
        state.seq += 1;
        let seq = state.seq;

        if let Some(previous) = state.pending.take() {
            previous.abort();
            tracing::trace!(seq, "rescheduled pending parse");
        }

        let shared = Arc::clone(&self.shared);
        let debounce = self.debounce;
        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            shared.publish(seq, buffer);
        }));
        seq
    }

    /// Discard the pending parse, if any, without publishing
    pub fn cancel(&self) {
        let mut state = self.shared.state.lock();
        state.seq += 1;
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
    }

    /// Receive every published update
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionUpdate>> {
        self.shared.updates.subscribe()
    }

    /// Most recently published update
    pub fn latest(&self) -> Option<SessionUpdate> {
        self.shared.updates.borrow().clone()
    }

    /// Check if the last published parse was a QR code
    pub fn is_qr(&self) -> bool {
        self.shared
            .updates
            .borrow()
            .as_ref()
            .is_some_and(SessionUpdate::is_qr)
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        if let Some(pending) = self.shared.state.lock().pending.take() {
            pending.abort();
        }
    }
}
