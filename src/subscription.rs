//! Bridges the store's `watch` stream into the UI event channel.
//!
//! Each emission is forwarded as one [`AppEvent::Snapshot`] carrying the whole
//! collection. Intermediate values that arrive faster than the loop drains them
//! are coalesced by `watch`; only the latest list is ever delivered.

use crate::app::Investment;
use crate::events::AppEvent;
use tokio::sync::{mpsc, watch};

pub struct SnapshotForwarder {
    rx: watch::Receiver<Vec<Investment>>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl SnapshotForwarder {
    pub fn new(rx: watch::Receiver<Vec<Investment>>, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { rx, tx }
    }

    /// Sends the current collection immediately, then one snapshot per change.
    /// Returns when the store is dropped or the UI stops listening.
    pub async fn run(mut self) {
        if !self.forward_current() {
            return;
        }
        while self.rx.changed().await.is_ok() {
            if !self.forward_current() {
                return;
            }
        }
        tracing::debug!("snapshot forwarder: store dropped");
    }

    fn forward_current(&mut self) -> bool {
        let items = self.rx.borrow_and_update().clone();
        if self.tx.send(AppEvent::Snapshot(items)).is_err() {
            tracing::warn!("snapshot forwarder: channel closed");
            return false;
        }
        true
    }
}
