//! Terminal input thread and application event channel.
//!
//! [`EventHandler`] runs crossterm polling on an OS thread because `event::poll()`
//! blocks. Store snapshots and task errors are pushed into the same channel by
//! other producers via [`EventHandler::sender`].

use crate::app::Investment;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    /// Full collection as last emitted by the store.
    Snapshot(Vec<Investment>),
    /// Global toast, auto-dismisses after `ERROR_TTL_SECS`.
    Error(String),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
    shutdown: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_flag = shutdown.clone();

        let thread = std::thread::spawn(move || {
            while !shutdown_flag.load(Ordering::Relaxed) {
                match event::poll(tick_rate) {
                    Err(e) => {
                        let _ = event_tx.send(AppEvent::Error(format!("Terminal poll error: {e}")));
                        break;
                    }
                    Ok(false) => {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        continue;
                    }
                    Ok(true) => {}
                }
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if event_tx.send(AppEvent::Key(key)).is_err() {
                            break;
                        }
                    }
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                    Err(e) => {
                        let _ = event_tx.send(AppEvent::Error(format!("Terminal read error: {e}")));
                        break;
                    }
                    _ => {} // resize and mouse: next draw picks up the new size
                }
            }
        });

        Self {
            rx,
            tx,
            shutdown,
            thread: Some(thread),
        }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                tracing::error!("event thread panicked");
            }
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        // Don't join here: poll may still be blocking during panic unwinding.
        self.shutdown.store(true, Ordering::Relaxed);
    }
}
