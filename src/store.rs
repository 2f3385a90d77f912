//! Canonical investment collection and its change stream.
//!
//! The store is the only owner of the collection. Readers never mutate it; they
//! call [`InvestmentStore::add`] / [`InvestmentStore::remove`] and observe the
//! result through a `watch` channel that always holds the full current list.

use crate::app::{Investment, InvestmentKey};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

pub trait InvestmentStore: Send + Sync {
    /// Receiver that yields the whole collection on every change. The current
    /// value is readable immediately via `borrow()`.
    fn subscribe(&self) -> watch::Receiver<Vec<Investment>>;
    fn snapshot(&self) -> Vec<Investment>;
    /// Appends a new record under a fresh key and returns it.
    fn add(&self, name: &str, value: i64) -> Investment;
    /// Removes the record with `item.key`. Returns `false` (and emits nothing)
    /// when no such key exists.
    fn remove(&self, item: &Investment) -> bool;
}

/// In-process store. Keys start at 1 and are never reused.
pub struct MemoryStore {
    tx: watch::Sender<Vec<Investment>>,
    next_key: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self {
            tx,
            next_key: AtomicU64::new(1),
        }
    }

    fn allocate_key(&self) -> InvestmentKey {
        self.next_key.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InvestmentStore for MemoryStore {
    fn subscribe(&self) -> watch::Receiver<Vec<Investment>> {
        self.tx.subscribe()
    }

    fn snapshot(&self) -> Vec<Investment> {
        self.tx.borrow().clone()
    }

    fn add(&self, name: &str, value: i64) -> Investment {
        let item = Investment {
            key: self.allocate_key(),
            name: name.to_string(),
            value,
        };
        self.tx.send_modify(|items| items.push(item.clone()));
        tracing::debug!(key = item.key, name = %item.name, value, "investment added");
        item
    }

    fn remove(&self, item: &Investment) -> bool {
        let removed = self.tx.send_if_modified(|items| {
            let before = items.len();
            items.retain(|i| i.key != item.key);
            items.len() != before
        });
        if removed {
            tracing::debug!(key = item.key, "investment removed");
        } else {
            tracing::debug!(key = item.key, "remove ignored: key not in store");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(items: &[Investment]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.add("CDB", 100);
        store.add("Tesouro", 500);
        store.add("LCI", 250);
        assert_eq!(names(&store.snapshot()), vec!["CDB", "Tesouro", "LCI"]);
    }

    #[test]
    fn add_assigns_unique_keys() {
        let store = MemoryStore::new();
        let a = store.add("CDB", 100);
        let b = store.add("CDB", 100);
        assert_ne!(a.key, b.key);
        assert_eq!(a.key, 1);
        assert_eq!(b.key, 2);
    }

    #[test]
    fn add_returns_stored_record() {
        let store = MemoryStore::new();
        let item = store.add("Tesouro", 500);
        assert_eq!(store.snapshot(), vec![item]);
    }

    #[test]
    fn remove_by_key() {
        let store = MemoryStore::new();
        let a = store.add("CDB", 100);
        let b = store.add("Tesouro", 500);
        assert!(store.remove(&a));
        assert_eq!(store.snapshot(), vec![b]);
    }

    #[test]
    fn remove_matches_key_not_contents() {
        let store = MemoryStore::new();
        let a = store.add("CDB", 100);
        let stale = Investment {
            key: a.key,
            name: "renamed elsewhere".to_string(),
            value: 0,
        };
        assert!(store.remove(&stale));
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let store = MemoryStore::new();
        let a = store.add("CDB", 100);
        let ghost = Investment {
            key: 99,
            name: "ghost".to_string(),
            value: 1,
        };
        assert!(!store.remove(&ghost));
        assert_eq!(store.snapshot(), vec![a]);
    }

    #[test]
    fn keys_not_reused_after_remove() {
        let store = MemoryStore::new();
        let a = store.add("CDB", 100);
        store.remove(&a);
        let b = store.add("CDB", 100);
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn remove_absent_key_does_not_notify() {
        let store = MemoryStore::new();
        let rx = store.subscribe();
        let ghost = Investment {
            key: 7,
            name: "ghost".to_string(),
            value: 1,
        };
        store.remove(&ghost);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn subscriber_sees_every_mutation() {
        let store = MemoryStore::new();
        let mut rx = store.subscribe();
        assert!(rx.borrow_and_update().is_empty());

        let a = store.add("CDB", 100);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), vec![a.clone()]);

        store.remove(&a);
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_empty());
    }
}
