//! In-memory quote store backed by DashMap

use dashmap::DashMap;
use quotes_core::ports::QuoteStore;
use quotes_core::Quote;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU32, Ordering};

/// Concurrent quote map with an id sequence and a live-count
pub struct MemoryStore {
    data: DashMap<u32, Quote>,
    last_id: AtomicU32,
    count: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
            last_id: AtomicU32::new(0),
            count: AtomicU32::new(0),
        }
    }

    /// Number of entries actually present in the map
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop every entry and reset the live-count. The id sequence keeps going.
    pub fn clear(&self) {
        self.data.clear();
        self.count.store(0, Ordering::SeqCst);
    }
}

#[cfg(test)]
impl MemoryStore {
    /// Store whose next id is `last_id + 1`
    pub(crate) fn with_last_id(last_id: u32) -> Self {
        let store = Self::new();
        store.last_id.store(last_id, Ordering::SeqCst);
        store
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteStore for MemoryStore {
    fn next_id(&self) -> Option<u32> {
        self.last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .ok()
            .map(|prev| prev + 1)
    }

    fn put(&self, id: u32, quote: Quote) {
        self.data.insert(id, quote);
    }

    fn get(&self, id: u32) -> Option<Quote> {
        self.data.get(&id).map(|entry| entry.value().clone())
    }

    fn delete(&self, id: u32) -> bool {
        self.data.remove(&id).is_some()
    }

    fn for_each(&self, visitor: &mut dyn FnMut(&Quote) -> ControlFlow<()>) {
        for entry in self.data.iter() {
            if visitor(entry.value()).is_break() {
                break;
            }
        }
    }

    fn increment_count(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement_count(&self) {
        // Saturate at zero
        let _ = self
            .count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }

    fn count(&self) -> u32 {
        self.count.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let store = MemoryStore::new();
        assert_eq!(store.next_id(), Some(1));
        assert_eq!(store.next_id(), Some(2));
        assert_eq!(store.next_id(), Some(3));
    }

    #[test]
    fn test_id_sequence_stops_at_u32_max() {
        let store = MemoryStore::with_last_id(u32::MAX - 1);
        assert_eq!(store.next_id(), Some(u32::MAX));
        assert_eq!(store.next_id(), None);
        assert_eq!(store.next_id(), None);
    }

    #[test]
    fn test_basic_operations() {
        let store = MemoryStore::new();

        // Test put and get
        store.put(1, Quote::new(1, "A", "T"));
        assert_eq!(store.get(1), Some(Quote::new(1, "A", "T")));

        // Test non-existent key
        assert_eq!(store.get(2), None);

        // Test delete
        assert!(store.delete(1));
        assert_eq!(store.get(1), None);
        assert!(!store.delete(1));
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.put(1, Quote::new(1, "A", "first"));
        store.put(1, Quote::new(1, "A", "second"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).map(|q| q.text), Some("second".to_string()));
    }

    #[test]
    fn test_for_each_stops_early() {
        let store = MemoryStore::new();
        for id in 1..=5 {
            store.put(id, Quote::new(id, "A", "T"));
        }

        let mut seen = 0;
        store.for_each(&mut |_| {
            seen += 1;
            if seen == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(seen, 2);

        let mut all = 0;
        store.for_each(&mut |_| {
            all += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(all, 5);
    }

    #[test]
    fn test_count_never_underflows() {
        let store = MemoryStore::new();
        store.increment_count();
        store.decrement_count();
        store.decrement_count();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_clear_keeps_id_sequence() {
        let store = MemoryStore::new();
        let id = store.next_id().unwrap();
        store.put(id, Quote::new(id, "A", "T"));
        store.increment_count();

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.count(), 0);
        assert_eq!(store.next_id(), Some(2));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_ids_are_unique() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                (0..100)
                    .map(|_| store.next_id().unwrap())
                    .collect::<Vec<_>>()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.extend(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 800);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&800));
    }
}
