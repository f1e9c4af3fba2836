//! Storage trait for the quote collection

use crate::Quote;
use std::ops::ControlFlow;

/// Quote store
///
/// Map mutation and the live-count are each atomic on their own; callers
/// pair `put`/`increment_count` and `delete`/`decrement_count` themselves.
pub trait QuoteStore: Send + Sync {
    /// Next unused id, starting at 1. Never returns the same value twice;
    /// `None` once the `u32` range is used up.
    fn next_id(&self) -> Option<u32>;

    fn put(&self, id: u32, quote: Quote);

    fn get(&self, id: u32) -> Option<Quote>;

    /// Remove `id` if present. Returns whether an entry was removed.
    fn delete(&self, id: u32) -> bool;

    /// Visit every live quote in unspecified order until the visitor breaks.
    fn for_each(&self, visitor: &mut dyn FnMut(&Quote) -> ControlFlow<()>);

    fn increment_count(&self);

    fn decrement_count(&self);

    /// Live-count used as a fast empty check
    fn count(&self) -> u32;
}
