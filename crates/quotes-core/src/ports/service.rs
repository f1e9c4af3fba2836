//! Business operations exposed to the HTTP layer

use crate::{NewQuote, Quote, Result};
use async_trait::async_trait;

#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Store a quote under a freshly assigned id
    async fn add(&self, quote: NewQuote) -> Result<Quote>;

    /// All quotes, or only those by `author` when it is non-empty
    async fn get_all(&self, author: &str) -> Result<Vec<Quote>>;

    /// A uniformly random live quote
    async fn get_random(&self) -> Result<Quote>;

    async fn delete_by_id(&self, id: u32) -> Result<()>;

    /// Number of live quotes
    fn count(&self) -> usize;
}
