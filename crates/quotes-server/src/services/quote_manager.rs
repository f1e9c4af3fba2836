//! Quote management service

use async_trait::async_trait;
use quotes_core::ports::{QuoteService, QuoteStore};
use quotes_core::{NewQuote, Quote, QuoteError, Result};
use rand::seq::SliceRandom;
use std::ops::ControlFlow;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct QuoteManager {
    store: Arc<dyn QuoteStore>,
}

impl QuoteManager {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    fn snapshot(&self) -> Vec<Quote> {
        let mut quotes = Vec::new();
        self.store.for_each(&mut |quote| {
            quotes.push(quote.clone());
            ControlFlow::Continue(())
        });
        quotes
    }
}

#[async_trait]
impl QuoteService for QuoteManager {
    async fn add(&self, new_quote: NewQuote) -> Result<Quote> {
        debug!(operation = "quote service: adding", ?new_quote, "add called");

        let Some(id) = self.store.next_id() else {
            warn!(operation = "quote service: adding", "no ids left");
            return Err(QuoteError::IdsExhausted);
        };
        let quote = new_quote.into_quote(id);

        // Count first so a racing delete never decrements below zero
        self.store.increment_count();
        self.store.put(id, quote.clone());

        info!(operation = "quote service: adding", id, "quote created");
        Ok(quote)
    }

    async fn get_all(&self, author: &str) -> Result<Vec<Quote>> {
        debug!(operation = "quote service: getting", author, "get_all called");

        let mut quotes = Vec::new();
        self.store.for_each(&mut |quote| {
            if author.is_empty() || quote.is_by(author) {
                quotes.push(quote.clone());
            }
            ControlFlow::Continue(())
        });

        if !author.is_empty() && quotes.is_empty() {
            warn!(operation = "quote service: getting", author, "no quotes by author");
            return Err(QuoteError::AuthorNotFound);
        }

        info!(
            operation = "quote service: getting",
            count = quotes.len(),
            "quotes listed"
        );
        Ok(quotes)
    }

    async fn get_random(&self) -> Result<Quote> {
        debug!(operation = "quote service: getting random", "get_random called");

        if self.store.count() == 0 {
            warn!(operation = "quote service: getting random", "no quotes available");
            return Err(QuoteError::NoQuotesAvailable);
        }

        // The count check above and this snapshot are separate reads; a
        // concurrent delete can empty the store in between.
        let quotes = self.snapshot();
        let quote = quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| {
                warn!(
                    operation = "quote service: getting random",
                    "store emptied after count check"
                );
                QuoteError::NoQuotesAvailable
            })?;

        info!(operation = "quote service: getting random", id = quote.id, "random quote picked");
        Ok(quote)
    }

    async fn delete_by_id(&self, id: u32) -> Result<()> {
        debug!(operation = "quote service: deleting", id, "delete_by_id called");

        if self.store.get(id).is_none() {
            warn!(operation = "quote service: deleting", id, "quote not found");
            return Err(QuoteError::RecordNotFound);
        }

        if !self.store.delete(id) {
            // Removed by a concurrent delete after the lookup
            warn!(operation = "quote service: deleting", id, "quote already deleted");
            return Err(QuoteError::RecordNotFound);
        }
        self.store.decrement_count();

        info!(operation = "quote service: deleting", id, "quote deleted");
        Ok(())
    }

    fn count(&self) -> usize {
        self.store.count() as usize
    }
}
