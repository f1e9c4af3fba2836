//! Quotes Core Library
//!
//! Domain types, the error taxonomy, and the port traits shared by the
//! storage backend and the HTTP layer.

pub mod error;
pub mod ports;
pub mod types;

pub use error::{QuoteError, Result};
pub use types::*;
