//! Port traits (interfaces) for dependency injection

pub mod service;
pub mod storage;

pub use service::QuoteService;
pub use storage::QuoteStore;
