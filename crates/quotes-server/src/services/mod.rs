//! Business logic services

pub mod quote_manager;

pub use quote_manager::QuoteManager;
