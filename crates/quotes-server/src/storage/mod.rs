//! Storage layer
//!
//! Quotes live in process memory only; nothing survives a restart.

pub mod memory;

pub use memory::MemoryStore;
