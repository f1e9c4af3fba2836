//! Core domain types

pub mod quote;

pub use quote::*;
