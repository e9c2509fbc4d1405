//! # Model Layer
//!
//! Persistence for the wallet core. Only plain key/value storage is needed:
//! the browser's `localStorage` in production, [`store::MemoryStore`] in tests
//! and native tools.

pub mod store;
