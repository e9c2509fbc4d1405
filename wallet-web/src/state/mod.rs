//! Reactive application state

pub mod wallet;

pub use wallet::AppState;
