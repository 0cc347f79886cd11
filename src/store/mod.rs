//! Entry storage for the cache engine.

pub mod entry_store;

pub use entry_store::{Entry, EntryStore};
