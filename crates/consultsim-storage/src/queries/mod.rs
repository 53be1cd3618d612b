//! Typed queries against the entity store.

pub mod entities;
pub mod progress;
pub mod title_history;
