//! Campaign history: one record per finished campaign
//!
//! The stores are append-only from the game's point of view; persistence
//! failures degrade to warnings and never interrupt play.

pub mod record;
pub mod store;

pub use record::{HistoryRecord, Outcome};
pub use store::{HistoryStore, JsonFileHistory, MemoryHistory};
