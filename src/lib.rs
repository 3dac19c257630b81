//! Dragon Slayer - turn-based text combat game

pub mod campaign;
pub mod combat;
pub mod core;
pub mod history;
pub mod providers;
pub mod ui;
