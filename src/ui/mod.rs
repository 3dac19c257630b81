//! Presentation layer: battle narration and menu text
//!
//! The core only talks to [`BattleSink`]; everything console-specific lives
//! behind it.

pub mod console;
pub mod sink;
pub mod text;

pub use console::ConsoleSink;
pub use sink::{BattleSink, RecordingSink, SilentSink};
