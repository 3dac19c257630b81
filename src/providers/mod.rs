//! Injected action sources
//!
//! The encounter loop never touches a terminal or an RNG directly: the
//! player's action comes from an [`ActionProvider`] and the enemy's from an
//! [`EnemyActionSource`]. Console and random implementations drive the real
//! game; scripted ones drive tests and the headless simulator.

pub mod action;
pub mod policy;
pub mod source;

pub use action::{ActionProvider, ConsoleActionProvider, ScriptedActionProvider};
pub use policy::HeuristicProvider;
pub use source::{EnemyActionSource, RandomActionSource, ScriptedActionSource};
