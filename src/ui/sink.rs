//! Battle event sinks
//!
//! The encounter and campaign loops push read-only snapshots and resolution
//! events here. Every method defaults to a no-op so headless callers only
//! implement what they need.

use crate::combat::{Combatant, TurnEvent};

/// Receives battle narration from the encounter and campaign loops
pub trait BattleSink {
    /// A new level is starting against `enemy`
    fn level_start(&mut self, _level: u32, _player: &Combatant, _enemy: &Combatant) {}

    /// Health snapshot at the top of a turn
    fn battle_status(&mut self, _player: &Combatant, _enemy: &Combatant) {}

    /// The enemy telegraphed its chosen action
    fn action_declared(&mut self, _enemy: &Combatant) {}

    /// One side's action resolved
    fn turn_event(&mut self, _actor: &Combatant, _opponent: &Combatant, _event: &TurnEvent) {}

    /// Both resolutions for the turn are done
    fn turn_end(&mut self) {}

    fn level_cleared(&mut self, _enemy: &Combatant) {}

    fn defeat(&mut self, _player: &Combatant, _enemy: &Combatant, _level: u32) {}

    fn victory(&mut self, _player: &Combatant) {}
}

/// Sink that discards everything (simulation runs)
pub struct SilentSink;

impl BattleSink for SilentSink {}

/// Sink that keeps resolution events, for asserting on battle flow
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<TurnEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BattleSink for RecordingSink {
    fn turn_event(&mut self, _actor: &Combatant, _opponent: &Combatant, event: &TurnEvent) {
        self.events.push(*event);
    }
}
