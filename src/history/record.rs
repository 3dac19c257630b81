//! Finalized campaign records

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::combat::Archetype;

/// How a campaign ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Outcome {
    #[display(fmt = "Victory")]
    Victory,
    #[display(fmt = "Defeat")]
    Defeat,
}

/// One finished campaign, as stored in the history log
///
/// `final_enemy` is only present on a defeat; `remaining_health` only on a
/// victory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub player_name: String,
    pub hero: Archetype,
    pub outcome: Outcome,
    pub level_reached: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_enemy: Option<Archetype>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_health: Option<i32>,
}
