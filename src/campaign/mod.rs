//! Encounter loop and campaign progression

pub mod encounter;
pub mod state;

pub use encounter::{run_encounter, EncounterState};
pub use state::{Campaign, CampaignState};
