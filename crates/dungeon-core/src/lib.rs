//! Clock, perception, target matching, and hero actions for Dungeon.
//!
//! This crate resolves one player command at a time against an explicit
//! [`GameState`]: it finds the target, pays the action's time cost through
//! the [`TimeGate`], re-validates, mutates the world, and reports.
//!
//! # Modules
//!
//! - [`clock`] -- World clock and part-of-day arithmetic.
//! - [`config`] -- Configuration loading from `dungeon.yaml` into
//!   strongly-typed structs.
//! - [`visibility`] -- Luminosity-based visibility filter.
//! - [`matcher`] -- Token matching and disambiguation of named entities.
//! - [`gate`] -- The only path by which time advances.
//! - [`hero`] -- The player-controlled creature.
//! - [`state`] -- [`GameState`] and the [`SharedGame`] wrapper.
//! - [`actions`] -- Verb parsing and every hero action.
//! - [`combat`] -- [`CombatResolver`] seam and [`NarratingCombat`].
//! - [`report`] -- [`ReportSink`] trait and the [`Transcript`] recorder.
//! - [`spells`] -- Spell registry.
//! - [`error`] -- [`ActionError`].
//!
//! [`GameState`]: state::GameState
//! [`SharedGame`]: state::SharedGame
//! [`TimeGate`]: gate::TimeGate
//! [`CombatResolver`]: combat::CombatResolver
//! [`NarratingCombat`]: combat::NarratingCombat
//! [`ReportSink`]: report::ReportSink
//! [`Transcript`]: report::Transcript
//! [`ActionError`]: error::ActionError

pub mod actions;
pub mod clock;
pub mod combat;
pub mod config;
pub mod error;
pub mod gate;
pub mod hero;
pub mod matcher;
pub mod report;
pub mod spells;
pub mod state;
pub mod visibility;

pub use actions::{Verb, execute};
pub use combat::{CombatResolver, NarratingCombat};
pub use config::GameConfig;
pub use error::ActionError;
pub use report::{Emphasis, Report, ReportSink, Transcript};
pub use state::{GameState, SharedGame};
