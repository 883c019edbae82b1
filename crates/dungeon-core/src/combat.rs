//! Seam to the combat subsystem.
//!
//! The attack action only resolves a target. What happens next is decided by
//! a [`CombatResolver`]. [`NarratingCombat`] just announces the attack and
//! leaves the world untouched.

use dungeon_types::CreatureId;
use tracing::info;

use crate::error::ActionError;
use crate::report::ReportSink;
use crate::state::GameState;

/// Resolves a fight once the attack target is known.
pub trait CombatResolver {
    /// Fight `target`, a creature on the hero's location.
    ///
    /// # Errors
    ///
    /// Implementations return [`ActionError`] for broken invariants only.
    fn resolve(
        &mut self,
        state: &mut GameState,
        target: CreatureId,
        sink: &mut dyn ReportSink,
    ) -> Result<(), ActionError>;
}

/// Announces the attack without changing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NarratingCombat;

impl CombatResolver for NarratingCombat {
    fn resolve(
        &mut self,
        state: &mut GameState,
        target: CreatureId,
        sink: &mut dyn ReportSink,
    ) -> Result<(), ActionError> {
        let location = state.hero_location()?;
        let Some(creature) = location.creature(target) else {
            return Ok(());
        };
        info!(target = %target, name = %creature.name, "hero attacks");
        sink.say(&format!("{} attacks {}.", state.hero.name(), creature.name));
        Ok(())
    }
}
