//! Sleeping through the night.
//!
//! Sleep is the one compound action: it advances the clock in cycles of at
//! most four hours until dawn plus a little random extra, regenerating
//! health and dreaming along the way.

use std::time::Duration;

use dungeon_types::PartOfDay;
use tracing::debug;

use super::costs;
use crate::clock::SECONDS_PER_HOUR;
use crate::error::ActionError;
use crate::report::{Emphasis, ReportSink};
use crate::state::GameState;

/// Sleep until shortly after dawn.
///
/// # Errors
///
/// Returns [`ActionError`] if the clock cannot advance.
pub fn sleep(state: &mut GameState, sink: &mut dyn ReportSink) -> Result<(), ActionError> {
    if !state.part_of_day().allows_sleep() {
        sink.say("You can only sleep at night.");
        return Ok(());
    }
    sink.say("You fall asleep.");
    let until_dawn = state.gate.clock().seconds_to_next(PartOfDay::Dawn);
    let jitter = state.jitter_seconds(costs::SLEEP_JITTER_MAX);
    let mut remaining = until_dawn.saturating_add(jitter);
    debug!(until_dawn, jitter, "hero went to sleep");

    while remaining > 0 {
        let cycle = remaining.min(costs::SLEEP_CYCLE);
        state.advance_time(cycle)?;
        pace(state.sleep_ms_per_hour(), cycle);
        if cycle == costs::SLEEP_CYCLE
            && let Some(dream) = state.next_dream()
        {
            sink.emphasize(&dream, Emphasis::Highlight);
        }
        let health = state.hero.creature.health;
        if !health.is_full() {
            state
                .hero
                .add_health(costs::sleep_regeneration(cycle, health.maximum));
        }
        remaining = remaining.saturating_sub(cycle);
    }

    sink.say("You wake up.");
    Ok(())
}

/// Block the caller in proportion to the simulated time slept.
fn pace(ms_per_hour: u64, seconds: u64) {
    if ms_per_hour == 0 {
        return;
    }
    let millis = ms_per_hour
        .saturating_mul(seconds)
        .checked_div(SECONDS_PER_HOUR)
        .unwrap_or(0);
    std::thread::sleep(Duration::from_millis(millis));
}
