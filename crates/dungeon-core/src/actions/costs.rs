//! Time costs of hero actions, in seconds.

/// Picking an item up from the ground.
pub const PICK_UP: u64 = 10;
/// Dropping an item on the ground.
pub const DROP: u64 = 2;
/// Wielding a weapon.
pub const EQUIP: u64 = 6;
/// Putting a weapon away.
pub const UNEQUIP: u64 = 4;
/// One bite of food.
pub const EAT: u64 = 30;
/// Smashing an item on the ground.
pub const DESTROY: u64 = 120;
/// Milking a creature.
pub const MILK: u64 = 45;
/// Walking to a neighbouring location.
pub const WALK: u64 = 200;
/// Glancing at the equipped clock.
pub const READ_EQUIPPED_CLOCK: u64 = 4;
/// Digging a clock out of the inventory and reading it.
pub const READ_CARRIED_CLOCK: u64 = 10;

/// Health restored by drinking milk.
pub const MILK_NUTRITION: u32 = 12;

/// Fraction of maximum health that resting restores up to.
pub const REST_CAP_PERMILLE: u16 = 600;
/// Seconds needed to regenerate a full health pool.
pub const SECONDS_TO_REGENERATE_FULL_HEALTH: u64 = 30_000;

/// Longest uninterrupted stretch of sleep.
pub const SLEEP_CYCLE: u64 = 14_400;
/// Upper bound of the random extra sleep past dawn.
pub const SLEEP_JITTER_MAX: u64 = 900;

/// Seconds needed to regenerate `recovered` out of `maximum` health.
///
/// Never less than one second.
pub fn rest_duration(recovered: u32, maximum: u32) -> u64 {
    u64::from(recovered)
        .saturating_mul(SECONDS_TO_REGENERATE_FULL_HEALTH)
        .checked_div(u64::from(maximum))
        .unwrap_or(0)
        .max(1)
}

/// Health regenerated by `seconds` of sleep for a pool of `maximum`.
pub fn sleep_regeneration(seconds: u64, maximum: u32) -> u32 {
    let regenerated = u64::from(maximum)
        .saturating_mul(seconds)
        .checked_div(SECONDS_TO_REGENERATE_FULL_HEALTH)
        .unwrap_or(0);
    u32::try_from(regenerated).unwrap_or(u32::MAX)
}

/// Health gained from one bite of food.
///
/// A full bite restores `nutrition`; the last, partial bite restores the
/// matching fraction.
pub fn bite_healing(nutrition: u32, remaining_integrity: u32, decrement: u32) -> u32 {
    if remaining_integrity >= decrement {
        return nutrition;
    }
    let scaled = u64::from(nutrition)
        .saturating_mul(u64::from(remaining_integrity))
        .checked_div(u64::from(decrement))
        .unwrap_or(0);
    u32::try_from(scaled).unwrap_or(nutrition)
}
