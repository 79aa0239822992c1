//! Spawner - at most one new entity per tick, decided by injected rolls.

use crate::config::RunnerConfig;
use crate::entity::Entity;
use crate::rng::RandomSource;
use crate::types::LANE_COUNT;

/// Roll for this tick's spawn.
///
/// Draw order is fixed: spawn roll, then lane, then kind. Nothing spawns when
/// the spawn roll exceeds `spawn_chance`, and in that case only one draw is
/// consumed.
pub fn roll_spawn<R: RandomSource>(rng: &mut R, config: &RunnerConfig) -> Option<Entity> {
    if rng.next_f64() > config.spawn_chance {
        return None;
    }

    let lane = rng.next_below(LANE_COUNT as u32) as u8;
    let distance = config.spawn_distance();
    let roll = rng.next_f64();

    let entity = if roll < config.reward_roll_max {
        Entity::reward(lane, distance)
    } else if roll < config.hazard_roll_max {
        Entity::hazard(lane, distance)
    } else {
        Entity::shield(lane, distance)
    };
    Some(entity)
}
