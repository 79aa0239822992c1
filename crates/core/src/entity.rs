//! Entity model - rings, badniks and shields scrolling toward the runner.

use arrayvec::ArrayVec;

use crate::types::{EntityKind, HAZARD_DAMAGE, MAX_TRACK_WIDTH, REWARD_VALUE};

/// Upper bound on live entities.
///
/// At most one entity spawns per tick and each one is gone within
/// `track_width` ticks, so the track can never hold more than this.
pub const MAX_ENTITIES: usize = MAX_TRACK_WIDTH as usize;

/// Live entity collection. Iteration order is spawn order.
pub type Entities = ArrayVec<Entity, MAX_ENTITIES>;

/// A collectible or obstacle on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    pub lane: u8,
    /// Steps left until the entity reaches the runner's column.
    pub distance: u16,
    pub kind: EntityKind,
    pub reward_value: u32,
    pub damage_value: u32,
}

impl Entity {
    pub fn reward(lane: u8, distance: u16) -> Self {
        Self {
            lane,
            distance,
            kind: EntityKind::Reward,
            reward_value: REWARD_VALUE,
            damage_value: 0,
        }
    }

    pub fn hazard(lane: u8, distance: u16) -> Self {
        Self {
            lane,
            distance,
            kind: EntityKind::Hazard,
            reward_value: 0,
            damage_value: HAZARD_DAMAGE,
        }
    }

    pub fn shield(lane: u8, distance: u16) -> Self {
        Self {
            lane,
            distance,
            kind: EntityKind::Shield,
            reward_value: 0,
            damage_value: 0,
        }
    }

    pub fn icon(&self) -> char {
        self.kind.icon()
    }

    /// True when the entity sits on the runner's cell this tick.
    pub fn reaches(&self, lane: u8) -> bool {
        self.distance == 0 && self.lane == lane
    }

    /// Damage dealt by an unprotected hit. An unset value still costs one life.
    pub fn effective_damage(&self) -> u32 {
        if self.damage_value == 0 {
            1
        } else {
            self.damage_value
        }
    }
}
