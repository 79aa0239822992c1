//! Collision resolver - applies pickups and hits at the runner's cell.
//!
//! Hazard priority is the core balance contract:
//! dash destroys > shield absorbs > rings are sacrificed > a life is lost.

use arrayvec::ArrayVec;

use crate::entity::{Entities, Entity, MAX_ENTITIES};
use crate::player::PlayerState;
use crate::types::{EntityKind, CURRENCY_LOSS_CAP, DASH_DESTROY_BONUS, SHIELD_TURNS};

/// What a single collision did to the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionEvent {
    RingCollected { points: u32 },
    ShieldCollected,
    BadnikDestroyed { bonus: u32 },
    BadnikAbsorbed,
    RingsLost { amount: u32 },
    LifeLost { damage: u32 },
}

pub type CollisionEvents = ArrayVec<CollisionEvent, MAX_ENTITIES>;

/// Resolve every entity on the runner's cell, removing each one it consumes.
pub fn resolve_collisions(player: &mut PlayerState, entities: &mut Entities) -> CollisionEvents {
    let mut events = CollisionEvents::new();
    let lane = player.lane;
    entities.retain(|entity| {
        if !entity.reaches(lane) {
            return true;
        }
        events.push(apply(player, entity));
        false
    });
    events
}

/// Apply one entity's effect to the runner.
pub fn apply(player: &mut PlayerState, entity: &Entity) -> CollisionEvent {
    match entity.kind {
        EntityKind::Reward => {
            player.currency += 1;
            player.score += entity.reward_value;
            CollisionEvent::RingCollected {
                points: entity.reward_value,
            }
        }
        EntityKind::Shield => {
            // Overwrites any running timer.
            player.shield_turns = SHIELD_TURNS;
            CollisionEvent::ShieldCollected
        }
        EntityKind::Hazard => hit(player, entity.effective_damage()),
    }
}

fn hit(player: &mut PlayerState, damage: u32) -> CollisionEvent {
    if player.dash_active {
        player.score += DASH_DESTROY_BONUS;
        CollisionEvent::BadnikDestroyed {
            bonus: DASH_DESTROY_BONUS,
        }
    } else if player.shielded() {
        // The timer ticks down in end_turn, not here.
        CollisionEvent::BadnikAbsorbed
    } else if player.currency > 0 {
        let amount = player.currency.min(CURRENCY_LOSS_CAP);
        player.currency -= amount;
        CollisionEvent::RingsLost { amount }
    } else {
        player.lives = player.lives.saturating_sub(damage);
        CollisionEvent::LifeLost { damage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn one(entity: Entity) -> Entities {
        let mut entities = Entities::new();
        entities.push(entity);
        entities
    }

    #[test]
    fn ring_awards_currency_and_points() {
        let mut p = PlayerState::new();
        let mut entities = one(Entity::reward(p.lane, 0));

        let events = resolve_collisions(&mut p, &mut entities);

        assert_eq!(events.as_slice(), &[CollisionEvent::RingCollected { points: 100 }]);
        assert_eq!(p.currency, 1);
        assert_eq!(p.score, 100);
        assert!(entities.is_empty());
    }

    #[test]
    fn shield_overwrites_timer() {
        let mut p = PlayerState::new();
        p.shield_turns = 1;
        let mut entities = one(Entity::shield(p.lane, 0));
        resolve_collisions(&mut p, &mut entities);
        assert_eq!(p.shield_turns, 3);

        p.shield_turns = 5;
        let mut entities = one(Entity::shield(p.lane, 0));
        resolve_collisions(&mut p, &mut entities);
        assert_eq!(p.shield_turns, 3);
    }

    #[test]
    fn unprotected_hit_costs_a_life() {
        let mut p = PlayerState::new();
        let mut entities = one(Entity::hazard(p.lane, 0));

        let events = resolve_collisions(&mut p, &mut entities);

        assert_eq!(events.as_slice(), &[CollisionEvent::LifeLost { damage: 1 }]);
        assert_eq!(p.lives, 2);
        assert_eq!(p.currency, 0);
        assert!(entities.is_empty());
    }

    #[test]
    fn dash_beats_shield() {
        let mut p = PlayerState::new();
        p.shield_turns = 2;
        p.currency = 4;
        p.activate_dash();
        let mut entities = one(Entity::hazard(p.lane, 0));

        let events = resolve_collisions(&mut p, &mut entities);

        assert_eq!(events[0], CollisionEvent::BadnikDestroyed { bonus: 250 });
        assert_eq!(p.score, 250);
        assert_eq!(p.lives, 3);
        assert_eq!(p.currency, 4);
        assert_eq!(p.shield_turns, 2);
        // Cleared later by end_turn, not here.
        assert!(p.dash_active);
    }

    #[test]
    fn shield_beats_currency() {
        let mut p = PlayerState::new();
        p.shield_turns = 1;
        p.currency = 4;
        let mut entities = one(Entity::hazard(p.lane, 0));

        let events = resolve_collisions(&mut p, &mut entities);

        assert_eq!(events[0], CollisionEvent::BadnikAbsorbed);
        assert_eq!(p.currency, 4);
        assert_eq!(p.shield_turns, 1);
    }

    #[test]
    fn currency_beats_life() {
        let mut p = PlayerState::new();
        p.currency = 25;
        let mut entities = one(Entity::hazard(p.lane, 0));

        let events = resolve_collisions(&mut p, &mut entities);

        assert_eq!(events[0], CollisionEvent::RingsLost { amount: 10 });
        assert_eq!(p.currency, 15);
        assert_eq!(p.lives, 3);
    }

    #[test]
    fn ignores_other_lanes_and_distances() {
        let mut p = PlayerState::new();
        let mut entities = Entities::new();
        entities.push(Entity::hazard(0, 0));
        entities.push(Entity::hazard(p.lane, 1));
        entities.push(Entity::reward(p.lane, 0));

        let events = resolve_collisions(&mut p, &mut entities);

        assert_eq!(events.len(), 1);
        assert_eq!(entities.len(), 2);
        assert_eq!(p.lives, 3);
    }

    #[test]
    fn resolves_every_entity_on_the_cell_once() {
        let mut p = PlayerState::new();
        let mut entities = Entities::new();
        entities.push(Entity::reward(p.lane, 0));
        entities.push(Entity::hazard(p.lane, 0));

        let events = resolve_collisions(&mut p, &mut entities);

        // The ring is collected first, then spent on the hit.
        assert_eq!(
            events.as_slice(),
            &[
                CollisionEvent::RingCollected { points: 100 },
                CollisionEvent::RingsLost { amount: 1 },
            ]
        );
        assert_eq!(p.currency, 0);
        assert_eq!(p.lives, 3);
        assert!(entities.is_empty());
    }

    #[test]
    fn lives_never_underflow() {
        let mut p = PlayerState::new();
        p.lives = 1;
        let mut e = Entity::hazard(p.lane, 0);
        e.damage_value = 5;
        let mut entities = one(e);
        resolve_collisions(&mut p, &mut entities);
        assert_eq!(p.lives, 0);
        assert!(!p.is_alive());
    }

    proptest! {
        #[test]
        fn currency_loss_is_capped(currency in 1u32..500) {
            let mut p = PlayerState::new();
            p.currency = currency;
            let mut entities = one(Entity::hazard(p.lane, 0));

            resolve_collisions(&mut p, &mut entities);

            prop_assert_eq!(p.currency, currency - currency.min(10));
            prop_assert_eq!(p.lives, 3);
        }
    }
}
