//! Mover - scrolls every entity one step toward the runner.

use crate::entity::Entities;

/// Advance all entities by one step.
///
/// An entity already at distance 0 was not collected (wrong lane) and scrolls
/// off the track. Returns how many entities were dropped this way.
pub fn advance(entities: &mut Entities) -> usize {
    let before = entities.len();
    entities.retain(|entity| match entity.distance.checked_sub(1) {
        Some(next) => {
            entity.distance = next;
            true
        }
        None => false,
    });
    before - entities.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use proptest::prelude::*;

    #[test]
    fn decrements_distance() {
        let mut entities = Entities::new();
        entities.push(Entity::reward(0, 5));
        entities.push(Entity::hazard(1, 1));

        assert_eq!(advance(&mut entities), 0);
        assert_eq!(entities[0].distance, 4);
        assert_eq!(entities[1].distance, 0);
    }

    #[test]
    fn drops_missed_entities_without_skipping_neighbours() {
        let mut entities = Entities::new();
        entities.push(Entity::reward(0, 0));
        entities.push(Entity::hazard(1, 0));
        entities.push(Entity::shield(2, 3));

        assert_eq!(advance(&mut entities), 2);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0], Entity::shield(2, 2));
    }

    proptest! {
        #[test]
        fn every_survivor_moved_exactly_one_step(
            distances in proptest::collection::vec(0u16..30, 0..24)
        ) {
            let mut entities = Entities::new();
            for (i, d) in distances.iter().enumerate() {
                entities.push(Entity::reward((i % 3) as u8, *d));
            }

            let dropped = advance(&mut entities);

            let expected: Vec<u16> = distances.iter().filter(|d| **d > 0).map(|d| d - 1).collect();
            let actual: Vec<u16> = entities.iter().map(|e| e.distance).collect();
            prop_assert_eq!(actual, expected);
            prop_assert_eq!(dropped, distances.iter().filter(|d| **d == 0).count());
        }
    }
}
