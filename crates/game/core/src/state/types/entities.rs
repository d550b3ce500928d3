use std::collections::BTreeMap;

use super::{EnemyState, EntityId, ItemState, PlayerState, Position};

/// Aggregate state for every entity on the map.
///
/// Enemies are keyed by id, so iteration always follows spawn order. That
/// order is the enemy phase's turn order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: PlayerState,
    enemies: BTreeMap<EntityId, EnemyState>,
    items: Vec<ItemState>,
}

impl EntitiesState {
    pub fn new(player: PlayerState) -> Self {
        Self {
            player,
            enemies: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    // ===== enemies =====

    pub fn enemy(&self, id: EntityId) -> Option<&EnemyState> {
        self.enemies.get(&id)
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut EnemyState> {
        self.enemies.get_mut(&id)
    }

    /// Enemies in ascending id order.
    pub fn enemies(&self) -> impl Iterator<Item = &EnemyState> {
        self.enemies.values()
    }

    /// Snapshot of the current roster ids in ascending order.
    pub fn enemy_ids(&self) -> Vec<EntityId> {
        self.enemies.keys().copied().collect()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub(crate) fn insert_enemy(&mut self, enemy: EnemyState) {
        self.enemies.insert(enemy.id, enemy);
    }

    /// Lowest-id enemy standing on `position`.
    pub fn enemy_at(&self, position: Position) -> Option<&EnemyState> {
        self.enemies.values().find(|enemy| enemy.position == position)
    }

    /// Lowest-id enemy four-directionally adjacent to the player.
    pub fn enemy_adjacent_to_player(&self) -> Option<&EnemyState> {
        let origin = self.player.position;
        self.enemies
            .values()
            .find(|enemy| enemy.position.is_adjacent(origin))
    }

    /// Removes every enemy with hp ≤ 0 and returns the removed entries in id order.
    ///
    /// This is the only place enemies leave the roster.
    pub fn reap(&mut self) -> Vec<EnemyState> {
        let dead: Vec<EntityId> = self
            .enemies
            .values()
            .filter(|enemy| !enemy.is_alive())
            .map(|enemy| enemy.id)
            .collect();
        dead.into_iter()
            .filter_map(|id| self.enemies.remove(&id))
            .collect()
    }

    // ===== items =====

    pub fn items(&self) -> impl Iterator<Item = &ItemState> {
        self.items.iter()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn item_at(&self, position: Position) -> Option<&ItemState> {
        self.items.iter().find(|item| item.position == position)
    }

    pub(crate) fn insert_item(&mut self, item: ItemState) {
        self.items.push(item);
    }

    /// Removes and returns the item lying on `position`, if any.
    pub fn take_item_at(&mut self, position: Position) -> Option<ItemState> {
        let index = self
            .items
            .iter()
            .position(|item| item.position == position)?;
        Some(self.items.remove(index))
    }

    // ===== occupancy =====

    /// True if the player, an enemy, or an item occupies `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.player.position == position
            || self.enemy_at(position).is_some()
            || self.item_at(position).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EnemyKind, ItemKind};

    fn roster() -> EntitiesState {
        let mut entities = EntitiesState::new(PlayerState::new(Position::new(5, 5), 20));
        entities.insert_enemy(EnemyState::new(
            EntityId(2),
            Position::new(5, 6),
            3,
            EnemyKind::Basic,
        ));
        entities.insert_enemy(EnemyState::new(
            EntityId(1),
            Position::new(4, 5),
            7,
            EnemyKind::Fast,
        ));
        entities
    }

    #[test]
    fn enemies_iterate_in_id_order() {
        let entities = roster();
        let ids: Vec<_> = entities.enemies().map(|e| e.id).collect();
        assert_eq!(ids, vec![EntityId(1), EntityId(2)]);
    }

    #[test]
    fn adjacent_lookup_prefers_lowest_id() {
        let entities = roster();
        assert_eq!(
            entities.enemy_adjacent_to_player().map(|e| e.id),
            Some(EntityId(1))
        );
    }

    #[test]
    fn reap_removes_only_the_dead() {
        let mut entities = roster();
        entities.enemy_mut(EntityId(2)).unwrap().hp = 0;
        let reaped = entities.reap();
        assert_eq!(reaped.len(), 1);
        assert_eq!(reaped[0].id, EntityId(2));
        assert_eq!(entities.enemy_ids(), vec![EntityId(1)]);
        assert!(entities.reap().is_empty());
    }

    #[test]
    fn take_item_removes_it() {
        let mut entities = roster();
        entities.insert_item(ItemState::new(Position::new(1, 1), ItemKind::Heal));
        assert!(entities.is_occupied(Position::new(1, 1)));
        let item = entities.take_item_at(Position::new(1, 1)).unwrap();
        assert_eq!(item.kind, ItemKind::Heal);
        assert_eq!(entities.item_count(), 0);
        assert!(entities.take_item_at(Position::new(1, 1)).is_none());
    }
}
