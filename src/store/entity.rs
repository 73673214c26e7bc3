//! Generic keyed collection kept as an ordered id list plus an id -> entity map.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Types that can live in an [`EntityState`] collection.
pub trait Entity {
    /// Key the entity is stored under.
    type Id: Clone + Eq + Hash + fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// Ordered keyed collection: `ids` defines iteration order, `entities` holds
/// the values. Entities sit behind `Arc` so a transition clones the id list
/// and the pointer map but shares every unaffected entity with the previous
/// value.
///
/// All operations take `&self` and return the next collection.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize, T::Id: Serialize",
    deserialize = "T: Deserialize<'de>, T::Id: Deserialize<'de>"
))]
pub struct EntityState<T: Entity> {
    pub ids: Vec<T::Id>,
    pub entities: HashMap<T::Id, Arc<T>>,
}

impl<T: Entity> EntityState<T> {
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            entities: HashMap::new(),
        }
    }

    /// Collection holding `entities` in iteration order.
    pub fn from_entities(entities: impl IntoIterator<Item = T>) -> Self {
        entities
            .into_iter()
            .fold(Self::new(), |state, entity| state.add_one(entity))
    }

    /// Appends `entity` under its id. An id that is already present keeps its
    /// position in `ids`; the stored entity is replaced either way.
    pub fn add_one(&self, entity: T) -> Self {
        let id = entity.id().clone();
        let mut next = self.clone();
        if !next.entities.contains_key(&id) {
            next.ids.push(id.clone());
        }
        next.entities.insert(id, Arc::new(entity));
        next
    }

    /// Removes the entity stored under `id`; equivalent collection when the
    /// id is absent.
    pub fn remove_one(&self, id: &T::Id) -> Self {
        let mut next = self.clone();
        next.ids.retain(|existing| existing != id);
        next.entities.remove(id);
        next
    }

    /// Replaces the entity under `id` with `changes(&existing)`; unchanged
    /// collection when the id is absent. `ids` order is never affected, and
    /// `changes` must keep the entity's id stable.
    pub fn update_one(&self, id: &T::Id, changes: impl FnOnce(&T) -> T) -> Self {
        let Some(existing) = self.entities.get(id) else {
            return self.clone();
        };
        let updated = changes(existing.as_ref());
        let mut next = self.clone();
        next.entities.insert(id.clone(), Arc::new(updated));
        next
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.entities.get(id).map(Arc::as_ref)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Entities in `ids` order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.ids.iter().filter_map(|id| self.get(id))
    }
}

impl<T: Entity> Clone for EntityState<T> {
    fn clone(&self) -> Self {
        Self {
            ids: self.ids.clone(),
            entities: self.entities.clone(),
        }
    }
}

impl<T: Entity> Default for EntityState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: String,
        label: String,
    }

    impl Card {
        fn new(id: &str, label: &str) -> Self {
            Self {
                id: id.to_string(),
                label: label.to_string(),
            }
        }
    }

    impl Entity for Card {
        type Id = String;

        fn id(&self) -> &String {
            &self.id
        }
    }

    fn seeded() -> EntityState<Card> {
        EntityState::from_entities([
            Card::new("a", "Ace"),
            Card::new("b", "Bow"),
            Card::new("c", "Cup"),
        ])
    }

    #[test]
    fn add_one_appends_in_insertion_order() {
        let state = seeded();
        assert_eq!(state.ids, vec!["a", "b", "c"]);
        assert_eq!(
            state.iter().map(|card| card.label.as_str()).collect::<Vec<_>>(),
            vec!["Ace", "Bow", "Cup"]
        );
    }

    #[test]
    fn add_one_with_existing_id_replaces_without_reordering() {
        let state = seeded().add_one(Card::new("a", "Anchor"));
        assert_eq!(state.ids, vec!["a", "b", "c"]);
        assert_eq!(state.get(&"a".to_string()).unwrap().label, "Anchor");
    }

    #[test]
    fn remove_one_preserves_the_order_of_the_rest() {
        let state = seeded().remove_one(&"b".to_string());
        assert_eq!(state.ids, vec!["a", "c"]);
        assert!(state.get(&"b".to_string()).is_none());
    }

    #[test]
    fn remove_one_with_absent_id_is_a_noop() {
        let state = seeded();
        assert_eq!(state.remove_one(&"zzz".to_string()), state);
    }

    #[test]
    fn update_one_replaces_only_the_target() {
        let state = seeded();
        let next = state.update_one(&"b".to_string(), |card| Card {
            label: card.label.to_uppercase(),
            ..card.clone()
        });
        assert_eq!(next.ids, state.ids);
        assert_eq!(next.get(&"b".to_string()).unwrap().label, "BOW");
        assert_eq!(next.get(&"a".to_string()).unwrap().label, "Ace");
    }

    #[test]
    fn update_one_with_absent_id_is_a_noop() {
        let state = seeded();
        let next = state.update_one(&"zzz".to_string(), |card| card.clone());
        assert_eq!(next, state);
    }

    #[test]
    fn transitions_share_unaffected_entities() {
        let state = seeded();
        let next = state.update_one(&"b".to_string(), |card| Card::new("b", &card.label));
        assert!(Arc::ptr_eq(
            state.entities.get("a").unwrap(),
            next.entities.get("a").unwrap()
        ));
        assert!(!Arc::ptr_eq(
            state.entities.get("b").unwrap(),
            next.entities.get("b").unwrap()
        ));
    }

    #[test]
    fn len_and_is_empty_follow_the_id_list() {
        let state = EntityState::<Card>::new();
        assert!(state.is_empty());
        let state = state.add_one(Card::new("a", "Ace"));
        assert_eq!(state.len(), 1);
        assert!(!state.is_empty());
    }
}
