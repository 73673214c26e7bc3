use serde::{Deserialize, Serialize};

use crate::domain::{Deck, DeckId, SortType};
use crate::store::entity::{Entity, EntityState};

impl Entity for Deck {
    type Id = DeckId;

    fn id(&self) -> &DeckId {
        &self.id
    }
}

/// Deck collection plus the explicit "active deck" pointer.
///
/// State is a value: every transition builds a new `DecksState` while decks
/// it does not touch are shared with the previous one. The serialized shape
/// is the flat `{ids, entities, currentDeckId}` object the host persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecksState {
    #[serde(flatten)]
    pub decks: EntityState<Deck>,
    /// Target for subreddit actions that carry no explicit deck id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_deck_id: Option<DeckId>,
}

impl DecksState {
    /// Seeded state the application starts from: one "default" deck, no
    /// active deck.
    pub fn initial() -> Self {
        let default_deck = Deck::with_id("default", "Default Deck")
            .with_subreddit("all")
            .with_subreddit_sort("all", SortType::Top)
            .with_subreddit("politics");
        Self {
            decks: EntityState::new().add_one(default_deck),
            current_deck_id: None,
        }
    }

    /// Deck referenced by `current_deck_id`. `None` when no deck is active
    /// or the pointer dangles.
    pub fn current_deck(&self) -> Option<&Deck> {
        self.current_deck_id
            .as_ref()
            .and_then(|id| self.decks.get(id))
    }
}

impl Default for DecksState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_seeds_the_default_deck() {
        let state = DecksState::initial();
        assert_eq!(state.decks.ids, vec!["default"]);

        let deck = state.decks.get(&"default".to_string()).unwrap();
        assert_eq!(deck.name, "Default Deck");
        assert_eq!(deck.subreddit_ids, vec!["all", "politics"]);
        assert_eq!(deck.subreddit_sort("all"), Some(SortType::Top));
        assert_eq!(deck.subreddit_sort("politics"), Some(SortType::Rising));

        assert!(state.current_deck_id.is_none());
        assert_eq!(state, DecksState::default());
    }

    #[test]
    fn current_deck_requires_a_live_pointer() {
        let mut state = DecksState::initial();
        assert!(state.current_deck().is_none());

        state.current_deck_id = Some("default".into());
        assert_eq!(
            state.current_deck().map(|deck| deck.name.as_str()),
            Some("Default Deck")
        );

        state.current_deck_id = Some("ghost".into());
        assert!(state.current_deck().is_none());
    }

    #[test]
    fn state_serializes_with_the_flattened_wire_shape() {
        let state = DecksState::initial();
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["ids"][0], "default");
        assert_eq!(value["entities"]["default"]["name"], "Default Deck");
        assert!(value.get("currentDeckId").is_none());
    }
}
