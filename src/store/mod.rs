//! Reducer-style state updates over a keyed deck collection.

pub mod action;
pub mod entity;
pub mod reducer;

pub use action::DeckAction;
pub use entity::{Entity, EntityState};

use crate::state::DecksState;

/// Owns the current [`DecksState`] and applies actions in dispatch order.
///
/// The hosting application serializes actions from its producers and feeds
/// them through [`DeckStore::dispatch`]; reads go through
/// [`DeckStore::state`]. The store holds no other mutable resources.
#[derive(Debug, Clone)]
pub struct DeckStore {
    state: DecksState,
}

impl DeckStore {
    /// Store starting from the seeded initial state.
    pub fn new() -> Self {
        Self {
            state: DecksState::initial(),
        }
    }

    /// Store resuming from a previously captured state value.
    pub fn with_state(state: DecksState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &DecksState {
        &self.state
    }

    pub fn dispatch(&mut self, action: DeckAction) {
        log::debug!("dispatching {action:?}");
        self.state = reducer::reduce(self.state.clone(), action);
    }
}

impl Default for DeckStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Deck, SortType};

    #[test]
    fn dispatch_applies_actions_in_order() {
        let mut store = DeckStore::new();
        store.dispatch(DeckAction::AddDeck(Deck::with_id("news", "News")));
        store.dispatch(DeckAction::ActivateDeck("news".into()));
        store.dispatch(DeckAction::AddSubredditToDeck {
            subreddit_id: "worldnews".into(),
            deck_id: None,
        });
        store.dispatch(DeckAction::SetDeckSubredditType {
            subreddit_id: "worldnews".into(),
            sort: SortType::Hot,
        });

        let deck = store.state().current_deck().expect("news deck active");
        assert_eq!(deck.subreddit_ids, vec!["worldnews"]);
        assert_eq!(deck.subreddit_sort("worldnews"), Some(SortType::Hot));
    }

    #[test]
    fn with_state_resumes_from_a_snapshot() {
        let mut store = DeckStore::new();
        store.dispatch(DeckAction::ActivateDeck("default".into()));

        let resumed = DeckStore::with_state(store.state().clone());
        assert_eq!(resumed.state(), store.state());
    }
}
