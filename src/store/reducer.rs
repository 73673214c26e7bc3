//! Pure state transitions for the deck store.

use crate::domain::{DeckError, DeckId};
use crate::state::DecksState;

use super::action::DeckAction;

/// Computes the state that follows `state` under `action`.
///
/// Total over its inputs: every action either produces a well-defined
/// transition or returns `state` untouched. Decks the action does not reach
/// are shared with the previous state rather than rebuilt.
pub fn reduce(state: DecksState, action: DeckAction) -> DecksState {
    match action {
        DeckAction::AddDeck(deck) => DecksState {
            decks: state.decks.add_one(deck),
            ..state
        },
        DeckAction::RemoveDeck(deck_id) => DecksState {
            decks: state.decks.remove_one(&deck_id),
            ..state
        },
        DeckAction::ActivateDeck(deck_id) => DecksState {
            current_deck_id: Some(deck_id),
            ..state
        },
        DeckAction::SetDeckSubredditType { subreddit_id, sort } => {
            match resolve_target(&state, None, "SET_DECK_SUBREDDIT_TYPE") {
                Some(deck_id) => DecksState {
                    decks: state.decks.update_one(&deck_id, |deck| {
                        deck.with_subreddit_sort(&subreddit_id, sort)
                    }),
                    ..state
                },
                None => state,
            }
        }
        DeckAction::AddSubredditToDeck {
            subreddit_id,
            deck_id,
        } => match resolve_target(&state, deck_id, "ADD_SUBREDDIT_TO_DECK") {
            Some(deck_id) => DecksState {
                decks: state
                    .decks
                    .update_one(&deck_id, |deck| deck.with_subreddit(&subreddit_id)),
                ..state
            },
            None => state,
        },
        DeckAction::RemoveSubredditFromDeck {
            subreddit_id,
            deck_id,
        } => match resolve_target(&state, deck_id, "REMOVE_SUBREDDIT_FROM_DECK") {
            Some(deck_id) => DecksState {
                decks: state
                    .decks
                    .update_one(&deck_id, |deck| deck.without_subreddit(&subreddit_id)),
                ..state
            },
            None => state,
        },
    }
}

/// Resolves the deck a subreddit action targets: the explicit payload id when
/// present, the active deck otherwise. An unresolvable target is reported
/// through the log and makes the action a no-op; both paths degrade the same
/// way.
fn resolve_target(
    state: &DecksState,
    explicit: Option<DeckId>,
    action_kind: &str,
) -> Option<DeckId> {
    let Some(deck_id) = explicit.or_else(|| state.current_deck_id.clone()) else {
        log::warn!("{action_kind} ignored: {}", DeckError::NoActiveDeck);
        return None;
    };
    if !state.decks.contains(&deck_id) {
        log::warn!("{action_kind} ignored: {}", DeckError::NotFound(deck_id));
        return None;
    }
    Some(deck_id)
}
