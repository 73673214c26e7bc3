use serde::{Deserialize, Serialize};

use crate::domain::{Deck, DeckId, SortType, SubredditId};

/// One state-changing intent for the deck store.
///
/// Serializes as the `{type, payload}` shape the hosting application records
/// in its action log, with camelCase payload fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeckAction {
    AddDeck(Deck),
    RemoveDeck(DeckId),
    /// Makes the deck the target of later subreddit actions; no existence
    /// check is performed.
    ActivateDeck(DeckId),
    /// Changes the sort mode of one subreddit in the active deck.
    #[serde(rename_all = "camelCase")]
    SetDeckSubredditType {
        subreddit_id: SubredditId,
        #[serde(rename = "type")]
        sort: SortType,
    },
    #[serde(rename_all = "camelCase")]
    AddSubredditToDeck {
        subreddit_id: SubredditId,
        /// Target deck; the active deck when omitted.
        #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
        deck_id: Option<DeckId>,
    },
    #[serde(rename_all = "camelCase")]
    RemoveSubredditFromDeck {
        subreddit_id: SubredditId,
        /// Target deck; the active deck when omitted.
        #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
        deck_id: Option<DeckId>,
    },
}
