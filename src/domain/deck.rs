use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::error::ParseSortTypeError;

/// Unique identifier for a deck
pub type DeckId = String;

/// Identifier of a subreddit tracked within a deck
pub type SubredditId = String;

/// Sort mode requested from the content API for one subreddit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    Hot,
    New,
    Rising,
    Top,
    Controversial,
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hot => write!(f, "hot"),
            Self::New => write!(f, "new"),
            Self::Rising => write!(f, "rising"),
            Self::Top => write!(f, "top"),
            Self::Controversial => write!(f, "controversial"),
        }
    }
}

impl FromStr for SortType {
    type Err = ParseSortTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hot" => Ok(Self::Hot),
            "new" => Ok(Self::New),
            "rising" => Ok(Self::Rising),
            "top" => Ok(Self::Top),
            "controversial" => Ok(Self::Controversial),
            _ => Err(ParseSortTypeError(s.to_string())),
        }
    }
}

/// Per-subreddit display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubredditSettings {
    /// Sort mode shown for this subreddit.
    #[serde(rename = "type")]
    pub sort: SortType,
}

/// A named, ordered collection of subreddits plus their display settings.
///
/// Decks are immutable values: the transform methods return a new deck.
/// Adding and removing subreddits keeps `subreddit_ids` and the keys of
/// `subreddit_settings` aligned; retyping an untracked subreddit creates its
/// settings entry without touching the id list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    /// Unique identifier for the deck.
    pub id: DeckId,
    /// User-visible deck name.
    pub name: String,
    /// Subreddits in the order they appear in the deck.
    #[serde(default)]
    pub subreddit_ids: Vec<SubredditId>,
    /// Display settings per subreddit; keys mirror `subreddit_ids`.
    #[serde(default)]
    pub subreddit_settings: HashMap<SubredditId, SubredditSettings>,
}

impl Deck {
    /// Empty deck under a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), name)
    }

    /// Empty deck under a caller-chosen id.
    pub fn with_id(id: impl Into<DeckId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subreddit_ids: Vec::new(),
            subreddit_settings: HashMap::new(),
        }
    }

    /// Deck with `subreddit_id` tracked at the end of the list and its
    /// settings reset to the `rising` default. Re-adding a subreddit that is
    /// already tracked resets the settings without duplicating the id.
    pub fn with_subreddit(&self, subreddit_id: &str) -> Self {
        let mut next = self.clone();
        next.subreddit_settings.insert(
            subreddit_id.to_string(),
            SubredditSettings {
                sort: SortType::Rising,
            },
        );
        if !next.subreddit_ids.iter().any(|existing| existing == subreddit_id) {
            next.subreddit_ids.push(subreddit_id.to_string());
        }
        next
    }

    /// Deck without `subreddit_id`: every matching occurrence leaves the
    /// list, the settings entry is dropped, and the order of the remaining
    /// subreddits is preserved.
    pub fn without_subreddit(&self, subreddit_id: &str) -> Self {
        let mut next = self.clone();
        next.subreddit_ids.retain(|existing| existing != subreddit_id);
        next.subreddit_settings.remove(subreddit_id);
        next
    }

    /// Deck with `sort` merged into the settings of `subreddit_id`, creating
    /// the entry when absent. Other subreddits are untouched.
    pub fn with_subreddit_sort(&self, subreddit_id: &str, sort: SortType) -> Self {
        let mut next = self.clone();
        next.subreddit_settings
            .entry(subreddit_id.to_string())
            .and_modify(|settings| settings.sort = sort)
            .or_insert(SubredditSettings { sort });
        next
    }

    pub fn subreddit_sort(&self, subreddit_id: &str) -> Option<SortType> {
        self.subreddit_settings
            .get(subreddit_id)
            .map(|settings| settings.sort)
    }
}
