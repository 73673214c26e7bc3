use std::fs;

use subdeck::{DeckAction, DeckStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: replay_actions <actions.json>")?;
    let actions: Vec<DeckAction> = serde_json::from_str(&fs::read_to_string(&path)?)?;

    println!("Replaying {} actions from {}", actions.len(), path);

    let mut store = DeckStore::new();
    for action in actions {
        store.dispatch(action);
    }

    let state = store.state();
    println!("{}", serde_json::to_string_pretty(state)?);
    match state.current_deck() {
        Some(deck) => println!(
            "Active deck: {} ({} subreddits)",
            deck.name,
            deck.subreddit_ids.len()
        ),
        None => println!("No active deck"),
    }

    Ok(())
}
