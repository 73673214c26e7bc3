pub mod domain;
pub mod state;
pub mod store;

pub use state::DecksState;
pub use store::reducer::reduce;
pub use store::{DeckAction, DeckStore};
