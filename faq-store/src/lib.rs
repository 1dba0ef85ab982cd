//! Static FAQ dataset for the admission bot.
//!
//! - [`FaqStore::load_or_init`] reads the JSON array once at startup and never
//!   fails: malformed content degrades to an empty store, a missing file is
//!   created with `[]`.
//! - [`FaqStore::find_best_answer`] is the fast path of a chat turn: exact
//!   case-insensitive match first, then substring containment in either
//!   direction. First hit in file order wins.

pub mod errors;
mod item;
mod matcher;
mod store;

pub use errors::FaqStoreError;
pub use item::FaqItem;
pub use matcher::find_best_answer;
pub use store::{DEFAULT_FAQ_PATH, FaqStore};
