mod keyboard;

pub use keyboard::{Intent, ViewMode, key_matches, map_key_to_intent};
