//! Persistence service
//!
//! Records live in a flat key-value store holding JSON text, one record per
//! key. Writes are atomic per key; nothing spans keys.
//!
//! ```text
//! hobbyverse_user_<email>  ->  UserProfile
//! hobbyverse_game_<email>  ->  ProgressionRecord
//! ```

mod keys;
mod memory;
mod sqlite;

pub use keys::{game_key, normalize_email, user_key, GAME_PREFIX, USER_PREFIX};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Single-key get/put storage (browser local storage semantics)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// Read and decode a JSON record
pub fn get_json<T: DeserializeOwned, S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON record
pub fn put_json<T: Serialize, S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.put(key, &raw)
}
