//! Owner actor registry
//!
//! Keyed registry mapping owner id → note actor handle. Actors are spawned
//! lazily on first contact and kept for the process lifetime; there is no
//! teardown path. The registry's only synchronization is the lock around the
//! map for atomic get-or-create per key — serialization of note operations
//! lives inside each actor.
//!
//! Owner directories on disk are hex-encoded so any owner id maps to a valid
//! path segment.

use crate::error::Result;
use crate::notes::actor::{NoteActor, NoteActorHandle};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Registry of live note actors, one per owner
pub struct NoteRegistry {
    notes_dir: PathBuf,
    actors: Arc<RwLock<HashMap<String, NoteActorHandle>>>,
}

impl NoteRegistry {
    /// Create a registry rooting owner stores under `notes_dir`
    pub fn new(notes_dir: PathBuf) -> Self {
        Self {
            notes_dir,
            actors: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the actor handle for `owner_id`, spawning it on first contact.
    pub async fn get_or_create(&self, owner_id: &str) -> Result<NoteActorHandle> {
        if let Some(handle) = self.actors.read().await.get(owner_id) {
            return Ok(handle.clone());
        }

        let mut actors = self.actors.write().await;
        // Re-check under the write lock; a concurrent request may have won
        if let Some(handle) = actors.get(owner_id) {
            return Ok(handle.clone());
        }

        let dir = self.notes_dir.join(hex::encode(owner_id.as_bytes()));
        let handle = NoteActor::spawn(owner_id.to_string(), dir).await?;
        actors.insert(owner_id.to_string(), handle.clone());

        tracing::info!(owner_id = %owner_id, owners = actors.len(), "Registered note actor");
        Ok(handle)
    }

    /// Number of owners contacted so far this process lifetime
    pub async fn owner_count(&self) -> usize {
        self.actors.read().await.len()
    }

    /// Owner ids with a live actor
    pub async fn owners(&self) -> Vec<String> {
        self.actors.read().await.keys().cloned().collect()
    }
}
