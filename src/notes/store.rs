//! Per-owner durable note store
//!
//! One JSON file per note under the owner's directory:
//! ```text
//! ~/.embernote/notes/<owner-hex>/
//! ├── <note-id>.json
//! └── ...
//! ```
//!
//! A store is owned exclusively by one note actor task, so it needs no
//! internal locking: mutation goes through `&mut self`, and the actor's
//! command loop is the only caller.

use crate::error::Result;
use crate::notes::types::Note;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Durable collection of one owner's notes, keyed by note id
pub struct NoteStore {
    dir: PathBuf,
    notes: HashMap<String, Note>,
}

impl NoteStore {
    /// Open the store rooted at `dir`, creating the directory and loading
    /// any persisted notes into memory.
    pub async fn open(dir: PathBuf) -> Result<Self> {
        tokio::fs::create_dir_all(&dir).await?;
        let notes = Self::load_from_disk(&dir).await;
        Ok(Self { dir, notes })
    }

    /// Persist a note, then update the in-memory view.
    ///
    /// The file write happens first: if it fails, the in-memory state is left
    /// untouched, so a failed call applies nothing at all.
    pub async fn put(&mut self, note: Note) -> Result<()> {
        let path = self.dir.join(format!("{}.json", note.id));
        let json = serde_json::to_string_pretty(&note)?;
        tokio::fs::write(&path, json).await?;
        self.notes.insert(note.id.clone(), note);
        Ok(())
    }

    /// Look up a note by id
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    /// Iterate over all notes in the store
    pub fn all(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    /// Number of notes in the store
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Load persisted notes from disk, skipping unreadable files with a warning
    async fn load_from_disk(dir: &Path) -> HashMap<String, Note> {
        let mut notes = HashMap::new();
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(_) => return notes,
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match tokio::fs::read_to_string(&path).await {
                Ok(data) => match serde_json::from_str::<Note>(&data) {
                    Ok(note) => {
                        notes.insert(note.id.clone(), note);
                    }
                    Err(e) => tracing::warn!("Failed to parse note {}: {}", path.display(), e),
                },
                Err(e) => tracing::warn!("Failed to read note {}: {}", path.display(), e),
            }
        }

        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::types::{NoteIntent, StoredStatus, DEFAULT_SPACE};
    use tempfile::TempDir;

    fn build_note(id: &str, space: &str) -> Note {
        Note {
            id: id.to_string(),
            owner_id: "dev-user-001".to_string(),
            space: space.to_string(),
            content: "test content".to_string(),
            intent: NoteIntent::Thinking,
            status: StoredStatus::Alive,
            created_at: 1707753600000,
            updated_at: 1707753600000,
            closed_at: None,
            summary: None,
        }
    }

    #[tokio::test]
    async fn test_open_empty_dir() {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::open(dir.path().join("owner")).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let dir = TempDir::new().unwrap();
        let mut store = NoteStore::open(dir.path().to_path_buf()).await.unwrap();

        store.put(build_note("note-1", "main")).await.unwrap();

        let note = store.get("note-1").unwrap();
        assert_eq!(note.content, "test content");
        assert_eq!(store.len(), 1);
        assert!(store.get("note-2").is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let mut store = NoteStore::open(dir.path().to_path_buf()).await.unwrap();

        store.put(build_note("note-1", "main")).await.unwrap();
        let mut updated = build_note("note-1", "main");
        updated.content = "edited".to_string();
        store.put(updated).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("note-1").unwrap().content, "edited");
    }

    #[tokio::test]
    async fn test_reload_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();

        {
            let mut store = NoteStore::open(path.clone()).await.unwrap();
            store.put(build_note("note-1", "main")).await.unwrap();
            store.put(build_note("note-2", "work")).await.unwrap();
        }

        let store = NoteStore::open(path).await.unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("note-2").unwrap().space, "work");
    }

    #[tokio::test]
    async fn test_load_skips_malformed_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();
        std::fs::write(path.join("broken.json"), "not json at all").unwrap();
        std::fs::write(path.join("ignore.txt"), "not a note").unwrap();

        {
            let mut store = NoteStore::open(path.clone()).await.unwrap();
            store.put(build_note("note-1", "main")).await.unwrap();
        }

        let store = NoteStore::open(path).await.unwrap();
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_load_legacy_record_without_space() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();
        std::fs::write(
            path.join("note-legacy.json"),
            r#"{
                "id": "note-legacy",
                "ownerId": "dev-user-001",
                "content": "old note",
                "status": "alive",
                "createdAt": 1700000000000,
                "updatedAt": 1700000000000
            }"#,
        )
        .unwrap();

        let store = NoteStore::open(path).await.unwrap();
        assert_eq!(store.get("note-legacy").unwrap().space, DEFAULT_SPACE);
    }
}
