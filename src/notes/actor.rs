//! Per-owner note actor
//!
//! One actor task per owner identity. The task exclusively owns that owner's
//! `NoteStore` and drains a command channel one operation at a time, so two
//! requests from the same owner can never interleave a read-modify-write:
//! every operation is atomic with respect to the rest of the owner's traffic.
//! Actors for different owners share nothing and run fully in parallel.
//!
//! Awaiting store I/O suspends the task without admitting the next command,
//! so visible effects keep strict arrival order. A failed write surfaces to
//! the caller as-is; the actor never retries.

use crate::error::{Error, Result};
use crate::notes::decay::display_status;
use crate::notes::store::NoteStore;
use crate::notes::types::{default_space, Note, NoteIntent, NoteView, StoredStatus};
use std::path::PathBuf;
use tokio::sync::{mpsc, oneshot};
use uuid::Uuid;

/// Commands buffered per owner before senders wait
const COMMAND_BUFFER: usize = 64;

/// Operations accepted by a note actor
enum NoteCommand {
    List {
        space: Option<String>,
        reply: oneshot::Sender<Result<Vec<NoteView>>>,
    },
    Create {
        content: String,
        intent: NoteIntent,
        space: Option<String>,
        reply: oneshot::Sender<Result<Note>>,
    },
    Edit {
        id: String,
        content: String,
        reply: oneshot::Sender<Result<Note>>,
    },
    Archive {
        id: String,
        summary: Option<String>,
        reply: oneshot::Sender<Result<Note>>,
    },
}

/// Cloneable handle to one owner's note actor
#[derive(Clone)]
pub struct NoteActorHandle {
    owner_id: String,
    tx: mpsc::Sender<NoteCommand>,
}

impl NoteActorHandle {
    /// Owner this handle is scoped to
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// List the owner's notes in a space (default "main"), newest first,
    /// each with its derived display status.
    pub async fn list(&self, space: Option<String>) -> Result<Vec<NoteView>> {
        let (reply, rx) = oneshot::channel();
        self.send(NoteCommand::List { space, reply }, rx).await
    }

    /// Create a note and return the stored record
    pub async fn create(
        &self,
        content: String,
        intent: NoteIntent,
        space: Option<String>,
    ) -> Result<Note> {
        let (reply, rx) = oneshot::channel();
        self.send(
            NoteCommand::Create {
                content,
                intent,
                space,
                reply,
            },
            rx,
        )
        .await
    }

    /// Replace a note's content, bumping it back to alive
    pub async fn edit(&self, id: String, content: String) -> Result<Note> {
        let (reply, rx) = oneshot::channel();
        self.send(NoteCommand::Edit { id, content, reply }, rx).await
    }

    /// Archive a note, optionally recording a closing summary
    pub async fn archive(&self, id: String, summary: Option<String>) -> Result<Note> {
        let (reply, rx) = oneshot::channel();
        self.send(NoteCommand::Archive { id, summary, reply }, rx)
            .await
    }

    async fn send<T>(&self, cmd: NoteCommand, rx: oneshot::Receiver<Result<T>>) -> Result<T> {
        self.tx.send(cmd).await.map_err(|_| {
            Error::Internal(format!("Note actor for owner {} is gone", self.owner_id))
        })?;
        rx.await.map_err(|_| {
            Error::Internal(format!(
                "Note actor for owner {} dropped the reply",
                self.owner_id
            ))
        })?
    }
}

/// The actor itself: private store plus command receiver
pub struct NoteActor {
    owner_id: String,
    store: NoteStore,
    rx: mpsc::Receiver<NoteCommand>,
}

impl NoteActor {
    /// Spawn the actor task for `owner_id` with its store rooted at `dir`,
    /// returning the handle used to reach it.
    pub async fn spawn(owner_id: String, dir: PathBuf) -> Result<NoteActorHandle> {
        let store = NoteStore::open(dir).await?;
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);

        tracing::info!(
            owner_id = %owner_id,
            notes = store.len(),
            "Starting note actor"
        );

        let actor = NoteActor {
            owner_id: owner_id.clone(),
            store,
            rx,
        };
        tokio::spawn(actor.run());

        Ok(NoteActorHandle { owner_id, tx })
    }

    /// Drain commands until every handle is dropped
    async fn run(mut self) {
        while let Some(cmd) = self.rx.recv().await {
            match cmd {
                NoteCommand::List { space, reply } => {
                    let _ = reply.send(Ok(self.list(space)));
                }
                NoteCommand::Create {
                    content,
                    intent,
                    space,
                    reply,
                } => {
                    let _ = reply.send(self.create(content, intent, space).await);
                }
                NoteCommand::Edit { id, content, reply } => {
                    let _ = reply.send(self.edit(id, content).await);
                }
                NoteCommand::Archive { id, summary, reply } => {
                    let _ = reply.send(self.archive(id, summary).await);
                }
            }
        }
        tracing::debug!(owner_id = %self.owner_id, "Note actor stopped");
    }

    fn list(&self, space: Option<String>) -> Vec<NoteView> {
        let space = normalize_space(space);
        let now = now_ms();

        let mut views: Vec<NoteView> = self
            .store
            .all()
            .filter(|n| n.space == space)
            .map(|n| NoteView::from_note(n.clone(), display_status(n, now)))
            .collect();

        // Newest first; id is the stable tiebreak for equal timestamps
        views.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        views
    }

    async fn create(
        &mut self,
        content: String,
        intent: NoteIntent,
        space: Option<String>,
    ) -> Result<Note> {
        let now = now_ms();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            owner_id: self.owner_id.clone(),
            space: normalize_space(space),
            content,
            intent,
            status: StoredStatus::Alive,
            created_at: now,
            updated_at: now,
            closed_at: None,
            summary: None,
        };

        self.store.put(note.clone()).await?;

        tracing::debug!(
            owner_id = %self.owner_id,
            note_id = %note.id,
            space = %note.space,
            intent = %note.intent,
            "Created note"
        );

        Ok(note)
    }

    async fn edit(&mut self, id: String, content: String) -> Result<Note> {
        let mut note = self
            .store
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Note {} not found", id)))?;

        note.content = content;
        note.updated_at = now_ms();
        // Editing bumps the note back to alive, archived or not
        note.status = StoredStatus::Alive;

        self.store.put(note.clone()).await?;
        Ok(note)
    }

    async fn archive(&mut self, id: String, summary: Option<String>) -> Result<Note> {
        let mut note = self
            .store
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Note {} not found", id)))?;

        let now = now_ms();
        note.status = StoredStatus::Archived;
        note.closed_at = Some(now);
        note.updated_at = now;
        if let Some(summary) = summary {
            note.summary = Some(summary);
        }

        self.store.put(note.clone()).await?;

        tracing::debug!(owner_id = %self.owner_id, note_id = %id, "Archived note");
        Ok(note)
    }
}

/// Empty or absent space selects the default partition
fn normalize_space(space: Option<String>) -> String {
    space
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default_space)
}

/// Fresh wall-clock reading in epoch millis, taken per operation
fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
