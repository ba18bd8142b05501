//! Notes module — the per-owner note core
//!
//! Holds the note data model, the status decay engine, the durable per-owner
//! store, the actor that serializes all of one owner's operations, and the
//! REST handlers in front of it.

pub mod actor;
pub mod decay;
pub mod handler;
pub mod store;
pub mod types;

pub use actor::{NoteActor, NoteActorHandle};
pub use decay::display_status;
pub use handler::{notes_router, NotesState};
pub use store::NoteStore;
pub use types::{DisplayStatus, Note, NoteIntent, NoteView, StoredStatus, DEFAULT_SPACE};
