//! Note storage and wire types
//!
//! Defines the persisted note record, the derived list view, and the
//! request/response bodies for the Notes API. All types use camelCase JSON
//! serialization on the wire.

use serde::{Deserialize, Serialize};

/// The default partition a note lands in when none is given
pub const DEFAULT_SPACE: &str = "main";

pub(crate) fn default_space() -> String {
    DEFAULT_SPACE.to_string()
}

/// Intent tag attached to a note at creation; never changed afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteIntent {
    #[default]
    Thinking,
    Planning,
    Building,
    Writing,
    Shared,
}

impl std::fmt::Display for NoteIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Thinking => write!(f, "thinking"),
            Self::Planning => write!(f, "planning"),
            Self::Building => write!(f, "building"),
            Self::Writing => write!(f, "writing"),
            Self::Shared => write!(f, "shared"),
        }
    }
}

/// Persisted lifecycle flag. The intermediate decay tiers are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoredStatus {
    #[default]
    Alive,
    Archived,
}

/// Lifecycle status derived at read time from stored status + age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    Alive,
    Warming,
    Cooling,
    Archived,
}

impl From<StoredStatus> for DisplayStatus {
    fn from(status: StoredStatus) -> Self {
        match status {
            StoredStatus::Alive => Self::Alive,
            StoredStatus::Archived => Self::Archived,
        }
    }
}

/// A single note record as persisted in an owner's store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub owner_id: String,
    /// Partition label; records persisted before spaces existed load as "main"
    #[serde(default = "default_space")]
    pub space: String,
    pub content: String,
    #[serde(default)]
    pub intent: NoteIntent,
    pub status: StoredStatus,
    /// Epoch millis; ordering key for list
    pub created_at: i64,
    /// Epoch millis; reset on every edit, sole input to decay
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// A note with its derived display status, as returned by list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteView {
    pub id: String,
    pub owner_id: String,
    pub space: String,
    pub content: String,
    pub intent: NoteIntent,
    /// Derived on read; never what the store holds for warming/cooling
    pub status: DisplayStatus,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl NoteView {
    /// Attach a derived status to a note record
    pub fn from_note(note: Note, status: DisplayStatus) -> Self {
        Self {
            id: note.id,
            owner_id: note.owner_id,
            space: note.space,
            content: note.content,
            intent: note.intent,
            status,
            created_at: note.created_at,
            updated_at: note.updated_at,
            closed_at: note.closed_at,
            summary: note.summary,
        }
    }
}

/// Request body for creating a note
///
/// The owner id is never read from the body; the gateway stamps the resolved
/// identity into the operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub content: String,
    #[serde(default)]
    pub intent: NoteIntent,
    #[serde(default)]
    pub space: Option<String>,
}

/// Request body for editing note content
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditNoteRequest {
    pub content: String,
}

/// Request body for archiving a note
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveNoteRequest {
    #[serde(default)]
    pub summary: Option<String>,
}

/// Response envelope for list
#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub notes: Vec<NoteView>,
}

/// API error envelope
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

/// API error detail
#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: "NOT_FOUND".to_string(),
                message: message.into(),
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: "BAD_REQUEST".to_string(),
                message: message.into(),
            },
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message: message.into(),
            },
        }
    }
}
