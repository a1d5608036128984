//! # Domain Models
//!
//! These structs represent the core entities of Notice-Board.
//! Identities are opaque server-assigned strings; the client never mints them.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label shown for comments whose author chose to stay anonymous.
pub const ANONYMOUS_LABEL: &str = "Anonymous";

/// A published announcement as delivered by the remote store.
///
/// An announcement may carry up to three competing image representations
/// (inline data URI, absolute URL, server-relative path); see
/// [`crate::attachment::AttachmentResolver`] for how they are reconciled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    /// Self-contained, directly renderable image payload (e.g. "data:image/png;base64,...").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data_uri: Option<String>,
    /// Absolute URL or server-relative path ("/uploads/...").
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A single comment from the flat, server-delivered list.
/// Nesting is reconstructed client-side; see [`crate::thread::build_thread`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub announcement_id: String,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    /// Wire field is named "comment" on both read and write.
    #[serde(rename = "comment")]
    pub body: String,
    /// Absent means top-level. Must reference a comment on the same announcement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Author display name, falling back to a generic label for anonymous posters.
    pub fn display_name(&self) -> &str {
        self.author_name.as_deref().unwrap_or(ANONYMOUS_LABEL)
    }
}

/// A comment plus its direct replies, arbitrarily deep.
///
/// The builder guarantees a forest (no node is its own descendant) as long as
/// the input parent graph is acyclic; depth is unbounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentNode {
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

/// Locally selected binary image data, held only between selection and submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAttachment {
    pub data: Bytes,
    pub file_name: String,
    pub content_type: String,
}

impl PendingAttachment {
    /// Infers the MIME type from the file name, defaulting to octet-stream
    /// when the extension is unknown.
    pub fn new(data: Bytes, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or(mime::APPLICATION_OCTET_STREAM)
            .essence_str()
            .to_string();
        Self { data, file_name, content_type }
    }
}

/// Fields for a new announcement; both text fields are required by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementDraft {
    pub title: String,
    pub body: String,
    pub attachment: Option<PendingAttachment>,
}

/// Partial announcement update. Omitted text fields are left untouched
/// server-side; the attachment instruction is always explicit.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub attachment: crate::attachment::AttachmentUpdate,
}

/// Fields for a new comment on an announcement.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDraft {
    pub body: String,
    pub parent_id: Option<String>,
}
