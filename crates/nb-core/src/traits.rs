//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the service layer
//! and the binary.

use async_trait::async_trait;
use crate::error::Result;
use crate::models::{
    Announcement, AnnouncementDraft, AnnouncementPatch, Comment, CommentDraft, PendingAttachment,
};

/// Remote announcement/comment store contract.
///
/// Implementations surface every remote failure unmodified: no silent
/// swallowing, no automatic retry. An empty list is a valid, non-error result.
#[async_trait]
pub trait AnnouncementStore: Send + Sync {
    // Announcement operations
    async fn list_latest(&self, limit: u32) -> Result<Vec<Announcement>>;
    async fn get_announcement(&self, id: &str) -> Result<Announcement>;
    async fn create_announcement(&self, draft: AnnouncementDraft) -> Result<Announcement>;
    async fn update_announcement(&self, id: &str, patch: AnnouncementPatch) -> Result<Announcement>;
    async fn delete_announcement(&self, id: &str) -> Result<()>;

    // Comment operations (flat list; nesting is rebuilt client-side)
    async fn list_comments(&self, announcement_id: &str) -> Result<Vec<Comment>>;
    async fn create_comment(&self, announcement_id: &str, draft: CommentDraft) -> Result<Comment>;
}

/// Media selection contract.
#[async_trait]
pub trait MediaPicker: Send + Sync {
    /// Returns the selected image, or `None` when the user cancels.
    /// Access refusal surfaces as [`crate::error::AppError::PermissionDenied`].
    async fn pick_image(&self) -> Result<Option<PendingAttachment>>;
}
