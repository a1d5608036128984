//! # AnnouncementCommentService
//!
//! The single point where remote state becomes client state. Validation that
//! can fail locally fails before any network call is issued; remote failures
//! surface to the caller unmodified.

use std::sync::Arc;

use nb_core::attachment::{AttachmentResolver, DisplayRef};
use nb_core::error::{AppError, Result};
use nb_core::models::{
    Announcement, AnnouncementDraft, AnnouncementPatch, Comment, CommentDraft, CommentNode,
    PendingAttachment,
};
use nb_core::thread::build_thread;
use nb_core::traits::AnnouncementStore;

/// Default cap for the latest-announcements feed.
pub const DEFAULT_LATEST_LIMIT: u32 = 5;

/// Combined detail-view state: the announcement, its resolved attachment,
/// and the rebuilt reply forest. Replaced wholesale, never patched.
#[derive(Debug, Clone)]
pub struct AnnouncementView {
    pub announcement: Announcement,
    pub display: Option<DisplayRef>,
    pub thread: Vec<CommentNode>,
}

/// Result of posting a comment: the server-assigned comment plus the reply
/// forest rebuilt from a full re-fetch.
#[derive(Debug, Clone)]
pub struct PostedComment {
    pub comment: Comment,
    pub thread: Vec<CommentNode>,
}

pub struct AnnouncementCommentService {
    store: Arc<dyn AnnouncementStore>,
    resolver: AttachmentResolver,
}

impl AnnouncementCommentService {
    pub fn new(store: Arc<dyn AnnouncementStore>, resolver: AttachmentResolver) -> Self {
        Self { store, resolver }
    }

    /// Most-recent announcements, newest first. Empty is a valid outcome.
    pub async fn list_latest(&self, limit: u32) -> Result<Vec<Announcement>> {
        self.store.list_latest(limit).await
    }

    /// Single announcement, `NotFound` if the store has no such id.
    pub async fn get_by_id(&self, id: &str) -> Result<Announcement> {
        self.store.get_announcement(id).await
    }

    /// Fetches one announcement and its comments concurrently, fail-fast:
    /// a partial failure of either fails the combined load as a whole, so the
    /// UI never renders stale+fresh mixed state.
    pub async fn load(&self, id: &str) -> Result<AnnouncementView> {
        let (announcement, comments) = tokio::try_join!(
            self.store.get_announcement(id),
            self.store.list_comments(id),
        )?;
        Ok(AnnouncementView {
            display: self.resolver.resolve(&announcement),
            thread: build_thread(comments),
            announcement,
        })
    }

    /// Flat comment list rebuilt into a forest.
    pub async fn comment_thread(&self, announcement_id: &str) -> Result<Vec<CommentNode>> {
        let comments = self.store.list_comments(announcement_id).await?;
        Ok(build_thread(comments))
    }

    /// Posts a comment, then re-fetches the full list before rebuilding the
    /// tree. No optimistic insert: the returned forest reflects server-assigned
    /// ordering, timestamps, and any server-side transformation of the text.
    pub async fn post_comment(
        &self,
        announcement_id: &str,
        body: &str,
        parent_id: Option<&str>,
    ) -> Result<PostedComment> {
        let body = body.trim();
        if body.is_empty() {
            return Err(AppError::ValidationError("comment text is required".into()));
        }
        let draft = CommentDraft {
            body: body.to_string(),
            parent_id: parent_id.map(str::to_string),
        };
        let comment = self.store.create_comment(announcement_id, draft).await?;
        tracing::debug!(announcement_id, comment_id = %comment.id, "comment created, re-fetching thread");
        let fresh = self.store.list_comments(announcement_id).await?;
        Ok(PostedComment { comment, thread: build_thread(fresh) })
    }

    /// Creates an announcement. Both title and body are required; an empty
    /// field fails here, before any request is issued.
    pub async fn create(
        &self,
        title: &str,
        body: &str,
        attachment: Option<PendingAttachment>,
    ) -> Result<Announcement> {
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() {
            return Err(AppError::ValidationError("title is required".into()));
        }
        if body.is_empty() {
            return Err(AppError::ValidationError("body is required".into()));
        }
        let draft = AnnouncementDraft {
            title: title.to_string(),
            body: body.to_string(),
            attachment,
        };
        self.store.create_announcement(draft).await
    }

    /// Partial update. Text fields that are supplied must be non-empty after
    /// trimming; omitted fields are left untouched server-side. The attachment
    /// instruction in the patch is already the explicit Replace/Retain/Clear
    /// decision made at the edit-form boundary.
    pub async fn update(&self, id: &str, patch: AnnouncementPatch) -> Result<Announcement> {
        if let Some(title) = patch.title.as_deref() {
            if title.trim().is_empty() {
                return Err(AppError::ValidationError("title must not be empty".into()));
            }
        }
        if let Some(body) = patch.body.as_deref() {
            if body.trim().is_empty() {
                return Err(AppError::ValidationError("body must not be empty".into()));
            }
        }
        self.store.update_announcement(id, patch).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.store.delete_announcement(id).await
    }

    /// Resolves an announcement's attachment against the configured origin.
    pub fn display_ref(&self, announcement: &Announcement) -> Option<DisplayRef> {
        self.resolver.resolve(announcement)
    }
}
