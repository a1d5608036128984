//! # Attachment Resolution
//!
//! Reconciles an announcement's competing image representations (inline data
//! URI, absolute URL, server-relative path) into one renderable reference,
//! and carries the explicit replace/retain/clear instruction for updates.

use crate::models::{Announcement, PendingAttachment};

/// One displayable attachment reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRef {
    /// Self-contained payload, renderable without a network fetch.
    Inline(String),
    /// Fully-qualified address hosted by the server (or elsewhere).
    Remote(String),
}

impl DisplayRef {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayRef::Inline(s) | DisplayRef::Remote(s) => s,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, DisplayRef::Remote(_))
    }
}

/// Maps raw announcement image fields to exactly one displayable reference.
///
/// The configured API origin is passed in explicitly at construction; there is
/// no ambient base-URL state.
#[derive(Debug, Clone)]
pub struct AttachmentResolver {
    origin: String,
}

impl AttachmentResolver {
    /// `origin` is the API origin used to rewrite server-relative paths.
    /// A trailing slash is stripped so concatenation never doubles the separator.
    pub fn new(origin: impl Into<String>) -> Self {
        let mut origin = origin.into();
        while origin.ends_with('/') {
            origin.pop();
        }
        Self { origin }
    }

    /// Total over its input: malformed strings fall through to `None` and the
    /// caller renders a placeholder.
    ///
    /// Precedence (first match wins, for backward-compatible records carrying
    /// any combination of fields):
    /// 1. inline payload, as-is — avoids an extra round trip
    /// 2. absolute URL, unchanged
    /// 3. server-relative path, rewritten against the configured origin
    pub fn resolve(&self, announcement: &Announcement) -> Option<DisplayRef> {
        if let Some(data) = announcement.image_data_uri.as_deref() {
            if !data.is_empty() {
                return Some(DisplayRef::Inline(data.to_string()));
            }
        }
        let url = announcement.image_url.as_deref()?;
        if url.starts_with("http://") || url.starts_with("https://") {
            Some(DisplayRef::Remote(url.to_string()))
        } else if url.starts_with('/') {
            Some(DisplayRef::Remote(format!("{}{}", self.origin, url)))
        } else {
            None
        }
    }
}

/// The three wire-distinguishable attachment states of an update.
#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentUpdate {
    /// Transmit this new binary alongside the text fields.
    Replace(PendingAttachment),
    /// Leave the existing attachment untouched server-side.
    Retain,
    /// Remove the existing attachment.
    Clear,
}

impl AttachmentUpdate {
    /// Decides the update instruction once, at the edit-form boundary.
    ///
    /// A freshly picked image always wins. Otherwise: a remotely hosted
    /// display reference means the user kept what the server already has;
    /// anything else (inline data, or nothing displayed) cannot be
    /// round-tripped as an update payload and becomes a clear.
    pub fn from_edit(
        pending: Option<PendingAttachment>,
        current_display: Option<&DisplayRef>,
    ) -> Self {
        match (pending, current_display) {
            (Some(att), _) => AttachmentUpdate::Replace(att),
            (None, Some(display)) if display.is_remote() => AttachmentUpdate::Retain,
            (None, _) => AttachmentUpdate::Clear,
        }
    }
}
