//! # nb-store-http
//!
//! reqwest-backed implementation of `AnnouncementStore`. This module owns the
//! wire protocol: JSON for reads and comment posts, multipart form for
//! announcement create/update (text fields plus an optional binary `file`
//! part, plus the explicit clear instruction on updates).

pub mod config;

pub use config::StoreConfig;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;

use nb_core::attachment::AttachmentUpdate;
use nb_core::error::{AppError, Result};
use nb_core::models::{
    Announcement, AnnouncementDraft, AnnouncementPatch, Comment, CommentDraft, PendingAttachment,
};
use nb_core::traits::AnnouncementStore;

pub struct HttpAnnouncementStore {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpAnnouncementStore {
    pub fn new(config: &StoreConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: trim_trailing_slash(&config.base_url),
            bearer_token: config.bearer_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        self.apply_auth(req).send().await.map_err(transport_error)
    }
}

fn trim_trailing_slash(url: &str) -> String {
    let mut url = url.to_string();
    while url.ends_with('/') {
        url.pop();
    }
    url
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::Network(err.to_string())
}

/// Maps a non-success status to the error taxonomy. 404 becomes `NotFound`;
/// 400/422 carry the server's detail text as a validation failure (this also
/// covers a `parent_id` the server rejects); everything else is opaque.
fn status_error(status: StatusCode, entity: &str, id: &str, detail: &str) -> AppError {
    match status {
        StatusCode::NOT_FOUND => AppError::NotFound(entity.to_string(), id.to_string()),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            if detail.is_empty() {
                AppError::ValidationError(format!("{entity} rejected by server"))
            } else {
                AppError::ValidationError(detail.to_string())
            }
        }
        _ => AppError::Network(format!("unexpected status {status} from server")),
    }
}

async fn check_status(resp: Response, entity: &str, id: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let detail = resp.text().await.unwrap_or_default();
    Err(status_error(status, entity, id, &detail))
}

fn file_part(att: PendingAttachment) -> Result<Part> {
    Part::bytes(att.data.to_vec())
        .file_name(att.file_name)
        .mime_str(&att.content_type)
        .map_err(|e| AppError::ValidationError(format!("invalid attachment content type: {e}")))
}

fn create_form(draft: AnnouncementDraft) -> Result<Form> {
    let mut form = Form::new().text("title", draft.title).text("body", draft.body);
    if let Some(att) = draft.attachment {
        form = form.part("file", file_part(att)?);
    }
    Ok(form)
}

/// Retain sends neither `file` nor `clear_file`; the server leaves the
/// attachment untouched. Clear sends the explicit instruction.
fn update_form(patch: AnnouncementPatch) -> Result<Form> {
    let mut form = Form::new();
    if let Some(title) = patch.title {
        form = form.text("title", title);
    }
    if let Some(body) = patch.body {
        form = form.text("body", body);
    }
    match patch.attachment {
        AttachmentUpdate::Replace(att) => form = form.part("file", file_part(att)?),
        AttachmentUpdate::Retain => {}
        AttachmentUpdate::Clear => form = form.text("clear_file", "true"),
    }
    Ok(form)
}

#[derive(Serialize)]
struct CommentPayload<'a> {
    comment: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a str>,
}

#[async_trait]
impl AnnouncementStore for HttpAnnouncementStore {
    async fn list_latest(&self, limit: u32) -> Result<Vec<Announcement>> {
        let url = self.endpoint("/announcements/latest");
        tracing::debug!(%url, limit, "listing latest announcements");
        let resp = self.send(self.http.get(&url).query(&[("limit", limit)])).await?;
        let resp = check_status(resp, "announcement feed", "latest").await?;
        resp.json().await.map_err(transport_error)
    }

    async fn get_announcement(&self, id: &str) -> Result<Announcement> {
        let url = self.endpoint(&format!("/announcements/{id}"));
        let resp = self.send(self.http.get(&url)).await?;
        let resp = check_status(resp, "announcement", id).await?;
        resp.json().await.map_err(transport_error)
    }

    async fn create_announcement(&self, draft: AnnouncementDraft) -> Result<Announcement> {
        let url = self.endpoint("/announcements/");
        tracing::debug!(%url, has_file = draft.attachment.is_some(), "creating announcement");
        let form = create_form(draft)?;
        let resp = self.send(self.http.post(&url).multipart(form)).await?;
        let resp = check_status(resp, "announcement", "new").await?;
        resp.json().await.map_err(transport_error)
    }

    async fn update_announcement(&self, id: &str, patch: AnnouncementPatch) -> Result<Announcement> {
        let url = self.endpoint(&format!("/announcements/{id}"));
        tracing::debug!(%url, attachment = ?discriminant_name(&patch.attachment), "updating announcement");
        let form = update_form(patch)?;
        let resp = self.send(self.http.put(&url).multipart(form)).await?;
        let resp = check_status(resp, "announcement", id).await?;
        resp.json().await.map_err(transport_error)
    }

    async fn delete_announcement(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&format!("/announcements/{id}"));
        let resp = self.send(self.http.delete(&url)).await?;
        check_status(resp, "announcement", id).await?;
        Ok(())
    }

    async fn list_comments(&self, announcement_id: &str) -> Result<Vec<Comment>> {
        let url = self.endpoint(&format!("/announcements/{announcement_id}/comments"));
        let resp = self.send(self.http.get(&url)).await?;
        let resp = check_status(resp, "announcement", announcement_id).await?;
        resp.json().await.map_err(transport_error)
    }

    async fn create_comment(&self, announcement_id: &str, draft: CommentDraft) -> Result<Comment> {
        let url = self.endpoint(&format!("/announcements/{announcement_id}/comments"));
        let payload = CommentPayload {
            comment: &draft.body,
            parent_id: draft.parent_id.as_deref(),
        };
        let resp = self.send(self.http.post(&url).json(&payload)).await?;
        let resp = check_status(resp, "announcement", announcement_id).await?;
        resp.json().await.map_err(transport_error)
    }
}

fn discriminant_name(update: &AttachmentUpdate) -> &'static str {
    match update {
        AttachmentUpdate::Replace(_) => "replace",
        AttachmentUpdate::Retain => "retain",
        AttachmentUpdate::Clear => "clear",
    }
}
