//! # nb-picker-fs
//!
//! Filesystem implementation of `MediaPicker`: the CLI's stand-in for a
//! platform media-picker dialog. "Selection" is a path supplied up front;
//! the file name and MIME type are inferred from it.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use nb_core::error::{AppError, Result};
use nb_core::models::PendingAttachment;
use nb_core::traits::MediaPicker;

pub struct FsMediaPicker {
    path: PathBuf,
}

impl FsMediaPicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MediaPicker for FsMediaPicker {
    /// Reads the configured file. A refused read surfaces as
    /// `PermissionDenied`, mirroring a denied media-library permission.
    async fn pick_image(&self) -> Result<Option<PendingAttachment>> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(AppError::PermissionDenied(format!(
                    "cannot read {}",
                    self.path.display()
                )));
            }
            Err(e) => {
                return Err(AppError::ValidationError(format!(
                    "cannot read {}: {e}",
                    self.path.display()
                )));
            }
        };
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin");
        Ok(Some(PendingAttachment::new(Bytes::from(data), file_name)))
    }
}
