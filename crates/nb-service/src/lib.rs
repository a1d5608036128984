//! # nb-service
//!
//! The client-side orchestration layer for Notice-Board: composes the remote
//! store port with the pure builders from `nb-core`, and owns the per-edit
//! session state machine.

pub mod service;
pub mod session;

pub use service::{AnnouncementCommentService, AnnouncementView, PostedComment, DEFAULT_LATEST_LIMIT};
pub use session::{EditSession, EditState};
