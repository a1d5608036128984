//! notice-board/crates/nb-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Notice-Board:
//! announcement/comment models, the attachment resolution policy, and the
//! flat-list-to-reply-tree builder. This crate performs no I/O.

pub mod attachment;
pub mod error;
pub mod models;
pub mod thread;
pub mod traits;

// Re-exporting for easier access in other crates
pub use attachment::*;
pub use error::*;
pub use models::*;
pub use thread::*;
pub use traits::*;
