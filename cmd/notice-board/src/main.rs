//! # Notice-Board CLI
//!
//! The entry point that assembles the client from its plugins: the HTTP
//! store, the filesystem media picker, and the orchestration service.

use std::sync::Arc;

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

use nb_core::attachment::{AttachmentResolver, AttachmentUpdate};
use nb_core::models::CommentNode;
use nb_core::traits::MediaPicker;
use nb_picker_fs::FsMediaPicker;
use nb_service::{AnnouncementCommentService, DEFAULT_LATEST_LIMIT};
use nb_store_http::{HttpAnnouncementStore, StoreConfig};

const USAGE: &str = "usage:
  notice-board latest [limit]
  notice-board show <id>
  notice-board comment <id> <text> [parent-comment-id]
  notice-board create <title> <body> [image-path]
  notice-board update <id> <title> <body> [image-path]
  notice-board delete <id>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = StoreConfig::from_env().context("loading store configuration")?;
    let store = HttpAnnouncementStore::new(&config).context("building HTTP store")?;
    let service = AnnouncementCommentService::new(
        Arc::new(store),
        AttachmentResolver::new(config.media_origin.as_str()),
    );

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("latest") => {
            let limit = match args.get(2) {
                Some(raw) => raw.parse().context("limit must be a number")?,
                None => DEFAULT_LATEST_LIMIT,
            };
            let announcements = service.list_latest(limit).await?;
            if announcements.is_empty() {
                println!("no announcements");
            }
            for a in announcements {
                println!("{}  {}  {}", a.id, a.created_at.format("%Y-%m-%d %H:%M"), a.title);
            }
        }
        Some("show") => {
            let id = args.get(2).context(USAGE)?;
            let view = service.load(id).await?;
            println!("{}", view.announcement.title);
            println!("{}", view.announcement.created_at.format("%Y-%m-%d %H:%M"));
            if let Some(display) = &view.display {
                println!("[image: {}]", display.as_str());
            }
            if let Some(body) = &view.announcement.body {
                println!("\n{body}");
            }
            println!("\n--- comments ---");
            print_thread(&view.thread, 0);
        }
        Some("comment") => {
            let id = args.get(2).context(USAGE)?;
            let text = args.get(3).context(USAGE)?;
            let parent = args.get(4).map(String::as_str);
            let posted = service.post_comment(id, text, parent).await?;
            tracing::info!(comment_id = %posted.comment.id, "comment posted");
            print_thread(&posted.thread, 0);
        }
        Some("create") => {
            let title = args.get(2).context(USAGE)?;
            let body = args.get(3).context(USAGE)?;
            let attachment = match args.get(4) {
                Some(path) => FsMediaPicker::new(path).pick_image().await?,
                None => None,
            };
            let created = service.create(title, body, attachment).await?;
            println!("created announcement {}", created.id);
        }
        Some("update") => {
            let id = args.get(2).context(USAGE)?;
            let title = args.get(3).context(USAGE)?;
            let body = args.get(4).context(USAGE)?;
            // The replace/retain/clear decision needs the currently displayed
            // reference, so fetch the current state first.
            let view = service.load(id).await?;
            let pending = match args.get(5) {
                Some(path) => FsMediaPicker::new(path).pick_image().await?,
                None => None,
            };
            let attachment = AttachmentUpdate::from_edit(pending, view.display.as_ref());
            let patch = nb_core::models::AnnouncementPatch {
                title: Some(title.clone()),
                body: Some(body.clone()),
                attachment,
            };
            let updated = service.update(id, patch).await?;
            println!("updated announcement {}", updated.id);
        }
        Some("delete") => {
            let id = args.get(2).context(USAGE)?;
            service.remove(id).await?;
            println!("deleted announcement {id}");
        }
        _ => bail!("{USAGE}"),
    }

    Ok(())
}

/// Depth-indented reply tree. Depth is unbounded; indentation is the only
/// visual cue.
fn print_thread(nodes: &[CommentNode], depth: usize) {
    for node in nodes {
        println!(
            "{}{} ({}): {}",
            "  ".repeat(depth),
            node.comment.display_name(),
            node.comment.created_at.format("%Y-%m-%d %H:%M"),
            node.comment.body
        );
        print_thread(&node.replies, depth + 1);
    }
}
