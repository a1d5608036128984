//! Attachment resolution precedence and the replace/retain/clear decision,
//! exercised over announcements carrying every field combination.

use bytes::Bytes;
use chrono::{TimeZone, Utc};

use nb_core::attachment::{AttachmentResolver, AttachmentUpdate, DisplayRef};
use nb_core::models::{Announcement, PendingAttachment};

fn announcement(data_uri: Option<&str>, url: Option<&str>) -> Announcement {
    Announcement {
        id: "a1".into(),
        title: "t".into(),
        body: None,
        image_data_uri: data_uri.map(Into::into),
        image_url: url.map(Into::into),
        created_at: Utc.with_ymd_and_hms(2025, 8, 20, 8, 0, 0).unwrap(),
    }
}

#[test]
fn precedence_over_field_combinations() {
    let resolver = AttachmentResolver::new("https://api.example.com/");
    let cases = [
        // inline wins even when a URL is also present
        (
            announcement(Some("data:image/png;base64,AA"), Some("http://x/y")),
            Some(DisplayRef::Inline("data:image/png;base64,AA".into())),
        ),
        (
            announcement(None, Some("http://x/y")),
            Some(DisplayRef::Remote("http://x/y".into())),
        ),
        (
            announcement(None, Some("/media/a.jpg")),
            Some(DisplayRef::Remote("https://api.example.com/media/a.jpg".into())),
        ),
        (announcement(None, None), None),
        // neither scheme nor path-root marker: placeholder
        (announcement(None, Some("media/a.jpg")), None),
    ];
    for (ann, expected) in cases {
        assert_eq!(resolver.resolve(&ann), expected, "announcement: {ann:?}");
    }
}

#[test]
fn resolution_is_a_pure_function_of_its_input() {
    let resolver = AttachmentResolver::new("https://api.example.com");
    let ann = announcement(None, Some("/media/a.jpg"));
    assert_eq!(resolver.resolve(&ann), resolver.resolve(&ann));
}

#[test]
fn edit_decision_covers_all_three_states() {
    let picked = PendingAttachment::new(Bytes::from_static(b"img"), "new.jpg");
    let remote = DisplayRef::Remote("https://api.example.com/media/a.jpg".into());
    let inline = DisplayRef::Inline("data:image/png;base64,AA".into());

    // (a) a freshly picked file always replaces
    assert!(matches!(
        AttachmentUpdate::from_edit(Some(picked.clone()), Some(&remote)),
        AttachmentUpdate::Replace(_)
    ));
    // (b) remote display, nothing picked: retain what the server has
    assert_eq!(AttachmentUpdate::from_edit(None, Some(&remote)), AttachmentUpdate::Retain);
    // (c) inline or absent display cannot round-trip: clear
    assert_eq!(AttachmentUpdate::from_edit(None, Some(&inline)), AttachmentUpdate::Clear);
    assert_eq!(AttachmentUpdate::from_edit(None, None), AttachmentUpdate::Clear);
}
