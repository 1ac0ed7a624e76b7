//! Plain-text rendering of the invitation page.

use std::fmt::Write;

use invite_db::models::{InvitationRecord, SegmentAsset};

use crate::driver::PageSnapshot;
use crate::state::ViewState;

/// Render a snapshot as it should appear on screen.
pub fn render(snapshot: &PageSnapshot) -> String {
    match &snapshot.view {
        ViewState::Loading => render_loader(snapshot.segments.as_ref()),
        ViewState::Success(record) => render_invitation(record),
        ViewState::Error(message) => render_error(message),
    }
}

/// Loader screen. Without segments the artwork is a spinner.
pub fn render_loader(segments: Option<&SegmentAsset>) -> String {
    let art = match segments {
        Some(asset) => format!(
            "[ {} red / {} gold segments ]",
            asset.red.len(),
            asset.gold.len()
        ),
        None => "[ ... ]".to_string(),
    };

    format!("{art}\n\nSHREE GANESHAY NAMAH\nInvoking Divine Presence\n")
}

/// Hero section followed by one block per event, in stored order.
pub fn render_invitation(record: &InvitationRecord) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "SAVE THE DATE");
    let _ = writeln!(out);
    let _ = writeln!(out, "{} & {}", record.bride_name, record.groom_name);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "With the blessings of Lord Ganesh, we invite you to celebrate our union on {}.",
        record.wedding_date
    );

    for event in &record.events {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", event.title);
        let _ = writeln!(out, "{} | {}", event.date, event.time);
        let _ = writeln!(out, "{}", event.location);
        let _ = writeln!(out, "{}", event.description);
    }

    out
}

pub fn render_error(message: &str) -> String {
    format!("Om Ganeshay Namah\n\n{message}\n")
}
