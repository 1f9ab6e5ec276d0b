//! Textual rendering of core data for display
//!
//! Exact formatting is presentation-level; the contracts are the structure
//! and ordering of what gets rendered.

use std::fmt::Write as _;

use crate::history::History;
use crate::model::Entity;

/// Render the full history as one block, one line per entry, append order
pub fn render_history(history: &History) -> String {
    let mut out = String::from("--- command history ---\n");
    for entry in history.entries() {
        // Writing into a String cannot fail
        let _ = writeln!(out, "* {entry}");
    }
    out
}

/// Render the entity's current snapshot
pub fn render_status(entity: &Entity) -> String {
    format!("[STATUS] {}", entity.status())
}
