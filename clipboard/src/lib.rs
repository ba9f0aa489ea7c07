//! Best-effort clipboard export.
//!
//! Used to hand data such as CSV exports of positions to the user. Every
//! operation is fire-and-forget: failures are logged and otherwise ignored.

#![warn(missing_docs)]

mod sys;

pub use sys::get_text;

/// Copy `content` to the system clipboard.
///
/// `label` is a user-visible description of the content. Desktop clipboards
/// have no slot for it, so there it is only logged.
pub fn copy_text_with_label(content: &str, label: &str) {
    log::debug!("copying {} bytes to clipboard as {label:?}", content.len());
    sys::set_text(content, label);
}
