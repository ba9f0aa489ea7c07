use arboard::Clipboard;

/// Get text from the clipboard.
#[must_use]
pub fn get_text() -> Option<String> {
    Clipboard::new().ok()?.get_text().ok()
}

pub(crate) fn set_text(text: &str, label: &str) {
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                log::warn!("failed to copy {label:?} to clipboard: {err}");
            }
        }
        Err(err) => log::warn!("clipboard unavailable, dropping {label:?}: {err}"),
    }
}
