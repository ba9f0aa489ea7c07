//! Platform-specific clipboard backend implementations.

#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
/// Desktop platform backend.
mod desktop;
#[cfg(any(target_os = "windows", target_os = "linux", target_os = "macos"))]
pub use desktop::*;

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
mod unsupported {
    /// Clipboard reads are unavailable on this platform.
    #[must_use]
    pub const fn get_text() -> Option<String> {
        None
    }

    pub(crate) fn set_text(_text: &str, label: &str) {
        log::warn!("no clipboard backend on this platform, dropping {label:?}");
    }
}
#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
pub use unsupported::*;
