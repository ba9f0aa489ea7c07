//! Location permission handling.
//!
//! This crate provides the permission vocabulary shared by the geokit crates
//! and a system-level check/request pair for location access on Windows and
//! Linux.

#![warn(missing_docs)]

/// Platform-specific implementations.
mod sys;

use serde::{Deserialize, Serialize};

/// The current status of the location permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionStatus {
    /// Permission has not been requested yet.
    NotDetermined,
    /// Permission was declined, but the app may prompt again.
    Denied,
    /// Permission was declined permanently. Only the system settings can change it.
    DeniedForever,
    /// Permission has been granted by the user.
    Granted,
}

impl PermissionStatus {
    /// Returns `true` if location access is allowed.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Returns `true` if the app may show a permission prompt for this state.
    #[must_use]
    pub const fn is_promptable(self) -> bool {
        matches!(self, Self::NotDetermined | Self::Denied)
    }
}

/// The platform flavor a permission state was observed on.
///
/// Callers use this to pick platform-specific guidance (for example "open
/// browser site settings" versus "open app settings") once a permission is
/// permanently denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// A browser host.
    Web,
    /// iOS or Android.
    Mobile,
    /// Windows, macOS or Linux.
    Desktop,
    /// Anything else.
    Unknown,
}

impl Platform {
    /// The platform this crate was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "ios", target_os = "android")) {
            Self::Mobile
        } else if cfg!(any(
            target_os = "windows",
            target_os = "macos",
            target_os = "linux"
        )) {
            Self::Desktop
        } else {
            Self::Unknown
        }
    }
}

/// Errors that can occur when querying or requesting permissions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermissionError {
    /// Location permission is not supported on this platform.
    #[error("permission not supported on this platform")]
    NotSupported,
    /// An unknown error occurred.
    #[error("unknown error: {0}")]
    Unknown(String),
}

/// Check the current location permission status without prompting.
///
/// # Errors
/// Returns a `PermissionError` if the platform cannot report a status.
pub async fn check() -> Result<PermissionStatus, PermissionError> {
    sys::check().await
}

/// Request location permission from the user.
///
/// If the permission has already been granted or permanently denied, this
/// returns the current status without showing a prompt.
///
/// # Errors
/// Returns a `PermissionError` if:
/// - Location permission is not supported on this platform.
/// - An underlying platform error occurs.
pub async fn request() -> Result<PermissionStatus, PermissionError> {
    sys::request().await
}
