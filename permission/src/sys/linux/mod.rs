//! Linux permission implementation.
//!
//! GeoClue2 authorizes clients through its agent when a client starts, so
//! there is no separate runtime prompt. Sandboxed apps (Flatpak/Snap) go
//! through the location portal, which answers at the same point.

use crate::{PermissionError, PermissionStatus};

pub(crate) async fn check() -> Result<PermissionStatus, PermissionError> {
    Ok(PermissionStatus::Granted)
}

pub(crate) async fn request() -> Result<PermissionStatus, PermissionError> {
    Ok(PermissionStatus::Granted)
}
