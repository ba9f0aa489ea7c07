//! Windows permission implementation using WinRT.
//!
//! A denial on Windows can only be reverted from the Settings app, so it is
//! reported as `DeniedForever`.

use crate::{PermissionError, PermissionStatus};
use windows::Devices::Geolocation::{GeolocationAccessStatus, Geolocator};
use windows::Security::Authorization::AppCapabilityAccess::{
    AppCapability, AppCapabilityAccessStatus,
};
use windows::core::HSTRING;

fn win_error(err: &windows::core::Error) -> PermissionError {
    PermissionError::Unknown(err.message().to_string())
}

fn capability_status(status: AppCapabilityAccessStatus) -> PermissionStatus {
    match status {
        AppCapabilityAccessStatus::Allowed => PermissionStatus::Granted,
        AppCapabilityAccessStatus::UserPromptRequired => PermissionStatus::NotDetermined,
        _ => PermissionStatus::DeniedForever,
    }
}

fn access_status(status: GeolocationAccessStatus) -> PermissionStatus {
    match status {
        GeolocationAccessStatus::Allowed => PermissionStatus::Granted,
        GeolocationAccessStatus::Denied => PermissionStatus::DeniedForever,
        _ => PermissionStatus::NotDetermined,
    }
}

pub(crate) async fn check() -> Result<PermissionStatus, PermissionError> {
    // CheckAccess reads the stored decision and never shows the consent prompt
    let status = AppCapability::Create(&HSTRING::from("location"))
        .map_err(|e| win_error(&e))?
        .CheckAccess()
        .map_err(|e| win_error(&e))?;
    Ok(capability_status(status))
}

pub(crate) async fn request() -> Result<PermissionStatus, PermissionError> {
    let status = Geolocator::RequestAccessAsync()
        .map_err(|e| win_error(&e))?
        .await
        .map_err(|e| win_error(&e))?;

    let status = access_status(status);
    log::debug!("windows location access status: {status:?}");
    Ok(status)
}
