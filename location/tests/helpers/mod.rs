//! Shared test helpers: a scripted provider that records how it was called.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use geokit_location::{
    LocationAccuracy, LocationError, LocationProvider, LocationResult, PermissionStatus,
    PlaceCandidate, Platform, Position,
};

/// How the provider answers a fix request.
#[derive(Debug, Clone)]
pub enum FixScript {
    /// Answer immediately.
    Ready(LocationResult<Position>),
    /// Never answer.
    Hang,
    /// Answer the n-th call with the n-th entry, after its delay.
    PerCall(Vec<(Duration, Position)>),
}

/// A provider whose every answer is fixed up front.
#[derive(Debug)]
pub struct ScriptedProvider {
    pub service_enabled: LocationResult<bool>,
    pub status: LocationResult<PermissionStatus>,
    pub prompt_answer: LocationResult<PermissionStatus>,
    pub fix: FixScript,
    pub last_known: LocationResult<Option<Position>>,
    pub candidates: LocationResult<Vec<PlaceCandidate>>,
    pub platform: Platform,
    pub prompts: AtomicUsize,
    pub fixes: AtomicUsize,
    pub last_known_calls: AtomicUsize,
    pub geocodes: AtomicUsize,
    pub requested: Mutex<Vec<(LocationAccuracy, Duration)>>,
}

impl ScriptedProvider {
    /// Services on, permission already granted, every call succeeds.
    pub fn granted() -> Self {
        Self {
            service_enabled: Ok(true),
            status: Ok(PermissionStatus::Granted),
            prompt_answer: Ok(PermissionStatus::Granted),
            fix: FixScript::Ready(Ok(sample_position())),
            last_known: Ok(Some(cached_position())),
            candidates: Ok(Vec::new()),
            platform: Platform::Mobile,
            prompts: AtomicUsize::new(0),
            fixes: AtomicUsize::new(0),
            last_known_calls: AtomicUsize::new(0),
            geocodes: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_status(mut self, status: PermissionStatus) -> Self {
        self.status = Ok(status);
        self
    }

    pub fn with_prompt_answer(mut self, answer: PermissionStatus) -> Self {
        self.prompt_answer = Ok(answer);
        self
    }

    pub fn with_service_enabled(mut self, enabled: bool) -> Self {
        self.service_enabled = Ok(enabled);
        self
    }

    pub fn with_fix(mut self, fix: FixScript) -> Self {
        self.fix = fix;
        self
    }

    pub fn with_candidates(mut self, candidates: Vec<PlaceCandidate>) -> Self {
        self.candidates = Ok(candidates);
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn prompts(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }

    pub fn fixes(&self) -> usize {
        self.fixes.load(Ordering::SeqCst)
    }

    pub fn last_known_calls(&self) -> usize {
        self.last_known_calls.load(Ordering::SeqCst)
    }

    pub fn geocodes(&self) -> usize {
        self.geocodes.load(Ordering::SeqCst)
    }
}

impl LocationProvider for ScriptedProvider {
    async fn is_location_service_enabled(&self) -> LocationResult<bool> {
        self.service_enabled.clone()
    }

    async fn check_permission(&self) -> LocationResult<PermissionStatus> {
        self.status.clone()
    }

    async fn request_permission(&self) -> LocationResult<PermissionStatus> {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        self.prompt_answer.clone()
    }

    async fn current_position(
        &self,
        accuracy: LocationAccuracy,
        timeout: Duration,
    ) -> LocationResult<Position> {
        let call = self.fixes.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push((accuracy, timeout));
        match &self.fix {
            FixScript::Ready(result) => result.clone(),
            FixScript::Hang => std::future::pending().await,
            FixScript::PerCall(script) => {
                let (delay, position) = script
                    .get(call)
                    .cloned()
                    .ok_or_else(|| LocationError::Provider(format!("unscripted call {call}")))?;
                tokio::time::sleep(delay).await;
                Ok(position)
            }
        }
    }

    async fn last_known_position(&self) -> LocationResult<Option<Position>> {
        self.last_known_calls.fetch_add(1, Ordering::SeqCst);
        self.last_known.clone()
    }

    async fn reverse_geocode(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> LocationResult<Vec<PlaceCandidate>> {
        self.geocodes.fetch_add(1, Ordering::SeqCst);
        self.candidates.clone()
    }

    fn platform(&self) -> Platform {
        self.platform
    }
}

pub fn position(latitude: f64, longitude: f64, timestamp: u64) -> Position {
    Position {
        latitude,
        longitude,
        accuracy: Some(5.0),
        altitude: None,
        timestamp,
    }
}

/// San Francisco, fresh.
pub fn sample_position() -> Position {
    position(37.7749, -122.4194, 1_700_000_000_000)
}

/// Somewhere a while ago.
pub fn cached_position() -> Position {
    position(40.7128, -74.0060, 1_600_000_000_000)
}

pub fn place(
    street: &str,
    locality: &str,
    administrative_area: &str,
    postal_code: &str,
    country: &str,
) -> PlaceCandidate {
    let field = |value: &str| Some(value.to_owned());
    PlaceCandidate {
        street: field(street),
        locality: field(locality),
        administrative_area: field(administrative_area),
        postal_code: field(postal_code),
        country: field(country),
    }
}
