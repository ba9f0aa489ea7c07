//! # Geokit
//!
//! A small, cross-platform gateway to device location capabilities.
//!
//! Geokit mediates every location request between application code and the
//! platform location provider: it negotiates permission, fetches current or
//! last-known positions under a bounded timeout, reverse geocodes coordinates
//! into display addresses, and computes great-circle distances. Expected
//! failures (denied permission, disabled services, timeouts, empty geocode
//! results) come back as "no result" values instead of errors.
//!
//! ## Features
//!
//! - `location`: The [`location::LocationGateway`] and provider trait.
//! - `permission`: Permission status types and system permission queries.
//! - `clipboard`: Best-effort labelled text export to the system clipboard.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! geokit = { version = "0.1", features = ["location"] }
//! ```
//!
//! ```rust,ignore
//! use geokit::location::{LocationGateway, SystemProvider};
//!
//! async fn print_coords() {
//!     let gateway = LocationGateway::new(SystemProvider::new());
//!     if let Some(pos) = gateway.get_current_position().await {
//!         println!("Latitude: {}, Longitude: {}", pos.latitude, pos.longitude);
//!     }
//! }
//! ```

#[cfg(feature = "clipboard")]
pub use geokit_clipboard as clipboard;

#[cfg(feature = "location")]
pub use geokit_location as location;

#[cfg(feature = "permission")]
pub use geokit_permission as permission;
