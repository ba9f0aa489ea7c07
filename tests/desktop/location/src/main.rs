//! Desktop test binary for geokit-location.
//!
//! Run with: `RUST_LOG=debug cargo run -p geokit-location-demo`

use geokit_location::{LocationGateway, PermissionOutcome, SystemProvider};

#[tokio::main]
async fn main() {
    env_logger::init();
    println!("=== Geokit Location Test ===\n");

    let gateway = LocationGateway::new(SystemProvider::new());

    println!(
        "Location services enabled: {}",
        gateway.is_location_service_enabled().await
    );
    println!(
        "Permission status: {:?}\n",
        gateway.get_permission_status().await
    );

    println!("Negotiating location permission...");
    match gateway.negotiate_permission().await {
        PermissionOutcome::Granted => println!("Permission granted\n"),
        PermissionOutcome::DeniedForever { platform } => {
            println!("Permission permanently denied on {platform:?}; change it in settings");
            return;
        }
        other => {
            println!("No permission: {other:?}");
            return;
        }
    }

    println!("Getting current location...");
    match gateway.current_position().await {
        Ok(position) => {
            println!("✓ Location retrieved successfully!");
            println!("  Latitude:  {:.6}°", position.latitude);
            println!("  Longitude: {:.6}°", position.longitude);
            if let Some(alt) = position.altitude {
                println!("  Altitude:  {alt:.1}m");
            }
            if let Some(acc) = position.accuracy {
                println!("  Accuracy:  {acc:.1}m");
            }
            println!("  Timestamp: {}", position.timestamp);

            let to_greenwich =
                gateway.distance_between(position.latitude, position.longitude, 51.4769, 0.0);
            println!("  Distance to Greenwich: {:.1} km", to_greenwich / 1000.0);

            match gateway.get_address(position.latitude, position.longitude).await {
                Some(address) => println!("  Address:   {address}"),
                None => println!("  Address:   (none)"),
            }

            let csv = format!(
                "latitude,longitude,timestamp\n{:.6},{:.6},{}",
                position.latitude, position.longitude, position.timestamp
            );
            geokit_clipboard::copy_text_with_label(&csv, "Current position");
            println!("\nCopied CSV to clipboard");
        }
        Err(e) => {
            println!("✗ Failed to get location: {e}");
        }
    }
}
