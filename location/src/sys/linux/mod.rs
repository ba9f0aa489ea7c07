//! Linux location implementation using GeoClue2 D-Bus service.

use std::pin::pin;
use std::time::Duration;

use futures::{Stream, StreamExt};
use log::debug;
use zbus::{Connection, Message, Proxy};
use zbus::zvariant::{OwnedObjectPath, OwnedValue, Value};

use crate::{LocationAccuracy, LocationError, LocationResult, Position};

const GEOCLUE_BUS: &str = "org.freedesktop.GeoClue2";
const MANAGER_PATH: &str = "/org/freedesktop/GeoClue2/Manager";
const MANAGER_IFACE: &str = "org.freedesktop.GeoClue2.Manager";
const CLIENT_IFACE: &str = "org.freedesktop.GeoClue2.Client";
const LOCATION_IFACE: &str = "org.freedesktop.GeoClue2.Location";
const PROPERTIES_IFACE: &str = "org.freedesktop.DBus.Properties";
const DESKTOP_ID: &str = "geokit";

fn bus_error(context: &str, err: &zbus::Error) -> LocationError {
    LocationError::Provider(format!("{context}: {err}"))
}

/// GeoClue accuracy levels (`GClueAccuracyLevel`).
const fn accuracy_level(accuracy: LocationAccuracy) -> u32 {
    match accuracy {
        LocationAccuracy::Lowest => 1,
        LocationAccuracy::Low => 4,
        LocationAccuracy::Medium => 5,
        LocationAccuracy::High => 6,
        LocationAccuracy::Best => 8,
    }
}

async fn get_property(
    connection: &Connection,
    path: &str,
    interface: &str,
    property: &str,
) -> LocationResult<OwnedValue> {
    connection
        .call_method(
            Some(GEOCLUE_BUS),
            path,
            Some(PROPERTIES_IFACE),
            "Get",
            &(interface, property),
        )
        .await
        .map_err(|e| bus_error(&format!("Failed to get {property}"), &e))?
        .body()
        .deserialize()
        .map_err(|e| bus_error(&format!("Failed to parse {property}"), &e))
}

async fn get_f64(connection: &Connection, path: &str, property: &str) -> LocationResult<f64> {
    get_property(connection, path, LOCATION_IFACE, property)
        .await?
        .downcast_ref::<f64>()
        .map_err(|e| LocationError::Provider(format!("{property} is not a double: {e}")))
}

async fn call_client(connection: &Connection, client: &str, method: &str) -> LocationResult<()> {
    connection
        .call_method(Some(GEOCLUE_BUS), client, Some(CLIENT_IFACE), method, &())
        .await
        .map_err(|e| bus_error(&format!("GeoClue client {method} failed"), &e))?;
    Ok(())
}

async fn set_client_property(
    connection: &Connection,
    client: &str,
    property: &str,
    value: Value<'_>,
) -> LocationResult<()> {
    connection
        .call_method(
            Some(GEOCLUE_BUS),
            client,
            Some(PROPERTIES_IFACE),
            "Set",
            &(CLIENT_IFACE, property, value),
        )
        .await
        .map_err(|e| bus_error(&format!("Failed to set {property}"), &e))?;
    Ok(())
}

pub(crate) async fn service_enabled() -> LocationResult<bool> {
    let Ok(connection) = Connection::system().await else {
        debug!("system bus unavailable, treating location services as disabled");
        return Ok(false);
    };

    // A missing GeoClue2 service means location is switched off on this host
    match get_property(
        &connection,
        MANAGER_PATH,
        MANAGER_IFACE,
        "AvailableAccuracyLevel",
    )
    .await
    {
        Ok(level) => Ok(level.downcast_ref::<u32>().is_ok_and(|level| level > 0)),
        Err(err) => {
            debug!("GeoClue2 not reachable: {err}");
            Ok(false)
        }
    }
}

/// `timeout` is not forwarded: GeoClue2 has no per-request bound, and the
/// gateway drops this future when its own timer fires. Dropping the
/// connection makes GeoClue2 discard the client.
pub(crate) async fn current_position(
    accuracy: LocationAccuracy,
    _timeout: Duration,
) -> LocationResult<Position> {
    let connection = Connection::system()
        .await
        .map_err(|e| bus_error("D-Bus connection failed", &e))?;

    // Call GeoClue2 Manager to get a client
    let (client,): (OwnedObjectPath,) = connection
        .call_method(
            Some(GEOCLUE_BUS),
            MANAGER_PATH,
            Some(MANAGER_IFACE),
            "GetClient",
            &(),
        )
        .await
        .map_err(|e| bus_error("GeoClue2 not available", &e))?
        .body()
        .deserialize()
        .map_err(|e| bus_error("Failed to parse client path", &e))?;
    let client = client.as_str();

    // DesktopId is required by GeoClue2 before Start
    set_client_property(&connection, client, "DesktopId", Value::from(DESKTOP_ID)).await?;
    set_client_property(
        &connection,
        client,
        "RequestedAccuracyLevel",
        Value::from(accuracy_level(accuracy)),
    )
    .await?;

    // Subscribe before Start so the first LocationUpdated cannot be missed
    let proxy = Proxy::new(&connection, GEOCLUE_BUS, client, CLIENT_IFACE)
        .await
        .map_err(|e| bus_error("Failed to create client proxy", &e))?;
    let updates = proxy
        .receive_signal("LocationUpdated")
        .await
        .map_err(|e| bus_error("Failed to subscribe to LocationUpdated", &e))?;

    call_client(&connection, client, "Start").await?;

    let updates = pin!(updates.map(|msg| updated_location(&msg)));
    let fix = match first_fix_path(updates).await {
        Ok(location) => read_fix(&connection, location.as_str()).await,
        Err(err) => Err(err),
    };

    if let Err(err) = call_client(&connection, client, "Stop").await {
        debug!("{err}");
    }
    fix
}

/// The `new` path of a `LocationUpdated(old, new)` signal.
fn updated_location(msg: &Message) -> LocationResult<OwnedObjectPath> {
    let (_old, new): (OwnedObjectPath, OwnedObjectPath) = msg
        .body()
        .deserialize()
        .map_err(|e| bus_error("Failed to parse LocationUpdated", &e))?;
    Ok(new)
}

/// Waits for the first update that points at a real location object.
///
/// GeoClue2 uses `/` for "no location yet".
async fn first_fix_path<S>(mut updates: S) -> LocationResult<OwnedObjectPath>
where
    S: Stream<Item = LocationResult<OwnedObjectPath>> + Unpin,
{
    while let Some(update) = updates.next().await {
        let location = update?;
        if location.as_str() != "/" {
            return Ok(location);
        }
        debug!("GeoClue2 update without a location, waiting");
    }
    Err(LocationError::NotAvailable)
}

async fn read_fix(connection: &Connection, path: &str) -> LocationResult<Position> {
    Ok(Position {
        latitude: get_f64(connection, path, "Latitude").await?,
        longitude: get_f64(connection, path, "Longitude").await?,
        accuracy: get_f64(connection, path, "Accuracy").await.ok(),
        altitude: get_f64(connection, path, "Altitude").await.ok(),
        timestamp: crate::timestamp_now(),
    })
}
