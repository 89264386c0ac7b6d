//! The process-wide cache of resolved time zones.

use std::collections::HashMap;

use jiff::tz::TimeZone;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::Error;

static ZONES: Lazy<RwLock<HashMap<String, TimeZone>>> = Lazy::new(RwLock::default);

/// Returns the time zone named `name`, looking it up in the time zone
/// database the first time it is requested and returning the cached handle
/// afterwards.
///
/// `UTC` is answered without consulting the database.
pub fn resolve(name: &str) -> Result<TimeZone, Error> {
    if name == "UTC" {
        return Ok(TimeZone::UTC);
    }

    if let Some(zone) = ZONES.read().get(name) {
        return Ok(zone.clone());
    }

    // No lock is held across the database read.
    match TimeZone::get(name) {
        Ok(zone) => {
            log::debug!("resolved time zone {name}");
            Ok(cache(name, zone))
        }
        Err(err) => {
            log::error!("unable to resolve time zone {name}: {err}");
            Err(Error::ZoneNotFound {
                name: name.to_string(),
                reason: err.to_string(),
            })
        }
    }
}

/// Stores `zone` under `name` unless another thread got there first, and
/// returns the handle that ends up cached.
fn cache(name: &str, zone: TimeZone) -> TimeZone {
    ZONES
        .write()
        .entry(name.to_string())
        .or_insert(zone)
        .clone()
}

/// Resolves every zone in `names`, stopping at the first failure.
///
/// Applications should call this while starting up so that a missing or
/// corrupt time zone database aborts initialization instead of surfacing the
/// first time a value is displayed.
pub fn preload<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<(), Error> {
    for name in names {
        resolve(name)?;
    }
    Ok(())
}

/// Returns true if `name` has already been resolved by this process.
#[must_use]
pub fn is_cached(name: &str) -> bool {
    name == "UTC" || ZONES.read().contains_key(name)
}

#[test]
fn resolves_once_and_caches() {
    let first = resolve("Asia/Tokyo").unwrap();
    assert!(is_cached("Asia/Tokyo"));
    let second = resolve("Asia/Tokyo").unwrap();
    assert_eq!(first.iana_name(), Some("Asia/Tokyo"));
    assert_eq!(first.iana_name(), second.iana_name());
}

#[test]
fn utc_needs_no_lookup() {
    let utc = resolve("UTC").unwrap();
    assert_eq!(
        utc.to_offset(jiff::Timestamp::UNIX_EPOCH),
        jiff::tz::Offset::UTC
    );
}

#[test]
fn unknown_zone_is_reported() {
    match resolve("Mars/Olympus_Mons") {
        Err(Error::ZoneNotFound { name, .. }) => assert_eq!(name, "Mars/Olympus_Mons"),
        other => unreachable!("expected a missing zone, got {other:?}"),
    }
    assert!(!is_cached("Mars/Olympus_Mons"));
}

#[test]
fn preload_stops_at_first_failure() {
    assert!(preload(["Europe/Berlin", "Australia/Sydney"]).is_ok());
    assert!(is_cached("Australia/Sydney"));
    assert!(matches!(
        preload(["Europe/Madrid", "Nowhere/Special"]),
        Err(Error::ZoneNotFound { .. })
    ));
}

#[test]
fn concurrent_resolution_agrees() {
    let handles = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                resolve("America/Phoenix").map(|zone| zone.iana_name().map(String::from))
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        assert_eq!(
            handle.join().unwrap().unwrap().as_deref(),
            Some("America/Phoenix")
        );
    }
}

#[test]
fn first_cached_handle_wins() {
    let first = TimeZone::fixed(jiff::tz::offset(1));
    let cached = cache("Typezone/Racing", first);
    assert_eq!(cached.to_offset(jiff::Timestamp::UNIX_EPOCH), jiff::tz::offset(1));

    let cached = cache("Typezone/Racing", TimeZone::UTC);
    assert_eq!(cached.to_offset(jiff::Timestamp::UNIX_EPOCH), jiff::tz::offset(1));
    assert_eq!(
        resolve("Typezone/Racing")
            .unwrap()
            .to_offset(jiff::Timestamp::UNIX_EPOCH),
        jiff::tz::offset(1)
    );
}
