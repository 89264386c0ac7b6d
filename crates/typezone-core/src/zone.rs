use jiff::tz::TimeZone;

use crate::{registry, Error};

/// A marker type that names a time zone.
///
/// Implementors are never instantiated in any meaningful way; the type itself
/// is the assertion "this value is displayed in zone `NAME`". Because each
/// zone is a distinct type, a [`Time<A>`](crate::Time) can never be passed
/// where a `Time<B>` is expected.
///
/// ```rust
/// use typezone_core::Zone;
///
/// /// Tokyo, which has not observed daylight saving time since 1951.
/// pub enum Tokyo {}
///
/// impl Zone for Tokyo {
///     const NAME: &'static str = "Asia/Tokyo";
/// }
///
/// assert_eq!(Tokyo::time_zone().iana_name(), Some("Asia/Tokyo"));
/// ```
pub trait Zone: Send + Sync + 'static {
    /// The IANA time zone identifier, such as `America/New_York`.
    const NAME: &'static str;

    /// Resolves this zone through the process-wide [`registry`].
    fn resolve() -> Result<TimeZone, Error> {
        registry::resolve(Self::NAME)
    }

    /// Returns the resolved zone.
    ///
    /// # Panics
    ///
    /// Panics if the zone is missing from the time zone database. There is
    /// no zone that could sensibly be used instead, so this is treated as a
    /// fatal configuration error. Call [`Zone::resolve`] or
    /// [`registry::preload`] during startup to surface the problem early.
    #[must_use]
    fn time_zone() -> TimeZone {
        match Self::resolve() {
            Ok(zone) => zone,
            Err(err) => panic!("time zone database is unusable: {err}"),
        }
    }
}

/// Coordinated Universal Time. Resolving this zone never consults the time
/// zone database and cannot fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Utc;

impl Zone for Utc {
    const NAME: &'static str = "UTC";

    fn resolve() -> Result<TimeZone, Error> {
        Ok(TimeZone::UTC)
    }

    fn time_zone() -> TimeZone {
        TimeZone::UTC
    }
}
