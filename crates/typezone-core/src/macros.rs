/// Declares [`Zone`](crate::Zone) markers along with a module of
/// constructors for each.
///
/// Each row names the generated module, the marker type and the IANA
/// identifier of the zone:
///
/// ```rust
/// typezone_core::zone! {
///     /// Japan Standard Time.
///     pub mod tokyo: Tokyo = "Asia/Tokyo";
///     pub mod seoul: Seoul = "Asia/Seoul";
/// }
///
/// fn main() {
///     let landing: tokyo::Time = tokyo::date(2024, 4, 1, 9, 30, 0, 0).unwrap();
///     assert_eq!(landing.hour(), 9);
///     assert_eq!(seoul::from_moment(landing).hour(), 9);
/// }
/// ```
///
/// A marker that already exists, such as [`Utc`](crate::Utc), only needs the
/// module:
///
/// ```rust
/// use typezone_core::Utc;
///
/// typezone_core::zone!(pub mod utc for Utc);
///
/// fn main() {
///     assert_eq!(utc::unix(0, 0).unwrap().to_string(), "1970-01-01T00:00:00Z");
/// }
/// ```
#[macro_export]
macro_rules! zone {
    ($vis:vis mod $module:ident for $marker:ident) => {
        #[doc = concat!(
            "Constructors for times displayed in the `",
            stringify!($marker),
            "` zone."
        )]
        $vis mod $module {
            #[doc = concat!("A time displayed in the `", stringify!($marker), "` zone.")]
            pub type Time = $crate::Time<super::$marker>;

            /// Returns the current time.
            #[must_use]
            pub fn now() -> Time {
                Time::now()
            }

            /// Returns the instant at which the local clocks show the given
            /// date and time. Out of range components are normalized.
            pub fn date(
                year: i32,
                month: i32,
                day: i32,
                hour: i32,
                minute: i32,
                second: i32,
                nanosecond: i32,
            ) -> ::core::result::Result<Time, $crate::Error> {
                Time::new(year, month, day, hour, minute, second, nanosecond)
            }

            /// Re-tags the instant of `moment` with this zone.
            #[must_use]
            pub fn from_moment(moment: impl $crate::Moment) -> Time {
                Time::from_moment(moment)
            }

            /// Parses `text` with a strftime-style `pattern`. Clock times
            /// without an offset are interpreted in this zone.
            pub fn parse(pattern: &str, text: &str) -> ::core::result::Result<Time, $crate::Error> {
                Time::parse(pattern, text)
            }

            /// Returns the time `seconds` plus `nanoseconds` after the Unix
            /// epoch.
            pub fn unix(
                seconds: i64,
                nanoseconds: i64,
            ) -> ::core::result::Result<Time, $crate::Error> {
                Time::unix(seconds, nanoseconds)
            }

            /// Returns the time `milliseconds` after the Unix epoch.
            pub fn unix_milli(milliseconds: i64) -> ::core::result::Result<Time, $crate::Error> {
                Time::unix_milli(milliseconds)
            }

            /// Returns the time `microseconds` after the Unix epoch.
            pub fn unix_micro(microseconds: i64) -> ::core::result::Result<Time, $crate::Error> {
                Time::unix_micro(microseconds)
            }
        }
    };
    ($(
        $(#[$meta:meta])*
        $vis:vis mod $module:ident : $marker:ident = $name:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $marker;

            impl $crate::Zone for $marker {
                const NAME: &'static str = $name;
            }

            $crate::zone!($vis mod $module for $marker);
        )+
    };
}
