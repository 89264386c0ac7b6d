//! Ready-made zones.
//!
//! Each module is a set of constructors bound to one zone, so a function that
//! takes an [`est::Time`] cannot be handed a [`pst::Time`] by mistake:
//!
//! ```rust
//! use typezone::zones::{est, pst};
//!
//! fn open_office(at: est::Time) -> String {
//!     at.format("%H:%M %Z").unwrap()
//! }
//!
//! let standup = pst::date(2024, 12, 25, 6, 0, 0, 0).unwrap();
//! // open_office(standup) does not compile; the conversion must be explicit.
//! assert_eq!(open_office(est::from_moment(standup)), "09:00 EST");
//! ```

use typezone_core::{registry, Error};
pub use typezone_core::Utc;

typezone_core::zone!(pub mod utc for Utc);

macro_rules! zones {
    ($(
        $(#[$meta:meta])*
        $module:ident: $marker:ident = $name:literal;
    )+) => {
        typezone_core::zone! {
            $(
                $(#[$meta])*
                pub mod $module: $marker = $name;
            )+
        }

        /// Every zone in this module as `(module name, IANA identifier)`,
        /// starting with UTC.
        pub const TABLE: &[(&str, &str)] = &[
            ("utc", "UTC"),
            $((stringify!($module), $name),)+
        ];
    };
}

zones! {
    /// Eastern Time, observing Eastern Standard Time (EST) and Eastern
    /// Daylight Time (EDT).
    est: Eastern = "America/New_York";
    /// Pacific Time, observing Pacific Standard Time (PST) and Pacific
    /// Daylight Time (PDT).
    pst: Pacific = "America/Los_Angeles";
    /// Central Time, observing Central Standard Time (CST) and Central
    /// Daylight Time (CDT).
    ct: Central = "America/Chicago";
    /// China Standard Time.
    cst: China = "Asia/Shanghai";
    /// Central European Time, observing CET and CEST.
    cet: CentralEuropean = "Europe/Paris";
    /// Brasília Time.
    brt: Brasilia = "America/Sao_Paulo";
    /// Hong Kong Time.
    hkt: HongKong = "Asia/Hong_Kong";
    /// Singapore Time.
    sgt: Singapore = "Asia/Singapore";
}

/// Returns an iterator over the IANA identifier of every zone in this module.
pub fn all() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(_, name)| *name)
}

/// Looks up the IANA identifier of a zone in this module, by module name
/// (`"est"`, case-insensitive) or by IANA identifier (`"America/New_York"`).
#[must_use]
pub fn by_name(name: &str) -> Option<&'static str> {
    TABLE
        .iter()
        .find(|(module, iana)| module.eq_ignore_ascii_case(name) || *iana == name)
        .map(|(_, iana)| *iana)
}

/// Resolves every zone in this module, failing on the first one that is
/// missing from the time zone database.
///
/// Applications call this during startup so that a broken time zone
/// database stops initialization instead of panicking later.
pub fn verify_all() -> Result<(), Error> {
    registry::preload(all())
}

#[cfg(test)]
mod tests {
    use typezone_core::Zone;

    use super::*;

    #[test]
    fn table_matches_markers() {
        assert_eq!(TABLE.len(), 9);
        assert_eq!(by_name("est"), Some(Eastern::NAME));
        assert_eq!(by_name("PST"), Some(Pacific::NAME));
        assert_eq!(by_name("ct"), Some(Central::NAME));
        assert_eq!(by_name("cst"), Some(China::NAME));
        assert_eq!(by_name("cet"), Some(CentralEuropean::NAME));
        assert_eq!(by_name("brt"), Some(Brasilia::NAME));
        assert_eq!(by_name("hkt"), Some(HongKong::NAME));
        assert_eq!(by_name("sgt"), Some(Singapore::NAME));
        assert_eq!(by_name("utc"), Some(Utc::NAME));
        assert_eq!(by_name("Asia/Hong_Kong"), Some("Asia/Hong_Kong"));
        assert_eq!(by_name("asia/hong_kong"), None);
        assert_eq!(by_name("mst"), None);
    }

    #[test]
    fn every_zone_resolves() {
        verify_all().unwrap();
        for name in all() {
            assert!(registry::is_cached(name), "{name}");
        }
    }
}
