//! Timestamps that carry their display time zone in their type.
//!
//! A [`Time<Z>`](Time) is an instant that is always displayed in the zone
//! `Z`. Times in different zones are different types, so handing an Eastern
//! time to a function that expects a Pacific time is a compile error rather
//! than a bug report. Converting between zones is an explicit, greppable
//! `from_moment` call that never changes the instant.
//!
//! ```rust
//! use typezone::zones::{est, pst, utc};
//!
//! let meeting = est::date(2024, 12, 25, 10, 30, 0, 0).unwrap();
//! let for_remote = pst::from_moment(meeting);
//!
//! assert_eq!(for_remote.format("%-I:%M %p").unwrap(), "7:30 AM");
//! assert_eq!(utc::from_moment(meeting).to_string(), "2024-12-25T15:30:00Z");
//! assert_eq!(meeting, for_remote);
//! ```
//!
//! The zones in [`zones`] cover common cases. Any other IANA zone is one
//! [`zone!`] invocation away.

#![forbid(unsafe_code)]
#![warn(
    clippy::cargo,
    missing_docs,
    // clippy::missing_docs_in_private_items,
    clippy::nursery,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::missing_errors_doc, // TODO clippy::missing_errors_doc
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
)]

pub use typezone_core as core;
pub use typezone_core::{jiff, registry, zone, Error, Moment, Time, Utc, Zone};

/// Command line tools for inspecting and converting times.
#[cfg(feature = "cli")]
pub mod cli;
pub mod zones;
