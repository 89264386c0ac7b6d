//! Core types for typezone: timestamps whose display time zone is part of
//! their type.
//!
//! A [`Time<Z>`](Time) stores a single absolute instant. The type parameter
//! `Z` is a [`Zone`] marker that names the time zone used whenever the value
//! is displayed or broken into calendar components. Two `Time`s with
//! different zones are different types, so moving a value from one zone to
//! another always requires an explicit [`Time::from_moment`] call.
//!
//! ```rust
//! use typezone_core::{Time, Utc, Zone};
//!
//! enum Eastern {}
//!
//! impl Zone for Eastern {
//!     const NAME: &'static str = "America/New_York";
//! }
//!
//! let noon = Time::<Eastern>::new(2024, 1, 15, 12, 0, 0, 0).unwrap();
//! let universal = Time::<Utc>::from_moment(&noon);
//! assert_eq!(universal.to_string(), "2024-01-15T17:00:00Z");
//! assert_eq!(noon, universal);
//! ```

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

mod civil;
mod error;
pub mod key;
mod macros;
mod moment;
pub mod registry;
pub mod scalar;
mod serialization;
mod time;
mod zone;

pub use jiff;

pub use self::{
    error::Error,
    moment::Moment,
    time::Time,
    zone::{Utc, Zone},
};
