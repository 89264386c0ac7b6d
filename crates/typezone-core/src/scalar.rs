//! Adapters for exchanging times with database drivers.
//!
//! Drivers describe column values with [`Value`]. A [`Time`] is written as a
//! plain [`Value::Timestamp`], so any consumer of jiff's representation works
//! unmodified, and can be scanned back from a timestamp, a zoned timestamp or
//! `NULL`.

use jiff::{Timestamp, Zoned};

use crate::{Error, Time, Zone};

/// A scalar value exchanged with a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `NULL`.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// Text.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// An instant without a zone.
    Timestamp(Timestamp),
    /// An instant with the zone it is displayed in.
    Zoned(Zoned),
}

impl Value {
    /// Returns a short name for the kind of value, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Timestamp(_) => "timestamp",
            Self::Zoned(_) => "zoned timestamp",
        }
    }
}

/// Converts a value into a driver [`Value`].
pub trait ToValue {
    /// Returns the driver representation of `self`.
    fn to_value(&self) -> Value;
}

/// Overwrites a value with one read from a driver.
pub trait Scan {
    /// Replaces `self` with the contents of `value`. On error, `self` is left
    /// unchanged.
    fn scan(&mut self, value: &Value) -> Result<(), Error>;
}

impl<Z> ToValue for Time<Z>
where
    Z: Zone,
{
    fn to_value(&self) -> Value {
        Value::Timestamp(self.to_timestamp())
    }
}

impl<Z> ToValue for Option<Time<Z>>
where
    Z: Zone,
{
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

/// `NULL` resets the time to the zero instant.
impl<Z> Scan for Time<Z>
where
    Z: Zone,
{
    fn scan(&mut self, value: &Value) -> Result<(), Error> {
        *self = match value {
            Value::Null => Self::ZERO,
            Value::Timestamp(timestamp) => Self::from(*timestamp),
            Value::Zoned(zoned) => Self::from(zoned),
            other => return Err(Error::UnsupportedType(other.type_name())),
        };
        Ok(())
    }
}

impl<Z> Scan for Option<Time<Z>>
where
    Z: Zone,
{
    fn scan(&mut self, value: &Value) -> Result<(), Error> {
        if matches!(value, Value::Null) {
            *self = None;
        } else {
            let mut time = Time::ZERO;
            time.scan(value)?;
            *self = Some(time);
        }
        Ok(())
    }
}
