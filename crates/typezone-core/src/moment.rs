use jiff::{Timestamp, Zoned};

use crate::{Time, Zone};

/// Anything that can report the absolute instant it represents.
///
/// Conversions, comparisons and durations accept any `Moment`, so a
/// [`Time`] in one zone can be compared against a `Time` in another zone, or
/// against a plain [`jiff::Timestamp`], without first normalizing either
/// side.
pub trait Moment {
    /// Returns the zone-neutral instant.
    fn timestamp(&self) -> Timestamp;
}

impl Moment for Timestamp {
    fn timestamp(&self) -> Timestamp {
        *self
    }
}

impl Moment for Zoned {
    fn timestamp(&self) -> Timestamp {
        Zoned::timestamp(self)
    }
}

impl<Z> Moment for Time<Z>
where
    Z: Zone,
{
    fn timestamp(&self) -> Timestamp {
        self.to_timestamp()
    }
}

impl<M> Moment for &M
where
    M: Moment + ?Sized,
{
    fn timestamp(&self) -> Timestamp {
        M::timestamp(*self)
    }
}
