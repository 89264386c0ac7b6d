//! Every instant encodes to the same 12 bytes regardless of the zone it is
//! displayed in: the whole seconds since the Unix epoch as a big-endian `i64`
//! with its sign bit flipped, followed by the non-negative nanoseconds within
//! that second as a big-endian `u32`. Comparing two encodings with `memcmp`
//! orders them the same way the instants are ordered, which makes them
//! suitable as keys in sorted storage.

use std::{borrow::Cow, fmt::Debug};

use jiff::Timestamp;

use crate::{Error, Time, Zone};

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const SIGN_BIT: u64 = 1 << 63;

/// The number of bytes in an encoded instant.
pub const ENCODED_LENGTH: usize = 12;

/// A type that can be encoded into bytes whose `memcmp` order matches the
/// type's own [`Ord`] implementation.
pub trait KeyEncoding: Debug + Send + Sync {
    /// The fixed size of every encoding, or `None` if encodings vary in
    /// length.
    const LENGTH: Option<usize>;

    /// Converts `self` into bytes that sort the same way `self` does.
    fn as_ord_bytes(&self) -> Result<Cow<'_, [u8]>, Error>;
}

/// A [`KeyEncoding`] that can be decoded again.
pub trait Key: KeyEncoding + Clone {
    /// Decodes bytes previously produced by [`KeyEncoding::as_ord_bytes`].
    fn from_ord_bytes(bytes: &[u8]) -> Result<Self, Error>;
}

/// Splits an instant into whole seconds and the nanoseconds after them. The
/// seconds are floored, so the nanoseconds are never negative.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn split(timestamp: Timestamp) -> (i64, u32) {
    let nanos = timestamp.as_nanosecond();
    // Timestamps span far fewer than i64::MAX seconds.
    (
        nanos.div_euclid(NANOS_PER_SECOND) as i64,
        nanos.rem_euclid(NANOS_PER_SECOND) as u32,
    )
}

/// The inverse of [`split`].
pub(crate) fn join(seconds: i64, nanos: u32) -> Result<Timestamp, Error> {
    if i128::from(nanos) >= NANOS_PER_SECOND {
        return Err(Error::OutOfRange(format!(
            "{nanos} nanoseconds is not within a single second"
        )));
    }
    Timestamp::from_nanosecond(i128::from(seconds) * NANOS_PER_SECOND + i128::from(nanos))
        .map_err(|err| Error::out_of_range(&err))
}

fn encode(timestamp: Timestamp) -> [u8; ENCODED_LENGTH] {
    let (seconds, nanos) = split(timestamp);
    let mut bytes = [0; ENCODED_LENGTH];
    let seconds = u64::from_be_bytes(seconds.to_be_bytes()) ^ SIGN_BIT;
    bytes[..8].copy_from_slice(&seconds.to_be_bytes());
    bytes[8..].copy_from_slice(&nanos.to_be_bytes());
    bytes
}

fn decode(bytes: &[u8]) -> Result<Timestamp, Error> {
    if bytes.len() != ENCODED_LENGTH {
        return Err(Error::IncorrectByteLength {
            expected: ENCODED_LENGTH,
            actual: bytes.len(),
        });
    }
    let (seconds, nanos) = bytes.split_at(8);
    let mut seconds_bytes = [0; 8];
    seconds_bytes.copy_from_slice(seconds);
    let mut nanos_bytes = [0; 4];
    nanos_bytes.copy_from_slice(nanos);

    let seconds = i64::from_be_bytes((u64::from_be_bytes(seconds_bytes) ^ SIGN_BIT).to_be_bytes());
    join(seconds, u32::from_be_bytes(nanos_bytes))
}

impl KeyEncoding for Timestamp {
    const LENGTH: Option<usize> = Some(ENCODED_LENGTH);

    fn as_ord_bytes(&self) -> Result<Cow<'_, [u8]>, Error> {
        Ok(Cow::Owned(encode(*self).to_vec()))
    }
}

impl Key for Timestamp {
    fn from_ord_bytes(bytes: &[u8]) -> Result<Self, Error> {
        decode(bytes)
    }
}

impl<Z> KeyEncoding for Time<Z>
where
    Z: Zone,
{
    const LENGTH: Option<usize> = Some(ENCODED_LENGTH);

    fn as_ord_bytes(&self) -> Result<Cow<'_, [u8]>, Error> {
        Ok(Cow::Owned(self.to_binary().to_vec()))
    }
}

/// The zone is not part of the encoding, so bytes produced by a `Time` in
/// one zone decode into the same instant in any other zone.
impl<Z> Key for Time<Z>
where
    Z: Zone,
{
    fn from_ord_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_binary(bytes)
    }
}

impl<Z> Time<Z>
where
    Z: Zone,
{
    /// Encodes the instant into its 12-byte sortable form.
    #[must_use]
    pub fn to_binary(&self) -> [u8; ENCODED_LENGTH] {
        encode(self.to_timestamp())
    }

    /// Decodes an instant produced by [`Time::to_binary`] and displays it in
    /// `Z`.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, Error> {
        decode(bytes).map(Self::from)
    }
}
