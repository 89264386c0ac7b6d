use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::{key, Time, Zone};

/// Human-readable formats receive RFC 3339 text in `Z`, such as
/// `"2024-01-15T07:00:00-05:00"`. Compact formats receive the whole seconds
/// since the Unix epoch and the nanoseconds within that second.
///
/// Neither form records which zone the value was displayed in. Deserializing
/// recovers the instant and displays it in the receiving type's zone.
impl<Z> Serialize for Time<Z>
where
    Z: Zone,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            key::split(self.to_timestamp()).serialize(serializer)
        }
    }
}

impl<'de, Z> Deserialize<'de> for Time<Z>
where
    Z: Zone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(D::Error::custom)
        } else {
            let (seconds, nanos) = <(i64, u32)>::deserialize(deserializer)?;
            key::join(seconds, nanos)
                .map(Self::from)
                .map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use crate::{Time, Utc};

    crate::zone! {
        pub mod eastern: Eastern = "America/New_York";
        pub mod singapore: Singapore = "Asia/Singapore";
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Meeting {
        title: String,
        starts: eastern::Time,
    }

    #[test]
    fn json_uses_rfc3339_in_the_zone() {
        let time = eastern::date(2024, 1, 15, 7, 0, 0, 0).unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, r#""2024-01-15T07:00:00-05:00""#);

        let meeting = Meeting {
            title: String::from("standup"),
            starts: time,
        };
        let json = serde_json::to_string(&meeting).unwrap();
        assert_eq!(
            json,
            r#"{"title":"standup","starts":"2024-01-15T07:00:00-05:00"}"#
        );
        assert_eq!(serde_json::from_str::<Meeting>(&json).unwrap(), meeting);
    }

    #[test]
    fn json_round_trips_years_before_zero() {
        let earliest = Time::<Utc>::from(jiff::Timestamp::MIN);
        let json = serde_json::to_string(&earliest).unwrap();
        assert_eq!(json, r#""-009999-01-02T01:59:59Z""#);
        assert_eq!(serde_json::from_str::<Time<Utc>>(&json).unwrap(), earliest);

        let before_year_zero = Time::<Utc>::new(-1, 6, 1, 0, 0, 0, 0).unwrap();
        let json = serde_json::to_string(&before_year_zero).unwrap();
        assert_eq!(json, r#""-000001-06-01T00:00:00Z""#);
        assert_eq!(
            serde_json::from_str::<Time<Utc>>(&json).unwrap(),
            before_year_zero
        );

        let saturated = eastern::unix(0, 0).unwrap() - jiff::SignedDuration::MAX;
        let json = serde_json::to_string(&saturated).unwrap();
        assert_eq!(serde_json::from_str::<eastern::Time>(&json).unwrap(), saturated);
    }

    #[test]
    fn json_from_another_zone_keeps_the_instant() {
        let decoded: singapore::Time =
            serde_json::from_str(r#""2024-01-15T07:00:00-05:00""#).unwrap();
        assert_eq!(decoded.as_second(), 1_705_320_000);
        assert_eq!(decoded.to_string(), "2024-01-15T20:00:00+08:00");

        let universal: Time<Utc> = serde_json::from_str(r#""2024-01-15T12:00:00.5Z""#).unwrap();
        assert_eq!(universal.to_string(), "2024-01-15T12:00:00.500Z");
    }

    #[test]
    fn json_rejects_garbage() {
        let err = serde_json::from_str::<Time<Utc>>(r#""invalid-time-string""#).unwrap_err();
        assert!(err.to_string().contains("invalid time text"));
    }

    #[test]
    fn compact_round_trip_changes_only_the_zone() {
        let time = eastern::unix(-1, 250_000_000).unwrap();
        let bytes = pot::to_vec(&time).unwrap();
        let decoded: singapore::Time = pot::from_slice(&bytes).unwrap();
        assert_eq!(decoded, time);
        assert_eq!(decoded.as_nanosecond(), -750_000_000);
        assert_eq!(decoded.hour(), 7);
    }
}
