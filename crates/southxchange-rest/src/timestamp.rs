//! Wire timestamp codec
//!
//! The exchange emits naive timestamps with no timezone suffix and a
//! variable-width fractional part, e.g. `2021-03-04T10:15:30.123456789`.
//! Round-tripping preserves the instant; the printed fractional width may
//! differ from the input.

use chrono::NaiveDateTime;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fixed layout: date, `T` separator, time, optional fraction up to 9 digits
const LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// An instant in the exchange's wire format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub NaiveDateTime);

impl Timestamp {
    /// Unwrap into the underlying [`NaiveDateTime`]
    pub fn into_inner(self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(LAYOUT))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, LAYOUT).map(Timestamp)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", s, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_nanosecond_instant() {
        let original = "2021-03-04T10:15:30.123456789";
        let decoded: Timestamp = original.parse().unwrap();
        let encoded = decoded.to_string();
        let redecoded: Timestamp = encoded.parse().unwrap();
        assert_eq!(decoded, redecoded);
        assert_eq!(encoded, original);
    }

    #[test]
    fn test_fraction_is_optional() {
        let decoded: Timestamp = "2021-03-04T10:15:30".parse().unwrap();
        assert_eq!(decoded.to_string(), "2021-03-04T10:15:30");
    }

    #[test]
    fn test_missing_separator_is_rejected() {
        assert!("2021-03-04 10:15:30".parse::<Timestamp>().is_err());
        assert!("not a timestamp".parse::<Timestamp>().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let json = "\"2021-03-04T10:15:30.5\"";
        let decoded: Timestamp = serde_json::from_str(json).unwrap();
        let reencoded = serde_json::to_string(&decoded).unwrap();
        let redecoded: Timestamp = serde_json::from_str(&reencoded).unwrap();
        assert_eq!(decoded, redecoded);
    }

    #[test]
    fn test_decode_error_carries_offending_string() {
        let err = serde_json::from_str::<Timestamp>("\"03/04/2021\"").unwrap_err();
        assert!(err.to_string().contains("03/04/2021"));
    }
}
