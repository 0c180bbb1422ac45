//! Opaque record identifiers.

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Error returned when parsing an invalid record identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record id: {reason}")]
pub struct InvalidId {
    reason: &'static str,
}

const ID_BYTES: usize = 12;
const ID_CHARS: usize = ID_BYTES * 2;

fn parse_hex(s: &str) -> Result<[u8; ID_BYTES], InvalidId> {
    if s.len() != ID_CHARS {
        return Err(InvalidId {
            reason: "must be exactly 24 characters",
        });
    }

    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(InvalidId {
            reason: "must be hexadecimal digits",
        });
    }

    let mut bytes = [0u8; ID_BYTES];
    for (i, byte) in bytes.iter_mut().enumerate() {
        // In bounds and on char boundaries: the input is 24 ASCII hex digits.
        *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).map_err(|_| InvalidId {
            reason: "must be hexadecimal digits",
        })?;
    }

    Ok(bytes)
}

fn write_hex(bytes: &[u8; ID_BYTES], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in bytes {
        write!(f, "{b:02x}")?;
    }
    Ok(())
}

fn random_bytes() -> [u8; ID_BYTES] {
    let mut bytes = [0u8; ID_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}

/// Opaque identifier of a stored location record.
///
/// Ids are 12 bytes rendered as 24 hex characters. This type guarantees
/// that any `LocationId` value is well-formed by construction.
///
/// # Examples
///
/// ```
/// use trip_server::domain::LocationId;
///
/// let id = LocationId::parse("56a2f3b09d1c4e00a7b81234").unwrap();
/// assert_eq!(id.to_string(), "56a2f3b09d1c4e00a7b81234");
///
/// // Wrong length is rejected
/// assert!(LocationId::parse("56a2f3").is_err());
///
/// // Non-hex characters are rejected
/// assert!(LocationId::parse("zza2f3b09d1c4e00a7b81234").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId([u8; ID_BYTES]);

impl LocationId {
    /// Parse an id from its 24-character hex form.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        parse_hex(s).map(Self)
    }

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(random_bytes())
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(&self.0, f)
    }
}

impl fmt::Debug for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationId(")?;
        write_hex(&self.0, f)?;
        write!(f, ")")
    }
}

impl Serialize for LocationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

/// Opaque identifier of a stored trip record.
///
/// Same shape as [`LocationId`]; a separate type so the two id spaces
/// cannot be mixed up.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TripId([u8; ID_BYTES]);

impl TripId {
    /// Parse an id from its 24-character hex form.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        parse_hex(s).map(Self)
    }

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(random_bytes())
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(&self.0, f)
    }
}

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId(")?;
        write_hex(&self.0, f)?;
        write!(f, ")")
    }
}

impl Serialize for TripId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TripId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn valid_id_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[0-9a-f]{24}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then Display returns the original
        #[test]
        fn roundtrip(s in valid_id_string()) {
            let id = LocationId::parse(&s).unwrap();
            prop_assert_eq!(id.to_string(), s);
        }

        /// Any valid hex id can be parsed
        #[test]
        fn valid_always_parses(s in valid_id_string()) {
            prop_assert!(TripId::parse(&s).is_ok());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9a-f]{0,23}|[0-9a-f]{25,40}") {
            prop_assert!(LocationId::parse(&s).is_err());
        }

        /// Strings with non-hex characters are rejected
        #[test]
        fn non_hex_rejected(s in "[g-z]{24}") {
            prop_assert!(LocationId::parse(&s).is_err());
        }
    }
}
