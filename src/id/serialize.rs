//! Serde support for [`Identifier`].
//!
//! Human-readable formats (JSON, TOML) carry the decimal string, since 128-bit
//! numbers do not survive most JSON parsers. Binary formats carry the 16-byte
//! little-endian buffer, the same bytes the storage engine keys on.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::id::bytes::{self, ENCODED_LEN};
use crate::id::identifier::Identifier;

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.to_le_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(IdentifierVisitor)
        } else {
            deserializer.deserialize_bytes(IdentifierVisitor)
        }
    }
}

struct IdentifierVisitor;

impl<'de> Visitor<'de> for IdentifierVisitor {
    type Value = Identifier;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal identifier string or 16 little-endian bytes")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Identifier, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Identifier, E> {
        Ok(Identifier::new(0, v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Identifier, E> {
        Ok(Identifier::from_u128(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Identifier, E> {
        bytes::decode(Some(v)).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Identifier, A::Error> {
        let mut buf = [0u8; ENCODED_LEN];
        for (i, slot) in buf.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(<A::Error as de::Error>::invalid_length(ENCODED_LEN + 1, &self));
        }
        Ok(Identifier::from_le_bytes(buf))
    }
}
