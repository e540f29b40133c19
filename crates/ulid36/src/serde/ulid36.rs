use crate::Ulid36;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl Serialize for Ulid36 {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Ulid36 {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Ulid36Visitor;

        impl de::Visitor<'_> for Ulid36Visitor {
            type Value = Ulid36;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a 25-character base-36 identifier")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(de::Error::custom)
            }
        }

        d.deserialize_str(Ulid36Visitor)
    }
}

/// (De)serializes a [`Ulid36`] as its decoded timestamp only.
///
/// Deserializing rebuilds an identifier with an all-`0` random suffix, so
/// this is meant for rows that only care about the time component.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use ulid36::{Ulid36, as_timestamp};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "as_timestamp")]
///     created: Ulid36,
/// }
/// ```
pub mod as_timestamp {
    use super::*;
    use crate::RANDOM_LEN;

    pub fn serialize<S>(id: &Ulid36, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.timestamp().serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Ulid36, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ts = u64::deserialize(d)?;
        Ulid36::from_parts(ts, &[b'0'; RANDOM_LEN]).map_err(de::Error::custom)
    }
}
