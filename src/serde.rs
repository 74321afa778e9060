use crate::FixedDecimal;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;
use serde::{self, de::Unexpected};

impl serde::Serialize for FixedDecimal {
    /// Serializes as the conformance string form (`"1.09"`), so serialized
    /// values diff cleanly against reference output.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for FixedDecimal {
    fn deserialize<D>(deserializer: D) -> Result<FixedDecimal, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(FixedDecimalVisitor)
    }
}

struct FixedDecimalVisitor;

impl<'de> serde::de::Visitor<'de> for FixedDecimalVisitor {
    type Value = FixedDecimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a FixedDecimal type representing a fixed-point number")
    }

    fn visit_i64<E>(self, value: i64) -> Result<FixedDecimal, E>
    where
        E: serde::de::Error,
    {
        Ok(FixedDecimal::from_integer(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<FixedDecimal, E>
    where
        E: serde::de::Error,
    {
        match i64::try_from(value) {
            Ok(n) => Ok(FixedDecimal::from_integer(n)),
            Err(_) => Err(E::invalid_value(Unexpected::Unsigned(value), &self)),
        }
    }

    fn visit_f64<E>(self, value: f64) -> Result<FixedDecimal, E>
    where
        E: serde::de::Error,
    {
        FixedDecimal::from_str(&value.to_string())
            .map_err(|_| E::invalid_value(Unexpected::Float(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<FixedDecimal, E>
    where
        E: serde::de::Error,
    {
        FixedDecimal::from_str(value).map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}
