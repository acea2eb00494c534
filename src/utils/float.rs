//! Serde helpers for ratios that may not be finite.
//!
//! JSON has no infinity or NaN and serde_json writes them as `null`, which
//! an `f64` field refuses to read back. Fields using
//! `#[serde(with = "crate::utils::float")]` write finite values as numbers
//! and the others as the strings `"inf"`, `"-inf"` and `"NaN"`.
//! A `null` left by an older report reads back as NaN.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde::Serializer;

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Option::<Repr>::deserialize(deserializer)? {
        None => Ok(f64::NAN),
        Some(Repr::Number(value)) => Ok(value),
        Some(Repr::Text(text)) => match text.as_str() {
            "inf" => Ok(f64::INFINITY),
            "-inf" => Ok(f64::NEG_INFINITY),
            "NaN" => Ok(f64::NAN),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &"a number, \"inf\", \"-inf\" or \"NaN\"",
            )),
        },
    }
}
