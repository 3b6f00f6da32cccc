//! Decoding helpers shared by every record type.
//!
//! The upstream mixes encodings for the same conceptual value: a price can arrive as a
//! JSON number, as a numeric string, or as the sentinel `"-"` when it is withheld. The
//! [`lenient`] deserializer folds all of these into one `Option<T>`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::core::query::PAGINATION_KEY;
use crate::core::{JqError, Page};

/// The sentinel the server uses for an undisclosed numeric value.
pub const WITHHELD: &str = "-";

/// Numeric types that can be decoded leniently.
pub trait LenientNumber: Sized {
    fn from_i64(v: i64) -> Option<Self>;
    fn from_u64(v: u64) -> Option<Self>;
    fn from_f64(v: f64) -> Option<Self>;
    fn parse(s: &str) -> Option<Self>;
}

impl LenientNumber for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_i64(v: i64) -> Option<Self> {
        Some(v as Self)
    }
    #[allow(clippy::cast_precision_loss)]
    fn from_u64(v: u64) -> Option<Self> {
        Some(v as Self)
    }
    fn from_f64(v: f64) -> Option<Self> {
        v.is_finite().then_some(v)
    }
    fn parse(s: &str) -> Option<Self> {
        Self::from_str(s).ok().filter(|v| v.is_finite())
    }
}

impl LenientNumber for i64 {
    fn from_i64(v: i64) -> Option<Self> {
        Some(v)
    }
    fn from_u64(v: u64) -> Option<Self> {
        Self::try_from(v).ok()
    }
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(v: f64) -> Option<Self> {
        (v.is_finite() && v.fract() == 0.0 && v >= -9.2e18 && v <= 9.2e18).then(|| v as Self)
    }
    fn parse(s: &str) -> Option<Self> {
        Self::from_str(s)
            .ok()
            .or_else(|| f64::parse(s).and_then(Self::from_f64))
    }
}

impl LenientNumber for u64 {
    fn from_i64(v: i64) -> Option<Self> {
        Self::try_from(v).ok()
    }
    fn from_u64(v: u64) -> Option<Self> {
        Some(v)
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_f64(v: f64) -> Option<Self> {
        (v.is_finite() && v.fract() == 0.0 && v >= 0.0 && v <= 1.8e19).then(|| v as Self)
    }
    fn parse(s: &str) -> Option<Self> {
        Self::from_str(s)
            .ok()
            .or_else(|| f64::parse(s).and_then(Self::from_f64))
    }
}

impl LenientNumber for Decimal {
    fn from_i64(v: i64) -> Option<Self> {
        Some(Self::from(v))
    }
    fn from_u64(v: u64) -> Option<Self> {
        Some(Self::from(v))
    }
    fn from_f64(v: f64) -> Option<Self> {
        // Go through the shortest round-trip text so 1234.5 stays 1234.5.
        Self::from_str(&v.to_string())
            .ok()
            .or_else(|| rust_decimal::prelude::FromPrimitive::from_f64(v))
    }
    fn parse(s: &str) -> Option<Self> {
        Self::from_str(s)
            .ok()
            .or_else(|| Self::from_scientific(s).ok())
    }
}

struct LenientVisitor<T>(std::marker::PhantomData<T>);

impl<'de, T: LenientNumber> Visitor<'de> for LenientVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(r#"a number, a numeric string, "-" or null"#)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        T::from_i64(v)
            .map(Some)
            .ok_or_else(|| E::custom(format!("number {v} out of range")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        T::from_u64(v)
            .map(Some)
            .ok_or_else(|| E::custom(format!("number {v} out of range")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        T::from_f64(v)
            .map(Some)
            .ok_or_else(|| E::custom(format!("cannot represent {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let s = v.trim();
        if s.is_empty() || s == WITHHELD {
            return Ok(None);
        }
        T::parse(s)
            .map(Some)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(self)
    }
}

/// `deserialize_with` target for every optional numeric field.
///
/// Pair it with `#[serde(default)]` so a missing field decodes like a withheld one:
///
/// ```
/// # use serde::Deserialize;
/// #[derive(Deserialize)]
/// struct Bar {
///     #[serde(rename = "Close", default, deserialize_with = "jquants_rs::wire::lenient")]
///     close: Option<f64>,
/// }
/// let a: Bar = serde_json::from_str(r#"{"Close":"-"}"#).unwrap();
/// let b: Bar = serde_json::from_str(r#"{"Close":"1234.5"}"#).unwrap();
/// let c: Bar = serde_json::from_str(r#"{"Close":1234.5}"#).unwrap();
/// let d: Bar = serde_json::from_str("{}").unwrap();
/// assert_eq!((a.close, b.close, c.close, d.close), (None, Some(1234.5), Some(1234.5), None));
/// ```
///
/// # Errors
///
/// Fails on strings that are neither numeric nor `"-"`, and on values of other JSON types.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: LenientNumber,
{
    deserializer.deserialize_option(LenientVisitor(std::marker::PhantomData))
}

/// Decode a single JSON value leniently, outside of a derive.
///
/// # Errors
///
/// Same rules as [`lenient`].
pub fn lenient_value<T: LenientNumber>(value: &Value) -> Result<Option<T>, serde_json::Error> {
    lenient(value)
}

struct FlagVisitor;

impl<'de> Visitor<'de> for FlagVisitor {
    type Value = Option<bool>;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(r#"a boolean, 0/1, "0"/"1" or "true"/"false""#)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Some(false)),
            1 => Ok(Some(true)),
            _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(Some(false)),
            1 => Ok(Some(true)),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v.trim() {
            "" | WITHHELD => Ok(None),
            "1" => Ok(Some(true)),
            "0" => Ok(Some(false)),
            s if s.eq_ignore_ascii_case("true") => Ok(Some(true)),
            s if s.eq_ignore_ascii_case("false") => Ok(Some(false)),
            _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(self)
    }
}

/// `deserialize_with` target for boolean-coded fields (`"0"`/`"1"`, `"true"`/`"false"`).
///
/// # Errors
///
/// Fails on any other value.
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(FlagVisitor)
}

/* ---------------- Page envelope ---------------- */

/// One response body split into its payload array and continuation token.
pub(crate) struct RawPage {
    pub(crate) items: Vec<Value>,
    pub(crate) pagination_key: Option<String>,
}

/// Split a response body into the array at `payload_key` and the continuation token.
pub(crate) fn parse_page(
    body: &[u8],
    path: &str,
    page: usize,
    payload_key: &str,
) -> Result<RawPage, JqError> {
    let mut root: Map<String, Value> = serde_json::from_slice(body)
        .map_err(|e| JqError::decode(path, page, None, format!("body is not a JSON object: {e}")))?;

    let items = match root.remove(payload_key) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(JqError::decode(
                path,
                page,
                None,
                format!("`{payload_key}` is {}, expected an array", kind(&other)),
            ));
        }
        None => {
            return Err(JqError::decode(
                path,
                page,
                None,
                format!("missing payload key `{payload_key}`"),
            ));
        }
    };

    let pagination_key = match root.remove(PAGINATION_KEY) {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::String(_) | Value::Null) | None => None,
        Some(other) => {
            return Err(JqError::decode(
                path,
                page,
                None,
                format!("`{PAGINATION_KEY}` is {}, expected a string", kind(&other)),
            ));
        }
    };

    Ok(RawPage {
        items,
        pagination_key,
    })
}

/// Decode every element of a raw page, reporting the first failing element's index.
pub(crate) fn decode_page<T, F>(
    raw: RawPage,
    path: &str,
    page: usize,
    decode: &mut F,
) -> Result<Page<T>, JqError>
where
    F: FnMut(Value) -> Result<T, serde_json::Error>,
{
    let records = raw
        .items
        .into_iter()
        .enumerate()
        .map(|(i, v)| decode(v).map_err(|e| JqError::decode(path, page, Some(i), e)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Page {
        records,
        pagination_key: raw.pagination_key,
    })
}

/// The default element decoder: plain serde.
pub(crate) fn from_value<T: DeserializeOwned>(v: Value) -> Result<T, serde_json::Error> {
    T::deserialize(v)
}

const fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
