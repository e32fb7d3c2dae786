//! Lenient scalar deserialization
//!
//! The registrar encodes numeric-looking fields (`id`, `ttl`, `prio`, ...) sometimes
//! as JSON strings and sometimes as JSON numbers. These helpers accept either and
//! always yield a `String`, so the data model never has to guess a numeric type.
//! Serialization is untouched: the fields go back out as strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            Self::I64(n) => n.to_string(),
            Self::U64(n) => n.to_string(),
            Self::F64(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// Deserialize a string or number into a `String`. `null` becomes an empty string.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .unwrap_or_default())
}

/// Deserialize an optional string or number. `null` and absence both become `None`.
///
/// Pair with `#[serde(default)]` so an absent field does not reach the deserializer.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

/// Deserialize any `Default` type, treating an explicit `null` like an absent field.
///
/// Pair with `#[serde(default)]`.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
