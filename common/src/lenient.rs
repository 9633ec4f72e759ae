//! Field decoders for the loosely typed JSON the Jamf School API returns.
//!
//! Live responses disagree with the vendor documentation in a few recurring
//! ways: sub-objects arrive wrapped in one element arrays, numbers arrive as
//! strings (and strings as numbers) and simple values are sometimes wrapped
//! in a `{"value": ...}` object. Every decoder here returns `None` for a
//! missing or null field so it can be combined with `#[serde(default)]`.

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Accept an object, an array holding the object, an empty array or null
pub fn one_or_first<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<OneOrMany<T>> = Option::deserialize(deserializer)?;
    let first = match value {
        Some(OneOrMany::Many(items)) => items.into_iter().next(),
        Some(OneOrMany::One(item)) => Some(item),
        None => None,
    };
    Ok(first)
}

/// Accept a string or a number and keep the textual representation
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or a number, got {other}"
        ))),
    }
}

fn integer<E: de::Error>(value: Option<Value>) -> Result<Option<i64>, E> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(result) => Ok(Some(result)),
            None => Err(E::custom(format!("expected an integer, got {number}"))),
        },
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse::<i64>() {
                Ok(result) => Ok(Some(result)),
                Err(_err) => Err(E::custom(format!("expected a numeric string, got {text}"))),
            }
        }
        Some(other) => Err(E::custom(format!("expected an integer, got {other}"))),
    }
}

/// Accept an integer or a numeric string. An empty string is absent
pub fn int_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    integer(value)
}

/// Accept an integer, a numeric string or a boolean flag
pub fn int_flag<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        Some(Value::Bool(flag)) => Ok(Some(i64::from(flag))),
        other => integer(other),
    }
}

/// Accept a plain string or a `{"value": string}` wrapper
pub fn string_or_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Object(map)) => match map.get("value") {
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(Value::Null) | None => Ok(None),
            Some(other) => Err(de::Error::custom(format!(
                "expected a string value, got {other}"
            ))),
        },
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or value object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{int_flag, int_or_string, one_or_first, string_or_number, string_or_value};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Inner {
        name: String,
    }

    #[derive(Deserialize, Debug)]
    struct Outer {
        #[serde(default, deserialize_with = "one_or_first")]
        inner: Option<Inner>,
        #[serde(default, deserialize_with = "string_or_number")]
        level: Option<String>,
        #[serde(default, deserialize_with = "int_flag")]
        flag: Option<i64>,
        #[serde(default, deserialize_with = "string_or_value")]
        kind: Option<String>,
        #[serde(default, deserialize_with = "int_or_string")]
        count: Option<i64>,
    }

    #[test]
    fn test_one_or_first() {
        let object: Outer = serde_json::from_value(json!({"inner": {"name": "a"}})).unwrap();
        assert_eq!(object.inner.unwrap().name, "a");

        let array: Outer =
            serde_json::from_value(json!({"inner": [{"name": "b"}, {"name": "c"}]})).unwrap();
        assert_eq!(array.inner.unwrap().name, "b");

        let empty: Outer = serde_json::from_value(json!({"inner": []})).unwrap();
        assert!(empty.inner.is_none());

        let missing: Outer = serde_json::from_value(json!({})).unwrap();
        assert!(missing.inner.is_none());
    }

    #[test]
    fn test_one_or_first_bad_shape() {
        let result = serde_json::from_value::<Outer>(json!({"inner": "nope"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_string_or_number() {
        let number: Outer = serde_json::from_value(json!({"level": 0.988})).unwrap();
        assert_eq!(number.level.unwrap(), "0.988");

        let text: Outer = serde_json::from_value(json!({"level": "25.6946"})).unwrap();
        assert_eq!(text.level.unwrap(), "25.6946");

        let null: Outer = serde_json::from_value(json!({"level": null})).unwrap();
        assert!(null.level.is_none());

        assert!(serde_json::from_value::<Outer>(json!({"level": [1]})).is_err());
    }

    #[test]
    fn test_int_flag() {
        let text: Outer = serde_json::from_value(json!({"flag": "0"})).unwrap();
        assert_eq!(text.flag, Some(0));

        let number: Outer = serde_json::from_value(json!({"flag": 1})).unwrap();
        assert_eq!(number.flag, Some(1));

        let boolean: Outer = serde_json::from_value(json!({"flag": true})).unwrap();
        assert_eq!(boolean.flag, Some(1));

        let empty: Outer = serde_json::from_value(json!({"flag": ""})).unwrap();
        assert_eq!(empty.flag, None);

        assert!(serde_json::from_value::<Outer>(json!({"flag": "yes"})).is_err());
    }

    #[test]
    fn test_int_or_string() {
        let text: Outer = serde_json::from_value(json!({"count": "3"})).unwrap();
        assert_eq!(text.count, Some(3));

        let number: Outer = serde_json::from_value(json!({"count": 12})).unwrap();
        assert_eq!(number.count, Some(12));

        let empty: Outer = serde_json::from_value(json!({"count": " "})).unwrap();
        assert_eq!(empty.count, None);

        assert!(serde_json::from_value::<Outer>(json!({"count": true})).is_err());
        assert!(serde_json::from_value::<Outer>(json!({"count": "3a"})).is_err());
    }

    #[test]
    fn test_string_or_value() {
        let wrapped: Outer = serde_json::from_value(json!({"kind": {"value": "iPad"}})).unwrap();
        assert_eq!(wrapped.kind.unwrap(), "iPad");

        let plain: Outer = serde_json::from_value(json!({"kind": "iPad"})).unwrap();
        assert_eq!(plain.kind.unwrap(), "iPad");

        assert!(serde_json::from_value::<Outer>(json!({"kind": 3})).is_err());
    }
}
