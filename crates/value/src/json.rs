//! `serde_json` interop.
//!
//! Request bodies usually arrive as JSON objects. This module converts a
//! top-level object into a [`Data`] record and turns pipeline results back
//! into JSON for the response.
//!
//! # Examples
//!
//! ```
//! use sift_value::{Data, Value};
//! use serde_json::json;
//!
//! let record = Data::try_from(json!({ "name": "Ada", "tags": ["a", "b"] })).unwrap();
//! assert_eq!(record.get("name"), Some(&Value::text("Ada")));
//!
//! assert!(Data::try_from(json!({ "address": { "city": "Paris" } })).is_err());
//! ```

use serde_json::{Map, Number, Value as Json};

use crate::data::Data;
use crate::error::ValueError;
use crate::field_errors::Errors;
use crate::value::Value;

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

impl TryFrom<Json> for Value {
    type Error = ValueError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        Ok(match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    return Err(ValueError::UnsupportedNumber {
                        number: n.to_string(),
                    });
                }
            }
            Json::String(s) => Self::Text(s),
            Json::Array(items) => Self::List(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Json::Object(_) => return Err(ValueError::NestedObject),
        })
    }
}

impl TryFrom<Json> for Data {
    type Error = ValueError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        let Json::Object(fields) = json else {
            return Err(ValueError::NotAnObject {
                found: json_kind(&json),
            });
        };

        fields
            .into_iter()
            .map(|(key, value)| match Value::try_from(value) {
                Ok(value) => Ok((key, value)),
                Err(error) => Err(error.in_field(key)),
            })
            .collect()
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(b),
            Value::Integer(i) => Json::Number(i.into()),
            // NaN and infinities have no JSON form
            Value::Float(f) => Number::from_f64(f).map_or(Json::Null, Json::Number),
            Value::Text(s) => Json::String(s),
            Value::DateTime(dt) => Json::String(dt.to_rfc3339()),
            Value::List(items) => Json::Array(items.into_iter().map(Json::from).collect()),
        }
    }
}

impl From<Data> for Json {
    fn from(data: Data) -> Self {
        Json::Object(
            data.into_iter()
                .map(|(key, value)| (key.to_string(), Json::from(value)))
                .collect::<Map<_, _>>(),
        )
    }
}

impl From<Errors> for Json {
    fn from(errors: Errors) -> Self {
        Json::Object(
            errors
                .into_iter()
                .map(|(key, message)| (key.to_string(), Json::String(message.into_owned())))
                .collect::<Map<_, _>>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn object_becomes_record() {
        let record = Data::try_from(json!({
            "name": "Ada",
            "age": 36,
            "score": 1.5,
            "admin": false,
            "nickname": null,
            "tags": ["x", 1],
        }))
        .unwrap();

        let expected = data! {
            "name" => "Ada",
            "age" => 36,
            "score" => 1.5,
            "admin" => false,
            "nickname" => Value::Null,
            "tags" => Value::List(vec![Value::text("x"), Value::Integer(1)]),
        };
        assert_eq!(record, expected);
    }

    #[test]
    fn top_level_must_be_object() {
        assert_eq!(
            Data::try_from(json!([1, 2])),
            Err(ValueError::NotAnObject { found: "array" })
        );
    }

    #[test]
    fn nested_object_names_the_field() {
        let error = Data::try_from(json!({ "address": { "city": "Paris" } })).unwrap_err();
        assert_eq!(error, ValueError::NestedObject.in_field("address"));
    }

    #[test]
    fn results_back_to_json() {
        let record = data! { "name" => "Ada", "age" => 36 };
        assert_eq!(Json::from(record), json!({ "name": "Ada", "age": 36 }));

        let errors = Errors::new().with("email", "Must be a valid email address.");
        assert_eq!(
            Json::from(errors),
            json!({ "email": "Must be a valid email address." })
        );
    }
}
