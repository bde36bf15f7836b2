//! Product payload schema.
//!
//! `name` and `description` must be non-empty strings, `price` a number and
//! `available` a boolean; all four are required. Every offending field is
//! reported, in the order above.
//!
//! Values are cast before they are checked:
//! - strings: numbers and booleans become their text
//! - numbers: numeric strings are parsed, whitespace ignored
//! - booleans: `"true"`/`"false"` (any case), `"1"`/`"0"`, `1`/`0`
//!
//! `null` counts as missing, and so does an empty string.

use serde::Deserialize;
use serde_json::{Number, Value};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{ProductError, ProductResult};
use crate::models::ProductInput;

/// Schema field order, used to order error messages
pub const PRODUCT_FIELDS: [&str; 4] = ["name", "description", "price", "available"];

/// Loosely typed view of the body so every field can be checked before
/// the typed [`ProductInput`] is built from the cast values.
#[derive(Debug, Deserialize, Validate)]
struct ProductPayload {
    #[validate(required, custom(function = "non_empty_string"))]
    name: Option<Value>,
    #[validate(required, custom(function = "non_empty_string"))]
    description: Option<Value>,
    #[validate(required, custom(function = "number"))]
    price: Option<Value>,
    #[validate(required, custom(function = "boolean"))]
    available: Option<Value>,
}

/// Number text without a trailing `.0` on integral values
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

fn cast_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Non-finite results are rejected; they have no JSON representation.
fn cast_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
            compact.parse::<f64>().ok()
        }
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn cast_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") || s == "1" => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") || s == "0" => Some(false),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 1.0 => Some(true),
            Some(f) if f == 0.0 => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn non_empty_string(value: &Value) -> Result<(), ValidationError> {
    match cast_string(value) {
        Some(s) if s.is_empty() => Err(ValidationError::new("required")),
        Some(_) => Ok(()),
        None => Err(ValidationError::new("string")),
    }
}

fn number(value: &Value) -> Result<(), ValidationError> {
    cast_number(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("number"))
}

fn boolean(value: &Value) -> Result<(), ValidationError> {
    cast_boolean(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("boolean"))
}

fn field_message(field: &str, error: &ValidationError) -> String {
    match &*error.code {
        "required" => format!("{} is a required field", field),
        expected => format!("{} must be a `{}` type", field, expected),
    }
}

/// One message per offending field, in schema order
fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();
    PRODUCT_FIELDS
        .iter()
        .filter_map(|field| {
            field_errors
                .get(*field)
                .and_then(|errs| errs.first())
                .map(|error| field_message(field, error))
        })
        .collect()
}

fn cast_field<T>(
    field: &str,
    value: Option<&Value>,
    cast: fn(&Value) -> Option<T>,
) -> ProductResult<T> {
    value.and_then(cast).ok_or_else(|| {
        ProductError::Internal(format!("{} passed validation but did not cast", field))
    })
}

impl ProductPayload {
    fn into_input(self) -> ProductResult<ProductInput> {
        Ok(ProductInput {
            name: cast_field("name", self.name.as_ref(), cast_string)?,
            description: cast_field("description", self.description.as_ref(), cast_string)?,
            price: cast_field("price", self.price.as_ref(), cast_number)?,
            available: cast_field("available", self.available.as_ref(), cast_boolean)?,
        })
    }
}

/// Parse, validate and cast a raw request body.
///
/// - Not UTF-8 JSON: [`ProductError::MalformedBody`] with the parser message.
/// - JSON that is not an object, or violates the schema:
///   [`ProductError::Validation`].
///
/// Fields outside the schema, `productID` included, are dropped.
pub fn parse_product_body(body: impl AsRef<[u8]>) -> ProductResult<ProductInput> {
    let value: Value = serde_json::from_slice(body.as_ref())
        .map_err(|e| ProductError::MalformedBody(e.to_string()))?;

    if !value.is_object() {
        return Err(ProductError::Validation(vec![
            "this must be a `object` type".to_string(),
        ]));
    }

    let payload: ProductPayload = serde_json::from_value(value)
        .map_err(|e| ProductError::Internal(format!("payload view: {}", e)))?;
    payload
        .validate()
        .map_err(|errors| ProductError::Validation(error_messages(&errors)))?;

    payload.into_input()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validation_errors(body: &str) -> Vec<String> {
        match parse_product_body(body) {
            Err(ProductError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_body() {
        let input = parse_product_body(
            r#"{"name":"Widget","description":"Useful","price":12.5,"available":true}"#,
        )
        .unwrap();

        assert_eq!(input.name, "Widget");
        assert_eq!(input.price, 12.5);
        assert!(input.available);
    }

    #[test]
    fn test_integer_price_is_a_number() {
        let input =
            parse_product_body(r#"{"name":"a","description":"b","price":3,"available":false}"#)
                .unwrap();
        assert_eq!(input.price, 3.0);
    }

    #[test]
    fn test_string_values_are_cast() {
        let input = parse_product_body(
            r#"{"name":"a","description":"b","price":" 12 ","available":"true"}"#,
        )
        .unwrap();
        assert_eq!(input.price, 12.0);
        assert!(input.available);

        let input = parse_product_body(
            r#"{"name":"a","description":"b","price":"1.5e2","available":"FALSE"}"#,
        )
        .unwrap();
        assert_eq!(input.price, 150.0);
        assert!(!input.available);
    }

    #[test]
    fn test_scalars_cast_to_strings() {
        let input = parse_product_body(
            r#"{"name":42,"description":true,"price":1,"available":1}"#,
        )
        .unwrap();
        assert_eq!(input.name, "42");
        assert_eq!(input.description, "true");
        assert!(input.available);

        let input = parse_product_body(
            r#"{"name":7.0,"description":0.25,"price":1,"available":0}"#,
        )
        .unwrap();
        assert_eq!(input.name, "7");
        assert_eq!(input.description, "0.25");
        assert!(!input.available);
    }

    #[test]
    fn test_boolean_casts() {
        for (raw, expected) in [
            (json!("true"), true),
            (json!("True"), true),
            (json!("1"), true),
            (json!(1), true),
            (json!("false"), false),
            (json!("0"), false),
            (json!(0), false),
        ] {
            assert_eq!(cast_boolean(&raw), Some(expected), "{raw}");
        }
        for raw in [json!("yes"), json!(2), json!(""), json!([true])] {
            assert_eq!(cast_boolean(&raw), None, "{raw}");
        }
    }

    #[test]
    fn test_uncastable_values_still_fail() {
        assert_eq!(
            validation_errors(r#"{"name":"a","description":"b","price":"free","available":"yes"}"#),
            vec![
                "price must be a `number` type",
                "available must be a `boolean` type",
            ]
        );
        assert_eq!(
            validation_errors(r#"{"name":"a","description":"b","price":"  ","available":true}"#),
            vec!["price must be a `number` type"]
        );
        assert_eq!(
            validation_errors(r#"{"name":"a","description":"b","price":"Infinity","available":true}"#),
            vec!["price must be a `number` type"]
        );
    }

    #[test]
    fn test_empty_object_reports_every_field_in_order() {
        assert_eq!(
            validation_errors("{}"),
            vec![
                "name is a required field",
                "description is a required field",
                "price is a required field",
                "available is a required field",
            ]
        );
    }

    #[test]
    fn test_wrong_types() {
        assert_eq!(
            validation_errors(
                r#"{"name":{"a":1},"description":"","price":true,"available":null}"#
            ),
            vec![
                "name must be a `string` type",
                "description is a required field",
                "price must be a `number` type",
                "available is a required field",
            ]
        );
    }

    #[test]
    fn test_null_counts_as_missing() {
        assert_eq!(
            validation_errors(r#"{"name":null,"description":"d","price":1,"available":true}"#),
            vec!["name is a required field"]
        );
    }

    #[test]
    fn test_non_object_body() {
        assert_eq!(validation_errors("[1,2]"), vec!["this must be a `object` type"]);
        assert_eq!(validation_errors("42"), vec!["this must be a `object` type"]);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_product_body([0xffu8, 0xfe]),
            Err(ProductError::MalformedBody(_))
        ));
        for body in ["{", "", "not json"] {
            assert!(matches!(
                parse_product_body(body),
                Err(ProductError::MalformedBody(_))
            ));
        }
    }
}
