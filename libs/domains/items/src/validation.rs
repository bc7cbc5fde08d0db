//! Decode-and-validate: raw JSON bodies into typed item requests.
//!
//! Each field is checked in order (`name`, `quantity`, `purchased`) and the
//! first failure is returned. Absent fields are distinct from present-but-null
//! ones: `{"quantity": null}` is an invalid quantity, not a missing one.

use serde_json::{Map, Value};

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, DEFAULT_QUANTITY, UpdateItem};

pub const NAME_REQUIRED: &str = "Name is required and must be a non-empty string";
pub const NAME_INVALID: &str = "Name must be a non-empty string";
pub const QUANTITY_INVALID: &str = "Quantity must be a positive number";
pub const PURCHASED_INVALID: &str = "Purchased must be a boolean";
pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";
pub const INVALID_ID: &str = "Invalid item ID";

/// Validates a create payload: `name` is required, `quantity` defaults to 1.
pub fn validate_create(raw: &Value) -> ItemResult<CreateItem> {
    let body = as_object(raw)?;

    let name = body
        .get("name")
        .and_then(non_blank_string)
        .ok_or_else(|| ItemError::Validation(NAME_REQUIRED.to_string()))?;

    let quantity = match body.get("quantity") {
        Some(value) => positive_quantity(value)?,
        None => DEFAULT_QUANTITY,
    };

    Ok(CreateItem { name, quantity })
}

/// Validates a partial update; only fields present in `raw` are returned.
pub fn validate_update(raw: &Value) -> ItemResult<UpdateItem> {
    let body = as_object(raw)?;
    let mut update = UpdateItem::default();

    if let Some(value) = body.get("name") {
        let name = non_blank_string(value)
            .ok_or_else(|| ItemError::Validation(NAME_INVALID.to_string()))?;
        update.name = Some(name);
    }

    if let Some(value) = body.get("quantity") {
        update.quantity = Some(positive_quantity(value)?);
    }

    if let Some(value) = body.get("purchased") {
        let purchased = value
            .as_bool()
            .ok_or_else(|| ItemError::Validation(PURCHASED_INVALID.to_string()))?;
        update.purchased = Some(purchased);
    }

    Ok(update)
}

/// Parses a path segment as an item id.
pub fn parse_item_id(raw: &str) -> ItemResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ItemError::Validation(INVALID_ID.to_string()))
}

fn as_object(raw: &Value) -> ItemResult<&Map<String, Value>> {
    raw.as_object()
        .ok_or_else(|| ItemError::Validation(BODY_NOT_OBJECT.to_string()))
}

/// Trimmed string, or `None` if the value is not a string or is blank.
fn non_blank_string(value: &Value) -> Option<String> {
    let trimmed = value.as_str()?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Integral JSON number of at least 1. `3.0` and `1e2` count as integers,
/// fractions do not.
fn positive_quantity(value: &Value) -> ItemResult<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().and_then(integral_f64))
        .filter(|quantity| *quantity >= 1)
        .ok_or_else(|| ItemError::Validation(QUANTITY_INVALID.to_string()))
}

fn integral_f64(number: f64) -> Option<i64> {
    let in_range = number >= i64::MIN as f64 && number < i64::MAX as f64;
    (number.fract() == 0.0 && in_range).then_some(number as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(result: ItemResult<impl std::fmt::Debug>) -> String {
        match result {
            Err(ItemError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_defaults_quantity() {
        let input = validate_create(&json!({"name": "Milk"})).unwrap();
        assert_eq!(input.name, "Milk");
        assert_eq!(input.quantity, 1);
    }

    #[test]
    fn test_create_trims_name() {
        let input = validate_create(&json!({"name": "  Eggs  "})).unwrap();
        assert_eq!(input.name, "Eggs");
    }

    #[test]
    fn test_create_rejects_missing_or_blank_name() {
        for body in [
            json!({}),
            json!({"name": ""}),
            json!({"name": "   "}),
            json!({"name": 42}),
            json!({"name": null}),
        ] {
            assert_eq!(message(validate_create(&body)), NAME_REQUIRED, "body: {}", body);
        }
    }

    #[test]
    fn test_create_quantity_rules() {
        assert_eq!(
            validate_create(&json!({"name": "X", "quantity": 3}))
                .unwrap()
                .quantity,
            3
        );

        let float_forms: Value = serde_json::from_str(r#"[3.0, 1e2]"#).unwrap();
        let accepted: Vec<i64> = float_forms
            .as_array()
            .unwrap()
            .iter()
            .map(|q| validate_create(&json!({"name": "X", "quantity": q})).unwrap().quantity)
            .collect();
        assert_eq!(accepted, [3, 100]);

        for quantity in [
            json!(0),
            json!(-1),
            json!(0.0),
            json!(1.5),
            json!(1e300),
            json!("2"),
            json!(null),
        ] {
            let body = json!({"name": "X", "quantity": quantity});
            assert_eq!(message(validate_create(&body)), QUANTITY_INVALID, "body: {}", body);
        }
    }

    #[test]
    fn test_create_rejects_non_object_body() {
        assert_eq!(message(validate_create(&json!(["Milk"]))), BODY_NOT_OBJECT);
    }

    #[test]
    fn test_update_keeps_only_supplied_fields() {
        let update = validate_update(&json!({"purchased": true})).unwrap();
        assert_eq!(
            update,
            UpdateItem {
                purchased: Some(true),
                ..Default::default()
            }
        );

        assert_eq!(validate_update(&json!({})).unwrap(), UpdateItem::default());
    }

    #[test]
    fn test_update_validates_each_present_field() {
        assert_eq!(message(validate_update(&json!({"name": " "}))), NAME_INVALID);
        assert_eq!(message(validate_update(&json!({"quantity": 0}))), QUANTITY_INVALID);
        assert_eq!(
            message(validate_update(&json!({"purchased": "yes"}))),
            PURCHASED_INVALID
        );
    }

    #[test]
    fn test_update_reports_first_invalid_field() {
        let body = json!({"name": "", "quantity": 0, "purchased": "no"});
        assert_eq!(message(validate_update(&body)), NAME_INVALID);
    }

    #[test]
    fn test_update_trims_name() {
        let update = validate_update(&json!({"name": " Bread ", "quantity": 2})).unwrap();
        assert_eq!(update.name.as_deref(), Some("Bread"));
        assert_eq!(update.quantity, Some(2));
        assert_eq!(update.purchased, None);
    }

    #[test]
    fn test_parse_item_id() {
        assert_eq!(parse_item_id("42").unwrap(), 42);
        assert_eq!(message(parse_item_id("abc")), INVALID_ID);
        assert_eq!(message(parse_item_id("12abc")), INVALID_ID);
        assert_eq!(message(parse_item_id("")), INVALID_ID);
    }
}
