//! Request validation and normalization for warehouse and inventory payloads.
//!
//! Everything here is pure: functions take the raw request fields and either
//! return the normalized values that should be written to the store, or an
//! [`InputError`] describing the first rule that failed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// `local@domain.tld`, where the top-level label has at least two alphanumerics.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9\-]+\.)+[A-Za-z0-9]{2,}$")
        .expect("email pattern is valid")
});

/// Canonical stored phone format: `+D (DDD) DDD-DDDD`.
pub static CANONICAL_PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[0-9] \([0-9]{3}\) [0-9]{3}-[0-9]{4}$").expect("phone pattern is valid")
});

/// Country code assumed when a ten digit (North American) number is supplied.
const DEFAULT_COUNTRY_CODE: char = '1';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Missing one or more input fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Quantity must be a whole, non-negative number")]
    InvalidQuantity,

    #[error("Body id {body} does not match path id {path}")]
    IdMismatch { path: i32, body: i32 },
}

/// Raw warehouse payload for create and full update.
///
/// Every field is optional at the deserialization layer so that a missing
/// field is reported as a validation failure instead of a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct WarehouseInput {
    #[validate(required, custom = "not_blank")]
    pub warehouse_name: Option<String>,
    #[validate(required, custom = "not_blank")]
    pub address: Option<String>,
    #[validate(required, custom = "not_blank")]
    pub city: Option<String>,
    #[validate(required, custom = "not_blank")]
    pub country: Option<String>,
    #[validate(required, custom = "not_blank")]
    pub contact_name: Option<String>,
    #[validate(required, custom = "not_blank")]
    pub contact_position: Option<String>,
    #[validate(required, custom = "not_blank")]
    pub contact_phone: Option<String>,
    #[validate(required, custom = "not_blank")]
    pub contact_email: Option<String>,
}

const WAREHOUSE_FIELDS: [&str; 8] = [
    "warehouse_name",
    "address",
    "city",
    "country",
    "contact_name",
    "contact_position",
    "contact_phone",
    "contact_email",
];

/// Warehouse fields after validation, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWarehouse {
    pub warehouse_name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub contact_name: String,
    pub contact_position: String,
    pub contact_phone: String,
    pub contact_email: String,
}

/// Raw inventory payload for create and full update.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct InventoryInput {
    /// Only checked on update, where it must match the path id.
    pub id: Option<i32>,
    #[validate(required)]
    pub warehouse_id: Option<i32>,
    #[validate(required, custom = "not_blank")]
    pub item_name: Option<String>,
    #[validate(required, custom = "not_blank")]
    pub description: Option<String>,
    #[validate(required, custom = "not_blank")]
    pub category: Option<String>,
    #[validate(required, custom = "not_blank")]
    pub status: Option<String>,
    /// A JSON number or a numeric string.
    #[validate(required)]
    #[schema(value_type = Option<i32>)]
    pub quantity: Option<Value>,
}

const INVENTORY_FIELDS: [&str; 6] = [
    "warehouse_id",
    "item_name",
    "description",
    "category",
    "status",
    "quantity",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInventory {
    pub warehouse_id: i32,
    pub item_name: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub quantity: i32,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Collects the failing fields in declaration order so error messages are stable.
fn missing_fields(errors: &ValidationErrors, declared: &[&str]) -> Vec<String> {
    let failed = errors.field_errors();
    declared
        .iter()
        .filter(|field| failed.contains_key(*field))
        .map(|field| field.to_string())
        .collect()
}

fn require(value: Option<&String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Strips every non-digit and re-assembles the number as `+D (DDD) DDD-DDDD`.
///
/// Eleven digits are read as `D DDD DDD DDDD`. Ten digits are treated as a
/// North American number and get country code `1`. Any other digit count is
/// rejected.
pub fn normalize_phone(raw: &str) -> Result<String, InputError> {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        digits.insert(0, DEFAULT_COUNTRY_CODE);
    }
    if digits.len() != 11 {
        return Err(InputError::InvalidPhone(raw.to_string()));
    }

    Ok(format!(
        "+{} ({}) {}-{}",
        &digits[0..1],
        &digits[1..4],
        &digits[4..7],
        &digits[7..11]
    ))
}

/// Uppercases the first character of the string and leaves the rest alone.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercases the first character of every space-separated word.
pub fn title_case(s: &str) -> String {
    s.split(' ').map(capitalize_first).collect::<Vec<_>>().join(" ")
}

/// Accepts a JSON integer or a string holding one.
pub fn parse_quantity(value: &Value) -> Result<i32, InputError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .filter(|q| *q >= 0)
        .and_then(|q| i32::try_from(q).ok())
        .ok_or(InputError::InvalidQuantity)
}

pub fn validate_warehouse_input(input: &WarehouseInput) -> Result<NormalizedWarehouse, InputError> {
    if let Err(errors) = input.validate() {
        return Err(InputError::MissingFields(missing_fields(
            &errors,
            &WAREHOUSE_FIELDS,
        )));
    }

    let contact_email = require(input.contact_email.as_ref());
    if !is_valid_email(&contact_email) {
        return Err(InputError::InvalidEmail(contact_email));
    }
    let contact_phone = normalize_phone(&require(input.contact_phone.as_ref()))?;

    Ok(NormalizedWarehouse {
        warehouse_name: capitalize_first(&require(input.warehouse_name.as_ref())),
        address: require(input.address.as_ref()),
        city: capitalize_first(&require(input.city.as_ref())),
        country: require(input.country.as_ref()),
        contact_name: title_case(&require(input.contact_name.as_ref())),
        contact_position: title_case(&require(input.contact_position.as_ref())),
        contact_phone,
        contact_email,
    })
}

/// Validates an inventory payload. `path_id` is the id from the URL on update.
pub fn validate_inventory_input(
    input: &InventoryInput,
    path_id: Option<i32>,
) -> Result<NormalizedInventory, InputError> {
    if let Err(errors) = input.validate() {
        return Err(InputError::MissingFields(missing_fields(
            &errors,
            &INVENTORY_FIELDS,
        )));
    }

    if let (Some(path), Some(body)) = (path_id, input.id) {
        if path != body {
            return Err(InputError::IdMismatch { path, body });
        }
    }

    let quantity = match &input.quantity {
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(InputError::MissingFields(vec!["quantity".to_string()]))
        }
        Some(value) => parse_quantity(value)?,
        None => return Err(InputError::MissingFields(vec!["quantity".to_string()])),
    };

    Ok(NormalizedInventory {
        warehouse_id: input.warehouse_id.unwrap_or_default(),
        item_name: require(input.item_name.as_ref()),
        description: require(input.description.as_ref()),
        category: require(input.category.as_ref()),
        status: require(input.status.as_ref()),
        quantity,
    })
}
