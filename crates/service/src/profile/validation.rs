//! Pure per-field checks of a creation payload. Nothing here touches the
//! store; the company existence check is a separate pre-flight step in the
//! service.

use models::errors::ModelError;
use models::label;
use models::profile::{self, NewProfile};
use models::validation::REQUIRED;
use serde_json::Value;

use crate::errors::FieldErrors;
use crate::profile::domain::CreateProfileInput;

pub const INVALID_INTEGER: &str = "A valid integer is required.";
pub const COMPANY_MISSING: &str = "Company does not exist";
pub const NOT_A_STRING: &str = "Not a valid string.";

/// Values that passed their own checks, plus every violation found.
/// `profile` is only meaningful when `errors` is empty.
#[derive(Debug, Default)]
pub struct Checked {
    pub profile: NewProfile,
    pub labels: Vec<String>,
    pub errors: FieldErrors,
}

fn record(errors: &mut FieldErrors, field: &str, e: ModelError) {
    match e {
        ModelError::Validation(msg) => errors.add(field, msg),
        other => errors.add(field, other.to_string()),
    }
}

/// A JSON field reduced to what validation cares about. Strings are trimmed
/// before any check and are stored trimmed.
enum Raw {
    Absent,
    Text(String),
    WrongType,
}

impl Raw {
    fn of(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Raw::Absent,
            Some(Value::String(s)) => Raw::Text(s.trim().to_string()),
            Some(_) => Raw::WrongType,
        }
    }
}

/// Python-style type name used in list errors.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

fn required(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<Value>,
    check: fn(&str) -> Result<(), ModelError>,
) -> String {
    match Raw::of(value) {
        Raw::Absent => {
            errors.add(field, REQUIRED);
            String::new()
        }
        Raw::WrongType => {
            errors.add(field, NOT_A_STRING);
            String::new()
        }
        Raw::Text(v) => {
            if let Err(e) = check(&v) {
                record(errors, field, e);
            }
            v
        }
    }
}

fn optional(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<Value>,
    check: fn(&str) -> Result<(), ModelError>,
) -> Option<String> {
    match Raw::of(value) {
        Raw::Absent => None,
        Raw::WrongType => {
            errors.add(field, NOT_A_STRING);
            None
        }
        Raw::Text(v) => {
            if let Err(e) = check(&v) {
                record(errors, field, e);
            }
            Some(v)
        }
    }
}

/// Accepts a JSON integer or a string of digits within `i32` range.
pub fn parse_integer(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

fn labels(errors: &mut FieldErrors, value: Option<Value>) -> Vec<String> {
    let items = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            errors.add("labels", format!("Expected a list of items but got type \"{}\".", type_name(&other)));
            return Vec::new();
        }
    };
    let mut names = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        let Value::String(raw) = item else {
            errors.add("labels", format!("[{i}] {NOT_A_STRING}"));
            continue;
        };
        let name = raw.trim().to_string();
        if let Err(ModelError::Validation(msg)) = label::validate_name(&name) {
            errors.add("labels", format!("[{i}] {msg}"));
        }
        names.push(name);
    }
    names
}

/// Run every field check and collect all failures, not just the first.
pub fn check_fields(input: CreateProfileInput) -> Checked {
    let mut errors = FieldErrors::new();

    let img_url = required(&mut errors, "img_url", input.img_url, profile::validate_img_url);
    let name = required(&mut errors, "name", input.name, profile::validate_name);
    let email = required(&mut errors, "email", input.email, profile::validate_email);
    let tel = required(&mut errors, "tel", input.tel, profile::validate_tel);
    let rank = required(&mut errors, "rank", input.rank, profile::validate_rank);
    let address = optional(&mut errors, "address", input.address, profile::validate_address);
    let web_site = optional(&mut errors, "web_site", input.web_site, profile::validate_web_site);
    let memo = optional(&mut errors, "memo", input.memo, profile::validate_memo);

    let birthday = match Raw::of(input.birthday) {
        Raw::Absent => None,
        Raw::WrongType => {
            errors.add("birthday", NOT_A_STRING);
            None
        }
        Raw::Text(raw) => match profile::validate_birthday(&raw) {
            Ok(d) => Some(d),
            Err(e) => {
                record(&mut errors, "birthday", e);
                None
            }
        },
    };

    let company_id = match input.company_id {
        None | Some(Value::Null) => {
            errors.add("company_id", REQUIRED);
            None
        }
        Some(raw) => {
            let parsed = parse_integer(&raw);
            if parsed.is_none() {
                errors.add("company_id", INVALID_INTEGER);
            }
            parsed
        }
    };

    let labels = labels(&mut errors, input.labels);

    Checked {
        profile: NewProfile {
            img_url,
            name,
            email,
            tel,
            rank,
            address,
            birthday,
            web_site,
            memo,
            company_id,
        },
        labels,
        errors,
    }
}
