//! Validation of director/genre write payloads.
//!
//! Bodies are checked field by field against the entity descriptor: the
//! object must carry exactly the entity's name field, as a non-blank string
//! no longer than [`NAME_MAX_LEN`] characters and free of NUL bytes,
//! which PostgreSQL `TEXT` cannot store.

use serde_json::Value;

use crate::entity::{EntityDescriptor, NAME_MAX_LEN};
use crate::error::CoreError;

/// Extract the name from a create/update body for `descriptor`.
pub fn parse_name_payload(
    descriptor: &EntityDescriptor,
    body: &Value,
) -> Result<String, CoreError> {
    let Some(fields) = body.as_object() else {
        return Err(CoreError::Validation(
            "request body must be a JSON object".to_string(),
        ));
    };

    if let Some(unknown) = fields.keys().find(|k| k.as_str() != descriptor.name_field) {
        return Err(CoreError::Validation(format!("unknown field '{unknown}'")));
    }

    let name = match fields.get(descriptor.name_field) {
        None | Some(Value::Null) => {
            return Err(CoreError::Validation(format!(
                "{} is required",
                descriptor.name_field
            )))
        }
        Some(Value::String(s)) => s,
        Some(_) => {
            return Err(CoreError::Validation(format!(
                "{} must be a string",
                descriptor.name_field
            )))
        }
    };

    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{} must not be blank",
            descriptor.name_field
        )));
    }
    if name.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{} must not contain NUL characters",
            descriptor.name_field
        )));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "{} must be at most {NAME_MAX_LEN} characters",
            descriptor.name_field
        )));
    }

    Ok(name.clone())
}
