//! Request validation.
//!
//! Field constraints are declared on the DTOs with `validator`; the id and uniqueness rules that
//! need request context or store state live here as plain functions.

use validator::{Validate, ValidationErrors};

use crate::errors::{AppError, FieldErrors};
use crate::models::VillaRecord;

/// Run the declared field constraints and the non-blank name rule.
pub fn check_fields<T: Validate>(dto: &T, name: Option<&str>) -> Result<(), AppError> {
    let mut fields = match dto.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => field_errors(&errors),
    };

    if name.is_some_and(|n| n.trim().is_empty()) {
        fields
            .entry("name".to_string())
            .or_default()
            .push("Name cannot be blank".to_string());
    }

    if fields.is_empty() {
        return Ok(());
    }

    Err(AppError::Validation {
        message: "One or more validation errors occurred".to_string(),
        fields,
    })
}

/// A path id of zero never addresses a villa.
pub fn check_path_id(id: i64) -> Result<(), AppError> {
    if id == 0 {
        return Err(AppError::InvalidInput("Invalid Id".to_string()));
    }
    Ok(())
}

/// The id in the body of an update must be the id in the path.
pub fn check_ids_match(path_id: i64, body_id: i64) -> Result<(), AppError> {
    if path_id != body_id {
        return Err(AppError::InvalidInput(format!(
            "Path id {} does not match body id {}",
            path_id, body_id
        )));
    }
    Ok(())
}

/// Ids are assigned by the store; a client-supplied id is refused.
pub fn check_new_id(id: i64) -> Result<(), AppError> {
    if id != 0 {
        return Err(AppError::ServerState(format!(
            "Villa id is assigned by the server, got {}",
            id
        )));
    }
    Ok(())
}

/// Refuse a name already held by `existing`.
pub fn check_unique_name(existing: Option<&VillaRecord>) -> Result<(), AppError> {
    match existing {
        Some(_) => Err(AppError::DuplicateName("Villa already exists!".to_string())),
        None => Ok(()),
    }
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }
    fields
}
