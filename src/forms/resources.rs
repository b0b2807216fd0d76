use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::resource::NewResource;
use crate::domain::types::{ResourceDescription, ResourceName, TypeConstraintError};

/// Fields checked by [`join_field_errors`], in declaration order.
const FIELD_ORDER: [&str; 2] = ["name", "description"];

fn name_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("Name is required".into());
        return Err(error);
    }
    Ok(())
}

/// Collect violations as `field: message` pairs joined with `", "`.
///
/// `ValidationErrors` stores violations per field in a map, so the walk is
/// pinned to the form's field declaration order.
fn join_field_errors(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut parts = Vec::new();
    for field in FIELD_ORDER {
        if let Some(violations) = field_errors.get(field) {
            for violation in violations.iter() {
                let message = violation
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| violation.code.to_string());
                parts.push(format!("{field}: {message}"));
            }
        }
    }
    parts.join(", ")
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateResourceForm {
    #[validate(
        required(message = "Name is required"),
        custom(function = name_not_blank),
        length(max = 100, message = "Name must have at most 100 characters")
    )]
    pub name: Option<String>,
    #[validate(length(max = 255, message = "Description must have at most 255 characters"))]
    pub description: Option<String>,
}

/// Validated create payload carrying domain values.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateResourceFormPayload {
    pub name: ResourceName,
    pub description: Option<ResourceDescription>,
}

impl CreateResourceFormPayload {
    pub fn into_new_resource(self) -> NewResource {
        let now = Utc::now().naive_utc();
        NewResource {
            name: self.name,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateResourceFormError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateResourceFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(join_field_errors(&value))
    }
}

impl From<TypeConstraintError> for CreateResourceFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateResourceForm> for CreateResourceFormPayload {
    type Error = CreateResourceFormError;

    fn try_from(value: CreateResourceForm) -> Result<Self, Self::Error> {
        value.validate()?;
        // validate() guarantees a present, non-blank name.
        let name = value.name.unwrap_or_default();

        Ok(Self {
            name: ResourceName::new(name)?,
            description: value
                .description
                .map(ResourceDescription::new)
                .transpose()?,
        })
    }
}
