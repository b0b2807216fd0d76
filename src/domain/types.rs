//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers and text constraints are enforced at the boundary.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a resource name.
pub const RESOURCE_NAME_MAX_LEN: usize = 100;

/// Maximum length of a resource description.
pub const RESOURCE_DESCRIPTION_MAX_LEN: usize = 255;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A string exceeded its maximum length.
    #[error("{0} must have at most {1} characters")]
    TooLong(&'static str, usize),
}

/// Unique identifier for a resource.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ResourceId(i32);

impl ResourceId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId("resource_id"))
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for ResourceId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceId> for i32 {
    fn from(value: ResourceId) -> Self {
        value.0
    }
}

impl PartialEq<i32> for ResourceId {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<ResourceId> for i32 {
    fn eq(&self, other: &ResourceId) -> bool {
        *self == other.0
    }
}

/// Resource display name: trimmed, non-empty, at most 100 characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ResourceName(String);

impl ResourceName {
    /// Constructs a trimmed, non-empty, length-bounded name.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString("name"));
        }
        if trimmed.chars().count() > RESOURCE_NAME_MAX_LEN {
            return Err(TypeConstraintError::TooLong("name", RESOURCE_NAME_MAX_LEN));
        }
        Ok(Self(trimmed))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ResourceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for ResourceName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ResourceName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ResourceName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceName> for String {
    fn from(value: ResourceName) -> Self {
        value.0
    }
}

impl PartialEq<&str> for ResourceName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<ResourceName> for &str {
    fn eq(&self, other: &ResourceName) -> bool {
        *self == other.as_str()
    }
}

/// Resource free-text description: at most 255 characters, stored as provided.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ResourceDescription(String);

impl ResourceDescription {
    /// Constructs a length-bounded description. Empty values are allowed.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.chars().count() > RESOURCE_DESCRIPTION_MAX_LEN {
            return Err(TypeConstraintError::TooLong(
                "description",
                RESOURCE_DESCRIPTION_MAX_LEN,
            ));
        }
        Ok(Self(value))
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ResourceDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for ResourceDescription {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for ResourceDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ResourceDescription {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ResourceDescription {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceDescription> for String {
    fn from(value: ResourceDescription) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_ids() {
        let err = ResourceId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("resource_id"));
        assert!(ResourceId::new(-7).is_err());
        assert_eq!(ResourceId::new(1).unwrap().get(), 1);
    }

    #[test]
    fn trims_resource_names() {
        let name = ResourceName::new("  Server Rack  ").unwrap();
        assert_eq!(name.as_str(), "Server Rack");
    }

    #[test]
    fn rejects_blank_resource_names() {
        assert_eq!(
            ResourceName::new("   ").unwrap_err(),
            TypeConstraintError::EmptyString("name")
        );
    }

    #[test]
    fn rejects_over_length_resource_names() {
        let name = "x".repeat(RESOURCE_NAME_MAX_LEN + 1);
        assert_eq!(
            ResourceName::new(name).unwrap_err(),
            TypeConstraintError::TooLong("name", RESOURCE_NAME_MAX_LEN)
        );
    }

    #[test]
    fn accepts_max_length_resource_names() {
        let name = "x".repeat(RESOURCE_NAME_MAX_LEN);
        assert!(ResourceName::new(name).is_ok());
    }

    #[test]
    fn descriptions_allow_empty_but_bound_length() {
        assert!(ResourceDescription::new("").is_ok());
        let long = "x".repeat(RESOURCE_DESCRIPTION_MAX_LEN + 1);
        assert_eq!(
            ResourceDescription::new(long).unwrap_err(),
            TypeConstraintError::TooLong("description", RESOURCE_DESCRIPTION_MAX_LEN)
        );
    }
}
