// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Validation errors and field predicates for deployment parameters.

use thiserror::Error;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field that must be present was empty. Carries the flag name.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
}

/// Require a non-empty scalar value.
pub fn require_value(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingRequiredField(field_name));
    }
    Ok(())
}

/// Require a list with at least one entry.
pub fn require_list(values: &[String], field_name: &'static str) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::MissingRequiredField(field_name));
    }
    Ok(())
}
