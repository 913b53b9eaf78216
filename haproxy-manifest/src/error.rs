// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pipeline error type.
//!
//! Unreadable certificate files are deliberately absent here: they truncate
//! the resolved PEM list instead of failing the build (see [`crate::pem`]).

use thiserror::Error;

use crate::config::{DefaultsError, ValidationError};

/// Errors from manifest generation.
#[derive(Debug, Error)]
pub enum PluginError {
    /// A required parameter was missing; no manifest was produced.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The argument vector could not be bound. Carries the parser error
    /// unchanged.
    #[error(transparent)]
    FlagBinding(#[from] clap::Error),

    #[error("manifest serialization failed: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error(transparent)]
    Defaults(#[from] DefaultsError),
}

impl PluginError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Serialize(_) => 1,
            Self::FlagBinding(_) | Self::Defaults(_) => 2,
        }
    }
}

/// Result alias for pipeline operations.
pub type PluginResult<T> = Result<T, PluginError>;
