// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Deployment parameters: defaults, flag table, binding and validation.

pub mod binder;
pub mod defaults;
pub mod flags;
pub mod record;
pub mod validation;

pub use binder::bind;
pub use defaults::{Defaults, DefaultsError, DEFAULTS_FILE_ENV};
pub use flags::{env_var_name, flag_table, FlagField, FlagKind, FlagSpec};
pub use record::ConfigRecord;
pub use validation::ValidationError;
