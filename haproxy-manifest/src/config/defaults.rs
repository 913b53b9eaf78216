// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Built-in defaults for the haproxy deployment.
//!
//! A single [`Defaults`] value is constructed at process start and threaded
//! through the flag table, the builder and the metadata provider. Individual
//! values can be overridden by a TOML file named in
//! [`DEFAULTS_FILE_ENV`]; keys missing from the file keep their built-in
//! value. The release, instance group and job names and the instance
//! count are fixed in [`crate::manifest::builder`] and cannot be overridden.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an optional defaults override file.
pub const DEFAULTS_FILE_ENV: &str = "HAPROXY_MANIFEST_DEFAULTS";

/// Errors loading a defaults override file.
#[derive(Debug, Error)]
pub enum DefaultsError {
    #[error("failed to read defaults file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid defaults file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Immutable default values for a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub deployment_name: String,
    pub release_version: String,
    pub release_url: String,
    pub release_sha: String,
    pub stemcell_name: String,
    pub stemcell_alias: String,
    pub stemcell_version: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            deployment_name: "haproxy".to_string(),
            release_version: "latest".to_string(),
            release_url: "https://bosh.io/d/github.com/cloudfoundry-community/haproxy-boshrelease?v=8.0.9"
                .to_string(),
            release_sha: "13598c70a50f8caf95d06782d67610daede8aeb9".to_string(),
            stemcell_name: "ubuntu-trusty".to_string(),
            stemcell_alias: "trusty".to_string(),
            stemcell_version: "3232.17".to_string(),
        }
    }
}

impl Defaults {
    /// Load defaults, applying the override file named by
    /// `HAPROXY_MANIFEST_DEFAULTS` when it is set.
    ///
    /// # Errors
    /// Returns `DefaultsError` if the override file cannot be read or parsed.
    pub fn load() -> Result<Self, DefaultsError> {
        match std::env::var_os(DEFAULTS_FILE_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    /// Read an override file from disk.
    pub fn from_file(path: &Path) -> Result<Self, DefaultsError> {
        let text = std::fs::read_to_string(path).map_err(|source| DefaultsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded defaults override file");
        Self::from_toml_str(&text)
    }

    /// Parse overrides from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, DefaultsError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
