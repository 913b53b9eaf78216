// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Typed deployment parameters.

use super::defaults::Defaults;
use super::validation::{require_list, require_value, ValidationError};

/// All parameters for one haproxy deployment.
///
/// Built fresh per invocation by the flag binder and never mutated after the
/// manifest is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRecord {
    pub deployment_name: String,
    /// Network the haproxy VM attaches to. Required.
    pub network_name: String,
    pub release_version: String,
    pub release_url: Option<String>,
    pub release_sha: Option<String>,
    pub stemcell_name: String,
    pub stemcell_version: String,
    pub stemcell_alias: String,
    pub stemcell_url: Option<String>,
    pub stemcell_sha: Option<String>,
    /// Availability zones, in order. Required, non-empty.
    pub availability_zones: Vec<String>,
    /// Upstream addresses haproxy balances across.
    pub backend_targets: Vec<String>,
    /// Static IP of the haproxy VM. No network binding is emitted without it.
    pub instance_ip: Option<String>,
    pub certificate_paths: Vec<String>,
    pub syslog_url: Option<String>,
    pub internal_only_domains: Vec<String>,
    pub trusted_domain_cidrs: Vec<String>,
}

impl ConfigRecord {
    /// Create a record holding only default values.
    ///
    /// The result does not validate until a network name and at least one
    /// availability zone are set.
    pub fn with_defaults(defaults: &Defaults) -> Self {
        Self {
            deployment_name: defaults.deployment_name.clone(),
            network_name: String::new(),
            release_version: defaults.release_version.clone(),
            release_url: non_empty(&defaults.release_url),
            release_sha: non_empty(&defaults.release_sha),
            stemcell_name: defaults.stemcell_name.clone(),
            stemcell_version: defaults.stemcell_version.clone(),
            stemcell_alias: defaults.stemcell_alias.clone(),
            stemcell_url: None,
            stemcell_sha: None,
            availability_zones: Vec::new(),
            backend_targets: Vec::new(),
            instance_ip: None,
            certificate_paths: Vec::new(),
            syslog_url: None,
            internal_only_domains: Vec::new(),
            trusted_domain_cidrs: Vec::new(),
        }
    }

    /// Check required fields.
    ///
    /// Only the network name and the availability zones are inspected.
    ///
    /// # Errors
    /// Returns `ValidationError::MissingRequiredField` naming the first
    /// missing flag.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_value(&self.network_name, "network-name")?;
        require_list(&self.availability_zones, "az")?;
        Ok(())
    }
}

/// Map an empty string to `None`.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
