// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Deployment manifest object graph.
//!
//! Field declaration order is the serialized key order, which keeps the
//! emitted manifest byte-stable for identical input.

use serde::{Deserialize, Serialize};

use super::wire::space_joined;

/// A complete deployment manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub releases: Vec<Release>,
    pub stemcells: Vec<Stemcell>,
    pub update: Update,
    pub instance_groups: Vec<InstanceGroup>,
}

impl Manifest {
    /// Look up an instance group by name.
    pub fn instance_group(&self, name: &str) -> Option<&InstanceGroup> {
        self.instance_groups.iter().find(|ig| ig.name == name)
    }

    /// Parse a serialized manifest.
    ///
    /// # Errors
    /// Returns the YAML error if `bytes` is not a manifest of this shape.
    pub fn from_yaml(bytes: &[u8]) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_slice(bytes)
    }
}

/// Release reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
}

/// Stemcell reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stemcell {
    pub alias: String,
    pub os: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
}

/// Rollout policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub canaries: u32,
    pub max_in_flight: u32,
    pub canary_watch_time: String,
    pub update_watch_time: String,
    pub serial: bool,
}

/// A set of identical VMs running the same jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceGroup {
    pub name: String,
    pub instances: u32,
    pub azs: Vec<String>,
    pub stemcell: String,
    /// Omitted entirely when no static IP is configured.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<Network>,
    pub jobs: Vec<InstanceJob>,
}

impl InstanceGroup {
    /// Look up a job by name.
    pub fn job(&self, name: &str) -> Option<&InstanceJob> {
        self.jobs.iter().find(|job| job.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    pub static_ips: Vec<String>,
}

/// A job placed on an instance group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceJob {
    pub name: String,
    pub release: String,
    pub properties: HaproxyJob,
}

/// Property tree of the haproxy job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaproxyJob {
    pub ha_proxy: HaProxy,
}

/// `ha_proxy` properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaProxy {
    #[serde(default)]
    pub backend_servers: Vec<String>,
    #[serde(default)]
    pub ssl_pem: Vec<String>,
    /// Empty string, never absent, when no drain is configured.
    #[serde(default)]
    pub syslog_server: String,
    /// Written as one space-separated string.
    #[serde(default, with = "space_joined")]
    pub trusted_domain_cidrs: Vec<String>,
    #[serde(default)]
    pub internal_only_domains: Vec<String>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
