// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Projects a [`ConfigRecord`] onto a [`Manifest`].

use crate::config::{ConfigRecord, ValidationError};

use super::types::{
    HaProxy, HaproxyJob, InstanceGroup, InstanceJob, Manifest, Network, Release, Stemcell, Update,
};

/// Release providing the haproxy job.
pub const RELEASE_NAME: &str = "haproxy";

/// Name of the single instance group.
pub const INSTANCE_GROUP_NAME: &str = "external-haproxy";

/// Name of the single job.
pub const JOB_NAME: &str = "haproxy";

/// Exactly one haproxy VM is deployed.
pub const INSTANCE_COUNT: u32 = 1;

/// Watch window applied to both canaries and regular updates, in ms.
pub const WATCH_TIME: &str = "30000-300000";

/// Rollout policy for the haproxy instance group. Never derived from input.
pub fn update_policy() -> Update {
    Update {
        canaries: 1,
        max_in_flight: 1,
        canary_watch_time: WATCH_TIME.to_string(),
        update_watch_time: WATCH_TIME.to_string(),
        serial: false,
    }
}

/// Builds haproxy manifests. Holds no state; defaults reach it already
/// folded into the [`ConfigRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestBuilder;

impl ManifestBuilder {

    /// Build a manifest with exactly one instance group running one job.
    ///
    /// `pems` are the resolved certificate contents, in order.
    ///
    /// # Errors
    /// Returns `ValidationError` if the record is missing a required field;
    /// no manifest is produced in that case.
    pub fn build(&self, record: &ConfigRecord, pems: Vec<String>) -> Result<Manifest, ValidationError> {
        record.validate()?;

        Ok(Manifest {
            name: record.deployment_name.clone(),
            releases: vec![Self::release(record)],
            stemcells: vec![stemcell(record)],
            update: update_policy(),
            instance_groups: vec![Self::instance_group(record, pems)],
        })
    }

    fn release(record: &ConfigRecord) -> Release {
        Release {
            name: RELEASE_NAME.to_string(),
            version: record.release_version.clone(),
            url: record.release_url.clone(),
            sha1: record.release_sha.clone(),
        }
    }

    fn instance_group(record: &ConfigRecord, pems: Vec<String>) -> InstanceGroup {
        InstanceGroup {
            name: INSTANCE_GROUP_NAME.to_string(),
            instances: INSTANCE_COUNT,
            azs: record.availability_zones.clone(),
            stemcell: record.stemcell_alias.clone(),
            networks: networks(record),
            jobs: vec![Self::job(record, pems)],
        }
    }

    fn job(record: &ConfigRecord, pems: Vec<String>) -> InstanceJob {
        InstanceJob {
            name: JOB_NAME.to_string(),
            release: RELEASE_NAME.to_string(),
            properties: HaproxyJob {
                ha_proxy: HaProxy {
                    backend_servers: record.backend_targets.clone(),
                    ssl_pem: pems,
                    syslog_server: record.syslog_url.clone().unwrap_or_default(),
                    trusted_domain_cidrs: record.trusted_domain_cidrs.clone(),
                    internal_only_domains: record.internal_only_domains.clone(),
                },
            },
        }
    }
}

fn stemcell(record: &ConfigRecord) -> Stemcell {
    Stemcell {
        alias: record.stemcell_alias.clone(),
        os: record.stemcell_name.clone(),
        version: record.stemcell_version.clone(),
        url: record.stemcell_url.clone(),
        sha1: record.stemcell_sha.clone(),
    }
}

/// A single static binding, or none when no instance IP is set.
fn networks(record: &ConfigRecord) -> Vec<Network> {
    match &record.instance_ip {
        Some(ip) => vec![Network {
            name: record.network_name.clone(),
            static_ips: vec![ip.clone()],
        }],
        None => Vec::new(),
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
