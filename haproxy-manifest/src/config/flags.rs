// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Flag table for deployment parameters.
//!
//! Each row maps a flag name to the [`ConfigRecord`] field it fills, its
//! default and whether it is required. The binder builds its command-line
//! parser from this table and the `flags` command prints it.

use serde::Serialize;

use super::defaults::Defaults;
use super::record::{non_empty, ConfigRecord};

/// Prefix for environment variables backing flags.
pub const ENV_PREFIX: &str = "OMG_";

/// Whether a flag takes one value or may be repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    Single,
    Multi,
}

/// Record field a flag binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagField {
    DeploymentName,
    AvailabilityZones,
    NetworkName,
    StemcellName,
    StemcellAlias,
    StemcellVersion,
    StemcellUrl,
    StemcellSha,
    ReleaseVersion,
    ReleaseUrl,
    ReleaseSha,
    BackendTargets,
    InstanceIp,
    CertificatePaths,
    SyslogUrl,
    InternalOnlyDomains,
    TrustedDomainCidrs,
}

impl FlagField {
    /// Store bound values into the record.
    ///
    /// Single-valued fields take the last value; an empty value clears an
    /// optional field.
    pub fn apply(self, record: &mut ConfigRecord, values: Vec<String>) {
        let last = values.last().cloned().unwrap_or_default();
        match self {
            Self::DeploymentName => record.deployment_name = last,
            Self::NetworkName => record.network_name = last,
            Self::StemcellName => record.stemcell_name = last,
            Self::StemcellAlias => record.stemcell_alias = last,
            Self::StemcellVersion => record.stemcell_version = last,
            Self::ReleaseVersion => record.release_version = last,
            Self::StemcellUrl => record.stemcell_url = non_empty(&last),
            Self::StemcellSha => record.stemcell_sha = non_empty(&last),
            Self::ReleaseUrl => record.release_url = non_empty(&last),
            Self::ReleaseSha => record.release_sha = non_empty(&last),
            Self::InstanceIp => record.instance_ip = non_empty(&last),
            Self::SyslogUrl => record.syslog_url = non_empty(&last),
            Self::AvailabilityZones => record.availability_zones = values,
            Self::BackendTargets => record.backend_targets = values,
            Self::CertificatePaths => record.certificate_paths = values,
            Self::InternalOnlyDomains => record.internal_only_domains = values,
            Self::TrustedDomainCidrs => record.trusted_domain_cidrs = values,
        }
    }
}

/// One row of the flag table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagSpec {
    pub name: &'static str,
    pub field: FlagField,
    pub kind: FlagKind,
    pub default: Option<String>,
    pub required: bool,
    pub usage: &'static str,
}

impl FlagSpec {
    fn single(name: &'static str, field: FlagField, usage: &'static str) -> Self {
        Self {
            name,
            field,
            kind: FlagKind::Single,
            default: None,
            required: false,
            usage,
        }
    }

    fn multi(name: &'static str, field: FlagField, usage: &'static str) -> Self {
        Self {
            kind: FlagKind::Multi,
            ..Self::single(name, field, usage)
        }
    }

    fn default_value(mut self, value: &str) -> Self {
        self.default = non_empty(value);
        self
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Environment variable consulted when the flag is not given.
    pub fn env_var(&self) -> String {
        env_var_name(self.name)
    }
}

/// Environment variable name for a flag: `az` becomes `OMG_AZ`.
pub fn env_var_name(flag_name: &str) -> String {
    format!("{}{}", ENV_PREFIX, flag_name.to_uppercase().replace('-', "_"))
}

/// Build the flag table, seeding defaults from `defaults`.
pub fn flag_table(defaults: &Defaults) -> Vec<FlagSpec> {
    use FlagField::*;

    vec![
        FlagSpec::single(
            "deployment-name",
            DeploymentName,
            "the name bosh will use for this deployment",
        )
        .default_value(&defaults.deployment_name),
        FlagSpec::multi(
            "az",
            AvailabilityZones,
            "the list of Availability Zones where you wish to deploy haproxy",
        )
        .required(),
        FlagSpec::single(
            "network-name",
            NetworkName,
            "the network where you wish to deploy haproxy",
        )
        .required(),
        FlagSpec::single("stemcell-name", StemcellName, "the name of the stemcell you wish to use")
            .default_value(&defaults.stemcell_name),
        FlagSpec::single("stemcell-alias", StemcellAlias, "the alias of the stemcell you wish to use")
            .default_value(&defaults.stemcell_alias),
        FlagSpec::single("stemcell-ver", StemcellVersion, "the version of the stemcell you wish to use")
            .default_value(&defaults.stemcell_version),
        FlagSpec::single(
            "stemcell-url",
            StemcellUrl,
            "the url of the stemcell you wish to use (optional: a stemcell already uploaded to bosh is used by default)",
        ),
        FlagSpec::single(
            "stemcell-sha",
            StemcellSha,
            "the sha of the stemcell you wish to use (if you're giving an optional stemcell URL)",
        ),
        FlagSpec::single(
            "haproxy-release-ver",
            ReleaseVersion,
            "the version of the release to use for the deployment",
        )
        .default_value(&defaults.release_version),
        FlagSpec::single(
            "haproxy-release-url",
            ReleaseUrl,
            "the URL of the release to use for the deployment",
        )
        .default_value(&defaults.release_url),
        FlagSpec::single(
            "haproxy-release-sha",
            ReleaseSha,
            "the SHA of the release to use for the deployment",
        )
        .default_value(&defaults.release_sha),
        FlagSpec::multi(
            "gorouter-ip",
            BackendTargets,
            "gorouter ips (give flag multiple times for multiple IPs)",
        ),
        FlagSpec::single("haproxy-ip", InstanceIp, "ip for haproxy vm to listen on"),
        FlagSpec::multi(
            "cert-filepath",
            CertificatePaths,
            "the path to your pem file containing entire chain (give multiple flags to use multiple pems)",
        ),
        FlagSpec::single("syslog-url", SyslogUrl, "url for the optionally targeted syslog drain"),
        FlagSpec::multi(
            "internal-only-domain",
            InternalOnlyDomains,
            "domains for internal-only apps/services, not hostnames (give multiple flags to use multiple domains)",
        ),
        FlagSpec::multi(
            "trusted-domain-cidr",
            TrustedDomainCidrs,
            "trusted domain cidrs to be used with internal only domains (give multiple flags to use multiple cidrs)",
        ),
    ]
}

#[cfg(test)]
#[path = "flags_tests.rs"]
mod tests;
