// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Descriptive facts about the haproxy deployment type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::record::non_empty;
use crate::config::Defaults;
use crate::manifest::builder::RELEASE_NAME;
use crate::manifest::Release;

/// Deployment type name reported to the orchestrator.
pub const PRODUCT_NAME: &str = "haproxy";

const DESCRIPTION: &str = "this plugin is designed to work with a special haproxy release";

/// Default stemcell facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemcellInfo {
    pub name: String,
    pub alias: String,
    pub version: String,
}

/// Introspection answer for this deployment type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub stemcell: StemcellInfo,
    pub releases: Vec<Release>,
    pub properties: BTreeMap<String, String>,
}

/// Answers metadata queries from the process-wide defaults.
#[derive(Debug, Clone)]
pub struct MetadataProvider<'a> {
    defaults: &'a Defaults,
    version: &'a str,
}

impl<'a> MetadataProvider<'a> {
    /// `version` is the version of this tool, reported as a property.
    pub fn new(defaults: &'a Defaults, version: &'a str) -> Self {
        Self { defaults, version }
    }

    pub fn describe(&self) -> Metadata {
        let d = self.defaults;
        let mut properties = BTreeMap::new();
        properties.insert("version".to_string(), self.version.to_string());
        properties.insert("stemcell".to_string(), d.stemcell_version.clone());
        properties.insert(
            "haproxy".to_string(),
            format!("{} / {}", RELEASE_NAME, d.release_version),
        );
        properties.insert("description".to_string(), DESCRIPTION.to_string());

        Metadata {
            name: PRODUCT_NAME.to_string(),
            stemcell: StemcellInfo {
                name: d.stemcell_name.clone(),
                alias: d.stemcell_alias.clone(),
                version: d.stemcell_version.clone(),
            },
            releases: vec![Release {
                name: RELEASE_NAME.to_string(),
                version: d.release_version.clone(),
                url: non_empty(&d.release_url),
                sha1: non_empty(&d.release_sha),
            }],
            properties,
        }
    }
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod tests;
