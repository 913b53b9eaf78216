// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Manifest serialization.

use super::types::Manifest;

/// Turns a manifest into bytes in some output format.
pub trait ManifestSerializer {
    type Error: std::error::Error + Send + Sync + 'static;

    fn serialize(&self, manifest: &Manifest) -> Result<Vec<u8>, Self::Error>;
}

/// YAML output, the format deployment orchestrators consume.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSerializer;

impl ManifestSerializer for YamlSerializer {
    type Error = serde_yaml::Error;

    fn serialize(&self, manifest: &Manifest) -> Result<Vec<u8>, Self::Error> {
        serde_yaml::to_string(manifest).map(String::into_bytes)
    }
}
