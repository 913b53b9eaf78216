// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end manifest generation.
//!
//! Binds flags into a [`ConfigRecord`], validates it, resolves certificate
//! contents, builds the manifest and serializes it. Every step runs
//! synchronously on the calling thread.

use std::ffi::OsString;

use crate::config::{bind, flag_table, ConfigRecord, Defaults, FlagSpec};
use crate::error::PluginResult;
use crate::manifest::{ManifestBuilder, ManifestSerializer, YamlSerializer};
use crate::metadata::{Metadata, MetadataProvider};
use crate::pem::{FileSource, FsSource, PemResolver};

/// The haproxy manifest generator.
#[derive(Debug, Clone)]
pub struct Plugin {
    version: String,
    defaults: Defaults,
}

impl Plugin {
    pub fn new(version: impl Into<String>, defaults: Defaults) -> Self {
        Self {
            version: version.into(),
            defaults,
        }
    }

    /// Generate a manifest from an argument vector, reading certificates
    /// from the local filesystem. `args[0]` is the program name.
    ///
    /// # Errors
    /// Returns `PluginError` on flag binding, validation or serialization
    /// failure.
    pub fn get_product<I, T>(&self, args: I) -> PluginResult<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.get_product_with(args, &PemResolver::<FsSource>::filesystem())
    }

    /// Like [`Plugin::get_product`] with an injected certificate source.
    pub fn get_product_with<I, T, S>(&self, args: I, resolver: &PemResolver<S>) -> PluginResult<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        S: FileSource,
    {
        let record = bind(args, &self.defaults)?;
        self.generate(&record, resolver)
    }

    /// Generate a manifest from an already bound record.
    ///
    /// Validation runs before any certificate file is read.
    pub fn generate<S: FileSource>(&self, record: &ConfigRecord, resolver: &PemResolver<S>) -> PluginResult<Vec<u8>> {
        record.validate()?;
        tracing::debug!(
            deployment = %record.deployment_name,
            certificates = record.certificate_paths.len(),
            "resolving certificates"
        );

        let pems = resolver.resolve(&record.certificate_paths);
        let manifest = ManifestBuilder.build(record, pems)?;
        let bytes = YamlSerializer.serialize(&manifest)?;

        tracing::info!(
            deployment = %manifest.name,
            bytes = bytes.len(),
            "generated manifest"
        );
        Ok(bytes)
    }

    /// Metadata for this deployment type.
    pub fn get_meta(&self) -> Metadata {
        MetadataProvider::new(&self.defaults, &self.version).describe()
    }

    /// The flag table, with defaults applied.
    pub fn get_flags(&self) -> Vec<FlagSpec> {
        flag_table(&self.defaults)
    }
}

impl Default for Plugin {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"), Defaults::default())
    }
}
