// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Compiles haproxy load-balancer deployment parameters into a BOSH
//! deployment manifest.
//!
//! The pipeline is: flags are bound into a [`ConfigRecord`], the record is
//! validated, certificate files are resolved by a [`PemResolver`], the
//! [`ManifestBuilder`] projects everything onto a [`Manifest`], and a
//! [`ManifestSerializer`] writes the bytes. [`Plugin`] runs all of it.

pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod metadata;
pub mod pem;
pub mod plugin;

pub use config::{ConfigRecord, Defaults, ValidationError};
pub use error::{PluginError, PluginResult};
pub use manifest::{Manifest, ManifestBuilder, ManifestSerializer, YamlSerializer};
pub use metadata::{Metadata, MetadataProvider};
pub use pem::{FileSource, FsSource, MemorySource, PemResolver};
pub use plugin::Plugin;
