// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Deployment manifest types, assembly and serialization.

pub mod builder;
pub mod serializer;
pub mod types;
pub mod wire;

pub use builder::{
    update_policy, ManifestBuilder, INSTANCE_COUNT, INSTANCE_GROUP_NAME, JOB_NAME, RELEASE_NAME,
    WATCH_TIME,
};
pub use serializer::{ManifestSerializer, YamlSerializer};
pub use types::{
    HaProxy, HaproxyJob, InstanceGroup, InstanceJob, Manifest, Network, Release, Stemcell, Update,
};
