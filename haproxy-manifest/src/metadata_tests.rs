// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for deployment metadata.

use super::*;

#[test]
fn test_describe_defaults() {
    let defaults = Defaults::default();
    let meta = MetadataProvider::new(&defaults, "0.0").describe();

    assert_eq!(meta.name, "haproxy");
    assert_eq!(meta.stemcell.name, "ubuntu-trusty");
    assert_eq!(meta.stemcell.alias, "trusty");
    assert_eq!(meta.stemcell.version, "3232.17");

    assert_eq!(meta.releases.len(), 1);
    assert_eq!(meta.releases[0].name, "haproxy");
    assert_eq!(meta.releases[0].version, "latest");
    assert_eq!(meta.releases[0].url.as_deref(), Some(defaults.release_url.as_str()));
    assert_eq!(meta.releases[0].sha1.as_deref(), Some(defaults.release_sha.as_str()));
}

#[test]
fn test_properties() {
    let defaults = Defaults::default();
    let meta = MetadataProvider::new(&defaults, "1.2.3").describe();

    assert_eq!(meta.properties["version"], "1.2.3");
    assert_eq!(meta.properties["stemcell"], "3232.17");
    assert_eq!(meta.properties["haproxy"], "haproxy / latest");
    assert!(meta.properties.contains_key("description"));
    assert_eq!(meta.properties.len(), 4);
}

#[test]
fn test_describe_tracks_overridden_defaults() {
    let defaults = Defaults {
        stemcell_version: "3586.42".to_string(),
        release_url: String::new(),
        ..Defaults::default()
    };
    let meta = MetadataProvider::new(&defaults, "0.0").describe();
    assert_eq!(meta.stemcell.version, "3586.42");
    assert_eq!(meta.properties["stemcell"], "3586.42");
    assert!(meta.releases[0].url.is_none());
}

#[test]
fn test_describe_is_stable() {
    let defaults = Defaults::default();
    let provider = MetadataProvider::new(&defaults, "0.0");
    let first = serde_json::to_string(&provider.describe()).unwrap();
    let second = serde_json::to_string(&provider.describe()).unwrap();
    assert_eq!(first, second);
}
