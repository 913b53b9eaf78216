// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for deployment defaults.

use std::io::Write;

use super::*;

#[test]
fn test_builtin_defaults() {
    let defaults = Defaults::default();
    assert_eq!(defaults.deployment_name, "haproxy");
    assert_eq!(defaults.release_version, "latest");
    assert_eq!(defaults.stemcell_name, "ubuntu-trusty");
    assert_eq!(defaults.stemcell_alias, "trusty");
    assert_eq!(defaults.stemcell_version, "3232.17");
}

#[test]
fn test_empty_override_keeps_builtins() {
    let defaults = Defaults::from_toml_str("").unwrap();
    assert_eq!(defaults, Defaults::default());
}

#[test]
fn test_partial_override() {
    let defaults = Defaults::from_toml_str(
        r#"
        stemcell_version = "3586.42"
        deployment_name = "edge-lb"
        "#,
    )
    .unwrap();
    assert_eq!(defaults.stemcell_version, "3586.42");
    assert_eq!(defaults.deployment_name, "edge-lb");
    assert_eq!(defaults.stemcell_alias, "trusty");
    assert_eq!(defaults.release_version, "latest");
}

#[test]
fn test_unknown_key_rejected() {
    let err = Defaults::from_toml_str("max_in_flight = 4").unwrap_err();
    assert!(matches!(err, DefaultsError::Parse(_)));
}

#[test]
fn test_fixed_shape_not_overridable() {
    for text in [
        "instance_count = 3",
        "instance_count = 0",
        "instance_group_name = \"other\"",
        "job_name = \"other\"",
        "release_name = \"nginx\"",
    ] {
        let err = Defaults::from_toml_str(text).unwrap_err();
        assert!(matches!(err, DefaultsError::Parse(_)), "{}", text);
    }
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "release_version = \"8.0.9\"").unwrap();

    let defaults = Defaults::from_file(file.path()).unwrap();
    assert_eq!(defaults.release_version, "8.0.9");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Defaults::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, DefaultsError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
