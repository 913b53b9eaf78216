// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for PEM resolution.

use std::fs;

use super::*;

const PEM_A: &str = "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n";
const PEM_B: &str = "-----BEGIN CERTIFICATE-----\nBBBB\n-----END CERTIFICATE-----\n";

fn memory() -> PemResolver<MemorySource> {
    PemResolver::new(
        MemorySource::new()
            .with_file("a.pem", PEM_A)
            .with_file("b.pem", PEM_B),
    )
}

#[test]
fn test_no_paths_resolves_empty() {
    let paths: [&str; 0] = [];
    assert!(memory().resolve(&paths).is_empty());
}

#[test]
fn test_readable_paths_keep_order() {
    assert_eq!(memory().resolve(&["a.pem", "b.pem"]), vec![PEM_A, PEM_B]);
    assert_eq!(memory().resolve(&["b.pem", "a.pem"]), vec![PEM_B, PEM_A]);
}

#[test]
fn test_unreadable_last_path_dropped() {
    assert_eq!(memory().resolve(&["a.pem", "missing.pem"]), vec![PEM_A]);
}

#[test]
fn test_unreadable_path_truncates_rest() {
    let pems = memory().resolve(&["a.pem", "missing.pem", "b.pem"]);
    assert_eq!(pems, vec![PEM_A]);
}

#[test]
fn test_unreadable_first_path_resolves_empty() {
    assert!(memory().resolve(&["missing.pem", "a.pem"]).is_empty());
}

#[test]
fn test_same_path_twice() {
    assert_eq!(memory().resolve(&["a.pem", "a.pem"]), vec![PEM_A, PEM_A]);
}

#[test]
fn test_filesystem_source() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("pem1.pem");
    let b = dir.path().join("pem2.pem");
    fs::write(&a, PEM_A).unwrap();
    fs::write(&b, PEM_B).unwrap();

    let resolver = PemResolver::filesystem();
    assert_eq!(resolver.resolve(&[&a, &b]), vec![PEM_A, PEM_B]);

    let missing = dir.path().join("absent.pem");
    assert_eq!(resolver.resolve(&[&a, &missing, &b]), vec![PEM_A]);
}

#[test]
fn test_filesystem_rejects_non_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.pem");
    fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();
    assert!(PemResolver::filesystem().resolve(&[&bad]).is_empty());
}
