// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for the flag table.

use std::collections::HashSet;

use super::*;

fn find<'a>(table: &'a [FlagSpec], name: &str) -> &'a FlagSpec {
    table.iter().find(|f| f.name == name).unwrap()
}

#[test]
fn test_env_var_name() {
    assert_eq!(env_var_name("az"), "OMG_AZ");
    assert_eq!(env_var_name("haproxy-release-ver"), "OMG_HAPROXY_RELEASE_VER");
    assert_eq!(env_var_name("cert-filepath"), "OMG_CERT_FILEPATH");
}

#[test]
fn test_flag_names_unique() {
    let table = flag_table(&Defaults::default());
    let names: HashSet<_> = table.iter().map(|f| f.name).collect();
    assert_eq!(names.len(), table.len());
}

#[test]
fn test_every_field_bound_once() {
    let table = flag_table(&Defaults::default());
    let fields: HashSet<_> = table.iter().map(|f| f.field).collect();
    assert_eq!(fields.len(), table.len());
    assert_eq!(table.len(), 17);
}

#[test]
fn test_required_flags() {
    let table = flag_table(&Defaults::default());
    let required: Vec<_> = table.iter().filter(|f| f.required).map(|f| f.name).collect();
    assert_eq!(required, vec!["az", "network-name"]);
}

#[test]
fn test_defaults_seeded_from_value_object() {
    let defaults = Defaults {
        stemcell_version: "9999.1".to_string(),
        ..Defaults::default()
    };
    let table = flag_table(&defaults);
    assert_eq!(find(&table, "stemcell-ver").default.as_deref(), Some("9999.1"));
    assert_eq!(find(&table, "deployment-name").default.as_deref(), Some("haproxy"));
    assert_eq!(
        find(&table, "haproxy-release-sha").default.as_deref(),
        Some(defaults.release_sha.as_str())
    );
    assert!(find(&table, "stemcell-url").default.is_none());
    assert!(find(&table, "haproxy-ip").default.is_none());
}

#[test]
fn test_list_flags_are_multi() {
    let table = flag_table(&Defaults::default());
    for name in [
        "az",
        "gorouter-ip",
        "cert-filepath",
        "internal-only-domain",
        "trusted-domain-cidr",
    ] {
        assert_eq!(find(&table, name).kind, FlagKind::Multi, "{}", name);
    }
    assert_eq!(find(&table, "network-name").kind, FlagKind::Single);
}

#[test]
fn test_apply_single_takes_last_value() {
    let mut record = ConfigRecord::with_defaults(&Defaults::default());
    FlagField::NetworkName.apply(&mut record, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(record.network_name, "b");
}

#[test]
fn test_apply_empty_clears_optional() {
    let mut record = ConfigRecord::with_defaults(&Defaults::default());
    assert!(record.release_url.is_some());
    FlagField::ReleaseUrl.apply(&mut record, vec![String::new()]);
    assert!(record.release_url.is_none());
}

#[test]
fn test_apply_multi_keeps_order() {
    let mut record = ConfigRecord::with_defaults(&Defaults::default());
    FlagField::BackendTargets.apply(
        &mut record,
        vec!["10.0.0.21".to_string(), "10.0.0.20".to_string()],
    );
    assert_eq!(record.backend_targets, vec!["10.0.0.21", "10.0.0.20"]);
}
