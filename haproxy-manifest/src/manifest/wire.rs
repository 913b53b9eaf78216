// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Wire-format transforms applied at the serialization boundary.
//!
//! The haproxy job takes `trusted_domain_cidrs` as one space-separated
//! string even though it is collected as a list. The object graph keeps the
//! list and converts only when serializing.

use serde::{Deserialize, Deserializer, Serializer};

/// Join values with single spaces. An empty list joins to `""`.
pub fn join_space_separated(values: &[String]) -> String {
    values.join(" ")
}

/// Split a space-separated string. Runs of whitespace count as one separator.
pub fn split_space_separated(joined: &str) -> Vec<String> {
    joined.split_whitespace().map(str::to_string).collect()
}

/// `#[serde(with = "space_joined")]` adapter for list fields written as one
/// scalar.
pub mod space_joined {
    use super::*;

    pub fn serialize<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&join_space_separated(values))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let joined = Option::<String>::deserialize(deserializer)?;
        Ok(joined.as_deref().map(split_space_separated).unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
