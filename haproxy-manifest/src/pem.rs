// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Certificate bundle resolution.
//!
//! # Partial failure
//! Paths are read in order. The first unreadable path stops resolution:
//! the contents read so far are returned and every later path is dropped,
//! readable or not. No error reaches the caller; the failure is only
//! logged. Downstream manifests may rely on this, so it is kept as is.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only access to certificate files.
pub trait FileSource {
    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl FileSource for FsSource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// In-memory file source keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous contents.
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl FileSource for MemorySource {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })
    }
}

/// Resolves certificate paths to their PEM contents.
#[derive(Debug, Clone, Default)]
pub struct PemResolver<S = FsSource> {
    source: S,
}

impl PemResolver<FsSource> {
    /// Resolver over the local filesystem.
    pub fn filesystem() -> Self {
        Self { source: FsSource }
    }
}

impl<S: FileSource> PemResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read each path in order and collect the contents.
    ///
    /// Stops at the first unreadable path; see the module docs.
    pub fn resolve<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<String> {
        let mut pems = Vec::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            let path = path.as_ref();
            match self.source.read_to_string(path) {
                Ok(pem) => pems.push(pem),
                Err(e) => {
                    tracing::error!(
                        path = %path.display(),
                        error = %e,
                        dropped = paths.len() - index - 1,
                        "cannot read pem file, skipping remaining certificates"
                    );
                    break;
                }
            }
        }
        pems
    }
}

#[cfg(test)]
#[path = "pem_tests.rs"]
mod tests;
