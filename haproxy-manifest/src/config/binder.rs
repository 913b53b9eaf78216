// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Binds an argument vector and the environment into a [`ConfigRecord`].

use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches, Command};

use super::defaults::Defaults;
use super::flags::{flag_table, FlagKind, FlagSpec};
use super::record::ConfigRecord;

/// Build the command-line parser for a flag table.
///
/// Every flag is a long option backed by its `OMG_*` environment variable.
/// Repeatable flags read comma-separated values from the environment.
pub fn command(table: &[FlagSpec]) -> Command {
    let args = table.iter().map(|spec| {
        let arg = Arg::new(spec.name)
            .long(spec.name)
            .env(spec.env_var())
            .help(spec.usage);
        let arg = match spec.kind {
            FlagKind::Single => arg.action(ArgAction::Set),
            FlagKind::Multi => arg.action(ArgAction::Append).value_delimiter(','),
        };
        match &spec.default {
            Some(value) => arg.default_value(value.clone()),
            None => arg,
        }
    });

    Command::new("get-product")
        .about("Generate a haproxy deployment manifest")
        .version(env!("CARGO_PKG_VERSION"))
        .args(args)
}

/// Parse `args` into a record. `args[0]` is the program name.
///
/// The record is not validated here.
///
/// # Errors
/// Returns the parser's error unchanged for malformed input, including
/// `--help` and `--version` requests.
pub fn bind<I, T>(args: I, defaults: &Defaults) -> Result<ConfigRecord, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let table = flag_table(defaults);
    let matches = command(&table).try_get_matches_from(args)?;
    Ok(record_from_matches(&table, &matches, defaults))
}

fn record_from_matches(table: &[FlagSpec], matches: &ArgMatches, defaults: &Defaults) -> ConfigRecord {
    let mut record = ConfigRecord::with_defaults(defaults);
    for spec in table {
        let mut values: Vec<String> = matches
            .get_many::<String>(spec.name)
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default();
        // `--az ""` and `--az ,` split into empty entries
        if spec.kind == FlagKind::Multi {
            values.retain(|v| !v.is_empty());
        }
        if values.is_empty() && spec.kind == FlagKind::Single {
            continue;
        }
        tracing::trace!(flag = spec.name, count = values.len(), "bound flag");
        spec.field.apply(&mut record, values);
    }
    record
}

#[cfg(test)]
#[path = "binder_tests.rs"]
mod tests;
