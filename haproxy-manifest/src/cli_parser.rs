// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! Usage and help text for the haproxy-manifest binary.

use haproxy_manifest::config::{FlagKind, FlagSpec};

/// Print general usage information.
pub fn print_usage() {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        "haproxy-manifest - haproxy deployment manifest generator v{}

USAGE:
    haproxy-manifest [COMMAND] [OPTIONS]

COMMANDS:
    get-product  Generate the deployment manifest (default when flags are given)
    meta         Show metadata for this deployment type
    flags        List accepted flags, their defaults and environment variables
    version      Show version information
    help         Show this help message

EXAMPLES:
    haproxy-manifest get-product --network-name net1 --az z1 --haproxy-ip 10.0.0.5 \\
        --gorouter-ip 10.0.0.20 --cert-filepath ./lb.pem
    haproxy-manifest meta --json
    haproxy-manifest help get-product

ENVIRONMENT:
    OMG_<FLAG>                   Value for a flag not given on the command line
                                 (e.g. OMG_AZ, OMG_NETWORK_NAME; lists are comma-separated)
    HAPROXY_MANIFEST_DEFAULTS    TOML file overriding built-in defaults
    HAPROXY_MANIFEST_LOG_FORMAT  Log format on stderr (text, json)
    RUST_LOG                     Log level (debug, info, warn, error)

EXIT CODES:
    0  Success
    1  Missing required parameter or serialization failure
    2  Invalid flags or defaults file
",
        version
    );
}

/// Print detailed help for a specific command.
pub fn print_command_help(command: &str, flags: &[FlagSpec]) {
    match command {
        "get-product" => print_get_product_help(flags),
        "meta" => print_meta_help(),
        "flags" => print_flags_help(),
        _ => {
            eprintln!(
                "No detailed help available for '{}'. Use 'haproxy-manifest help' for general usage.",
                command
            );
        }
    }
}

fn print_get_product_help(flags: &[FlagSpec]) {
    eprintln!(
        "haproxy-manifest get-product - Generate the deployment manifest

USAGE:
    haproxy-manifest get-product --network-name <NAME> --az <AZ>... [OPTIONS]

The manifest is written to stdout as YAML.

FLAGS:"
    );
    for line in flag_lines(flags) {
        eprintln!("{}", line);
    }
    eprintln!(
        "
NOTES:
    Certificate files are read in order. The first unreadable file stops
    reading: later files are left out of the manifest and an error is logged.

EXIT CODES:
    0  Manifest written
    1  --network-name or --az missing
    2  Invalid flags
"
    );
}

fn print_meta_help() {
    eprintln!(
        "haproxy-manifest meta - Show deployment metadata

USAGE:
    haproxy-manifest meta [--json]

OPTIONS:
    --json  Output in JSON format (default: YAML)
"
    );
}

fn print_flags_help() {
    eprintln!(
        "haproxy-manifest flags - List accepted flags

USAGE:
    haproxy-manifest flags [--json]

OPTIONS:
    --json  Output in JSON format (default: table)
"
    );
}

/// One line per flag: name, arity, requirement, default and env var.
pub fn flag_lines(flags: &[FlagSpec]) -> Vec<String> {
    flags
        .iter()
        .map(|flag| {
            let mut line = format!("    --{:<22}", flag.name);
            if flag.kind == FlagKind::Multi {
                line.push_str(" (repeatable)");
            }
            if flag.required {
                line.push_str(" (required)");
            }
            if let Some(default) = &flag.default {
                line.push_str(&format!(" [default: {}]", default));
            }
            line.push_str(&format!(" [env: {}]", flag.env_var()));
            line.push_str(&format!("\n        {}", flag.usage));
            line
        })
        .collect()
}
