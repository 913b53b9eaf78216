// Copyright 2024-2026 haproxy-manifest Contributors
// SPDX-License-Identifier: Apache-2.0

//! haproxy-manifest entry point.
//!
//! Loads defaults once, then dispatches to manifest generation or one of the
//! introspection commands.

mod cli_parser;

use std::io::Write;
use std::process::ExitCode;

use clap::error::ErrorKind;
use haproxy_manifest::{logging, Defaults, Plugin, PluginError};

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    let defaults = match Defaults::load() {
        Ok(defaults) => defaults,
        Err(e) => return report(PluginError::from(e)),
    };
    let plugin = Plugin::new(env!("CARGO_PKG_VERSION"), defaults);

    match command {
        "get-product" => run_get_product(&plugin, &args[0], &args[2..]),
        flag if flag.starts_with("--") && flag != "--help" && flag != "--version" => {
            run_get_product(&plugin, &args[0], &args[1..])
        }
        "meta" => run_meta(&plugin, has_json_flag(&args)),
        "flags" => run_flags(&plugin, has_json_flag(&args)),
        "help" | "--help" | "-h" => {
            if let Some(sub) = args.get(2) {
                cli_parser::print_command_help(sub, &plugin.get_flags());
            } else {
                cli_parser::print_usage();
            }
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("haproxy-manifest {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            cli_parser::print_usage();
            ExitCode::FAILURE
        }
    }
}

fn has_json_flag(args: &[String]) -> bool {
    args.get(2).map(|s| s.as_str()) == Some("--json")
}

fn run_get_product(plugin: &Plugin, program: &str, flags: &[String]) -> ExitCode {
    let argv = std::iter::once(program.to_string()).chain(flags.iter().cloned());
    match plugin.get_product(argv) {
        Ok(bytes) => write_stdout(&bytes),
        Err(PluginError::FlagBinding(e))
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        Err(e) => report(e),
    }
}

fn run_meta(plugin: &Plugin, json: bool) -> ExitCode {
    let meta = plugin.get_meta();
    let rendered = if json {
        serde_json::to_string_pretty(&meta).map_err(|e| e.to_string())
    } else {
        serde_yaml::to_string(&meta).map_err(|e| e.to_string())
    };
    match rendered {
        Ok(text) => write_stdout(format!("{}\n", text.trim_end()).as_bytes()),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_flags(plugin: &Plugin, json: bool) -> ExitCode {
    let flags = plugin.get_flags();
    if json {
        match serde_json::to_string_pretty(&flags) {
            Ok(text) => write_stdout(format!("{}\n", text).as_bytes()),
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        }
    } else {
        let text: String = cli_parser::flag_lines(&flags)
            .into_iter()
            .map(|line| line + "\n")
            .collect();
        write_stdout(text.as_bytes())
    }
}

fn write_stdout(bytes: &[u8]) -> ExitCode {
    let mut stdout = std::io::stdout().lock();
    match stdout.write_all(bytes).and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn report(err: PluginError) -> ExitCode {
    match &err {
        PluginError::FlagBinding(e) => {
            let _ = e.print();
        }
        _ => eprintln!("Error: {}", err),
    }
    ExitCode::from(err.exit_code())
}
