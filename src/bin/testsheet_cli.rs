//! CLI tool for testsheet - builds an XLSX report from a suite manifest
//!
//! Usage:
//!   testsheet_cli <suite.json>                    # Write "<timestamp> Smoke.xlsx"
//!   testsheet_cli <suite.json> -o report.xlsx     # Write to a fixed path
//!   testsheet_cli <suite.json> --filter Acme.Tests
//!   testsheet_cli <suite.json> --json             # Grid as JSON to stdout

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use testsheet::export;
use testsheet::types::Suite;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: testsheet_cli <suite.json> [-o output.xlsx] [--filter <namespace>] [--json]");
        std::process::exit(1);
    }

    let mut input_path: Option<&String> = None;
    let mut output_path: Option<&String> = None;
    let mut filter: Option<&String> = None;
    let mut json_output = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" if i + 1 < args.len() => {
                output_path = Some(&args[i + 1]);
                i += 2;
            }
            "--filter" if i + 1 < args.len() => {
                filter = Some(&args[i + 1]);
                i += 2;
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            other => {
                if other.starts_with('-') {
                    eprintln!("Unknown option: {}", other);
                    std::process::exit(1);
                }
                input_path = Some(&args[i]);
                i += 1;
            }
        }
    }

    let Some(input_path) = input_path else {
        eprintln!("Usage: testsheet_cli <suite.json> [-o output.xlsx] [--filter <namespace>] [--json]");
        std::process::exit(1);
    };

    // Read and parse the suite manifest
    let data = match fs::read_to_string(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let mut suite = match Suite::from_json(&data) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing suite manifest: {}", e);
            std::process::exit(1);
        }
    };

    // Namespace filter (e.g. "Acme.Tests") is the driver's concern
    if let Some(filter) = filter {
        suite.retain_matching(filter);
        if suite.types.is_empty() {
            eprintln!("No types match filter: {}", filter);
            std::process::exit(1);
        }
    }

    let report = testsheet::build_report(&suite.types);

    // Skipped parameterized cases are reported, never dropped silently
    for diagnostic in &report.diagnostics {
        eprintln!(
            "warning: skipped {}::{}: {}",
            diagnostic.class_name, diagnostic.method_name, diagnostic.message
        );
    }

    if json_output {
        let json = match serde_json::to_string_pretty(&report.grid) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Error serializing JSON: {}", e);
                std::process::exit(1);
            }
        };
        io::stdout().write_all(json.as_bytes()).unwrap();
        println!();
        return;
    }

    let bytes = match export::write_xlsx(&report.grid) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error writing workbook: {}", e);
            std::process::exit(1);
        }
    };

    let default_name;
    let path = match output_path {
        Some(p) => p.as_str(),
        None => {
            default_name = export::report_file_name(&chrono::Local::now(), export::DEFAULT_LABEL);
            default_name.as_str()
        }
    };

    if let Err(e) = fs::write(path, &bytes) {
        eprintln!("Error writing {}: {}", path, e);
        std::process::exit(1);
    }
    eprintln!("Written: {}", path);
}
