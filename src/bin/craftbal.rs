//! Command-line interface for craftbal.
//!
//! Usage:
//!   craftbal balance [path]                          - Print the tree stages and the equilibrium map
//!   craftbal tokens [path] [--format <format>]       - Dump the token stream
//!   craftbal tree [path] [--stage <stage>] [--format <format>] - Print the syntax tree
//!
//! When `path` is absent the document is read from standard input.

use clap::{Arg, Command};
use std::path::PathBuf;

use craftbal::craft::processor::{
    balance_source, process_source, OutputFormat, ProcessingSpec, ProcessingStage, TreeStage,
};
use craftbal::craft::source::read_source;

fn main() {
    let matches = Command::new("craftbal")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A balancer for craft recipe documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("balance")
                .about("Print the syntax tree stages and the equilibrium map")
                .arg(
                    Arg::new("path")
                        .help("Path to the recipe document (stdin when absent)")
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the token stream")
                .arg(
                    Arg::new("path")
                        .help("Path to the recipe document (stdin when absent)")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple' or 'json')")
                        .default_value("simple"),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the syntax tree at a normalization stage")
                .arg(
                    Arg::new("path")
                        .help("Path to the recipe document (stdin when absent)")
                        .index(1),
                )
                .arg(
                    Arg::new("stage")
                        .long("stage")
                        .short('s')
                        .help("Normalization stage ('raw', 'collapsed', or 'flat')")
                        .default_value("flat"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('treeviz' or 'json')")
                        .default_value("treeviz"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("balance", sub)) => {
            let source = read_document(sub.get_one::<String>("path"));
            let report = balance_source(&source).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            print!("{}", report.render());
        }
        Some(("tokens", sub)) => {
            let source = read_document(sub.get_one::<String>("path"));
            let format = sub.get_one::<String>("format").map(String::as_str);
            run_spec(&source, ProcessingStage::Tokens, format.unwrap_or("simple"));
        }
        Some(("tree", sub)) => {
            let source = read_document(sub.get_one::<String>("path"));
            let stage = sub.get_one::<String>("stage").map(String::as_str);
            let stage = TreeStage::from_string(stage.unwrap_or("flat")).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            let format = sub.get_one::<String>("format").map(String::as_str);
            run_spec(
                &source,
                ProcessingStage::Tree(stage),
                format.unwrap_or("treeviz"),
            );
        }
        _ => unreachable!(),
    }
}

/// Read the document from a file path or standard input.
fn read_document(path: Option<&String>) -> String {
    let path = path.map(PathBuf::from);
    read_source(path.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    })
}

/// Build the processing spec and print its output.
fn run_spec(source: &str, stage: ProcessingStage, format: &str) {
    let format = OutputFormat::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let spec = ProcessingSpec::new(stage, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let output = process_source(source, &spec).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    print!("{}", output);
}
