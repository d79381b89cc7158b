//! Command-line interface for AGC files
//! Checks AGC files, prints their analyzed structure, and looks up values in them.
//!
//! Usage:
//!   agc check `<path>`                                  - Validate a file
//!   agc inspect `<path>` [--format `<format>`]          - Print the analyzed document
//!   agc find `<path>` [--section `<name>`] [--meta-tag `<name>` | --data-key `<key>` |
//!            --object `<name>` [--attribute `<name>`]]  - Look up values
//!
//! Global options: --config `<file>` layers a TOML file over the defaults, -v enables debug logs.

use agc_config::{AgcConfig, Loader as ConfigLoader};
use agc_parser::agc::ast::error::format_source_context;
use agc_parser::agc::formats::{self, Format};
use agc_parser::agc::loader::{DocumentLoader, LoaderError};
use agc_parser::{Document, Query};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

/// Exit code for files that fail analysis, unreadable files and bad settings
const EXIT_FAILURE: i32 = 1;
/// Exit code for `find` queries without a match
const EXIT_NOT_FOUND: i32 = 2;

fn build_cli() -> Command {
    let path_arg = || {
        Arg::new("path")
            .help("Path to the AGC file")
            .required(true)
            .index(1)
    };

    Command::new("agc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for validating and querying AGC calibration files")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log analysis progress to stderr"),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a file and report the first error")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the analyzed document")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_parser(["json", "yaml", "outline"])
                        .help("Output format (default from configuration)"),
                ),
        )
        .subcommand(
            Command::new("find")
                .about("Look up a section, meta tags, data entries, an object or an attribute")
                .arg(path_arg())
                .arg(
                    Arg::new("section")
                        .long("section")
                        .short('s')
                        .help("Section name (default from configuration)"),
                )
                .arg(
                    Arg::new("meta-tag")
                        .long("meta-tag")
                        .short('m')
                        .help("Return all meta tags with this name"),
                )
                .arg(
                    Arg::new("data-key")
                        .long("data-key")
                        .short('k')
                        .help("Return all data entries with this key"),
                )
                .arg(
                    Arg::new("object")
                        .long("object")
                        .short('o')
                        .help("Return the object with this name"),
                )
                .arg(
                    Arg::new("attribute")
                        .long("attribute")
                        .short('a')
                        .requires("object")
                        .help("Return this attribute of --object"),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(EXIT_FAILURE);
    });
    init_logging(&config, matches.get_flag("verbose"));

    let code = match matches.subcommand() {
        Some(("check", sub)) => handle_check_command(path_of(sub)),
        Some(("inspect", sub)) => handle_inspect_command(path_of(sub), sub, &config),
        Some(("find", sub)) => handle_find_command(path_of(sub), sub, &config),
        _ => unreachable!("clap requires a subcommand"),
    };
    std::process::exit(code);
}

fn path_of(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or_default()
}

fn load_config(matches: &ArgMatches) -> Result<AgcConfig, agc_config::ConfigError> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.build()
}

/// RUST_LOG wins over the configured filter; --verbose raises the configured filter to debug.
fn init_logging(config: &AgcConfig, verbose: bool) {
    let configured = if verbose {
        "debug"
    } else {
        config.logging.filter.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load and analyze a file, reporting failures on stderr.
fn analyze_file(path: &str) -> Result<Document, i32> {
    let loader = DocumentLoader::from_path(path).map_err(|e| {
        eprintln!("{}", e);
        EXIT_FAILURE
    })?;
    loader.analyze().map_err(|e| {
        report_error(path, &loader, &e);
        EXIT_FAILURE
    })
}

fn report_error(path: &str, loader: &DocumentLoader, error: &LoaderError) {
    match error.analysis() {
        Some(analysis) => {
            eprintln!(
                "{}:{}: [{}] {}",
                path,
                analysis.line(),
                analysis.category().code(),
                analysis
            );
            eprint!("{}", format_source_context(&loader.lines(), analysis.line()));
        }
        None => eprintln!("{}: {}", path, error),
    }
}

/// Handle the check command
fn handle_check_command(path: &str) -> i32 {
    match analyze_file(path) {
        Ok(doc) => {
            println!("{}: ok ({} sections)", path, doc.len());
            0
        }
        Err(code) => code,
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, matches: &ArgMatches, config: &AgcConfig) -> i32 {
    let format_name = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(config.output.format.name());
    let format: Format = match format_name.parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{}", e);
            return EXIT_FAILURE;
        }
    };

    let doc = match analyze_file(path) {
        Ok(doc) => doc,
        Err(code) => return code,
    };
    match formats::render(&doc, format, config.output.pretty) {
        Ok(rendered) => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
            0
        }
        Err(e) => {
            eprintln!("Error formatting document: {}", e);
            EXIT_FAILURE
        }
    }
}

/// Build a locator query from the find arguments, defaulting the section from configuration
fn query_from_matches(matches: &ArgMatches, config: &AgcConfig) -> Query {
    let arg = |name: &str| matches.get_one::<String>(name).cloned();
    Query {
        section: arg("section").or_else(|| Some(config.lookup.default_section.clone())),
        meta_tag: arg("meta-tag"),
        data_key: arg("data-key"),
        object: arg("object"),
        attribute: arg("attribute"),
    }
}

/// Handle the find command
fn handle_find_command(path: &str, matches: &ArgMatches, config: &AgcConfig) -> i32 {
    let doc = match analyze_file(path) {
        Ok(doc) => doc,
        Err(code) => return code,
    };
    let query = query_from_matches(matches, config);
    tracing::debug!(?query, "locating");

    let Some(located) = doc.locate(&query) else {
        eprintln!("not found");
        return EXIT_NOT_FOUND;
    };
    let rendered = if config.output.pretty {
        serde_json::to_string_pretty(&located)
    } else {
        serde_json::to_string(&located)
    };
    match rendered {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error formatting result: {}", e);
            EXIT_FAILURE
        }
    }
}
