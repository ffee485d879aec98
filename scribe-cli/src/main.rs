// Command-line interface for scribe
//
// This binary converts between the editor's markup dialect and its JSON
// document tree, using the scribe-markdown crate. The CLI layer stays
// thin: read a file, pick formats, run the conversion, write the result.
//
// Converting:
//
// The conversion needs a from/to pair. The source format is auto-detected
// from the file extension and can be overridden with an explicit --from.
// Usage:
//  scribe <input> --to <format> [--from <format>] [--output <file>]  - Convert (default)
//  scribe convert <input> --to <format> [--from <format>] [--output <file>]
//  scribe inspect <path>                 - Print the parsed document tree as JSON
//  scribe --list-formats                 - List available formats

use clap::{Arg, ArgAction, Command, ValueHint};
use scribe_config::{Loader, ScribeConfig};
use scribe_markdown::{FormatRegistry, Markdown};
use std::fs;

fn build_cli() -> Command {
    Command::new("scribe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting editor markup and document trees")
        .long_about(
            "scribe is a command-line tool for working with the editor's markup dialect.\n\n\
            Commands:\n  \
            - convert: Transform between markup and the JSON document tree\n  \
            - inspect: View the parsed document tree\n\n\
            Examples:\n  \
            scribe notes.md --to json               # Markup to tree (stdout)\n  \
            scribe tree.json --to markdown -o out.md # Tree back to markup\n  \
            scribe inspect notes.md                 # View the parsed tree",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a scribe.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between markup and the document tree (default command)")
                .long_about(
                    "Convert documents between formats.\n\n\
                    Supported formats:\n  \
                    - markdown: The markup dialect (.md)\n  \
                    - json:     The document tree as editor node objects (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to write a file.\n\n\
                    Examples:\n  \
                    scribe convert input.md --to json            # Markup to tree (stdout)\n  \
                    scribe convert tree.json --to markdown       # Tree to markup\n  \
                    scribe input.md --to json                    # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from the file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed document tree as JSON")
                .long_about(
                    "Parse the input and pretty-print the resulting document tree.\n\n\
                    Examples:\n  \
                    scribe inspect notes.md               # Tree of a markup file\n  \
                    scribe inspect tree.json              # Re-echo a tree file",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the input file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // If the first argument looks like a file, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "convert"
                && args[1] != "inspect"
                && args[1] != "help"
            {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from_arg = sub_matches.get_one::<String>("from");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            let from = if let Some(f) = from_arg {
                f.to_string()
            } else {
                let registry = FormatRegistry::default();
                match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_inspect_command(path, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> ScribeConfig {
    let loader = Loader::new().with_optional_file("scribe.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn parse_input(source: &str, from: &str, registry: &FormatRegistry) -> scribe_markdown::Document {
    registry.parse(source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    config: &ScribeConfig,
) {
    let registry = FormatRegistry::default();

    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let doc = parse_input(&source, from, &registry);

    // Markdown serialization honors the configured rule chain, and JSON
    // honors the pretty flag; other formats go through the registry.
    let result = if to == "markdown" {
        let markdown = Markdown::with_rules(config.convert.markdown.rules());
        markdown.serialize(&doc)
    } else if to == "json" && !config.convert.json.pretty {
        serde_json::to_string(&doc).unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        })
    } else {
        registry.serialize(&doc, to).unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        })
    };

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            println!("{result}");
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, _config: &ScribeConfig) {
    let registry = FormatRegistry::default();
    let from = registry
        .detect_format_from_filename(path)
        .unwrap_or_else(|| "markdown".to_string());

    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let doc = parse_input(&source, &from, &registry);

    let json = serde_json::to_string_pretty(&doc).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    println!("{json}");
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        let format = registry.get(&format_name).expect("listed formats exist");
        let mut capabilities = Vec::new();
        if format.supports_parsing() {
            capabilities.push("parse");
        }
        if format.supports_serialization() {
            capabilities.push("serialize");
        }
        println!(
            "  {:<10} {} ({})",
            format_name,
            format.description(),
            capabilities.join(", ")
        );
    }
}
