// Command-line interface for fieldmark
//
// This binary converts survey rich text between the markdown subset authors
// write and the HTML subset survey definitions store.
//
// The core capabilities come from the fieldmark-convert crate; this is only a
// shell around it: file reading, direction selection, output writing.
//
// Converting:
//
// The conversion needs a from/to pair. The from side is auto-detected from
// the file extension and can be overridden with an explicit --from flag.
// Usage:
//  fieldmark <input> --to <format> [--from <format>] [--output <file>]  - Convert (default)
//  fieldmark convert <input> --to <format> [...]                        - Same, explicit
//  fieldmark inspect <path>                                             - Dump block classification as JSON
//  fieldmark --list-directions                                          - List available directions
//
// Extra Parameters:
//
// Output-shaping parameters can be passed using --extra-<name> [value]. The
// CLI strips the "extra-" prefix and applies them as configuration overrides.
// Example:
//  fieldmark convert notes.md --to html --extra-full-document --extra-title "Intro"

use clap::{Arg, ArgAction, Command, ValueHint};
use fieldmark_config::{FieldmarkConfig, Loader};
use fieldmark_convert::html::{wrap_in_document, DocumentOptions};
use fieldmark_convert::DirectionRegistry;
use std::collections::HashMap;
use std::fs;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("fieldmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting survey rich text between markdown and HTML")
        .long_about(
            "fieldmark converts survey rich text between the markdown subset\n\
            authors write and the HTML subset survey definitions store.\n\n\
            Commands:\n  \
            - convert: Transform between markdown and HTML (default)\n  \
            - inspect: View the block classification of a markdown file\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override output settings.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            fieldmark notes.md --to html                # Convert to HTML (stdout)\n  \
            fieldmark page.html --to markdown           # Recover markdown\n  \
            fieldmark notes.md --to html --extra-full-document  # Standalone page\n  \
            fieldmark inspect notes.md                  # Block classification JSON",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-directions")
                .long("list-directions")
                .help("List available conversion directions")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a fieldmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between markdown and HTML (default command)")
                .long_about(
                    "Convert survey text between formats.\n\n\
                    Supported formats:\n  \
                    - markdown: the authoring subset (.md, .markdown)\n  \
                    - html:     the stored subset (.html, .htm)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    fieldmark convert notes.md --to html           # Markdown to HTML (stdout)\n  \
                    fieldmark convert page.html --to markdown      # HTML back to markdown\n  \
                    fieldmark notes.md --to html -o out.html       # 'convert' is optional",
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
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required): markdown or html")
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
                .about("Dump the block classification of a markdown file as JSON")
                .long_about(
                    "Scan a markdown file and print the classified block sequence\n\
                    (headings, paragraphs, lists, blockquotes) as JSON. Useful for\n\
                    debugging why a document renders the way it does.",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that looks like a file means the implicit
            // convert subcommand was intended
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-directions") {
        handle_list_directions_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    if let Some((key, _)) = extra_params.iter().next() {
        eprintln!("Unknown extra parameter '--extra-{key}'");
        std::process::exit(1);
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from = sub_matches.get_one::<String>("from").map(|s| s.as_str());
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, from, to, output, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_inspect_command(path);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn handle_list_directions_command() {
    let registry = DirectionRegistry::default();
    for name in registry.list_directions() {
        match registry.get(&name) {
            Ok(direction) => println!("{name}: {}", direction.description()),
            Err(_) => println!("{name}"),
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: Option<&str>,
    to: &str,
    output: Option<&str>,
    config: &FieldmarkConfig,
) {
    let registry = DirectionRegistry::default();

    // Auto-detect --from if not provided
    let from = match from {
        Some(f) => f.to_string(),
        None => match registry.detect_source_from_filename(input) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: Could not detect format from filename '{input}'");
                eprintln!("Please specify --from explicitly");
                std::process::exit(1);
            }
        },
    };

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let mut result = registry.convert(&source, &from, to).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    if to == "html" && config.convert.html.full_document {
        let options = DocumentOptions::from(&config.convert.html);
        result = wrap_in_document(&result, &options);
    }

    if config.convert.trailing_newline && !result.ends_with('\n') {
        result.push('\n');
    }

    match output {
        Some(path) => fs::write(path, result).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{result}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let blocks = fieldmark_convert::html::scanner::scan(&source);
    let json = serde_json::to_string_pretty(&blocks).unwrap_or_else(|e| {
        eprintln!("Error serializing blocks: {e}");
        std::process::exit(1);
    });

    println!("{json}");
}

fn load_cli_config(config_path: Option<&str>) -> FieldmarkConfig {
    let loader = match config_path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("fieldmark.toml"),
    };

    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    })
}

/// Apply recognized --extra-* overrides to the loaded configuration, removing
/// them from the map as they are consumed
fn apply_config_overrides(config: &mut FieldmarkConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("full-document") {
        config.convert.html.full_document = parse_bool_arg("full-document", &raw);
    }

    if let Some(raw) = extra_params.remove("trailing-newline") {
        config.convert.trailing_newline = parse_bool_arg("trailing-newline", &raw);
    }

    if let Some(title) = extra_params.remove("title") {
        config.convert.html.title = title;
    }

    if let Some(path) = extra_params.remove("css") {
        let css = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Error reading CSS file '{path}': {e}");
            std::process::exit(1);
        });
        config.convert.html.custom_css = Some(css);
    }
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
