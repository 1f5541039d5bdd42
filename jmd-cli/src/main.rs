// Command-line interface for jmd
//
// This binary converts documents between JIRA markup and Markdown.
//
// The conversion itself lives in jmd-babel; this crate only resolves the formats, loads the
// configuration, sets up logging, and decides where the converted document goes.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. The named commands fix both ends.
// Usage:
//  jmd <input> --to <format> [--from <format>] [-o <file> | --beside]  - Convert (default)
//  jmd convert <input> --to <format> [--from <format>] ...             - Same as above (explicit)
//  jmd to-jira <input> [-o <file> | --beside]                          - Markdown to JIRA
//  jmd to-markdown <input> [-o <file> | --beside]                      - JIRA to Markdown
//  jmd formats [--json]                                                - List formats
//
// Extra Parameters:
//
// Configuration can be overridden per run with --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies the value to the loaded configuration.
// Example:
//  jmd to-jira notes.md --extra-mermaid false --extra-pandoc-bin /opt/pandoc/bin/pandoc

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use jmd_babel::commands::{self, ConversionCommand};
use jmd_babel::publish::{publish, Placement, PublishArtifact, PublishSpec};
use jmd_babel::{FormatRegistry, SourceDocument};
use jmd_config::{JmdConfig, Loader};
use log::{debug, error, info, warn, LevelFilter};
use std::collections::HashMap;
use std::process;
use std::str::FromStr;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

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

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("output")
            .long("output")
            .short('o')
            .help("Output file path (defaults to stdout)")
            .value_hint(ValueHint::FilePath),
    )
    .arg(
        Arg::new("beside")
            .long("beside")
            .help("Write the result next to the input file")
            .long_help(
                "Write the result next to the input file, named after output.file_stem\n\
                (formatted_file by default) with the target format's extension.",
            )
            .action(ArgAction::SetTrue)
            .conflicts_with("output"),
    )
}

fn named_command(command: &ConversionCommand) -> Command {
    output_args(
        Command::new(command.name)
            .about(command.title)
            .arg(input_arg()),
    )
}

fn build_cli() -> Command {
    let mut cli = Command::new("jmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between JIRA markup and Markdown")
        .long_about(
            "jmd converts documents between JIRA wiki markup and Markdown.\n\n\
            Converting to JIRA turns ```mermaid code blocks into {html} macros that\n\
            render the diagrams on the JIRA page.\n\n\
            The markup conversion is done by pandoc, which must be installed.\n\n\
            Examples:\n  \
            jmd notes.md --to jira                  # Convert to JIRA (outputs to stdout)\n  \
            jmd to-jira notes.md --beside           # Write formatted_file.jira next to notes.md\n  \
            jmd to-markdown ticket.jira -o out.md   # Convert JIRA to a Markdown file",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a jmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (off, error, warn, info, debug, trace)")
                .default_value(DEFAULT_LOG_LEVEL)
                .global(true),
        )
        .subcommand(output_args(
            Command::new("convert")
                .about("Convert between markup formats (default command)")
                .long_about(
                    "Convert documents between markup formats.\n\n\
                    Supported formats:\n  \
                    - jira:     JIRA wiki markup (.jira)\n  \
                    - markdown: Markdown (.md, .markdown)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                ),
        ))
        .subcommand(
            Command::new("formats")
                .about("List available formats")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the list as JSON")
                        .action(ArgAction::SetTrue),
                ),
        );

    for command in commands::COMMANDS {
        cli = cli.subcommand(named_command(command));
    }

    cli
}

fn is_known_subcommand(name: &str) -> bool {
    matches!(name, "convert" | "formats" | "help") || commands::find(name).is_some()
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare file path means the user wants the default convert command
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !is_known_subcommand(&cleaned_args[1])
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

    init_logging(
        matches
            .get_one::<String>("log-level")
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_LOG_LEVEL),
    );

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    for key in extra_params.keys() {
        warn!("Ignoring unknown parameter --extra-{key}");
    }
    debug!("configuration: {config:?}");

    match matches.subcommand() {
        Some(("formats", sub_matches)) => {
            handle_formats_command(&config, sub_matches.get_flag("json"));
        }
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let to = required(sub_matches, "to");

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => {
                    let registry = FormatRegistry::default();
                    match registry.detect_format_from_filename(input) {
                        Some(detected) => detected,
                        None => fail(&format!(
                            "Could not detect format from filename '{input}'. Please specify --from explicitly"
                        )),
                    }
                }
            };

            let placement = placement_from_matches(sub_matches);
            handle_convert_command(input, &from, to, placement, &config);
        }
        Some((name, sub_matches)) => match commands::find(name) {
            Some(command) => {
                let input = required(sub_matches, "input");
                let placement = placement_from_matches(sub_matches);
                handle_convert_command(input, command.from, command.to, placement, &config);
            }
            None => fail("Unknown subcommand. Use --help for usage information."),
        },
        None => fail("Unknown subcommand. Use --help for usage information."),
    }
}

fn init_logging(level: &str) {
    let level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using '{DEFAULT_LOG_LEVEL}' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    match matches.get_one::<String>(id) {
        Some(value) => value.as_str(),
        None => fail(&format!("Missing required argument '{id}'")),
    }
}

fn fail(message: &str) -> ! {
    error!("{message}");
    process::exit(1);
}

fn placement_from_matches(matches: &ArgMatches) -> Placement {
    if matches.get_flag("beside") {
        Placement::Beside
    } else if let Some(path) = matches.get_one::<String>("output") {
        Placement::Path(path.into())
    } else {
        Placement::InMemory
    }
}

/// Handle the convert command and the named conversion commands
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    placement: Placement,
    config: &JmdConfig,
) {
    let registry = config.convert.registry();

    // Validate formats exist
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            fail(&e.to_string());
        }
    }

    let document = SourceDocument::from_path(input).unwrap_or_else(|e| fail(&e.to_string()));
    let converter = config.convert.converter();

    let mut spec = PublishSpec::new(&document, from, to).with_file_stem(&config.output.file_stem);
    spec.placement = placement;

    info!("converting {input} from {from} to {to}");
    let result = publish(spec, &registry, &converter).unwrap_or_else(|e| fail(&e.to_string()));

    match result.artifact {
        PublishArtifact::InMemory(text) => print!("{text}"),
        PublishArtifact::File(path) => info!("converted document written to {}", path.display()),
    }
}

/// Handle the formats command
fn handle_formats_command(config: &JmdConfig, json: bool) {
    let registry = config.convert.registry();
    let formats = registry.formats();

    if json {
        match serde_json::to_string_pretty(&formats) {
            Ok(text) => println!("{text}"),
            Err(e) => fail(&format!("Failed to serialize formats: {e}")),
        }
        return;
    }

    println!("Conversion formats:");
    for format in &formats {
        println!(
            "  {:<10} {} (.{})",
            format.name,
            format.description,
            format.extensions.join(", .")
        );
    }

    println!("\nCommands:");
    for command in commands::COMMANDS {
        println!("  {:<12} {}", command.name, command.title);
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> JmdConfig {
    let loader = Loader::new().with_optional_file("jmd.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader
        .build()
        .unwrap_or_else(|err| fail(&format!("Failed to load configuration: {err}")))
}

fn apply_config_overrides(config: &mut JmdConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("mermaid") {
        config.convert.jira.mermaid = parse_bool_arg("mermaid", &raw);
    }

    if let Some(path) = take_override(extra_params, &["pandoc-bin", "pandoc"]) {
        config.convert.pandoc.binary = Some(path);
    }

    if let Some(stem) = take_override(extra_params, &["file-stem", "stem"]) {
        config.output.file_stem = stem;
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => fail(&format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}
