use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered by jmd-babel
// We need to duplicate this here since build scripts can't access the library
const AVAILABLE_FORMATS: &[&str] = &["jira", "markdown"];

fn placement_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("input")
            .help("Input file path")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath),
    )
    .arg(
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
            .action(ArgAction::SetTrue),
    )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let format_parser = || clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS);

    let mut cmd = Command::new("jmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between JIRA markup and Markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_parser(["off", "error", "warn", "info", "debug", "trace"])
                .global(true),
        )
        .subcommand(placement_args(
            Command::new("convert")
                .about("Convert between markup formats")
                .arg(Arg::new("from").long("from").value_parser(format_parser()))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(format_parser()),
                ),
        ))
        .subcommand(placement_args(
            Command::new("to-jira").about("Convert Markdown to JIRA (with Mermaid diagrams)"),
        ))
        .subcommand(placement_args(
            Command::new("to-markdown").about("Convert JIRA to Markdown"),
        ))
        .subcommand(
            Command::new("formats")
                .about("List available formats")
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "jmd", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "jmd", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "jmd", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
