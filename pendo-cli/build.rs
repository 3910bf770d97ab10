use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the subcommands in src/main.rs
// Build scripts can't access src/ modules, so the surface is repeated here
fn path_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn file_option(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("pendo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Escape Pendo markdown into placeholder text for translation")
        .arg_required_else_help(true)
        .arg(file_option("config", "Path to a pendo.toml configuration file").global(true))
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log filter when RUST_LOG is unset")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Escape markdown into placeholder text")
                .arg(path_arg("input", "Markdown file to escape"))
                .arg(file_option("components", "Where to write the component list"))
                .arg(file_option("output", "Output file path").short('o'))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print text and components as one JSON object")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("backconvert")
                .about("Rebuild markdown from translated placeholder text")
                .arg(path_arg("input", "Translated placeholder text"))
                .arg(file_option("components", "Component list from convert").required(true))
                .arg(file_option("output", "Output file path").short('o'))
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail when placeholders could not be resolved")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("extract")
                .about("Escape the sources of an XLIFF file")
                .arg(path_arg("input", "XLIFF file"))
                .arg(file_option("output", "Output file path").short('o')),
        )
        .subcommand(
            Command::new("localize")
                .about("Write translations into a localized XLIFF copy")
                .arg(path_arg("input", "Source XLIFF file"))
                .arg(file_option("translations", "JSON object of unit id to translation").required(true))
                .arg(
                    Arg::new("locale")
                        .long("locale")
                        .help("Target locale")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(file_option("output", "Output file path").short('o')),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "pendo", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "pendo", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "pendo", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
