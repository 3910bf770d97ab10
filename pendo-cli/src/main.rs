// Command-line interface for pendo
//
// This binary escapes Pendo guide markdown for translation and turns translated placeholder
// text back into markdown. All the work happens in the pendo-babel crate, this file only deals
// with files, flags and configuration.
//
// Usage:
//  pendo convert <input> [--components <file>] [--json] [-o <file>]          - Escape markdown
//  pendo backconvert <input> --components <file> [--strict] [-o <file>]      - Rebuild markdown
//  pendo extract <xliff> [-o <file>]                                          - Escape XLIFF units
//  pendo localize <xliff> --translations <file> --locale <locale> [-o <file>] - Localize XLIFF
//
// Extra Parameters:
//
// Configuration keys can be overridden with --extra-<key> <value>.
// The CLI layer strips the "extra-" prefix and applies the value on top of the loaded config.
// Example:
//  pendo convert guide.md --extra-underline false

use clap::{Arg, ArgAction, Command, ValueHint};
use pendo_babel::xliff::{self, localized_path};
use pendo_babel::{ComponentList, Converter, PendoMarkdown, SyntaxOptions};
use pendo_config::{Loader, PendoConfig};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

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
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
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

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("pendo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Escape Pendo markdown into placeholder text for translation")
        .long_about(
            "pendo replaces the markdown syntax in Pendo guide strings with numbered\n\
            placeholders so translators only see text, and rebuilds the markdown from\n\
            the translated placeholder text afterwards.\n\n\
            Commands:\n  \
            - convert:     Escape a markdown file\n  \
            - backconvert: Rebuild markdown from translated placeholder text\n  \
            - extract:     Escape every unit of an XLIFF file\n  \
            - localize:    Write translations into a localized XLIFF copy\n\n\
            Extra Parameters:\n  \
            Use --extra-<key> [value] to override configuration keys:\n  \
            underline, strikethrough, links, lists, html, source-locale, target-state.\n\n\
            Examples:\n  \
            pendo convert guide.md --components guide.json     # Escape to stdout\n  \
            pendo backconvert guide.de.txt --components guide.json\n  \
            pendo localize strings_en-US.xliff --translations de.json --locale de-DE",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a pendo.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log filter when RUST_LOG is unset")
                .value_parser(clap::builder::PossibleValuesParser::new(LOG_LEVELS))
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Escape markdown into placeholder text")
                .long_about(
                    "Escape a markdown file into placeholder text.\n\n\
                    The escaped text goes to stdout (or -o). The component list needed to\n\
                    rebuild the markdown is written as JSON to --components. With --json\n\
                    both are printed together as one JSON object instead.",
                )
                .arg(
                    Arg::new("input")
                        .help("Markdown file to escape")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("components")
                        .long("components")
                        .help("Where to write the component list")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print text and components as one JSON object")
                        .action(ArgAction::SetTrue),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("backconvert")
                .about("Rebuild markdown from translated placeholder text")
                .long_about(
                    "Rebuild markdown from translated placeholder text.\n\n\
                    Placeholders that cannot be resolved are kept as literal text and\n\
                    reported on stderr. Use --strict to fail instead.",
                )
                .arg(
                    Arg::new("input")
                        .help("Translated placeholder text")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("components")
                        .long("components")
                        .help("Component list written by convert")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail when placeholders could not be resolved")
                        .action(ArgAction::SetTrue),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("extract")
                .about("Escape the sources of an XLIFF file")
                .long_about(
                    "Escape the <source> of every trans-unit and print the units as JSON:\n\
                    key, escaped source, translator comment and component list.",
                )
                .arg(
                    Arg::new("input")
                        .help("XLIFF file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("localize")
                .about("Write translations into a localized XLIFF copy")
                .long_about(
                    "Backconvert translations and write them into the <target> elements of\n\
                    a copy of the XLIFF file. Translations are read from a JSON object that\n\
                    maps unit ids to translated placeholder text.\n\n\
                    Without -o the copy is written next to the input, with the source locale\n\
                    suffix of the file name replaced by --locale.",
                )
                .arg(
                    Arg::new("input")
                        .help("Source XLIFF file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("translations")
                        .long("translations")
                        .help("JSON object of unit id to translation")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("locale")
                        .long("locale")
                        .help("Target locale, e.g. de-DE")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = build_cli().get_matches_from(&cleaned_args);

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    if let Some(key) = extra_params.keys().next() {
        eprintln!("Unknown parameter --extra-{key}");
        std::process::exit(1);
    }

    let level = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| config.logging.level.clone());
    init_logging(&level);

    let converter = Converter::new(PendoMarkdown::new(SyntaxOptions::from(&config.markdown)));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let components = sub_matches.get_one::<String>("components").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let json = sub_matches.get_flag("json");
            handle_convert_command(&converter, input, components, output, json);
        }
        Some(("backconvert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let components = sub_matches
                .get_one::<String>("components")
                .expect("components is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let strict = sub_matches.get_flag("strict");
            handle_backconvert_command(&converter, input, components, output, strict);
        }
        Some(("extract", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_extract_command(&converter, input, output);
        }
        Some(("localize", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let translations = sub_matches
                .get_one::<String>("translations")
                .expect("translations is required");
            let locale = sub_matches
                .get_one::<String>("locale")
                .expect("locale is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_localize_command(&converter, &config, input, translations, locale, output);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    converter: &Converter,
    input: &str,
    components_path: Option<&str>,
    output: Option<&str>,
    json: bool,
) {
    let source = read_file(input);

    let converted = converter.convert(&source).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    if let Some(path) = components_path {
        let encoded = converted.components.to_json().unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
        write_file(path, &encoded);
    }

    let text = if json {
        let value = serde_json::json!({
            "escaped": converted.escaped,
            "components": converted.components,
        });
        to_pretty_json(&value)
    } else {
        converted.escaped
    };

    emit(output, &text);
}

/// Handle the backconvert command
fn handle_backconvert_command(
    converter: &Converter,
    input: &str,
    components_path: &str,
    output: Option<&str>,
    strict: bool,
) {
    let translated = read_file(input);
    let components = ComponentList::from_json(&read_file(components_path)).unwrap_or_else(|e| {
        eprintln!("Error reading components from '{components_path}': {e}");
        std::process::exit(1);
    });

    let localized = converter
        .backconvert(&translated, &components)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });

    if strict && !localized.anomalies.is_empty() {
        for anomaly in &localized.anomalies {
            eprintln!("Error: {anomaly}");
        }
        std::process::exit(1);
    }

    emit(output, &localized.text);
}

/// Handle the extract command
fn handle_extract_command(converter: &Converter, input: &str, output: Option<&str>) {
    let document = read_file(input);

    let units = xliff::extract(&document, converter).unwrap_or_else(|e| {
        eprintln!("Error extracting '{input}': {e}");
        std::process::exit(1);
    });

    emit(output, &to_pretty_json(&units));
}

/// Handle the localize command
fn handle_localize_command(
    converter: &Converter,
    config: &PendoConfig,
    input: &str,
    translations_path: &str,
    locale: &str,
    output: Option<&str>,
) {
    let document = read_file(input);
    let translations: HashMap<String, String> =
        serde_json::from_str(&read_file(translations_path)).unwrap_or_else(|e| {
            eprintln!("Error reading translations from '{translations_path}': {e}");
            std::process::exit(1);
        });

    let result = xliff::localize(
        &document,
        &translations,
        converter,
        config.xliff.target_state(),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error localizing '{input}': {e}");
        std::process::exit(1);
    });

    let path = match output {
        Some(path) => Path::new(path).to_path_buf(),
        None => localized_path(Path::new(input), &config.xliff.source_locale, locale),
    };
    write_file(&path.to_string_lossy(), &result.content);

    for failure in &result.failures {
        eprintln!("Unit '{}' not localized: {}", failure.key, failure.error);
    }
    eprintln!(
        "Wrote {} ({} localized, {} missing, {} failed)",
        path.display(),
        result.localized.len(),
        result.missing.len(),
        result.failures.len()
    );
}

fn load_cli_config(explicit_path: Option<&str>) -> PendoConfig {
    let loader = Loader::new().with_optional_file("pendo.toml");
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

fn apply_config_overrides(config: &mut PendoConfig, extra_params: &mut HashMap<String, String>) {
    let markdown = &mut config.markdown;
    for (key, flag) in [
        ("underline", &mut markdown.underline),
        ("strikethrough", &mut markdown.strikethrough),
        ("links", &mut markdown.links),
        ("lists", &mut markdown.lists),
        ("html", &mut markdown.html),
    ] {
        if let Some(raw) = extra_params.remove(key) {
            *flag = parse_bool_arg(key, &raw);
        }
    }

    if let Some(raw) = take_override(extra_params, &["source-locale", "source_locale"]) {
        config.xliff.source_locale = raw;
    }
    if let Some(raw) = take_override(extra_params, &["target-state", "target_state"]) {
        config.xliff.target_state = raw;
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
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_file(path: &str, contents: &str) {
    fs::write(path, contents).unwrap_or_else(|e| {
        eprintln!("Error writing file '{path}': {e}");
        std::process::exit(1);
    });
}

fn emit(output: Option<&str>, text: &str) {
    match output {
        Some(path) => write_file(path, text),
        None => println!("{text}"),
    }
}

fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error encoding JSON: {e}");
        std::process::exit(1);
    })
}
