//! Command-line interface for garment-label
//!
//! Usage:
//!   garment-label normalize `<text>`             - Print the canonical form of a label
//!   garment-label extract `<text>`               - Extract from an already canonical label
//!   garment-label parse [`<text>`]               - Parse a label (or every stdin line)
//!   garment-label validate [--source `<base>`]   - Compare against a gold corpus
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use clap::{Arg, ArgMatches, Command};
use garment_label::label::corpus::{source_for, CorpusError};
use garment_label::label::format::{FormatError, OutputFormat};
use garment_label::label::report::{validate, ReportOptions};
use garment_label::{extract, normalize, LabelParser};
use label_config::{ConfigError, LabelConfig, Loader};
use std::fmt;
use std::io::{self, BufRead};
use std::process;

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Corpus(CorpusError),
    Format(FormatError),
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Corpus(e) => write!(f, "Corpus error: {}", e),
            CliError::Format(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<CorpusError> for CliError {
    fn from(e: CorpusError) -> Self {
        CliError::Corpus(e)
    }
}

impl From<FormatError> for CliError {
    fn from(e: FormatError) -> Self {
        CliError::Format(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

fn cli() -> Command {
    Command::new("garment-label")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract material composition from garment label text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .help("Output format: json, json-pretty, yaml, simple"),
        )
        .subcommand(
            Command::new("normalize")
                .about("Print the canonical form of a label")
                .arg(Arg::new("text").required(true).index(1)),
        )
        .subcommand(
            Command::new("extract")
                .about("Extract composition from an already canonical label")
                .arg(Arg::new("text").required(true).index(1)),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a raw label, or every line of stdin when no text is given")
                .arg(Arg::new("text").index(1)),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate the pipeline against a gold corpus")
                .arg(
                    Arg::new("source")
                        .long("source")
                        .short('s')
                        .help("Corpus directory or base URL (default: corpus.base)"),
                ),
        )
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let matches = cli().get_matches();
    match run(&matches) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

/// Returns `Ok(false)` when validation ran but did not reproduce the corpus.
fn run(matches: &ArgMatches) -> Result<bool, CliError> {
    let config = load_config(matches)?;
    let format: OutputFormat = config.output.format.parse()?;

    match matches.subcommand() {
        Some(("normalize", sub)) => {
            println!("{}", normalize(text_arg(sub)));
        }
        Some(("extract", sub)) => {
            println!("{}", format.render(&extract(text_arg(sub)))?);
        }
        Some(("parse", sub)) => {
            let parser = LabelParser::new();
            match sub.get_one::<String>("text") {
                Some(text) => println!("{}", format.render(&parser.parse(text))?),
                None => {
                    for line in io::stdin().lock().lines() {
                        println!("{}", format.render(&parser.parse(&line?))?);
                    }
                }
            }
        }
        Some(("validate", sub)) => {
            let base = sub
                .get_one::<String>("source")
                .cloned()
                .unwrap_or_else(|| config.corpus.base.clone());
            return handle_validate(&base, &config);
        }
        _ => unreachable!("subcommand is required"),
    }
    Ok(true)
}

fn text_arg(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("text")
        .map(String::as_str)
        .unwrap_or_default()
}

fn load_config(matches: &ArgMatches) -> Result<LabelConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    Ok(loader.build()?)
}

fn handle_validate(base: &str, config: &LabelConfig) -> Result<bool, CliError> {
    let corpus = source_for(base).load()?;
    let options = ReportOptions {
        proportion_tolerance: config.report.proportion_tolerance,
        check_vocabulary: config.report.check_vocabulary,
    };
    let report = validate(&corpus, &LabelParser::new(), &options);

    for mismatch in report.mismatches.iter().take(config.report.max_mismatches) {
        println!("#{} {:?}", mismatch.index, mismatch.input);
        println!("  expected: {}", OutputFormat::Json.render(&mismatch.expected)?);
        println!("  actual:   {}", OutputFormat::Json.render(&mismatch.actual)?);
    }
    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }
    println!("{}", report);

    Ok(report.is_exact())
}
