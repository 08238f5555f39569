//! c2go - Main Entry Point
//!
//! ```text
//! input.c ──► clean ──► classify ──► header / declaration rewrite ──► input.c.go
//!                                        │
//!                                        └──► advisories on stderr
//! ```
//!
//! Each input is read line by line and translated in one forward pass. A
//! structural error aborts that input; with `--keep-going` the remaining inputs
//! are still processed, but the exit status reports the failure.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;

use c2go::config::Config;
use c2go::error_msg::format_translate_error;
use c2go::{Tables, TranslateOptions, Translation, Translator};

#[derive(Parser, Debug)]
#[command(name = "c2go")]
#[command(about = "Line-oriented C to Go migration aid", long_about = None)]
#[command(version)]
struct Cli {
    /// C source files to translate
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (only with a single input; defaults to <input><suffix>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suffix appended to each input path to form its output path
    #[arg(long)]
    suffix: Option<String>,

    /// Package name written on the first output line
    #[arg(long)]
    package: Option<String>,

    /// TOML file with extra type equivalences and literal rules
    #[arg(short, long, env = "C2GO_CONFIG")]
    config: Option<PathBuf>,

    /// Keep the first token of multi-token initializers instead of failing
    #[arg(long)]
    truncate_initializers: bool,

    /// Report parse errors and continue with the next input
    #[arg(long)]
    keep_going: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(package) = &self.package {
            config.package = package.clone();
        }
        if let Some(suffix) = &self.suffix {
            config.suffix = suffix.clone();
        }
        if self.truncate_initializers {
            config.initializers = c2go::InitializerPolicy::Truncate;
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// `blit.c` + `.go` → `blit.c.go`
fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

enum FileOutcome {
    Written,
    ParseFailed,
}

fn translate_file(
    input: &Path,
    output: &Path,
    tables: &Tables,
    options: &TranslateOptions,
) -> Result<FileOutcome> {
    let file = File::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    let mut translator = Translator::new(tables, options.clone());

    let mut parsed = Ok(());
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("failed to read {}", input.display()))?;
        parsed = translator.feed_line(&line);
        if parsed.is_err() {
            break;
        }
    }
    let translation = parsed.and_then(|()| translator.finish());

    let translation: Translation = match translation {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", format_translate_error(&e, &input.display().to_string()));
            return Ok(FileOutcome::ParseFailed);
        }
    };

    for diagnostic in &translation.diagnostics {
        eprintln!("{}", diagnostic);
    }

    let out = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(out);
    writer
        .write_all(translation.to_text().as_bytes())
        .and_then(|()| writer.flush())
        .with_context(|| format!("failed to write {}", output.display()))?;

    log::info!(
        "{} -> {} ({} lines, {} advisories)",
        input.display(),
        output.display(),
        translation.lines.len(),
        translation.diagnostics.len()
    );
    Ok(FileOutcome::Written)
}

fn run(cli: &Cli) -> Result<bool> {
    if cli.output.is_some() && cli.inputs.len() > 1 {
        bail!("--output can only be used with a single input file");
    }

    let config = cli.resolve_config()?;
    let tables = config.build_tables()?;
    let options = TranslateOptions::from(&config);

    let mut all_ok = true;
    for input in &cli.inputs {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| derive_output_path(input, &config.suffix));

        match translate_file(input, &output, &tables, &options)? {
            FileOutcome::Written => {}
            FileOutcome::ParseFailed => {
                all_ok = false;
                if !cli.keep_going {
                    break;
                }
            }
        }
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
