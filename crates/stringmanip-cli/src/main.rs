use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::ops::Range;
use std::path::PathBuf;
use stringmanip_config::Config;
use stringmanip_engine::editing::{self, Cmd, Document};
use stringmanip_engine::{CaseStyle, SortStrategy};

#[derive(Parser)]
#[command(
    name = "stringmanip",
    about = "Sort lines and convert case styles across selections",
    version
)]
struct Cli {
    /// Config file (defaults to ~/.config/stringmanip/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Read text from a file instead of stdin
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Byte range START..END to operate on; repeat for multiple cursors
    #[arg(short, long = "selection", value_parser = parse_selection, global = true)]
    selections: Vec<Range<usize>>,

    /// Log what is being planned and applied to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort lines (one selection) or selections (several)
    Sort { strategy: Option<SortStrategy> },
    /// Convert identifiers to a case style, line by line
    Case { style: Option<CaseStyle> },
    /// List sort strategies and case styles
    List,
}

fn parse_selection(s: &str) -> Result<Range<usize>, String> {
    let (start, end) = s
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got '{s}'"))?;
    let start: usize = start
        .trim()
        .parse()
        .map_err(|e| format!("invalid start offset '{start}': {e}"))?;
    let end: usize = end
        .trim()
        .parse()
        .map_err(|e| format!("invalid end offset '{end}': {e}"))?;
    Ok(start..end)
}

fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
            match Config::load_from_path(&path)? {
                Some(config) => Ok(config),
                None => bail!("Config file '{}' does not exist", path.display()),
            }
        }
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn build_command(command: &Commands, config: &Config) -> Option<Cmd> {
    match command {
        Commands::Sort { strategy } => Some(Cmd::SortLines {
            strategy: strategy.unwrap_or_else(|| config.sort_strategy()),
        }),
        Commands::Case { style } => Some(Cmd::ConvertCase {
            style: style.unwrap_or_else(|| config.case_style()),
        }),
        Commands::List => None,
    }
}

fn print_names(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Sort strategies:")?;
    for strategy in SortStrategy::ALL {
        writeln!(out, "  {strategy}")?;
    }
    writeln!(out, "Case styles:")?;
    for style in CaseStyle::ALL {
        writeln!(out, "  {style}")?;
    }
    Ok(())
}

/// Apply `cmd` to `text` over `selections` (or the whole text when empty).
fn transform(text: &str, selections: Vec<Range<usize>>, cmd: Cmd) -> Result<String> {
    let mut document = if selections.is_empty() {
        Document::selecting_all(text)
    } else {
        Document::new(text, selections).context("Invalid selection")?
    };

    let patch = editing::apply(&mut document, cmd)?;
    log::info!(
        "Replaced {} range(s) across {} selection(s)",
        patch.changed.len(),
        patch.selections
    );
    Ok(document.text())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let config = load_config(cli.config.as_ref())?;
    log::debug!("Using {config:?}");

    let Some(cmd) = build_command(&cli.command, &config) else {
        return Ok(print_names(&mut io::stdout().lock())?);
    };

    let text = read_input(cli.input.as_ref())?;
    let output = transform(&text, cli.selections, cmd)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
