//! Command-line front end for the abacus calculator.
//!
//! Usage:
//!   abacus eval 12 + 7 =
//!   abacus repl
//!   abacus history
//!   abacus theme preset ocean
//!
//! State is kept in a JSON file under the platform data directory unless
//! `--store` or the config's `storage_path` says otherwise.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use abacus::config::CalculatorConfig;
use abacus::session::Calculator;
use abacus::storage::FileStore;
use abacus::theme::{ThemeMode, ThemePreset};
use anyhow::Context;
use chrono::Timelike;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Two-operand calculator with persisted history, memory and theme
#[derive(Parser, Debug)]
#[command(name = "abacus", version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the JSON state file
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a sequence of tokens and print the display
    Eval {
        #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true)]
        tokens: Vec<String>,
    },
    /// Read tokens line by line from stdin
    Repl,
    /// Print the calculation history, newest first
    History,
    /// Delete the calculation history
    ClearHistory,
    /// Show or change the theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Print mode, preset and accessibility flags
    Show,
    /// Flip between light and dark
    Toggle,
    /// Pick light or dark explicitly
    Set { mode: String },
    /// Pick the mode from the local time of day
    Auto,
    /// Switch the color preset
    Preset { name: String },
    /// Flip the high-contrast flag
    HighContrast,
    /// Flip the color-blind-friendly flag
    ColorBlind,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = load_config(cli.config.as_deref())?;
    let store_path = cli
        .store
        .clone()
        .or_else(|| config.storage_path.clone())
        .unwrap_or_else(default_store_path);
    let store = FileStore::open(&store_path)
        .with_context(|| format!("opening store {}", store_path.display()))?;

    let mut calc = Calculator::builder().store(store).config(config).build()?;

    match cli.command {
        Command::Eval { tokens } => {
            calc.press_line(&tokens.join(" "))?;
            println!("{}", calc.display());
        }
        Command::Repl => repl(&mut calc)?,
        Command::History => {
            if calc.history().is_empty() {
                println!("No calculations yet");
            }
            for entry in calc.history().entries() {
                println!(
                    "{}  {} = {}",
                    entry.timestamp(),
                    entry.expression(),
                    entry.result()
                );
            }
        }
        Command::ClearHistory => calc.clear_history()?,
        Command::Theme { action } => theme(&mut calc, action.unwrap_or(ThemeCommand::Show))?,
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<CalculatorConfig> {
    if let Some(path) = explicit {
        return CalculatorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()));
    }

    match dirs::config_dir().map(|dir| dir.join("abacus").join("config.toml")) {
        Some(path) if path.exists() => CalculatorConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display())),
        _ => Ok(CalculatorConfig::default()),
    }
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("abacus").join("state.json"))
        .unwrap_or_else(|| PathBuf::from("./abacus-state.json"))
}

fn repl(calc: &mut Calculator<FileStore>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match calc.press_line(line) {
            Ok(_) => match calc.pending_label() {
                Some(label) => writeln!(stdout, "{}  [{}]", calc.display(), label)?,
                None => writeln!(stdout, "{}", calc.display())?,
            },
            Err(error) => eprintln!("{error}"),
        }
    }
    Ok(())
}

fn theme(calc: &mut Calculator<FileStore>, action: ThemeCommand) -> anyhow::Result<()> {
    match action {
        ThemeCommand::Show => {}
        ThemeCommand::Toggle => {
            calc.toggle_theme()?;
        }
        ThemeCommand::Set { mode } => {
            let mode: ThemeMode = mode
                .parse()
                .map_err(|_| anyhow::anyhow!("unknown theme mode '{mode}', expected light or dark"))?;
            calc.set_theme(mode)?;
        }
        ThemeCommand::Auto => {
            calc.apply_auto_theme(chrono::Local::now().hour())?;
        }
        ThemeCommand::Preset { name } => {
            if !calc.apply_preset(&name)? {
                let known: Vec<_> = ThemePreset::all().iter().map(|p| p.name).collect();
                anyhow::bail!("unknown preset '{name}', expected one of {}", known.join(", "));
            }
        }
        ThemeCommand::HighContrast => {
            calc.toggle_high_contrast()?;
        }
        ThemeCommand::ColorBlind => {
            calc.toggle_color_blind()?;
        }
    }

    let theme = calc.theme();
    let flags = theme.accessibility();
    println!("mode:          {}", theme.mode());
    println!("preset:        {}", theme.preset().name);
    for (name, color) in theme.palette().colors() {
        println!("  {name:<12}{color}");
    }
    println!("high contrast: {}", flags.high_contrast);
    println!("color blind:   {}", flags.color_blind);
    Ok(())
}
