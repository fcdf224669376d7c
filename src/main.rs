//! CLI entry point for deskcalc
//!
//! Provides command-line interface for evaluating expressions,
//! checking them against the grammar, managing the config file,
//! and launching the GUI.

use clap::{Parser, Subcommand};
use colored::*;
use deskcalc::config::{ConfigManager, DEFAULT_CONFIG_PATH};
use deskcalc::core::{
    evaluate_expression, evaluate_str, format_result, parse_expression, translate_glyphs,
    validate_expression,
};
use deskcalc::ui::App;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deskcalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print the result
    Eval {
        /// Expression, e.g. "(2+3)*4"
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// Validate an expression and show how it parses
    Check {
        /// Expression to check
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// Launch the calculator window (default)
    Gui {
        /// Path to config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective config as TOML
    Show {
        /// Path to config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Write the default config file
    Init {
        /// Path to config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Gui {
        config: PathBuf::from(DEFAULT_CONFIG_PATH),
    });

    let default_level = match (&command, cli.verbose) {
        (_, true) => "debug",
        (Commands::Gui { .. }, false) => "info",
        _ => "warn",
    };
    init_logging(default_level);

    match command {
        Commands::Eval { expression } => eval_expression(&expression.join(" "))?,
        Commands::Check { expression } => check_expression(&expression.join(" "))?,
        Commands::Gui { config } => launch_gui(config)?,
        Commands::Config { action } => match action {
            ConfigCommand::Show { config } => show_config(config)?,
            ConfigCommand::Init { config, force } => init_config(config, force)?,
        },
    }

    Ok(())
}

/// Sets up the tracing subscriber on stderr
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Evaluate an expression and print the result
fn eval_expression(expression: &str) -> anyhow::Result<()> {
    match evaluate_expression(expression) {
        Ok(value) => println!("{}", format_result(value)),
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Show each validation layer's verdict
fn check_expression(expression: &str) -> anyhow::Result<()> {
    let translated = translate_glyphs(expression);
    println!("{} Checking: {}", "→".cyan(), translated);

    if let Err(e) = validate_expression(&translated) {
        println!("{} {} {}", "✗".red().bold(), "Characters:".bold(), e);
        std::process::exit(1);
    }
    println!("{} {} whitelisted", "✓".green(), "Characters:".bold());

    match parse_expression(&translated) {
        Ok(expr) => println!("{} {} {}", "✓".green(), "Grammar:".bold(), expr.to_string().cyan()),
        Err(e) => {
            println!("{} {} {}", "✗".red().bold(), "Grammar:".bold(), e);
            std::process::exit(1);
        }
    }

    match evaluate_str(&translated) {
        Ok(value) => println!("{} {} {}", "✓".green(), "Value:".bold(), format_result(value).green()),
        Err(e) => {
            println!("{} {} {}", "✗".red().bold(), "Value:".bold(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Launch the GTK window
fn launch_gui(config_path: PathBuf) -> anyhow::Result<()> {
    let app = App::new(Some(config_path)).map_err(|e| anyhow::anyhow!(e))?;
    app.run();

    Ok(())
}

/// Print the effective config
fn show_config(config_path: PathBuf) -> anyhow::Result<()> {
    let manager = ConfigManager::new(config_path)?;
    let config = manager.load()?;

    let source = if manager.exists() {
        format!("{}", manager.config_path().display())
    } else {
        "defaults (no config file)".to_string()
    };
    println!("{}", format!("# Config from: {}\n", source).dimmed());
    println!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}

/// Write the default config file
fn init_config(config_path: PathBuf, force: bool) -> anyhow::Result<()> {
    let manager = ConfigManager::new(config_path)?;
    manager.init(force)?;

    println!(
        "{} Wrote default config to {}",
        "✓".green(),
        manager.config_path().display()
    );

    Ok(())
}
