//  ____                 ____            __ _
// |  _ \ __ _ ___ ___  / ___|_ __ __ _ / _| |_
// | |_) / _` / __/ __|| |   | '__/ _` | |_| __|
// |  __/ (_| \__ \__ \| |___| | | (_| |  _| |_
// |_|   \__,_|___/___/ \____|_|  \__,_|_|  \__|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-16
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator and strength checker.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use passcraft::configtool;
use passcraft::passgen::{MAX_LENGTH, MIN_LENGTH};
use passcraft::phrase::Capitalization;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "passcraft", version)]
#[command(about = "Generate passwords and passphrases and check their strength", long_about = None)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate random passwords
    Gen(GenArgs),

    /// Generate memorable passphrases from the word list
    Phrase(PhraseArgs),

    /// Check password strength
    Check(CheckArgs),

    /// Show or initialize the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Parser)]
pub struct GenArgs {
    /// Length of the password
    #[arg(short, long, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    pub no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    pub no_numbers: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false)]
    pub no_symbols: bool,

    /// How many passwords to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct PhraseArgs {
    /// Number of words per passphrase
    #[arg(short, long)]
    pub words: Option<usize>,

    /// How many passphrases to suggest
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Word separator
    #[arg(short, long)]
    pub separator: Option<char>,

    /// Do not append a number
    #[arg(long, default_value_t = false)]
    pub no_numbers: bool,

    /// Word capitalization
    #[arg(long, value_enum)]
    pub capitalization: Option<Capitalization>,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Password to check; prompts without echo when omitted
    pub password: Option<String>,

    /// Add a pattern-based audit comment
    #[arg(short, long, default_value_t = false)]
    pub audit: bool,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective config
    Show,

    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid length", s))?;
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(format!("length must be between {} and {}", MIN_LENGTH, MAX_LENGTH));
    }
    Ok(length)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "passcraft=debug" } else { "passcraft=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Gen(args) => {
            let config = configtool::load_config().context("Failed to load config")?;
            commands::password_gen::generate_random(args, &config)
        }
        Command::Phrase(args) => {
            let config = configtool::load_config().context("Failed to load config")?;
            commands::password_gen::generate_memorable(args, &config)
        }
        Command::Check(args) => commands::testpass::test_password(args),
        Command::Config(cmd) => commands::config::run(cmd),
    }
}
