//! Neon Orbit CLI - browse, match and chat with simulated profiles
//!
//! Terminal front-end for the Neon Orbit session engine. State is kept in a
//! single local file; nothing leaves the machine.

mod config;
mod play;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::Config;
use neon_orbit::{
    DefaultRandom, DomainError, FileStore, Goal, KeyValueStore, MemoryStore, RngSource,
    SafetyMode, Screen, Session, Theme,
};

#[derive(Parser)]
#[command(name = "orbit")]
#[command(about = "Neon Orbit - browse, match and chat with simulated profiles", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the state file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed for reproducible profiles and replies
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Keep state in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session
    Play,

    /// Complete onboarding (prompts for missing fields)
    Start {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        age: Option<i64>,
        /// chat, dating or friends
        #[arg(short, long)]
        goal: Option<Goal>,
    },

    /// Show the current screen (draws and saves a first candidate if none is stored)
    Status,

    /// Change theme or content mode
    Settings {
        /// neon, mono or sunset
        #[arg(long)]
        theme: Option<Theme>,
        /// safe or open
        #[arg(long)]
        mode: Option<SafetyMode>,
    },

    /// Erase all local data
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or update configuration
    Config {
        /// Persist a data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,
        /// Persist a seed
        #[arg(long)]
        set_seed: Option<u64>,
        /// Persist whether blocking cancels pending replies
        #[arg(long)]
        cancel_replies_on_block: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Config {
        set_data_dir,
        set_seed,
        cancel_replies_on_block,
    } = cli.command
    {
        return cmd_config(set_data_dir, set_seed, cancel_replies_on_block);
    }

    let config = Config::load()?
        .apply_env()?
        .with_overrides(cli.data_dir, cli.seed);

    if cli.ephemeral {
        tracing::debug!("Using in-memory store");
        dispatch(MemoryStore::new(), &config, cli.command).await
    } else {
        let dir = config.data_dir()?;
        tracing::debug!("Using data directory {:?}", dir);
        dispatch(FileStore::new(dir), &config, cli.command).await
    }
}

async fn dispatch<S: KeyValueStore>(store: S, config: &Config, command: Commands) -> Result<()> {
    let rng = match config.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_os(),
    };
    let mut session = Session::new(store, rng, Some(config.session_config()));

    match command {
        Commands::Play => play::run(&mut session).await,
        Commands::Start { name, age, goal } => cmd_start(&mut session, name, age, goal),
        Commands::Status => {
            render::print_view(&session.view());
            Ok(())
        }
        Commands::Settings { theme, mode } => cmd_settings(&mut session, theme, mode),
        Commands::Reset { yes } => cmd_reset(&mut session, yes),
        Commands::Config { .. } => unreachable!("handled before the session is opened"),
    }
}

// ============================================
// Command Implementations
// ============================================

fn cmd_start<S: KeyValueStore>(
    session: &mut Session<S, DefaultRandom>,
    name: Option<String>,
    age: Option<i64>,
    goal: Option<Goal>,
) -> Result<()> {
    if session.screen() != Screen::Onboarding {
        bail!("Already onboarded. Run 'orbit reset' to start over.");
    }

    let name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Name (blank for a pilot name)")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read name")?,
    };

    let age = match age {
        Some(a) => a,
        None => Input::<i64>::new()
            .with_prompt("Age")
            .default(18)
            .interact_text()
            .context("Failed to read age")?,
    };

    let goal = match goal {
        Some(g) => g,
        None => {
            let labels: Vec<String> = Goal::ALL.iter().map(Goal::to_string).collect();
            let index = Select::new()
                .with_prompt("Goal")
                .items(&labels)
                .default(0)
                .interact()
                .context("Failed to read goal")?;
            Goal::ALL[index]
        }
    };

    match session.start_onboarding(&name, Some(age), goal) {
        Ok(()) => {
            render::print_view(&session.view());
            Ok(())
        }
        Err(DomainError::Validation(msg)) => bail!(msg),
        Err(e) => Err(e.into()),
    }
}

fn cmd_settings<S: KeyValueStore>(
    session: &mut Session<S, DefaultRandom>,
    theme: Option<Theme>,
    mode: Option<SafetyMode>,
) -> Result<()> {
    session.open_settings()?;
    if let Some(theme) = theme {
        session.set_theme(theme)?;
    }
    if let Some(mode) = mode {
        session.set_mode(mode)?;
    }

    let view = session.view();
    println!("{}", "Settings:".bold());
    println!("  Theme: {}", view.theme.to_string().cyan());
    println!("  Mode: {}", view.mode.to_string().cyan());

    session.close_settings()?;
    Ok(())
}

fn cmd_reset<S: KeyValueStore>(session: &mut Session<S, DefaultRandom>, yes: bool) -> Result<()> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt("Erase all demo data?")
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

    if !confirmed {
        println!("Cancelled.");
        return Ok(());
    }

    session.reset_all();
    println!("{} Local data erased", "✓".green());
    Ok(())
}

fn cmd_config(
    set_data_dir: Option<PathBuf>,
    set_seed: Option<u64>,
    cancel_replies_on_block: Option<bool>,
) -> Result<()> {
    let mut config = Config::load()?;

    if set_data_dir.is_some() || set_seed.is_some() || cancel_replies_on_block.is_some() {
        config = config.with_overrides(set_data_dir, set_seed);
        if let Some(cancel) = cancel_replies_on_block {
            config.cancel_replies_on_block = cancel;
        }
        config.save()?;
        println!("{} Saved to {:?}", "✓".green(), Config::config_path()?);
    }

    let resolved = config.clone().apply_env()?;
    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Data dir: {:?}", resolved.data_dir()?);
    println!(
        "  Seed: {}",
        resolved
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string())
            .cyan()
    );
    println!(
        "  Cancel replies on block: {}",
        if resolved.cancel_replies_on_block {
            "yes".green()
        } else {
            "no".dimmed()
        }
    );

    Ok(())
}
