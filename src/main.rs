use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use signup_wizard::app::{App, Outcome};
use signup_wizard::config::Config;
use signup_wizard::wizard::pricing::format_price;
use signup_wizard::wizard::{Cadence, WizardSnapshot};
use signup_wizard::logging::{self, LoggingHandle};
use signup_wizard::quote;

#[derive(Parser)]
#[command(name = "signup-wizard")]
#[command(about = "Multi-step subscription sign-up wizard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List plans and add-ons with prices
    Catalog {
        /// Show yearly prices
        #[arg(short, long)]
        yearly: bool,
    },

    /// Price a plan and add-ons without the interactive wizard
    Quote {
        /// Plan name (default: arcade)
        #[arg(short, long)]
        plan: Option<String>,

        /// Add-on name; repeat for more than one
        #[arg(short, long)]
        addon: Vec<String>,

        /// Bill yearly instead of monthly
        #[arg(short, long)]
        yearly: bool,

        /// Print the wizard snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Catalog { yearly }) => {
            cmd_catalog(&config, yearly);
        }
        Some(Commands::Quote {
            plan,
            addon,
            yearly,
            json,
        }) => {
            cmd_quote(&config, plan.as_deref(), &addon, yearly, json)?;
        }
        Some(Commands::Config) => {
            print!("{}", config.to_toml()?);
        }
        None => {
            // No subcommand = launch the wizard
            run_tui(config, logging_handle)?;
        }
    }

    Ok(())
}

fn cadence_for(config: &Config, yearly: bool) -> Cadence {
    if yearly {
        Cadence::Yearly
    } else {
        config.wizard.default_cadence
    }
}

fn run_tui(config: Config, logging_handle: LoggingHandle) -> Result<()> {
    let mut app = App::new(config);
    let result = app.run();

    // Flush the session log, then point at it if anything was written
    if let Some(log_path) = logging_handle.finish() {
        eprintln!("Session log: {}", log_path.display());
    }

    match result? {
        Outcome::Completed(snapshot) => print_completion(&snapshot),
        Outcome::Cancelled => println!("Sign-up cancelled"),
    }

    Ok(())
}

fn print_completion(snapshot: &WizardSnapshot) {
    println!(
        "Subscribed {} to {} ({}) for {}",
        snapshot.personal_info.name,
        snapshot.selected_plan.name,
        snapshot.cadence,
        format_price(snapshot.total, snapshot.cadence)
    );
}

fn cmd_catalog(config: &Config, yearly: bool) {
    print!("{}", quote::catalog_text(cadence_for(config, yearly)));
}

fn cmd_quote(
    config: &Config,
    plan: Option<&str>,
    addons: &[String],
    yearly: bool,
    json: bool,
) -> Result<()> {
    let wizard = quote::build_quote(plan, addons, cadence_for(config, yearly))?;

    if json {
        let snapshot = wizard.snapshot();
        let out = serde_json::to_string_pretty(&snapshot).context("Failed to serialize quote")?;
        println!("{out}");
    } else {
        print!("{}", quote::summary_text(&wizard.summary()));
    }

    Ok(())
}
