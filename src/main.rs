//! phonenumber-hooks: phone number inspection for call-platform hooks
//!
//! A CLI front end for the inspection engine: administrative lookups,
//! call event simulation, and configuration management.

mod cli;

use std::collections::BTreeMap;
use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use cli::{Cli, Commands};
use phonenumber_hooks::config::{self, ConfigService, Settings};
use phonenumber_hooks::domain::{self, Action};
use phonenumber_hooks::service::{CallEvent, Dispatcher};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = ConfigService::load(cli.config.as_deref())?;

    // Initialize logging if debug mode
    if cli.debug || config.debug {
        domain::logger::init(&config.log_path)?;
    }

    // Execute command
    match cli.command {
        Commands::Lookup { words } => {
            let dispatcher = Dispatcher::with_settings(Settings::from_config(&config));
            let cmd = shell_words::join(&words);
            let mut lines: Vec<String> = Vec::new();
            let result = dispatcher.api(&cmd, &mut lines);
            for line in &lines {
                println!("{}", line);
            }
            if result.is_err() {
                process::exit(1);
            }
        }
        Commands::Session => {
            let dispatcher = Dispatcher::with_settings(Settings::from_config(&config));

            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read call event from stdin")?;
            debug!("Received input: {}", input);

            let event = CallEvent::from_json(&input).context("Failed to parse call event")?;

            let mut vars: BTreeMap<String, String> = BTreeMap::new();
            match event.data.as_deref() {
                Some(data) => dispatcher.app(data, &event.profile, &mut vars)?,
                None => dispatcher.on_init(&event.profile, &mut vars),
            }

            let output = serde_json::to_string_pretty(&vars)?;
            info!("Output: {}", output);
            println!("{}", output);
        }
        Commands::Actions => {
            for action in Action::ALL {
                println!("{}", action.name());
            }
        }
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(&p)?;
                p
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check => {
            config::validate(&config)?;
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Version => {
            println!("phonenumber-hooks {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
