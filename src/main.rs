use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::{info, warn};

use company_profile::cli::{Cli, Commands, ConfigCommands};
use company_profile::core::{service_names, Profile, ProfileField, Store};
use company_profile::utils::{logger, AppConfig, REMINDERS, REMINDERS_LINK, REMINDERS_TITLE};
use company_profile::App;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let services_file = config.resolve_services_file(cli.services.as_deref());

    match cli.command {
        None => {
            // No command - run interactive TUI
            logger::init_file_logger(config.log_level(), cli.verbose, &config.log_file()?)?;
            let store = load_store(services_file)?;
            let mut app = App::new(Box::new(store));
            app.run()?;
        }
        Some(Commands::Show) => {
            logger::init_cli_logger(config.log_level(), cli.verbose)?;
            handle_show(&load_store(services_file)?);
        }
        Some(Commands::Services) => {
            logger::init_cli_logger(config.log_level(), cli.verbose)?;
            handle_services(&load_store(services_file)?);
        }
        Some(Commands::Config { command }) => {
            logger::init_cli_logger(config.log_level(), cli.verbose)?;
            handle_config(command, config, services_file)?;
        }
    }

    Ok(())
}

/// A configured file that does not exist is an absent collection, not an error
fn load_store(services_file: Option<PathBuf>) -> Result<Store> {
    let Some(path) = services_file else {
        info!("no services file configured, using built-in services");
        return Ok(Store::with_defaults());
    };

    match Store::from_file(&path) {
        Ok(store) => {
            info!(path = %path.display(), "loaded services");
            Ok(store)
        }
        Err(e) if e.is_not_found() => {
            warn!(path = %path.display(), "services file not found, showing no services");
            Ok(Store::absent())
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to load services")),
    }
}

fn handle_show(store: &Store) {
    let profile = Profile::new();

    println!("{}\n", profile.value(ProfileField::Name).bold().truecolor(0, 109, 119));

    println!("{}", REMINDERS_TITLE.bold().truecolor(0, 109, 119));
    for reminder in REMINDERS {
        println!("  {}", reminder.author.bold());
        println!("  {}", reminder.text.dimmed());
    }
    println!("  {}\n", REMINDERS_LINK.underline());

    print_section(ProfileField::About.label(), profile.value(ProfileField::About));

    println!("{}", "Our Services".bold().truecolor(0, 109, 119));
    for name in service_names(store) {
        println!("  • {}", name);
    }
    println!();

    print_section(ProfileField::Hours.label(), profile.value(ProfileField::Hours));
    print_section(ProfileField::Address.label(), profile.value(ProfileField::Address));
}

fn print_section(title: &str, body: &str) {
    println!("{}", title.bold().truecolor(0, 109, 119));
    println!("  {}\n", body.dimmed());
}

fn handle_services(store: &Store) {
    let names = service_names(store);

    if names.is_empty() {
        println!("No services available");
        return;
    }

    for (i, name) in names.iter().enumerate() {
        println!("{:>3}. {}", i + 1, name);
    }
}

fn handle_config(command: ConfigCommands, mut config: AppConfig, services_file: Option<PathBuf>) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            println!("Configuration ({}):\n", AppConfig::config_path()?.display());
            println!(
                "services_file: {}",
                services_file
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<built-in services>".to_string())
            );
            println!("log_level: {}", config.log_level());
            println!("log_file: {}", config.log_file()?.display());
        }
        ConfigCommands::SetServices { path } => {
            // Fail early on a file the view could not read
            Store::from_file(&path).context("Refusing to store an unreadable services file")?;
            config.set_services_file(&path)?;
            println!("{} Services file set to {}", "✓".green(), path.display());
        }
    }

    Ok(())
}
