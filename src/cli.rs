/// CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Build timestamp injected at compile time
pub const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");
pub const VERSION_WITH_BUILD: &str = concat!(env!("CARGO_PKG_VERSION"), " (built: ", env!("BUILD_TIMESTAMP"), ")");

#[derive(Parser, Debug)]
#[command(name = "company-profile")]
#[command(author, version = VERSION_WITH_BUILD, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Services file (JSON, YAML or TOML), overrides the configured one
    #[arg(short, long, global = true)]
    pub services: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the profile as it first appears
    Show,

    /// List the services read from shared state
    Services,

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// View configuration
    Show,

    /// Remember a services file for future runs
    SetServices {
        /// Path to a .json, .yaml, .yml or .toml file
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_tui() {
        let cli = Cli::try_parse_from(["company-profile"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_global_services_flag() {
        let cli = Cli::try_parse_from(["company-profile", "services", "--services", "vet.yaml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Services)));
        assert_eq!(cli.services, Some(PathBuf::from("vet.yaml")));
    }

    #[test]
    fn test_config_set_services() {
        let cli = Cli::try_parse_from(["company-profile", "config", "set-services", "/srv/s.json"]).unwrap();
        match cli.command {
            Some(Commands::Config { command: ConfigCommands::SetServices { path } }) => {
                assert_eq!(path, PathBuf::from("/srv/s.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_version_includes_build_time() {
        assert!(VERSION_WITH_BUILD.contains(BUILD_TIMESTAMP));
    }
}
