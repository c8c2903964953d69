//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// crud-list - CRUD HTTP service for contact list records
#[derive(Parser, Debug)]
#[command(name = "crud-list")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Arguments for the serve command.
///
/// Flags override `SERVER_HOST`/`SERVER_PORT` from the loaded configuration.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_without_flags_keeps_config_address() {
        let cli = Cli::try_parse_from(["crud-list", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, None);
                assert_eq!(args.port, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_port_flag_parses() {
        let cli = Cli::try_parse_from(["crud-list", "serve", "-p", "8080"]).unwrap();
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, Some(8080)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_migrate_status_parses() {
        let cli = Cli::try_parse_from(["crud-list", "-v", "migrate", "status"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Migrate(args) => assert_eq!(args.action, MigrateAction::Status),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
