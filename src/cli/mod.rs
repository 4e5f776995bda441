pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "contentctl")]
#[command(about = "Content API companion CLI - token minting and configuration inspection")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Mint a signed access token with the configured secret")]
    Token(commands::token::TokenArgs),

    #[command(about = "Show the effective server configuration")]
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Token(args) => commands::token::handle(args, config, output_format),
        Commands::Config => commands::config::handle(config, output_format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;

    #[test]
    fn parses_token_command() {
        let cli = Cli::try_parse_from(["contentctl", "--json", "token", "--user", "alice", "--role", "admin"]).unwrap();
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Json);

        match cli.command {
            Commands::Token(args) => {
                assert_eq!(args.user, "alice");
                assert_eq!(args.role, Role::Admin);
            }
            Commands::Config => panic!("expected token command"),
        }
    }

    #[test]
    fn role_defaults_to_user() {
        let cli = Cli::try_parse_from(["contentctl", "token", "--user", "bob"]).unwrap();
        match cli.command {
            Commands::Token(args) => assert_eq!(args.role, Role::User),
            Commands::Config => panic!("expected token command"),
        }
    }
}
