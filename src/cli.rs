use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "telebase")]
#[command(author, version, about = "Telegram bot service skeleton", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the bot (the default when no subcommand is given)
    Run,

    /// Validate the environment configuration and exit
    CheckConfig,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_run() {
        let cli = Cli::try_parse_from(["telebase"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_run_subcommand() {
        let cli = Cli::try_parse_from(["telebase", "run"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Run));
    }

    #[test]
    fn test_check_config_subcommand() {
        let cli = Cli::try_parse_from(["telebase", "check-config"]).unwrap();
        assert_eq!(cli.command, Some(Commands::CheckConfig));
    }
}
