use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "lexchat", about = "Terminal client for the judiciary Q&A chatbot")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start TUI shell
    Run,
    /// Ask one question and print the formatted reply
    Ask {
        /// Question text, sent as typed
        message: String,
        /// Print without colors
        #[arg(long)]
        plain: bool,
    },
    /// Format text from stdin the way bot replies are shown
    Format {
        /// Print without colors
        #[arg(long)]
        plain: bool,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["lexchat"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
    }

    #[test]
    fn parses_explicit_run_command() {
        let cli = Cli::parse_from(["lexchat", "run", "--config", "custom.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn parses_ask_with_message_and_plain_flag() {
        let cli = Cli::parse_from(["lexchat", "ask", "What is the fine?", "--plain"]);

        match cli.command_or_default() {
            Command::Ask { message, plain } => {
                assert_eq!(message, "What is the fine?");
                assert!(plain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_format_without_plain_flag() {
        let cli = Cli::parse_from(["lexchat", "format"]);

        assert!(matches!(
            cli.command_or_default(),
            Command::Format { plain: false }
        ));
    }

    #[test]
    fn ask_requires_message() {
        assert!(Cli::try_parse_from(["lexchat", "ask"]).is_err());
    }
}
