// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use rota_core::{APP_NAME, Rota};

use crate::cmd_event::{CmdEventEdit, CmdEventList, CmdEventNew, CmdEventRm};
use crate::cmd_login::CmdLogin;
use crate::config::parse_config;

/// Run the rota command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Offline-first appointment scheduling for clinic staff.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to list
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/rota/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/rota/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdEventList::command())
            .subcommand(CmdEventNew::command())
            .subcommand(CmdEventEdit::command())
            .subcommand(CmdEventRm::command())
            .subcommand(CmdLogin::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
            Some((CmdEventNew::NAME, matches)) => EventNew(CmdEventNew::from(matches)?),
            Some((CmdEventEdit::NAME, matches)) => EventEdit(CmdEventEdit::from(matches)),
            Some((CmdEventRm::NAME, matches)) => EventRm(CmdEventRm::from(matches)),
            Some((CmdLogin::NAME, matches)) => Login(CmdLogin::from(matches)),
            None => EventList(CmdEventList::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List appointments
    EventList(CmdEventList),

    /// Book a new appointment
    EventNew(CmdEventNew),

    /// Edit an appointment
    EventEdit(CmdEventEdit),

    /// Cancel appointments
    EventRm(CmdEventRm),

    /// Save the backend access token
    Login(CmdLogin),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            EventList(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventNew(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventEdit(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            EventRm(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Login(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Rota) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let rota = Rota::new(core_config).await?;

        f(&rota).await?;

        rota.close().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_flag() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::EventList(_)));
    }

    #[test]
    fn parse_defaults_to_list() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        assert!(matches!(cli.command, Commands::EventList(_)));
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(vec!["test", "list", "--verbose"]).unwrap();
        match cli.command {
            Commands::EventList(cmd) => assert!(cmd.verbose),
            _ => panic!("Expected EventList command"),
        }
    }

    #[test]
    fn parse_new() {
        let args = vec!["test", "new", "Annual check-up", "--start", "2026-10-05 10:00"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::EventNew(cmd) => {
                assert_eq!(cmd.title, "Annual check-up");
                assert_eq!(cmd.start, "2026-10-05 10:00");
                assert_eq!(cmd.end, None);
            }
            _ => panic!("Expected EventNew command"),
        }
    }

    #[test]
    fn parse_add_alias() {
        let args = vec!["test", "add", "Follow-up", "--start", "2026-10-05 10:00"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Commands::EventNew(_)));
    }

    #[test]
    fn parse_edit() {
        let args = vec!["test", "edit", "ev-1", "--title", "Rescheduled"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::EventEdit(cmd) => {
                assert_eq!(cmd.id, "ev-1");
                assert_eq!(cmd.title, Some("Rescheduled".to_string()));
            }
            _ => panic!("Expected EventEdit command"),
        }
    }

    #[test]
    fn parse_rm() {
        let cli = Cli::try_parse_from(vec!["test", "rm", "ev-1", "ev-2"]).unwrap();
        match cli.command {
            Commands::EventRm(cmd) => {
                assert_eq!(cmd.ids, vec!["ev-1".to_string(), "ev-2".to_string()]);
            }
            _ => panic!("Expected EventRm command"),
        }
    }

    #[test]
    fn parse_login() {
        let cli = Cli::try_parse_from(vec!["test", "login", "secret-token"]).unwrap();
        match cli.command {
            Commands::Login(cmd) => assert_eq!(cmd.token, "secret-token"),
            _ => panic!("Expected Login command"),
        }
    }
}
