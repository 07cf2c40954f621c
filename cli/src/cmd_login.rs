// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use rota_core::Rota;

#[derive(Debug, Clone)]
pub struct CmdLogin {
    pub token: String,
}

impl CmdLogin {
    pub const NAME: &str = "login";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Save the access token used for backend requests")
            .arg(arg!(<TOKEN> "Bearer access token"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            token: matches
                .get_one::<String>("TOKEN")
                .cloned()
                .unwrap_or_default(),
        }
    }

    pub async fn run(self, rota: &Rota) -> Result<(), Box<dyn Error>> {
        tracing::debug!("saving access token...");
        rota.save_auth_token(&self.token).await?;
        println!("Access token saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_login_token() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdLogin::command());

        let matches = cmd
            .try_get_matches_from(["test", "login", "secret-token"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("login").unwrap();
        let parsed = CmdLogin::from(sub_matches);

        assert_eq!(parsed.token, "secret-token");
    }
}
