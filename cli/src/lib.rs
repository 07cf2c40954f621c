// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for the rota appointment client.

mod cli;
mod cmd_event;
mod cmd_login;
mod config;
mod event_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
