// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the rota appointment client: durable local storage, credential
//! store, and the synchronization facade that keeps the two consistent with
//! an unreliable backend.

mod cache;
mod config;
mod localdb;
mod rota;
mod seed;
mod token;

pub use rota_gateway::{Category, Event, EventDraft, GatewayError, InvalidTimeRange};

pub use crate::cache::EventCache;
pub use crate::config::{APP_NAME, Config};
pub use crate::localdb::LocalDb;
pub use crate::rota::{ListSource, Listing, Rota};
pub use crate::seed::seed_events;
pub use crate::token::TokenStore;
