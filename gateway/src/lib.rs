// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! REST gateway for appointment backends whose route names are not fixed.
//!
//! The backend this client talks to exposes the events collection under one of
//! several plausible resource paths, with field names that vary between
//! deployments. This crate owns the three pieces that deal with that
//! uncertainty: the ordered candidate-endpoint table, the per-request HTTP
//! plumbing (bearer credential, fixed timeout, status mapping), and the
//! tolerant translation between server records and the canonical [`Event`].

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::similar_names, clippy::single_match_else, clippy::match_bool)]

mod client;
mod config;
mod endpoint;
mod error;
mod event;
mod http;
mod wire;

pub use crate::client::EventGateway;
pub use crate::config::GatewayConfig;
pub use crate::endpoint::{DEFAULT_RESOURCES, Endpoint, EndpointResolver, Operation};
pub use crate::error::GatewayError;
pub use crate::event::{Category, Event, EventDraft, InvalidTimeRange};
pub use crate::http::{HttpClient, StaticToken, TokenProvider};
