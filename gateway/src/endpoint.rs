// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Candidate-endpoint table for the events collection.
//!
//! The authoritative route of the backend is not reliably known at build
//! time, so every operation is resolved to an ordered list of candidate
//! resource paths. The resolver is pure data transformation; trying the
//! candidates (and stopping at the first success) is the caller's job.

use std::fmt::{self, Display};

/// Default resource-path priority for the events collection.
///
/// The order is fixed so that retries are reproducible; deployments with a
/// known route can override it through configuration.
pub const DEFAULT_RESOURCES: &[&str] = &[
    "bookings",
    "appointments",
    "events",
    "calendar/events",
    "schedule",
];

/// The logical operation an endpoint is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Fetch the full event collection.
    List,

    /// Create a new event.
    Create,

    /// Update an existing event by id.
    Update,

    /// Delete an existing event by id.
    Delete,
}

/// A resolved server resource path, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// Wraps a resource path. A leading `/` is expected.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The resource path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Produces ordered candidate endpoints for each operation.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    resources: Vec<String>,
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl EndpointResolver {
    /// Creates a resolver with the given resource priority list.
    ///
    /// An empty list falls back to [`DEFAULT_RESOURCES`].
    #[must_use]
    pub fn new(resources: Vec<String>) -> Self {
        let resources = if resources.is_empty() {
            DEFAULT_RESOURCES.iter().map(ToString::to_string).collect()
        } else {
            resources
        };
        Self { resources }
    }

    /// Resolves the ordered candidates for `op`.
    ///
    /// `id` is the target entity for [`Operation::Update`] and
    /// [`Operation::Delete`]; it is ignored for collection operations.
    #[must_use]
    pub fn candidates(&self, op: Operation, id: Option<&str>) -> Vec<Endpoint> {
        self.resources
            .iter()
            .map(|resource| match (op, id) {
                (Operation::Update | Operation::Delete, Some(id)) => {
                    Endpoint(format!("/{resource}/{id}"))
                }
                _ => Endpoint(format!("/{resource}")),
            })
            .collect()
    }
}
