// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical appointment model, independent of server field naming.

use std::fmt::{self, Display};
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Appointment category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Needs attention as soon as possible.
    Urgent,

    /// A regular appointment. Unrecognized server values map here.
    #[default]
    Regular,

    /// A routine check-up.
    CheckUp,

    /// A consultation.
    Consultation,
}

impl Category {
    /// Maps a server-provided category string onto the enumeration.
    ///
    /// The backend schema is not authoritative, so this is deliberately
    /// lenient: matching is case-insensitive, a few alternate spellings are
    /// accepted, and anything unrecognized becomes [`Category::Regular`].
    #[must_use]
    pub fn from_server(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        match self {
            Category::Urgent => "urgent",
            Category::Regular => "regular",
            Category::CheckUp => "check-up",
            Category::Consultation => "consultation",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "urgent" => Ok(Category::Urgent),
            "regular" => Ok(Category::Regular),
            "check-up" | "checkup" | "check_up" => Ok(Category::CheckUp),
            "consultation" => Ok(Category::Consultation),
            _ => Err(()),
        }
    }
}

/// The time range of an event is inverted or empty.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("appointment end must be strictly after its start")]
pub struct InvalidTimeRange;

/// A canonical appointment.
///
/// Each value is an independent, owned copy; readers never share mutable
/// state with the cache or with other callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier. Server-assigned, or `local-` prefixed when the
    /// appointment was accepted while offline.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Display color hint, if any.
    #[serde(default)]
    pub color: Option<String>,

    /// Appointment category.
    #[serde(default)]
    pub category: Category,

    /// Patient name.
    #[serde(default)]
    pub patient_name: Option<String>,

    /// Patient contact email.
    #[serde(default)]
    pub contact_email: Option<String>,

    /// Patient contact phone.
    #[serde(default)]
    pub contact_phone: Option<String>,

    /// Start of the appointment.
    pub start: Timestamp,

    /// End of the appointment. Always strictly after `start`.
    pub end: Timestamp,

    /// Assigned staff member.
    #[serde(default)]
    pub staff_name: Option<String>,

    /// Patient health card number.
    #[serde(default)]
    pub health_card: Option<String>,

    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// Meeting details, e.g. a room number or a video link.
    #[serde(default)]
    pub meeting_details: Option<String>,
}

impl Event {
    /// Checks the time-range invariant.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTimeRange`] if `end <= start`.
    pub fn validate(&self) -> Result<(), InvalidTimeRange> {
        if self.end > self.start {
            Ok(())
        } else {
            Err(InvalidTimeRange)
        }
    }
}

/// An appointment that does not have an identifier yet.
///
/// Used for creation: the server assigns the id, or the caller synthesizes a
/// local one when the backend is unreachable.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    /// Display title.
    pub title: String,

    /// Display color hint, if any.
    pub color: Option<String>,

    /// Appointment category.
    pub category: Category,

    /// Patient name.
    pub patient_name: Option<String>,

    /// Patient contact email.
    pub contact_email: Option<String>,

    /// Patient contact phone.
    pub contact_phone: Option<String>,

    /// Start of the appointment.
    pub start: Timestamp,

    /// End of the appointment. Must be strictly after `start`.
    pub end: Timestamp,

    /// Assigned staff member.
    pub staff_name: Option<String>,

    /// Patient health card number.
    pub health_card: Option<String>,

    /// Free-text notes.
    pub notes: Option<String>,

    /// Meeting details, e.g. a room number or a video link.
    pub meeting_details: Option<String>,
}

impl EventDraft {
    /// Checks the time-range invariant.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTimeRange`] if `end <= start`.
    pub fn validate(&self) -> Result<(), InvalidTimeRange> {
        if self.end > self.start {
            Ok(())
        } else {
            Err(InvalidTimeRange)
        }
    }

    /// Completes the draft with an assigned identifier.
    #[must_use]
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            color: self.color,
            category: self.category,
            patient_name: self.patient_name,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            start: self.start,
            end: self.end,
            staff_name: self.staff_name,
            health_card: self.health_card,
            notes: self.notes,
            meeting_details: self.meeting_details,
        }
    }
}
