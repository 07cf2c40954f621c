// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Built-in placeholder appointments.
//!
//! Served only when the backend is unreachable and the local cache is empty,
//! so a fresh install never renders a blank calendar. This is deliberately
//! degraded-mode sample data, not real bookings; the `seed-` id prefix keeps
//! it recognizable.

use jiff::Timestamp;
use rota_gateway::{Category, Event};

/// The fixed, non-empty seed dataset.
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "seed-001".to_string(),
            title: "New patient intake".to_string(),
            color: Some("#4a90d9".to_string()),
            category: Category::Consultation,
            patient_name: Some("Sample Patient".to_string()),
            contact_email: None,
            contact_phone: None,
            // 2026-10-05 09:00-09:30 UTC
            start: Timestamp::constant(1_791_190_800, 0),
            end: Timestamp::constant(1_791_192_600, 0),
            staff_name: Some("Dr. Chen".to_string()),
            health_card: None,
            notes: Some("Placeholder appointment shown while offline".to_string()),
            meeting_details: Some("Room 1".to_string()),
        },
        Event {
            id: "seed-002".to_string(),
            title: "Annual check-up".to_string(),
            color: Some("#88cc44".to_string()),
            category: Category::CheckUp,
            patient_name: Some("Sample Patient".to_string()),
            contact_email: None,
            contact_phone: None,
            // 2026-10-05 10:00-10:45 UTC
            start: Timestamp::constant(1_791_194_400, 0),
            end: Timestamp::constant(1_791_197_100, 0),
            staff_name: Some("Dr. Okafor".to_string()),
            health_card: None,
            notes: Some("Placeholder appointment shown while offline".to_string()),
            meeting_details: Some("Room 2".to_string()),
        },
        Event {
            id: "seed-003".to_string(),
            title: "Urgent follow-up".to_string(),
            color: Some("#d94a4a".to_string()),
            category: Category::Urgent,
            patient_name: Some("Sample Patient".to_string()),
            contact_email: None,
            contact_phone: None,
            // 2026-10-05 11:15-11:45 UTC
            start: Timestamp::constant(1_791_198_900, 0),
            end: Timestamp::constant(1_791_200_700, 0),
            staff_name: Some("Dr. Chen".to_string()),
            health_card: None,
            notes: Some("Placeholder appointment shown while offline".to_string()),
            meeting_details: Some("Video link".to_string()),
        },
    ]
}
