// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write as _;

use colored::Colorize;
use jiff::Timestamp;
use jiff::tz::TimeZone;
use rota_core::{Category, Event};

/// Renders appointments for the terminal.
#[derive(Debug, Clone, Copy)]
pub struct EventFormatter {
    verbose: bool,
}

impl EventFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn format(&self, events: &[Event]) -> String {
        let mut out = String::new();
        for event in events {
            let category = match event.category {
                Category::Urgent => event.category.as_ref().red().bold(),
                Category::CheckUp => event.category.as_ref().green(),
                Category::Consultation => event.category.as_ref().blue(),
                Category::Regular => event.category.as_ref().normal(),
            };
            let _ = writeln!(
                out,
                "{}  {}  {} [{}]",
                event.id.dimmed(),
                time_range(event.start, event.end),
                event.title.bold(),
                category,
            );

            if self.verbose {
                if let Some(patient) = &event.patient_name {
                    let _ = writeln!(out, "    Patient: {patient}");
                }
                if let Some(email) = &event.contact_email {
                    let _ = writeln!(out, "    Email: {email}");
                }
                if let Some(phone) = &event.contact_phone {
                    let _ = writeln!(out, "    Phone: {phone}");
                }
                if let Some(staff) = &event.staff_name {
                    let _ = writeln!(out, "    Staff: {staff}");
                }
                if let Some(health_card) = &event.health_card {
                    let _ = writeln!(out, "    Health card: {health_card}");
                }
                if let Some(location) = &event.meeting_details {
                    let _ = writeln!(out, "    Location: {location}");
                }
                if let Some(notes) = &event.notes {
                    let _ = writeln!(out, "    Notes: {notes}");
                }
            }
        }
        out
    }
}

/// Formats an appointment's time range in UTC, collapsing the date when the
/// appointment starts and ends on the same day.
fn time_range(start: Timestamp, end: Timestamp) -> String {
    let start = start.to_zoned(TimeZone::UTC);
    let end = end.to_zoned(TimeZone::UTC);
    if start.date() == end.date() {
        format!(
            "{} {}~{}",
            start.strftime("%Y-%m-%d"),
            start.strftime("%H:%M"),
            end.strftime("%H:%M")
        )
    } else {
        format!(
            "{}~{}",
            start.strftime("%Y-%m-%d %H:%M"),
            end.strftime("%Y-%m-%d %H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_event() -> Event {
        Event {
            id: "ev-1".to_string(),
            title: "Annual check-up".to_string(),
            color: None,
            category: Category::CheckUp,
            patient_name: Some("Jon Vik".to_string()),
            contact_email: None,
            contact_phone: None,
            start: "2026-10-05T10:00:00Z".parse().unwrap(),
            end: "2026-10-05T10:45:00Z".parse().unwrap(),
            staff_name: Some("Dr. Chen".to_string()),
            health_card: None,
            notes: None,
            meeting_details: Some("Room 4".to_string()),
        }
    }

    #[test]
    fn same_day_range_collapses_the_date() {
        let range = time_range(
            "2026-10-05T10:00:00Z".parse().unwrap(),
            "2026-10-05T10:45:00Z".parse().unwrap(),
        );
        assert_eq!(range, "2026-10-05 10:00~10:45");
    }

    #[test]
    fn cross_day_range_spells_out_both_dates() {
        let range = time_range(
            "2026-10-05T23:30:00Z".parse().unwrap(),
            "2026-10-06T00:15:00Z".parse().unwrap(),
        );
        assert_eq!(range, "2026-10-05 23:30~2026-10-06 00:15");
    }

    #[test]
    fn compact_format_shows_one_line_per_event() {
        colored::control::set_override(false);
        let out = EventFormatter::new(false).format(&[test_event()]);
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("ev-1"));
        assert!(out.contains("Annual check-up"));
        assert!(out.contains("check-up"));
    }

    #[test]
    fn verbose_format_includes_details() {
        colored::control::set_override(false);
        let out = EventFormatter::new(true).format(&[test_event()]);
        assert!(out.contains("Patient: Jon Vik"));
        assert!(out.contains("Staff: Dr. Chen"));
        assert!(out.contains("Location: Room 4"));
        assert!(!out.contains("Email:"));
    }
}
