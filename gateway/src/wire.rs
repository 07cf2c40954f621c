// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Tolerant translation between server records and canonical events.
//!
//! The backend schema is not fixed: different deployments ship different
//! field names for the same data. Each canonical field therefore accepts
//! several plausible source names, and missing fields get documented
//! defaults. Outbound payloads always use the first alias of each table.

use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{Timestamp, ToSpan};
use serde_json::{Map, Value, json};

use crate::event::{Category, Event, EventDraft};

const ID_FIELDS: &[&str] = &["id", "_id", "uuid"];
const TITLE_FIELDS: &[&str] = &["title", "name", "summary"];
const COLOR_FIELDS: &[&str] = &["color", "colour"];
const CATEGORY_FIELDS: &[&str] = &["category", "type", "kind"];
const PATIENT_FIELDS: &[&str] = &["patientName", "patient_name", "patient", "client"];
const EMAIL_FIELDS: &[&str] = &["email", "contactEmail", "contact_email"];
const PHONE_FIELDS: &[&str] = &["phone", "contactPhone", "contact_phone"];
const START_FIELDS: &[&str] = &["startDate", "start_at", "start_date", "start", "startTime"];
const END_FIELDS: &[&str] = &["endDate", "end_at", "end_date", "end", "endTime"];
const STAFF_FIELDS: &[&str] = &["staffName", "staff_name", "staff", "provider", "doctor"];
const HEALTH_CARD_FIELDS: &[&str] = &[
    "healthCardNumber",
    "health_card_number",
    "healthCard",
    "health_card",
];
const NOTES_FIELDS: &[&str] = &["notes", "note", "description"];
const MEETING_FIELDS: &[&str] = &[
    "meetingDetails",
    "meeting_details",
    "meeting",
    "location",
    "room",
];

const DEFAULT_TITLE: &str = "Appointment";

/// Extracts the record identifier, accepting string and numeric ids.
pub(crate) fn record_id(value: &Value) -> Option<String> {
    let record = value.as_object()?;
    ID_FIELDS
        .iter()
        .filter_map(|name| record.get(*name))
        .find_map(|value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

/// Normalizes one server record into a canonical [`Event`].
///
/// Returns `None` for records with no usable id or start timestamp; such
/// records cannot be represented and are skipped by the caller.
pub(crate) fn event_from_record(value: &Value) -> Option<Event> {
    let record = value.as_object()?;
    let id = record_id(value)?;
    let start = ts_field(record, START_FIELDS)?;

    // A missing or inverted end degrades to the documented one-hour default.
    let end = ts_field(record, END_FIELDS)
        .filter(|end| *end > start)
        .unwrap_or_else(|| default_end(start));

    Some(Event {
        id,
        title: str_field(record, TITLE_FIELDS).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        color: str_field(record, COLOR_FIELDS),
        category: str_field(record, CATEGORY_FIELDS)
            .map(|s| Category::from_server(&s))
            .unwrap_or_default(),
        patient_name: str_field(record, PATIENT_FIELDS),
        contact_email: str_field(record, EMAIL_FIELDS),
        contact_phone: str_field(record, PHONE_FIELDS),
        start,
        end,
        staff_name: str_field(record, STAFF_FIELDS),
        health_card: str_field(record, HEALTH_CARD_FIELDS),
        notes: str_field(record, NOTES_FIELDS),
        meeting_details: str_field(record, MEETING_FIELDS),
    })
}

/// Interprets a create response.
///
/// The only hard requirement is an assigned identifier; a sparse response
/// body falls back to the fields of the submitted draft.
pub(crate) fn created_event(draft: &EventDraft, body: &Value) -> Option<Event> {
    let id = record_id(body)?;
    match event_from_record(body) {
        Some(event) => Some(event),
        None => Some(draft.clone().into_event(id)),
    }
}

/// Serializes a draft into the server payload shape, without an id.
pub(crate) fn draft_to_record(draft: &EventDraft) -> Value {
    json!({
        "title": draft.title,
        "color": draft.color,
        "category": draft.category.to_string(),
        "patientName": draft.patient_name,
        "email": draft.contact_email,
        "phone": draft.contact_phone,
        "startDate": draft.start.to_string(),
        "endDate": draft.end.to_string(),
        "staffName": draft.staff_name,
        "healthCardNumber": draft.health_card,
        "notes": draft.notes,
        "meetingDetails": draft.meeting_details,
    })
}

/// Serializes a canonical event into the server payload shape.
pub(crate) fn event_to_record(event: &Event) -> Value {
    json!({
        "id": event.id,
        "title": event.title,
        "color": event.color,
        "category": event.category.to_string(),
        "patientName": event.patient_name,
        "email": event.contact_email,
        "phone": event.contact_phone,
        "startDate": event.start.to_string(),
        "endDate": event.end.to_string(),
        "staffName": event.staff_name,
        "healthCardNumber": event.health_card,
        "notes": event.notes,
        "meetingDetails": event.meeting_details,
    })
}

fn str_field(record: &Map<String, Value>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| record.get(*name))
        .find_map(Value::as_str)
        .map(str::to_string)
}

fn ts_field(record: &Map<String, Value>, names: &[&str]) -> Option<Timestamp> {
    names
        .iter()
        .filter_map(|name| record.get(*name))
        .find_map(parse_timestamp)
}

fn parse_timestamp(value: &Value) -> Option<Timestamp> {
    let s = value.as_str()?;
    if let Ok(ts) = s.parse::<Timestamp>() {
        return Some(ts);
    }

    // Tolerate zone-less timestamps by assuming UTC.
    s.parse::<DateTime>()
        .ok()?
        .to_zoned(TimeZone::UTC)
        .ok()
        .map(|zoned| zoned.timestamp())
}

fn default_end(start: Timestamp) -> Timestamp {
    start
        .saturating_add(1.hour())
        .expect("a span of hours is always valid timestamp arithmetic")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliased_start_fields_normalize_to_the_same_event() {
        let camel = json!({
            "id": "e1",
            "title": "Check-in",
            "startDate": "2026-10-05T09:00:00Z",
            "endDate": "2026-10-05T09:30:00Z",
        });
        let snake = json!({
            "id": "e1",
            "title": "Check-in",
            "start_at": "2026-10-05T09:00:00Z",
            "end_at": "2026-10-05T09:30:00Z",
        });

        let a = event_from_record(&camel).unwrap();
        let b = event_from_record(&snake).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_fields_receive_documented_defaults() {
        let record = json!({
            "_id": "e2",
            "start": "2026-10-05T09:00:00Z",
        });

        let event = event_from_record(&record).unwrap();
        assert_eq!(event.title, "Appointment");
        assert_eq!(event.category, Category::Regular);
        assert_eq!(event.end, "2026-10-05T10:00:00Z".parse().unwrap());
    }

    #[test]
    fn inverted_end_falls_back_to_one_hour() {
        let record = json!({
            "id": "e3",
            "startDate": "2026-10-05T09:00:00Z",
            "endDate": "2026-10-05T08:00:00Z",
        });

        let event = event_from_record(&record).unwrap();
        assert_eq!(event.end, "2026-10-05T10:00:00Z".parse().unwrap());
        assert!(event.validate().is_ok());
    }

    #[test]
    fn numeric_ids_are_accepted() {
        let record = json!({
            "id": 42,
            "startDate": "2026-10-05T09:00:00Z",
        });

        assert_eq!(event_from_record(&record).unwrap().id, "42");
    }

    #[test]
    fn zoneless_timestamps_assume_utc() {
        let record = json!({
            "id": "e4",
            "startDate": "2026-10-05T09:00:00",
            "endDate": "2026-10-05T09:30:00",
        });

        let event = event_from_record(&record).unwrap();
        assert_eq!(event.start, "2026-10-05T09:00:00Z".parse().unwrap());
        assert_eq!(event.end, "2026-10-05T09:30:00Z".parse().unwrap());
    }

    #[test]
    fn records_without_id_or_start_are_rejected() {
        let no_id = json!({ "startDate": "2026-10-05T09:00:00Z" });
        assert!(event_from_record(&no_id).is_none());

        let no_start = json!({ "id": "e5", "title": "Opaque" });
        assert!(event_from_record(&no_start).is_none());

        assert!(event_from_record(&json!("not an object")).is_none());
    }

    #[test]
    fn unknown_category_maps_to_regular() {
        let record = json!({
            "id": "e6",
            "type": "house-call",
            "startDate": "2026-10-05T09:00:00Z",
        });

        assert_eq!(event_from_record(&record).unwrap().category, Category::Regular);
    }

    #[test]
    fn created_event_falls_back_to_draft_for_sparse_bodies() {
        let draft = EventDraft {
            title: "New patient intake".to_string(),
            color: Some("#2266aa".to_string()),
            category: Category::Consultation,
            patient_name: Some("Maya Osei".to_string()),
            contact_email: None,
            contact_phone: None,
            start: "2026-10-05T09:00:00Z".parse().unwrap(),
            end: "2026-10-05T09:45:00Z".parse().unwrap(),
            staff_name: None,
            health_card: None,
            notes: None,
            meeting_details: None,
        };

        let sparse = json!({ "id": "srv-9" });
        let event = created_event(&draft, &sparse).unwrap();
        assert_eq!(event.id, "srv-9");
        assert_eq!(event.title, "New patient intake");
        assert_eq!(event.category, Category::Consultation);

        let no_id = json!({ "ok": true });
        assert!(created_event(&draft, &no_id).is_none());
    }

    #[test]
    fn outbound_records_round_trip_through_normalization() {
        let event = Event {
            id: "e7".to_string(),
            title: "Annual check-up".to_string(),
            color: None,
            category: Category::CheckUp,
            patient_name: Some("Jon Vik".to_string()),
            contact_email: Some("jon@example.com".to_string()),
            contact_phone: Some("555-0101".to_string()),
            start: "2026-10-05T10:00:00Z".parse().unwrap(),
            end: "2026-10-05T10:45:00Z".parse().unwrap(),
            staff_name: Some("Dr. Chen".to_string()),
            health_card: Some("HC-1234".to_string()),
            notes: Some("fasting bloodwork".to_string()),
            meeting_details: Some("Room 4".to_string()),
        };

        let record = event_to_record(&event);
        assert_eq!(event_from_record(&record).unwrap(), event);
    }
}
