// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Gateway integration tests with wiremock.

use std::sync::Arc;

use rota_gateway::{
    Category, Endpoint, EventDraft, EventGateway, GatewayConfig, GatewayError, StaticToken,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(base_url: String) -> EventGateway {
    let config = GatewayConfig {
        base_url,
        ..Default::default()
    };
    EventGateway::new(config, Arc::new(StaticToken("test-token".to_string())))
        .expect("Failed to create gateway")
}

fn draft() -> EventDraft {
    EventDraft {
        title: "New patient intake".to_string(),
        color: Some("#2266aa".to_string()),
        category: Category::Consultation,
        patient_name: Some("Maya Osei".to_string()),
        contact_email: Some("maya@example.com".to_string()),
        contact_phone: None,
        start: "2026-10-05T09:00:00Z".parse().unwrap(),
        end: "2026-10-05T09:45:00Z".parse().unwrap(),
        staff_name: Some("Dr. Chen".to_string()),
        health_card: None,
        notes: None,
        meeting_details: None,
    }
}

#[tokio::test]
async fn list_normalizes_heterogeneous_field_names() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "e1",
                "title": "Check-in",
                "startDate": "2026-10-05T09:00:00Z",
                "endDate": "2026-10-05T09:30:00Z",
            },
            {
                "_id": "e2",
                "name": "Follow-up",
                "type": "urgent",
                "start_at": "2026-10-05T10:00:00Z",
            },
        ])))
        .mount(&mock_server)
        .await;

    let gateway = gateway(mock_server.uri());
    let events = gateway
        .list(&Endpoint::new("/bookings"))
        .await
        .expect("Failed to list events");

    assert_eq!(events.len(), 2);

    let first = events.iter().find(|e| e.id == "e1").unwrap();
    assert_eq!(first.title, "Check-in");
    assert_eq!(first.start, "2026-10-05T09:00:00Z".parse().unwrap());

    let second = events.iter().find(|e| e.id == "e2").unwrap();
    assert_eq!(second.title, "Follow-up");
    assert_eq!(second.category, Category::Urgent);
    // end defaults to start + 1 hour when the server omits it
    assert_eq!(second.end, "2026-10-05T11:00:00Z".parse().unwrap());
}

#[tokio::test]
async fn list_skips_records_it_cannot_normalize() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "note": "no id, no start" },
            {
                "id": "e1",
                "startDate": "2026-10-05T09:00:00Z",
            },
        ])))
        .mount(&mock_server)
        .await;

    let gateway = gateway(mock_server.uri());
    let events = gateway
        .list(&Endpoint::new("/bookings"))
        .await
        .expect("Failed to list events");

    assert_eq!(events.len(), 1);
    assert_eq!(events.first().unwrap().id, "e1");
}

#[tokio::test]
async fn list_rejects_non_array_bodies_as_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "route exists but is not the events collection"
        })))
        .mount(&mock_server)
        .await;

    let gateway = gateway(mock_server.uri());
    let result = gateway.list(&Endpoint::new("/bookings")).await;

    assert!(matches!(result, Err(GatewayError::Unavailable(_))));
}

#[tokio::test]
async fn non_success_status_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let gateway = gateway(mock_server.uri());
    let result = gateway.list(&Endpoint::new("/bookings")).await;

    assert!(matches!(result, Err(GatewayError::Unavailable(_))));
}

#[tokio::test]
async fn unauthorized_is_distinct_from_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let gateway = gateway(mock_server.uri());
    let result = gateway.list(&Endpoint::new("/bookings")).await;

    assert!(matches!(result, Err(GatewayError::AuthExpired)));
}

#[tokio::test]
async fn create_returns_the_server_assigned_identifier() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_partial_json(json!({
            "title": "New patient intake",
            "startDate": "2026-10-05T09:00:00Z",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "srv-9",
            "title": "New patient intake",
            "startDate": "2026-10-05T09:00:00Z",
            "endDate": "2026-10-05T09:45:00Z",
        })))
        .mount(&mock_server)
        .await;

    let gateway = gateway(mock_server.uri());
    let event = gateway
        .create(&Endpoint::new("/bookings"), &draft())
        .await
        .expect("Failed to create event");

    assert_eq!(event.id, "srv-9");
    assert_eq!(event.title, "New patient intake");
}

#[tokio::test]
async fn create_without_assigned_identifier_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&mock_server)
        .await;

    let gateway = gateway(mock_server.uri());
    let result = gateway.create(&Endpoint::new("/bookings"), &draft()).await;

    assert!(matches!(result, Err(GatewayError::Unavailable(_))));
}

#[tokio::test]
async fn create_tolerates_sparse_response_bodies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "srv-10" })))
        .mount(&mock_server)
        .await;

    let gateway = gateway(mock_server.uri());
    let event = gateway
        .create(&Endpoint::new("/bookings"), &draft())
        .await
        .expect("Failed to create event");

    // id from the server, everything else from the draft
    assert_eq!(event.id, "srv-10");
    assert_eq!(event.patient_name, Some("Maya Osei".to_string()));
    assert_eq!(event.start, "2026-10-05T09:00:00Z".parse().unwrap());
}

#[tokio::test]
async fn update_accepts_any_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/bookings/e1"))
        .and(body_partial_json(json!({ "id": "e1" })))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let gateway = gateway(mock_server.uri());
    let event = draft().into_event("e1".to_string());
    gateway
        .update(&Endpoint::new("/bookings/e1"), &event)
        .await
        .expect("Failed to update event");
}

#[tokio::test]
async fn delete_accepts_any_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/bookings/e1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let gateway = gateway(mock_server.uri());
    gateway
        .delete(&Endpoint::new("/bookings/e1"))
        .await
        .expect("Failed to delete event");
}
