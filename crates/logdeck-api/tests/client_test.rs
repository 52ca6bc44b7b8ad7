// Endpoint tests for `ApiClient` using wiremock.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use logdeck_api::{AlertSeverity, AlertStatus, ApiClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Log summaries ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_summaries() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "id": 7,
            "start_time": "2026-08-25T13:00:00",
            "end_time": "2026-08-25T14:00:00",
            "total_logs": 412,
            "error_count": 9,
            "warning_count": 31,
            "summary_text": "Mostly routine traffic; error spike at 13:40.",
            "key_events": ["firewall restart"],
            "anomalies": ["error rate 3x baseline"],
            "created_at": "2026-08-25T14:00:05.123456"
        },
        {
            "id": 6,
            "start_time": "2026-08-25T12:00:00",
            "end_time": "2026-08-25T13:00:00",
            "total_logs": 380,
            "error_count": 2,
            "warning_count": 12,
            "summary_text": "Quiet hour.",
            "key_events": [],
            "anomalies": []
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/logs/summaries"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let summaries = client.list_summaries(10).await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].total_logs, 412);
    assert_eq!(summaries[0].anomalies.len(), 1);
    assert_eq!(
        summaries[0].summary_text.as_deref(),
        Some("Mostly routine traffic; error spike at 13:40.")
    );
    assert!(summaries[1].anomalies.is_empty());
    assert!(summaries[1].created_at.is_none());
}

#[tokio::test]
async fn test_list_summaries_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/logs/summaries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let summaries = client.list_summaries(10).await.unwrap();
    assert!(summaries.is_empty());
}

#[tokio::test]
async fn test_generate_summary_posts_hours() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/logs/summarize"))
        .and(body_json(json!({ "hours": 1 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 8 })))
        .mount(&server)
        .await;

    client.generate_summary(1).await.unwrap();
}

#[tokio::test]
async fn test_generate_summary_no_logs_is_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/logs/summarize"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "No logs found in the specified time range" })),
        )
        .mount(&server)
        .await;

    let result = client.generate_summary(1).await;
    assert_eq!(result.unwrap_err().status(), Some(404));
}

// ── Alerts ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_alerts_envelope() {
    let (server, client) = setup().await;

    let body = json!({
        "count": 2,
        "alerts": [
            {
                "id": 1,
                "timestamp": "2026-08-25T14:22:00",
                "title": "Router offline",
                "description": "No heartbeat for 5 minutes",
                "severity": "critical",
                "category": "connectivity",
                "status": "open",
                "priority_score": 0.93,
                "source": "router-3"
            },
            {
                "id": 2,
                "timestamp": "2026-08-24T08:00:00",
                "title": "Elevated latency",
                "description": null,
                "severity": "medium",
                "category": "performance",
                "status": "acknowledged",
                "priority_score": 0.41,
                "source": null
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client.list_alerts(20, None).await.unwrap();

    assert_eq!(page.count, 2);
    assert_eq!(page.alerts[0].severity, AlertSeverity::Critical);
    assert_eq!(page.alerts[0].status, AlertStatus::Open);
    assert!(page.alerts[0].is_critical_open());
    assert!(!page.alerts[1].is_critical_open());
    assert!(page.alerts[1].description.is_none());
}

#[tokio::test]
async fn test_list_alerts_severity_filter_param() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .and(query_param("limit", "20"))
        .and(query_param("severity", "critical"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "count": 0, "alerts": [] })),
        )
        .mount(&server)
        .await;

    let page = client.list_alerts(20, Some("critical")).await.unwrap();
    assert!(page.alerts.is_empty());
}

#[tokio::test]
async fn test_unknown_severity_passes_through() {
    let (server, client) = setup().await;

    let body = json!({
        "count": 1,
        "alerts": [{
            "id": 3,
            "timestamp": "2026-08-25T10:00:00",
            "title": "Odd one",
            "severity": "catastrophic",
            "category": "misc",
            "status": "triaged"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client.list_alerts(20, None).await.unwrap();
    assert_eq!(
        page.alerts[0].severity,
        AlertSeverity::Unknown("catastrophic".into())
    );
    assert_eq!(page.alerts[0].severity.as_str(), "catastrophic");
    assert_eq!(page.alerts[0].priority_score, 0.5);
}

// ── Chat ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_chat_history_newest_first_passthrough() {
    let (server, client) = setup().await;

    let body = json!({
        "count": 2,
        "messages": [
            { "user_message": "status", "bot_response": "All green.",
              "timestamp": "2026-08-25T14:00:00", "command_type": "status", "success": true },
            { "user_message": "help", "bot_response": "Available commands: ...",
              "timestamp": "2026-08-25T13:00:00", "command_type": "help", "success": true }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/chat/history"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let history = client.chat_history(20).await.unwrap();

    // The client must not reorder -- newest stays first.
    assert_eq!(history.messages[0].user_message, "status");
    assert_eq!(history.messages[1].user_message, "help");
}

#[tokio::test]
async fn test_send_chat() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .and(body_json(json!({ "message": "ping 10.0.0.1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_message": "ping 10.0.0.1",
            "bot_response": "10.0.0.1 is reachable (4ms)"
        })))
        .mount(&server)
        .await;

    let reply = client.send_chat("ping 10.0.0.1").await.unwrap();
    assert_eq!(reply.bot_response, "10.0.0.1 is reachable (4ms)");
}

#[tokio::test]
async fn test_list_commands() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/commands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "description": "Get system status overview",
                        "usage": "status", "category": "monitoring" },
            "ping":   { "description": "Ping a host",
                        "usage": "ping <host>", "category": "diagnostics" }
        })))
        .mount(&server)
        .await;

    let commands = client.list_commands().await.unwrap();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands["ping"].usage, "ping <host>");
}

// ── Error paths ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_500() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })))
        .mount(&server)
        .await;

    let result = client.list_summaries(10).await;

    match result {
        Err(Error::Status { status, ref body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_malformed_json() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client.list_alerts(20, None).await;

    match result {
        Err(Error::Decode { ref body, .. }) => assert!(body.starts_with("<html>")),
        other => panic!("expected Decode error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_error_is_transient() {
    // Point at a port nothing listens on.
    let client = ApiClient::from_reqwest("http://127.0.0.1:1", reqwest::Client::new()).unwrap();
    let err = client.list_summaries(10).await.unwrap_err();
    assert!(err.is_transient());
    assert!(err.status().is_none());
}
