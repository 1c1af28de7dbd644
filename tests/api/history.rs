use super::{PREFIX, client};
use calc_cli::api::{CalculatorApi, HistoryProjection, OperationFilter, Operator, SortDirection, SortField};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn history_path() -> String {
    format!("{}/history", PREFIX)
}

#[tokio::test]
async fn test_history_sends_projection_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(history_path()))
        .and(query_param("operation", "subtract"))
        .and(query_param("order_by", "result"))
        .and(query_param("sort_order", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "history": [
                { "a": 4.0, "b": 2.0, "operation": "subtract", "result": 2.0, "date": "2024-05-01T10:00:00Z" },
                { "a": 9.0, "b": 3.0, "operation": "subtract", "result": 6.0, "date": "2024-05-01T09:00:00Z" },
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let projection = HistoryProjection::new(
        OperationFilter::only(Operator::Subtract),
        SortField::Result,
        SortDirection::Asc,
    );
    let entries = client(&server).fetch_history(&projection).await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operator(), Some(Operator::Subtract));
    assert_eq!(entries[0].summary(), "4 - 2 = 2");
}

#[tokio::test]
async fn test_history_all_filter_omits_operation_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(history_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "history": [] })))
        .mount(&server)
        .await;

    let entries = client(&server)
        .fetch_history(&HistoryProjection::default())
        .await
        .unwrap();
    assert!(entries.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let params: Vec<(String, String)> = requests[0].url.query_pairs().into_owned().collect();
    assert_eq!(
        params,
        vec![
            ("order_by".to_string(), "date".to_string()),
            ("sort_order".to_string(), "desc".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_history_tolerates_legacy_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(history_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "history": [
                { "a": 1.0, "b": 2.0, "result": 3.0, "date": "2024-05-01T10:15:30.123000" },
            ]
        })))
        .mount(&server)
        .await;

    let entries = client(&server)
        .fetch_history(&HistoryProjection::default())
        .await
        .unwrap();

    assert_eq!(entries[0].operator(), None);
    let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 30).unwrap();
    assert_eq!(entries[0].timestamp().map(|t| t.timestamp()), Some(expected.timestamp()));
}

#[tokio::test]
async fn test_history_server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(history_path()))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_history(&HistoryProjection::default())
        .await
        .unwrap_err();
    assert!(err.is_transport_class());
    assert!(err.to_string().contains("HTTP 503"));
}
