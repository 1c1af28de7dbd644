use calc_cli::api::{CalculatorClient, HistoryProjection, MonitoringConfig, Operator};
use calc_cli::calc::{Msg, Runtime};
use calc_cli::config::BehaviorSettings;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn runtime(server: &MockServer) -> Runtime {
    let client = CalculatorClient::with_custom_client(&server.uri(), reqwest::Client::new(), MonitoringConfig::disabled());
    Runtime::without_initial_fetch(Arc::new(client), BehaviorSettings::default(), HistoryProjection::default())
}

#[tokio::test]
async fn test_sum_then_history_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/batch_operations"))
        .and(body_json(json!([{ "op": "sum", "nums": [2.0, 3.0] }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "result": 5.0 }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "history": [
                { "a": 2.0, "b": 3.0, "operation": "sum", "result": 5.0, "date": "2024-05-01T10:00:00" },
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut runtime = runtime(&server);
    runtime.dispatch(Msg::SetOperands(vec!["2".to_string(), "3".to_string()]));
    runtime.dispatch_and_settle(Msg::OperatorPressed(Operator::Sum)).await;

    assert_eq!(runtime.state().last_result(), Some(5.0));
    assert_eq!(runtime.state().history().entries().len(), 1);
}

#[tokio::test]
async fn test_divide_by_zero_over_http_leaves_history_alone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/batch_operations"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "error": "Division by zero", "operation": "divide" }])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "history": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let mut runtime = runtime(&server);
    runtime.dispatch(Msg::SetOperands(vec!["10".to_string(), "0".to_string()]));
    runtime.dispatch_and_settle(Msg::OperatorPressed(Operator::Divide)).await;

    let state = runtime.state();
    assert_eq!(state.last_result(), None);
    assert_eq!(
        state.last_error().map(|e| e.to_string()),
        Some("divide failed: Division by zero".to_string())
    );
}

#[tokio::test]
async fn test_unreachable_service_keeps_queue() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/batch_operations"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let mut runtime = runtime(&server);
    runtime.dispatch(Msg::ToggleMode);
    runtime.dispatch(Msg::SetOperands(vec!["1".to_string(), "2".to_string()]));
    runtime.dispatch(Msg::Enqueue(Operator::Sum));
    runtime.dispatch_and_settle(Msg::ExecuteQueue).await;

    let state = runtime.state();
    assert_eq!(state.queue().len(), 1);
    assert!(state.queue_error().is_some_and(|e| e.is_transport_class()));
}
