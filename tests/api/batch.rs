use super::{PREFIX, client};
use calc_cli::api::{CalculatorApi, OperationRequest, Operations, Operator};
use calc_cli::error::CalcError;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn batch_path() -> String {
    format!("{}/batch_operations", PREFIX)
}

fn mixed_batch() -> Operations {
    Operations::new()
        .add(OperationRequest::sum(vec![1.0, 2.0, 3.5]).unwrap())
        .add(OperationRequest::divide(vec![10.0, 0.0]).unwrap())
        .add(OperationRequest::multiply(vec![3.0, 4.0]).unwrap())
}

#[tokio::test]
async fn test_batch_sends_ordered_items_and_aligns_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(batch_path()))
        .and(body_json(json!([
            { "op": "sum", "nums": [1.0, 2.0, 3.5] },
            { "op": "divide", "nums": [10.0, 0.0] },
            { "op": "multiply", "nums": [3.0, 4.0] },
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "result": 6.5 },
            { "error": "Division by zero", "operation": "divide" },
            { "result": 12.0 },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let outcomes = client(&server).execute_batch(&mixed_batch()).await.unwrap();

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].value(), Some(6.5));
    assert_eq!(outcomes[2].value(), Some(12.0));

    let failure = outcomes[1].result.as_ref().unwrap_err();
    assert_eq!(failure.message, "Division by zero");
    assert_eq!(failure.operator, Some(Operator::Divide));
    assert_eq!(outcomes[1].index, 1);
}

#[tokio::test]
async fn test_batch_error_status_uses_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(batch_path()))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "detail": "Invalid operation: power" })))
        .mount(&server)
        .await;

    let err = client(&server).execute_batch(&mixed_batch()).await.unwrap_err();
    assert_eq!(
        err,
        CalcError::Transport {
            status: Some(400),
            message: "Invalid operation: power".to_string(),
        }
    );
}

#[tokio::test]
async fn test_batch_error_status_without_detail_is_generic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(batch_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client(&server).execute_batch(&mixed_batch()).await.unwrap_err();
    assert!(err.is_transport_class());
    assert!(err.to_string().starts_with(CalcError::GENERIC_TRANSPORT_MESSAGE));
}

#[tokio::test]
async fn test_batch_length_mismatch_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(batch_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "result": 6.5 }])))
        .mount(&server)
        .await;

    let err = client(&server).execute_batch(&mixed_batch()).await.unwrap_err();
    assert_eq!(err, CalcError::Alignment { expected: 3, actual: 1 });
}

#[tokio::test]
async fn test_batch_malformed_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(batch_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let err = client(&server).execute_batch(&mixed_batch()).await.unwrap_err();
    assert!(matches!(err, CalcError::Transport { status: None, .. }));
}

#[tokio::test]
async fn test_empty_batch_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let outcomes = client(&server).execute_batch(&Operations::new()).await.unwrap();
    assert!(outcomes.is_empty());
}

#[tokio::test]
async fn test_single_execution_surfaces_operation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(batch_path()))
        .and(body_json(json!([{ "op": "divide", "nums": [10.0, 0.0] }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "error": "Division by zero" }])))
        .mount(&server)
        .await;

    let request = OperationRequest::divide(vec![10.0, 0.0]).unwrap();
    let err = client(&server).execute_single(&request).await.unwrap_err();
    assert_eq!(
        err,
        CalcError::Operation {
            message: "Division by zero".to_string(),
            operator: Some(Operator::Divide),
        }
    );
}
