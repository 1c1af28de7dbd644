use super::{PREFIX, client};
use calc_cli::api::CalculatorApi;
use calc_cli::cli::commands::legacy::legacy_sum;
use calc_cli::error::ValidationKind;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_legacy_sum_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/sum", PREFIX)))
        .and(query_param("a", "2"))
        .and(query_param("b", "3.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "a": 2.0, "b": 3.5, "result": 5.5 })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).sum_pair(2.0, 3.5).await.unwrap();
    assert_eq!(result, 5.5);
}

#[tokio::test]
async fn test_legacy_sum_rejects_invalid_operands_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": 1.0 })))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server);
    for (a, b, kind) in [
        ("-1", "2", ValidationKind::Negative),
        ("NaN", "2", ValidationKind::NonNumeric),
        ("1", "inf", ValidationKind::NonNumeric),
        ("", "2", ValidationKind::EmptyField),
    ] {
        let err = legacy_sum(&api, a, b).await.unwrap_err();
        assert_eq!(err.validation_kind(), Some(kind), "operands {:?} {:?}", a, b);
    }
}

#[tokio::test]
async fn test_legacy_sum_sends_validated_operands() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/sum", PREFIX)))
        .and(query_param("a", "1.5"))
        .and(query_param("b", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": 3.5 })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(legacy_sum(&client(&server), " 1.5 ", "2").await.unwrap(), 3.5);
}
