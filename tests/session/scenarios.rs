use super::fake::FakeApi;
use calc_cli::api::{HistoryProjection, OperationFilter, Operator};
use calc_cli::calc::{HistoryStatus, Mode, Msg, Runtime};
use calc_cli::config::BehaviorSettings;
use calc_cli::error::{CalcError, ValidationKind};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn runtime(api: &Arc<FakeApi>) -> Runtime {
    Runtime::without_initial_fetch(api.clone(), BehaviorSettings::default(), HistoryProjection::default())
}

fn operands(texts: &[&str]) -> Msg {
    Msg::SetOperands(texts.iter().map(|t| t.to_string()).collect())
}

#[tokio::test]
async fn test_start_up_fetches_history_once() {
    let api = Arc::new(FakeApi::default());
    let mut runtime = Runtime::new(api.clone(), BehaviorSettings::default(), HistoryProjection::default());
    assert_eq!(runtime.pending(), 1);

    runtime.settle().await;
    assert_eq!(api.history_calls(), 1);
    assert_eq!(runtime.state().history().status(), HistoryStatus::Empty);
}

#[tokio::test]
async fn test_immediate_sum_refreshes_history_exactly_once() {
    let api = Arc::new(FakeApi::default());
    let mut runtime = runtime(&api);

    runtime.dispatch(operands(&["2", "3"]));
    runtime.dispatch_and_settle(Msg::OperatorPressed(Operator::Sum)).await;

    let state = runtime.state();
    assert_eq!(state.last_result(), Some(5.0));
    assert!(state.last_error().is_none());
    assert_eq!(api.batch_calls(), 1);
    assert_eq!(api.history_calls(), 1);
    assert_eq!(state.history().entries()[0].summary(), "2 + 3 = 5");
}

#[tokio::test]
async fn test_divide_by_zero_reports_error_without_history_refresh() {
    let api = Arc::new(FakeApi::default());
    let mut runtime = runtime(&api);

    runtime.dispatch(operands(&["10", "0"]));
    runtime.dispatch_and_settle(Msg::OperatorPressed(Operator::Divide)).await;

    let state = runtime.state();
    assert_eq!(state.last_result(), None);
    assert_eq!(
        state.last_error(),
        Some(&CalcError::Operation {
            message: "Division by zero".to_string(),
            operator: Some(Operator::Divide),
        })
    );
    assert_eq!(api.history_calls(), 0);
}

#[tokio::test]
async fn test_invalid_operands_make_no_calls() {
    let api = Arc::new(FakeApi::default());
    let mut runtime = runtime(&api);

    runtime.dispatch(operands(&["4", "-2"]));
    runtime.dispatch_and_settle(Msg::OperatorPressed(Operator::Subtract)).await;
    assert_eq!(
        runtime.state().last_error().and_then(|e| e.validation_kind()),
        Some(ValidationKind::Negative)
    );

    runtime.dispatch(operands(&["4", "abc"]));
    runtime.dispatch_and_settle(Msg::OperatorPressed(Operator::Sum)).await;
    assert_eq!(
        runtime.state().last_error().and_then(|e| e.validation_kind()),
        Some(ValidationKind::NonNumeric)
    );

    assert_eq!(api.total_calls(), 0);
}

#[tokio::test]
async fn test_empty_queue_makes_no_calls() {
    let api = Arc::new(FakeApi::default());
    let mut runtime = runtime(&api);

    runtime.dispatch(Msg::ToggleMode);
    runtime.dispatch_and_settle(Msg::ExecuteQueue).await;

    assert_eq!(runtime.state().queue_error(), Some(&CalcError::QueueEmpty));
    assert_eq!(api.total_calls(), 0);
}

#[tokio::test]
async fn test_queued_session_with_immediate_divide() {
    let api = Arc::new(FakeApi::default());
    let mut runtime = runtime(&api);

    runtime.dispatch(Msg::ToggleMode);
    assert_eq!(runtime.state().mode(), Mode::Queued);

    runtime.dispatch(operands(&["1", "2", "3"]));
    runtime.dispatch(Msg::OperatorPressed(Operator::Sum));
    runtime.dispatch(operands(&["3", "4"]));
    runtime.dispatch(Msg::OperatorPressed(Operator::Multiply));
    assert_eq!(runtime.state().queue().len(), 2);
    assert_eq!(runtime.pending(), 0);

    // divide bypasses the queue
    runtime.dispatch(operands(&["8", "2"]));
    runtime.dispatch_and_settle(Msg::OperatorPressed(Operator::Divide)).await;
    assert_eq!(runtime.state().last_result(), Some(4.0));
    assert_eq!(runtime.state().queue().len(), 2);
    assert_eq!(api.batch_calls(), 1);

    runtime.dispatch_and_settle(Msg::ExecuteQueue).await;
    let state = runtime.state();
    let values: Vec<Option<f64>> = state.queue_outcomes().iter().map(|o| o.value()).collect();
    assert_eq!(values, vec![Some(6.0), Some(12.0)]);
    assert!(state.queue().is_empty());
    assert_eq!(api.batch_calls(), 2);
    assert_eq!(api.history_calls(), 2);
    assert_eq!(state.history().entries().len(), 3);
}

#[tokio::test]
async fn test_batch_with_only_failures_skips_history_refresh() {
    let api = Arc::new(FakeApi::default());
    let mut runtime = runtime(&api);

    runtime.dispatch(Msg::ToggleMode);
    runtime.dispatch(operands(&["1", "0"]));
    runtime.dispatch(Msg::Enqueue(Operator::Divide));
    runtime.dispatch_and_settle(Msg::ExecuteQueue).await;

    let outcomes = runtime.state().queue_outcomes();
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].is_success());
    assert_eq!(api.history_calls(), 0);
}

#[tokio::test]
async fn test_filter_change_wins_over_slow_earlier_fetch() {
    let api = Arc::new(FakeApi {
        slow_unfiltered: Some(Duration::from_millis(50)),
        ..FakeApi::default()
    });
    let mut runtime = runtime(&api);

    runtime.dispatch(operands(&["2", "3"]));
    runtime.dispatch_and_settle(Msg::OperatorPressed(Operator::Sum)).await;
    runtime.dispatch(operands(&["5", "1"]));
    runtime.dispatch_and_settle(Msg::OperatorPressed(Operator::Subtract)).await;

    runtime.dispatch(Msg::RefreshHistory);
    runtime.dispatch(Msg::SetFilter(OperationFilter::only(Operator::Subtract)));
    assert_eq!(runtime.pending(), 2);
    runtime.settle().await;

    let history = runtime.state().history();
    assert_eq!(history.projection().filter, OperationFilter::only(Operator::Subtract));
    assert_eq!(history.entries().len(), 1);
    assert_eq!(history.entries()[0].operator(), Some(Operator::Subtract));
}
