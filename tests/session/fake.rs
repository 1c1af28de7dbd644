//! In-process calculator service that counts the calls it receives

use async_trait::async_trait;
use calc_cli::api::operations::{BatchResponseItem, BatchResponseParser};
use calc_cli::api::{
    CalculatorApi, HistoryEntry, HistoryProjection, OperationFilter, OperationOutcome, OperationRequest,
    Operations, Operator,
};
use calc_cli::error::CalcError;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
pub struct FakeApi {
    pub(crate) batch_calls: AtomicUsize,
    pub(crate) history_calls: AtomicUsize,
    pub(crate) log: Mutex<Vec<HistoryEntry>>,
    /// Delay applied to unfiltered history fetches
    pub slow_unfiltered: Option<Duration>,
}

impl FakeApi {
    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.batch_calls() + self.history_calls()
    }

    fn compute(request: &OperationRequest) -> BatchResponseItem {
        let nums = request.operands();
        let rest = nums[1..].iter();
        let result = match request.operator() {
            Operator::Sum => nums.iter().sum(),
            Operator::Subtract => rest.fold(nums[0], |acc, n| acc - n),
            Operator::Multiply => nums.iter().product(),
            Operator::Divide => {
                if nums[1..].contains(&0.0) {
                    return BatchResponseItem::Failure {
                        error: "Division by zero".to_string(),
                        operation: Some("divide".to_string()),
                    };
                }
                rest.fold(nums[0], |acc, n| acc / n)
            }
        };
        BatchResponseItem::Success { result }
    }
}

#[async_trait]
impl CalculatorApi for FakeApi {
    async fn execute_batch(&self, operations: &Operations) -> Result<Vec<OperationOutcome>, CalcError> {
        if operations.is_empty() {
            return Ok(Vec::new());
        }
        self.batch_calls.fetch_add(1, Ordering::SeqCst);

        let items: Vec<BatchResponseItem> = operations.operations().iter().map(Self::compute).collect();
        let mut log = self.log.lock().unwrap();
        for (request, item) in operations.operations().iter().zip(&items) {
            if let BatchResponseItem::Success { result } = item {
                let index = log.len();
                log.push(HistoryEntry {
                    a: request.operands()[0],
                    b: request.operands()[1],
                    operation: Some(request.operator().as_str().to_string()),
                    result: *result,
                    date: format!("2024-05-01T10:{:02}:00", index),
                });
            }
        }
        drop(log);

        BatchResponseParser::parse(operations.operations(), items)
    }

    async fn fetch_history(&self, projection: &HistoryProjection) -> Result<Vec<HistoryEntry>, CalcError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        if let (OperationFilter::All, Some(delay)) = (projection.filter, self.slow_unfiltered) {
            tokio::time::sleep(delay).await;
        }

        let log = self.log.lock().unwrap();
        Ok(log
            .iter()
            .rev()
            .filter(|entry| projection.filter.matches(entry.operator()))
            .take(10)
            .cloned()
            .collect())
    }

    async fn sum_pair(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        Ok(a + b)
    }
}
