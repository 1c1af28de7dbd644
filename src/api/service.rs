//! The request/response contract of the remote calculator service

use super::operations::{BatchResponseParser, OperationOutcome, OperationRequest, Operations};
use super::query::{HistoryEntry, HistoryProjection};
use crate::error::CalcError;
use async_trait::async_trait;

/// Remote arithmetic and history service.
///
/// Implemented over HTTP by [`super::CalculatorClient`]; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait CalculatorApi: Send + Sync {
    /// Submit operations as one batch and get one outcome per operation, in
    /// submission order
    async fn execute_batch(&self, operations: &Operations) -> Result<Vec<OperationOutcome>, CalcError>;

    /// Fetch history under the given filter and ordering
    async fn fetch_history(&self, projection: &HistoryProjection) -> Result<Vec<HistoryEntry>, CalcError>;

    /// Two-operand sum through the legacy endpoint
    async fn sum_pair(&self, a: f64, b: f64) -> Result<f64, CalcError>;

    /// Execute one operation as a batch of size one
    async fn execute_single(&self, request: &OperationRequest) -> Result<f64, CalcError> {
        let outcomes = self.execute_batch(&Operations::from(request.clone())).await?;
        BatchResponseParser::into_single(outcomes)
    }
}
