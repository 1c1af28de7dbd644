//! Wire format of `POST /batch_operations` and translation of its response
//! back into index-aligned per-operation outcomes.

use super::operation::{OperationRequest, Operator};
use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of the batch request body: `{ "op": ..., "nums": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItem<'a> {
    pub op: Operator,
    pub nums: &'a [f64],
}

impl<'a> From<&'a OperationRequest> for BatchItem<'a> {
    fn from(request: &'a OperationRequest) -> Self {
        Self {
            op: request.operator(),
            nums: request.operands(),
        }
    }
}

/// One element of a successful batch response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BatchResponseItem {
    Success {
        result: f64,
    },
    Failure {
        error: String,
        #[serde(default)]
        operation: Option<String>,
    },
}

/// Body returned with a non-2xx status
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Value,
}

impl ErrorBody {
    /// Extract a user-facing detail string from a raw error body, if any
    pub fn detail_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        match parsed.detail {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

/// Business-rule failure of a single operation inside a batch
#[derive(Debug, Clone, PartialEq)]
pub struct OperationFailure {
    pub message: String,
    pub operator: Option<Operator>,
}

/// Result of one submitted operation, at its position in the batch
#[derive(Debug, Clone, PartialEq)]
pub struct OperationOutcome {
    pub index: usize,
    pub request: OperationRequest,
    pub result: Result<f64, OperationFailure>,
}

impl OperationOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn value(&self) -> Option<f64> {
        self.result.as_ref().ok().copied()
    }

    /// Convert into the error type used by the immediate execution path
    pub fn into_result(self) -> Result<f64, CalcError> {
        self.result.map_err(|failure| CalcError::Operation {
            message: failure.message,
            operator: failure.operator,
        })
    }
}

/// Parses batch responses into outcomes aligned with the submitted requests
pub struct BatchResponseParser;

impl BatchResponseParser {
    /// Pair each response item with the request at the same index.
    ///
    /// Fails with [`CalcError::Alignment`] when the counts differ; nothing is
    /// truncated or padded.
    pub fn parse(
        requests: &[OperationRequest],
        items: Vec<BatchResponseItem>,
    ) -> Result<Vec<OperationOutcome>, CalcError> {
        if items.len() != requests.len() {
            return Err(CalcError::Alignment {
                expected: requests.len(),
                actual: items.len(),
            });
        }

        let outcomes = requests
            .iter()
            .zip(items)
            .enumerate()
            .map(|(index, (request, item))| {
                let result = match item {
                    BatchResponseItem::Success { result } => Ok(result),
                    BatchResponseItem::Failure { error, operation } => Err(OperationFailure {
                        message: error,
                        // the server label wins, the request is the fallback
                        operator: operation
                            .and_then(|op| op.parse().ok())
                            .or(Some(request.operator())),
                    }),
                };
                OperationOutcome {
                    index,
                    request: request.clone(),
                    result,
                }
            })
            .collect();

        Ok(outcomes)
    }

    /// Parse a raw JSON body; a body that is not a list of items is a
    /// transport-level failure
    pub fn parse_body(requests: &[OperationRequest], body: &str) -> Result<Vec<OperationOutcome>, CalcError> {
        let items: Vec<BatchResponseItem> = serde_json::from_str(body).map_err(|e| {
            CalcError::transport(format!("malformed batch response: {}", e))
        })?;
        Self::parse(requests, items)
    }

    /// Outcome of a batch of size one, as used by immediate execution
    pub fn into_single(outcomes: Vec<OperationOutcome>) -> Result<f64, CalcError> {
        let actual = outcomes.len();
        let mut outcomes = outcomes.into_iter();
        match (outcomes.next(), actual) {
            (Some(outcome), 1) => outcome.into_result(),
            _ => Err(CalcError::Alignment { expected: 1, actual }),
        }
    }
}
