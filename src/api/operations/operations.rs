//! Ordered collections of operations submitted together as one batch

use super::batch::{BatchItem, OperationOutcome};
use super::operation::OperationRequest;
use crate::api::CalculatorApi;
use crate::error::CalcError;

/// An ordered collection of operations; execution order is insertion order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Operations {
    operations: Vec<OperationRequest>,
}

impl Operations {
    /// Create a new empty operations collection
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Create operations from a vector of operations
    pub fn from_operations(operations: Vec<OperationRequest>) -> Self {
        Self { operations }
    }

    /// Add a single operation to the end of the collection
    pub fn add(mut self, operation: OperationRequest) -> Self {
        self.operations.push(operation);
        self
    }

    /// Get the number of operations in this collection
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Get a reference to the operations vector
    pub fn operations(&self) -> &[OperationRequest] {
        &self.operations
    }

    /// Wire representation: `[{op, nums}, ...]` in submission order
    pub fn to_wire(&self) -> Vec<BatchItem<'_>> {
        self.operations.iter().map(BatchItem::from).collect()
    }

    /// Submit the whole collection as one batch request
    pub async fn execute(&self, api: &dyn CalculatorApi) -> Result<Vec<OperationOutcome>, CalcError> {
        api.execute_batch(self).await
    }
}

impl From<OperationRequest> for Operations {
    fn from(operation: OperationRequest) -> Self {
        Self::from_operations(vec![operation])
    }
}

impl From<Vec<OperationRequest>> for Operations {
    fn from(operations: Vec<OperationRequest>) -> Self {
        Self::from_operations(operations)
    }
}

impl IntoIterator for Operations {
    type Item = OperationRequest;
    type IntoIter = std::vec::IntoIter<OperationRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Operations {
    type Item = &'a OperationRequest;
    type IntoIter = std::slice::Iter<'a, OperationRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
