//! Calculator Operations Module
//!
//! This module provides the operation types, the ordered batch collection and
//! the batch wire protocol shared by immediate and queued execution.

pub mod batch;
pub mod operation;
pub mod operations;

pub use batch::{BatchItem, BatchResponseItem, BatchResponseParser, ErrorBody, OperationFailure, OperationOutcome};
pub use operation::{MIN_OPERANDS, OperationRequest, Operator, format_number};
pub use operations::Operations;
