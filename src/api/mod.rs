//! Calculator Service API Module
//!
//! Client side of the remote arithmetic/history service: the batch wire
//! protocol, history queries, and an HTTP client implementing
//! [`CalculatorApi`].

pub mod client;
pub mod constants;
pub mod logging;
pub mod operations;
pub mod query;
pub mod service;

pub use client::CalculatorClient;
pub use logging::{ApiLogger, MonitoringConfig, OperationContext};
pub use operations::{OperationFailure, OperationOutcome, OperationRequest, Operations, Operator};
pub use query::{HistoryEntry, HistoryProjection, OperationFilter, OrderBy, SortDirection, SortField};
pub use service::CalculatorApi;
