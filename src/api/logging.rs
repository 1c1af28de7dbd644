//! Structured logging with correlation tracking for calculator API calls
//!
//! Every HTTP exchange gets a correlation id so a request, its response and
//! the completion record can be matched up in the log file.

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::{Duration, Instant};

/// Monitoring and logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    #[serde(default = "default_true")]
    pub request_logging: bool,
    #[serde(default = "default_true")]
    pub performance_metrics: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            request_logging: true,
            performance_metrics: true,
        }
    }
}

impl MonitoringConfig {
    pub fn disabled() -> Self {
        Self {
            request_logging: false,
            performance_metrics: false,
        }
    }
}

/// Structured logger for API operations with correlation tracking
#[derive(Debug, Clone, Default)]
pub struct ApiLogger {
    config: MonitoringConfig,
}

/// Context for a single API call
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// Unique correlation ID for this call
    pub correlation_id: String,
    /// Endpoint kind (batch, history, sum)
    pub operation_type: String,
    pub start_time: Instant,
}

impl OperationContext {
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl ApiLogger {
    pub fn new(config: MonitoringConfig) -> Self {
        Self { config }
    }

    /// Start tracking a new call
    pub fn start_operation(&self, operation_type: &str) -> OperationContext {
        let context = OperationContext {
            correlation_id: uuid::Uuid::new_v4().to_string(),
            operation_type: operation_type.to_string(),
            start_time: Instant::now(),
        };

        if self.config.request_logging {
            let log_data = json!({
                "event": "operation_started",
                "correlation_id": context.correlation_id,
                "operation_type": context.operation_type,
                "timestamp": chrono::Utc::now().to_rfc3339()
            });
            debug!("API Operation Started: {}", log_data);
        }

        context
    }

    /// Log HTTP request details
    pub fn log_request(&self, context: &OperationContext, method: &str, url: &str) {
        if !self.config.request_logging {
            return;
        }

        let log_data = json!({
            "event": "http_request",
            "correlation_id": context.correlation_id,
            "operation_type": context.operation_type,
            "method": method,
            "url": url,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        debug!("HTTP Request: {}", log_data);
    }

    /// Log HTTP response details
    pub fn log_response(&self, context: &OperationContext, status_code: u16) {
        if !self.config.request_logging {
            return;
        }

        let log_data = json!({
            "event": "http_response",
            "correlation_id": context.correlation_id,
            "operation_type": context.operation_type,
            "status_code": status_code,
            "duration_ms": context.elapsed().as_millis(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if status_code >= 400 {
            warn!("HTTP Response (Error): {}", log_data);
        } else {
            debug!("HTTP Response: {}", log_data);
        }
    }

    /// Complete a call and log its outcome
    pub fn complete_operation(&self, context: &OperationContext, error_message: Option<&str>) {
        if !self.config.performance_metrics {
            return;
        }

        let log_data = json!({
            "event": "operation_completed",
            "correlation_id": context.correlation_id,
            "operation_type": context.operation_type,
            "duration_ms": context.elapsed().as_millis(),
            "success": error_message.is_none(),
            "error_message": error_message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        match error_message {
            None => info!("API Operation Completed: {}", log_data),
            Some(_) => error!("API Operation Failed: {}", log_data),
        }
    }

    /// Log batch operation details
    pub fn log_batch_operation(&self, context: &OperationContext, operation_count: usize, success_count: usize) {
        if !self.config.performance_metrics {
            return;
        }

        let log_data = json!({
            "event": "batch_operation_completed",
            "correlation_id": context.correlation_id,
            "operation_type": "batch",
            "operation_count": operation_count,
            "success_count": success_count,
            "failure_count": operation_count.saturating_sub(success_count),
            "duration_ms": context.elapsed().as_millis(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        info!("Batch Operation Completed: {}", log_data);
    }
}
