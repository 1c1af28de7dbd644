//! Error types shared by the protocol adapter and the calculator engine

use crate::api::operations::Operator;

/// Why an operand list was rejected before reaching the network.
///
/// Positions are 1-based, matching how operands are shown to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("at least 2 operands are required, got {count}")]
    InsufficientOperands { count: usize },

    #[error("operand #{position} is empty")]
    EmptyField { position: usize },

    #[error("operand #{position} is not a number: '{text}'")]
    NonNumeric { position: usize, text: String },

    #[error("operand #{position} is negative: {value}")]
    Negative { position: usize, value: f64 },
}

/// Rule class of a [`ValidationError`], without the offending details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    InsufficientOperands,
    EmptyField,
    NonNumeric,
    Negative,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationKind {
        match self {
            ValidationError::InsufficientOperands { .. } => ValidationKind::InsufficientOperands,
            ValidationError::EmptyField { .. } => ValidationKind::EmptyField,
            ValidationError::NonNumeric { .. } => ValidationKind::NonNumeric,
            ValidationError::Negative { .. } => ValidationKind::Negative,
        }
    }
}

/// Error type for every execution path of the calculator client
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Rejected locally, no request was sent
    #[error("invalid operands: {0}")]
    Validation(#[from] ValidationError),

    /// Queue execution was requested with nothing queued
    #[error("the operation queue is empty")]
    QueueEmpty,

    /// Network failure, malformed body or non-2xx status
    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    /// Business-rule failure reported by the service (e.g. division by zero)
    #[error("{}", describe_operation(.message, .operator))]
    Operation {
        message: String,
        operator: Option<Operator>,
    },

    /// The service answered with a different number of results than requested
    #[error("server returned {actual} results for {expected} operations")]
    Alignment { expected: usize, actual: usize },
}

impl CalcError {
    /// Generic failure used when the service gave no usable detail
    pub const GENERIC_TRANSPORT_MESSAGE: &'static str =
        "could not reach the calculator service or it failed to respond";

    pub fn transport(message: impl Into<String>) -> Self {
        CalcError::Transport {
            status: None,
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, detail: Option<String>) -> Self {
        let message = match detail {
            Some(detail) if !detail.trim().is_empty() => detail,
            _ => format!("{} (HTTP {})", Self::GENERIC_TRANSPORT_MESSAGE, status),
        };
        CalcError::Transport {
            status: Some(status),
            message,
        }
    }

    /// Alignment failures are handled like transport failures
    pub fn is_transport_class(&self) -> bool {
        matches!(self, CalcError::Transport { .. } | CalcError::Alignment { .. })
    }

    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            CalcError::Validation(err) => Some(err.kind()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CalcError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        let message = if err.is_decode() {
            format!("malformed response from calculator service: {}", err)
        } else if err.is_timeout() {
            "calculator service timed out".to_string()
        } else {
            Self::GENERIC_TRANSPORT_MESSAGE.to_string()
        };
        CalcError::Transport { status, message }
    }
}

fn describe_operation(message: &str, operator: &Option<Operator>) -> String {
    match operator {
        Some(op) => format!("{} failed: {}", op, message),
        None => message.to_string(),
    }
}

/// A textual value did not name a known operator, filter or sort option
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
