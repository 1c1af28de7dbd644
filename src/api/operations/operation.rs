//! A single flat arithmetic operation over N operands

use crate::error::{ParseValueError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum number of operands any operation accepts
pub const MIN_OPERANDS: usize = 2;

/// Arithmetic operators understood by the calculator service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Sum,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Sum,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Wire name used in batch bodies and history filters
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Sum => "sum",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Sum => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" | "add" | "+" => Ok(Operator::Sum),
            "subtract" | "sub" | "-" => Ok(Operator::Subtract),
            "multiply" | "mul" | "*" | "x" | "×" => Ok(Operator::Multiply),
            "divide" | "div" | "/" | "÷" => Ok(Operator::Divide),
            _ => Err(ParseValueError {
                kind: "operator",
                value: s.to_string(),
                expected: "sum, subtract, multiply, divide",
            }),
        }
    }
}

/// An operator applied to an ordered list of parsed operands.
///
/// Immutable once built: operands are at least [`MIN_OPERANDS`] long, finite
/// and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    operator: Operator,
    operands: Vec<f64>,
}

impl OperationRequest {
    pub fn new(operator: Operator, operands: Vec<f64>) -> Result<Self, ValidationError> {
        if operands.len() < MIN_OPERANDS {
            return Err(ValidationError::InsufficientOperands {
                count: operands.len(),
            });
        }

        for (i, value) in operands.iter().enumerate() {
            if !value.is_finite() {
                return Err(ValidationError::NonNumeric {
                    position: i + 1,
                    text: value.to_string(),
                });
            }
            if *value < 0.0 {
                return Err(ValidationError::Negative {
                    position: i + 1,
                    value: *value,
                });
            }
        }

        Ok(Self { operator, operands })
    }

    pub fn sum(operands: Vec<f64>) -> Result<Self, ValidationError> {
        Self::new(Operator::Sum, operands)
    }

    pub fn subtract(operands: Vec<f64>) -> Result<Self, ValidationError> {
        Self::new(Operator::Subtract, operands)
    }

    pub fn multiply(operands: Vec<f64>) -> Result<Self, ValidationError> {
        Self::new(Operator::Multiply, operands)
    }

    pub fn divide(operands: Vec<f64>) -> Result<Self, ValidationError> {
        Self::new(Operator::Divide, operands)
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operands(&self) -> &[f64] {
        &self.operands
    }

    /// Human readable form, e.g. `4 - 2`
    pub fn describe(&self) -> String {
        let parts: Vec<String> = self.operands.iter().map(|n| format_number(*n)).collect();
        parts.join(&format!(" {} ", self.operator.symbol()))
    }
}

impl fmt::Display for OperationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.operator, self.describe())
    }
}

/// Render a number without a trailing `.0` for integral values
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
