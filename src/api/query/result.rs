//! History result handling
//!
//! Handles `GET /history` and legacy `GET /sum` responses

use crate::api::operations::{Operator, format_number};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A past operation as recorded by the service. Only the first two operands
/// are kept for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub a: f64,
    pub b: f64,
    /// Missing on entries written by the legacy two-operand endpoint
    #[serde(default)]
    pub operation: Option<String>,
    pub result: f64,
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

/// Body of the legacy `GET /sum` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SumResponse {
    #[serde(default)]
    pub a: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    pub result: f64,
}

impl HistoryEntry {
    /// Parsed operator, `None` when absent or not recognised
    pub fn operator(&self) -> Option<Operator> {
        self.operation.as_deref().and_then(|op| op.parse().ok())
    }

    /// Timestamp of the entry. Accepts RFC 3339 and offset-less ISO 8601,
    /// the latter read as UTC.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.date, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// e.g. `4 - 2 = 2`, or `4 ? 2 = 2` for an unknown operator
    pub fn summary(&self) -> String {
        let symbol = self.operator().map(|op| op.symbol()).unwrap_or("?");
        format!(
            "{} {} {} = {}",
            format_number(self.a),
            symbol,
            format_number(self.b),
            format_number(self.result)
        )
    }

    pub fn display_date(&self) -> String {
        match self.timestamp() {
            Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.date.clone(),
        }
    }
}
