//! History operation filter
//!
//! `All` is expressed on the wire by omitting the `operation` parameter.

use crate::api::operations::Operator;
use crate::error::ParseValueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OperationFilter {
    #[default]
    All,
    Only(Operator),
}

impl OperationFilter {
    pub fn only(operator: Operator) -> Self {
        Self::Only(operator)
    }

    /// Value of the `operation` query parameter, `None` when unfiltered
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            OperationFilter::All => None,
            OperationFilter::Only(op) => Some(op.as_str()),
        }
    }

    pub fn matches(&self, operator: Option<Operator>) -> bool {
        match self {
            OperationFilter::All => true,
            OperationFilter::Only(op) => operator == Some(*op),
        }
    }
}

impl fmt::Display for OperationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param().unwrap_or("all"))
    }
}

impl FromStr for OperationFilter {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(OperationFilter::All);
        }
        s.parse::<Operator>()
            .map(OperationFilter::Only)
            .map_err(|_| ParseValueError {
                kind: "operation filter",
                value: s.to_string(),
                expected: "all, sum, subtract, multiply, divide",
            })
    }
}

impl TryFrom<String> for OperationFilter {
    type Error = ParseValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OperationFilter> for String {
    fn from(filter: OperationFilter) -> Self {
        filter.to_string()
    }
}

impl From<Operator> for OperationFilter {
    fn from(operator: Operator) -> Self {
        OperationFilter::Only(operator)
    }
}
