//! Operand list validation
//!
//! Rules are checked by class across the whole list, in this order:
//! operand count, empty fields, non-numeric fields, negative values. A list
//! with both an empty and a negative field therefore reports the empty one.

use crate::api::operations::MIN_OPERANDS;
use crate::error::ValidationError;

/// Validate raw operand texts and return the parsed values.
///
/// Pure: no state is touched.
pub fn validate<S: AsRef<str>>(texts: &[S]) -> Result<Vec<f64>, ValidationError> {
    if texts.len() < MIN_OPERANDS {
        return Err(ValidationError::InsufficientOperands { count: texts.len() });
    }

    if let Some(index) = texts.iter().position(|t| t.as_ref().trim().is_empty()) {
        return Err(ValidationError::EmptyField { position: index + 1 });
    }

    let mut values = Vec::with_capacity(texts.len());
    for (index, text) in texts.iter().enumerate() {
        let text = text.as_ref().trim();
        match parse_operand(text) {
            Some(value) => values.push(value),
            None => {
                return Err(ValidationError::NonNumeric {
                    position: index + 1,
                    text: text.to_string(),
                });
            }
        }
    }

    if let Some(index) = values.iter().position(|v| *v < 0.0) {
        return Err(ValidationError::Negative {
            position: index + 1,
            value: values[index],
        });
    }

    Ok(values)
}

/// Finite decimal number; `inf` and `NaN` spellings are not numbers here
fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
