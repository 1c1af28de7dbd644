//! Editable list of operand input fields
//!
//! Fields are addressed by a stable [`OperandId`] rather than their position,
//! so removing one field never changes which field another id refers to.

use super::validation;
use crate::api::operations::{MIN_OPERANDS, OperationRequest, Operator};
use crate::error::ValidationError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperandId(u64);

impl OperandId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OperandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperandField {
    pub id: OperandId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperandList {
    fields: Vec<OperandField>,
    next_id: u64,
}

impl OperandList {
    /// Fresh list of two empty fields
    pub fn new() -> Self {
        let mut list = Self {
            fields: Vec::with_capacity(MIN_OPERANDS),
            next_id: 0,
        };
        for _ in 0..MIN_OPERANDS {
            list.add();
        }
        list
    }

    /// Build a list with exactly these texts, any length
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self {
            fields: Vec::new(),
            next_id: 0,
        };
        for text in texts {
            let id = list.add();
            list.edit(id, text);
        }
        list
    }

    /// Append an empty field and return its id
    pub fn add(&mut self) -> OperandId {
        let id = OperandId(self.next_id);
        self.next_id += 1;
        self.fields.push(OperandField {
            id,
            text: String::new(),
        });
        id
    }

    /// Remove a field. Refused when it would leave fewer than
    /// [`MIN_OPERANDS`] fields or the id is unknown.
    pub fn remove(&mut self, id: OperandId) -> bool {
        if self.fields.len() <= MIN_OPERANDS {
            return false;
        }
        match self.position(id) {
            Some(index) => {
                self.fields.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the text of a field; `false` when the id is unknown
    pub fn edit(&mut self, id: OperandId, text: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.id == id) {
            Some(field) => {
                field.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Replace every field with the given texts, growing to at least
    /// [`MIN_OPERANDS`] fields
    pub fn set_all<I, S>(&mut self, texts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.clear();
        for text in texts {
            let id = self.add();
            self.edit(id, text);
        }
        while self.fields.len() < MIN_OPERANDS {
            self.add();
        }
    }

    /// Back to two empty fields; ids keep increasing
    pub fn reset(&mut self) {
        self.fields.clear();
        for _ in 0..MIN_OPERANDS {
            self.add();
        }
    }

    pub fn position(&self, id: OperandId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    pub fn get(&self, id: OperandId) -> Option<&str> {
        self.fields.iter().find(|f| f.id == id).map(|f| f.text.as_str())
    }

    pub fn fields(&self) -> &[OperandField] {
        &self.fields
    }

    pub fn ids(&self) -> Vec<OperandId> {
        self.fields.iter().map(|f| f.id).collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn can_remove(&self) -> bool {
        self.fields.len() > MIN_OPERANDS
    }

    /// Parsed operands, or the first rule the list violates
    pub fn validate(&self) -> Result<Vec<f64>, ValidationError> {
        validation::validate(&self.texts())
    }

    /// Passive check, e.g. for disabling a submit control
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_request(&self, operator: Operator) -> Result<OperationRequest, ValidationError> {
        let operands = self.validate()?;
        OperationRequest::new(operator, operands)
    }
}

impl Default for OperandList {
    fn default() -> Self {
        Self::new()
    }
}
