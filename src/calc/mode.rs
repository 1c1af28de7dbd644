//! Immediate / queued mode switch and operator routing

use crate::api::operations::Operator;
use crate::config::BehaviorSettings;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Immediate,
    Queued,
}

/// Where an operator press goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Execute,
    Enqueue,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Immediate => Mode::Queued,
            Mode::Queued => Mode::Immediate,
        }
    }

    /// Route an operator press. In queued mode every operator is enqueued,
    /// except divide while `divide_always_immediate` is set.
    pub fn route(self, operator: Operator, behavior: &BehaviorSettings) -> Route {
        match self {
            Mode::Immediate => Route::Execute,
            Mode::Queued if operator == Operator::Divide && behavior.divide_always_immediate => Route::Execute,
            Mode::Queued => Route::Enqueue,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Immediate => f.write_str("immediate"),
            Mode::Queued => f.write_str("queued"),
        }
    }
}
