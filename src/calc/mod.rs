//! Calculator session engine
//!
//! Operand validation, the operation queue, the immediate/queued mode switch
//! and the history view, combined into one reducer-driven session state.

pub mod app;
pub mod command;
pub mod history;
pub mod mode;
pub mod operands;
pub mod queue;
pub mod runtime;
pub mod validation;

pub use app::{AppState, Msg, update};
pub use command::{Command, ExecutionTarget};
pub use history::{HistoryStatus, HistoryView, RequestToken};
pub use mode::{Mode, Route};
pub use operands::{OperandField, OperandId, OperandList};
pub use queue::OperationQueue;
pub use runtime::Runtime;
pub use validation::validate;
