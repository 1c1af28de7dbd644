//! Session reducer.
//!
//! All state mutations happen in [`update`]: it takes the current state and
//! a message, changes the state and returns the [`Command`] the runtime must
//! perform. Responses come back as messages.

use super::command::{Command, ExecutionTarget};
use super::history::{HistoryView, RequestToken};
use super::mode::{Mode, Route};
use super::operands::{OperandId, OperandList};
use super::queue::OperationQueue;
use crate::api::{
    HistoryEntry, HistoryProjection, OperationFilter, OperationOutcome, Operator, SortDirection, SortField,
};
use crate::config::BehaviorSettings;
use crate::error::CalcError;
use log::{debug, info, warn};

#[derive(Debug, Clone)]
pub enum Msg {
    AddOperand,
    RemoveOperand(OperandId),
    EditOperand { id: OperandId, text: String },
    /// Replace all operand fields at once
    SetOperands(Vec<String>),

    /// Operator button, routed by the current mode
    OperatorPressed(Operator),
    /// Append to the queue regardless of operator routing
    Enqueue(Operator),
    ExecuteQueue,
    ToggleMode,

    SetFilter(OperationFilter),
    SetOrderBy(SortField),
    SetDirection(SortDirection),
    RefreshHistory,

    ImmediateFinished(Result<f64, CalcError>),
    QueueFinished {
        submitted: usize,
        result: Result<Vec<OperationOutcome>, CalcError>,
    },
    HistoryLoaded {
        token: RequestToken,
        result: Result<Vec<HistoryEntry>, CalcError>,
    },
}

#[derive(Debug, Clone)]
pub struct AppState {
    mode: Mode,
    operands: OperandList,
    last_result: Option<f64>,
    last_error: Option<CalcError>,
    queue: OperationQueue,
    queue_outcomes: Vec<OperationOutcome>,
    queue_error: Option<CalcError>,
    /// Entries at the front of the queue that belong to the batch in flight
    queue_in_flight: Option<usize>,
    history: HistoryView,
    behavior: BehaviorSettings,
}

impl AppState {
    pub fn new(behavior: BehaviorSettings, projection: HistoryProjection) -> Self {
        Self {
            mode: Mode::Immediate,
            operands: OperandList::new(),
            last_result: None,
            last_error: None,
            queue: OperationQueue::new(),
            queue_outcomes: Vec::new(),
            queue_error: None,
            queue_in_flight: None,
            history: HistoryView::new(projection),
            behavior,
        }
    }

    /// Initial state plus the start-up history fetch
    pub fn init(behavior: BehaviorSettings, projection: HistoryProjection) -> (Self, Command) {
        let mut state = Self::new(behavior, projection);
        let command = state.history.refresh();
        (state, command)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn operands(&self) -> &OperandList {
        &self.operands
    }

    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    pub fn queue(&self) -> &OperationQueue {
        &self.queue
    }

    pub fn queue_outcomes(&self) -> &[OperationOutcome] {
        &self.queue_outcomes
    }

    pub fn queue_error(&self) -> Option<&CalcError> {
        self.queue_error.as_ref()
    }

    pub fn history(&self) -> &HistoryView {
        &self.history
    }

    pub fn behavior(&self) -> &BehaviorSettings {
        &self.behavior
    }

    /// Passive check used to enable the operator controls
    pub fn can_submit(&self) -> bool {
        self.operands.is_valid()
    }

    pub fn can_execute_queue(&self) -> bool {
        !self.queue.is_empty() && !self.is_queue_executing()
    }

    /// A queue batch has been sent and not answered yet
    pub fn is_queue_executing(&self) -> bool {
        self.queue_in_flight.is_some()
    }

    fn execute_immediately(&mut self, operator: Operator) -> Command {
        match self.operands.to_request(operator) {
            Ok(request) => {
                self.clear_errors();
                debug!("Executing {} immediately", request);
                Command::execute(ExecutionTarget::Immediate, request)
            }
            Err(e) => {
                debug!("Rejected {} operands: {}", operator, e);
                self.last_error = Some(e.into());
                Command::None
            }
        }
    }

    fn enqueue(&mut self, operator: Operator) -> Command {
        match self.operands.to_request(operator) {
            Ok(request) => {
                self.clear_errors();
                self.queue.enqueue(request);
                self.operands.reset();
            }
            Err(e) => {
                debug!("Rejected {} operands for queue: {}", operator, e);
                self.queue_error = Some(e.into());
            }
        }
        Command::None
    }

    fn clear_errors(&mut self) {
        self.last_error = None;
        self.queue_error = None;
    }

    fn execute_queue(&mut self) -> Command {
        if let Some(in_flight) = self.queue_in_flight {
            debug!("Queue batch of {} still in flight, not sending another", in_flight);
            return Command::None;
        }
        if self.queue.is_empty() {
            self.queue_error = Some(CalcError::QueueEmpty);
            return Command::None;
        }
        self.queue_error = None;
        info!("Executing queue of {} operations", self.queue.len());
        self.queue_in_flight = Some(self.queue.len());
        Command::execute(ExecutionTarget::Queue, self.queue.snapshot())
    }

    fn toggle_mode(&mut self) {
        let next = self.mode.toggled();
        info!("Switching mode {} -> {}", self.mode, next);

        self.operands.reset();
        match next {
            Mode::Queued => {
                self.last_result = None;
                self.last_error = None;
            }
            Mode::Immediate => {
                self.queue_outcomes.clear();
                self.queue_error = None;
                if self.behavior.clear_queue_on_immediate {
                    self.queue.clear();
                    // the batch in flight no longer owns any queued entry
                    if self.queue_in_flight.is_some() {
                        self.queue_in_flight = Some(0);
                    }
                }
            }
        }
        self.mode = next;
    }
}

pub fn update(state: &mut AppState, msg: Msg) -> Command {
    match msg {
        Msg::AddOperand => {
            state.operands.add();
            Command::None
        }
        Msg::RemoveOperand(id) => {
            if !state.operands.remove(id) {
                debug!("Operand {} not removed", id);
            }
            Command::None
        }
        Msg::EditOperand { id, text } => {
            state.operands.edit(id, text);
            Command::None
        }
        Msg::SetOperands(texts) => {
            state.operands.set_all(texts);
            Command::None
        }

        Msg::OperatorPressed(operator) => match state.mode.route(operator, &state.behavior) {
            Route::Execute => state.execute_immediately(operator),
            Route::Enqueue => state.enqueue(operator),
        },
        Msg::Enqueue(operator) => state.enqueue(operator),
        Msg::ExecuteQueue => state.execute_queue(),
        Msg::ToggleMode => {
            state.toggle_mode();
            Command::None
        }

        Msg::SetFilter(filter) => state.history.set_filter(filter),
        Msg::SetOrderBy(order_by) => state.history.set_order_by(order_by),
        Msg::SetDirection(direction) => state.history.set_direction(direction),
        Msg::RefreshHistory => state.history.refresh(),

        Msg::ImmediateFinished(Ok(value)) => {
            state.last_result = Some(value);
            state.last_error = None;
            state.queue_outcomes.clear();
            state.history.refresh()
        }
        Msg::ImmediateFinished(Err(e)) => {
            warn!("Immediate execution failed: {}", e);
            state.last_result = None;
            state.last_error = Some(e);
            state.queue_outcomes.clear();
            Command::None
        }

        Msg::QueueFinished { submitted, result: Ok(outcomes) } => {
            let owned = state.queue_in_flight.take().map_or(0, |n| n.min(submitted));
            state.queue.drain_front(owned);
            let any_success = outcomes.iter().any(|o| o.is_success());
            info!(
                "Queue executed: {} of {} operations succeeded",
                outcomes.iter().filter(|o| o.is_success()).count(),
                outcomes.len()
            );
            state.queue_outcomes = outcomes;
            state.queue_error = None;
            // only the newest result slot is shown
            state.last_result = None;
            if any_success {
                state.history.refresh()
            } else {
                Command::None
            }
        }
        Msg::QueueFinished { result: Err(e), .. } => {
            state.queue_in_flight = None;
            warn!("Queue execution failed, keeping {} queued operations: {}", state.queue.len(), e);
            state.queue_error = Some(e);
            Command::None
        }

        Msg::HistoryLoaded { token, result } => {
            state.history.apply(token, result);
            Command::None
        }
    }
}
