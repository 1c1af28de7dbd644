//! Drives the reducer: performs the effects it returns against a
//! [`CalculatorApi`] and feeds the responses back as messages.
//!
//! Everything runs on the caller's task. Effects are polled concurrently
//! but completions are applied one at a time, in arrival order.

use super::app::{AppState, Msg, update};
use super::command::{Command, ExecutionTarget};
use crate::api::operations::BatchResponseParser;
use crate::api::{CalculatorApi, HistoryProjection};
use crate::config::BehaviorSettings;
use futures::StreamExt;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use log::trace;
use std::sync::Arc;

pub struct Runtime {
    state: AppState,
    api: Arc<dyn CalculatorApi>,
    pending: FuturesUnordered<BoxFuture<'static, Msg>>,
}

impl Runtime {
    /// Build the session and queue its start-up history fetch
    pub fn new(api: Arc<dyn CalculatorApi>, behavior: BehaviorSettings, projection: HistoryProjection) -> Self {
        let (state, init_command) = AppState::init(behavior, projection);
        let mut runtime = Self {
            state,
            api,
            pending: FuturesUnordered::new(),
        };
        runtime.execute_command(init_command);
        runtime
    }

    /// Build the session without the start-up fetch
    pub fn without_initial_fetch(
        api: Arc<dyn CalculatorApi>,
        behavior: BehaviorSettings,
        projection: HistoryProjection,
    ) -> Self {
        Self {
            state: AppState::new(behavior, projection),
            api,
            pending: FuturesUnordered::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of effects still waiting for a response
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Run the reducer and start whatever effects it asks for
    pub fn dispatch(&mut self, msg: Msg) {
        let command = update(&mut self.state, msg);
        self.execute_command(command);
    }

    /// Dispatch and then wait until no effects remain
    pub async fn dispatch_and_settle(&mut self, msg: Msg) {
        self.dispatch(msg);
        self.settle().await;
    }

    /// Wait for the next effect to finish and apply it.
    /// Returns `false` when nothing was pending.
    pub async fn step(&mut self) -> bool {
        match self.pending.next().await {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Apply responses until nothing is pending, including follow-up
    /// effects such as the history refresh after an execution
    pub async fn settle(&mut self) {
        while self.step().await {}
    }

    fn execute_command(&mut self, command: Command) {
        let api = Arc::clone(&self.api);
        match command {
            Command::Execute { target, operations } => {
                trace!("Starting {:?} execution of {} operations", target, operations.len());
                let submitted = operations.len();
                self.pending.push(Box::pin(async move {
                    let result = operations.execute(api.as_ref()).await;
                    match target {
                        ExecutionTarget::Immediate => {
                            Msg::ImmediateFinished(result.and_then(BatchResponseParser::into_single))
                        }
                        ExecutionTarget::Queue => Msg::QueueFinished { submitted, result },
                    }
                }));
            }
            Command::FetchHistory { token, projection } => {
                trace!("Starting history fetch #{}", token.get());
                self.pending.push(Box::pin(async move {
                    let result = api.fetch_history(&projection).await;
                    Msg::HistoryLoaded { token, result }
                }));
            }
            Command::None => {}
        }
    }
}
