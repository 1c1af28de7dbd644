use super::history::RequestToken;
use crate::api::{HistoryProjection, Operations};

/// Which result slot an executed batch reports into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionTarget {
    /// Single operation; its outcome feeds the immediate result slot
    Immediate,
    /// The drained queue; outcomes feed the queue result list
    Queue,
}

/// Commands represent side effects the reducer wants performed.
/// They are returned from `update()` and executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Do nothing
    None,

    /// Submit operations to the batch endpoint
    Execute {
        target: ExecutionTarget,
        operations: Operations,
    },

    /// Fetch history under a projection, tagged with its request token
    FetchHistory {
        token: RequestToken,
        projection: HistoryProjection,
    },
}

impl Command {
    pub fn execute(target: ExecutionTarget, operations: impl Into<Operations>) -> Self {
        Command::Execute {
            target,
            operations: operations.into(),
        }
    }

    /// Number of network calls this command will make
    pub fn network_calls(&self) -> usize {
        match self {
            Command::None => 0,
            Command::Execute { .. } | Command::FetchHistory { .. } => 1,
        }
    }

    pub fn is_none(&self) -> bool {
        self.network_calls() == 0
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::None
    }
}
