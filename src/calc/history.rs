//! History view: the current projection and the last accepted fetch result
//!
//! Each fetch is tagged with a [`RequestToken`]. Only the response to the
//! most recently issued fetch is applied; anything older is dropped, so a
//! slow earlier response cannot overwrite a newer one.

use super::command::Command;
use crate::api::{HistoryEntry, HistoryProjection, OperationFilter, SortDirection, SortField};
use crate::error::CalcError;
use log::{debug, warn};

/// Monotonic tag of a history fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn next(self) -> Self {
        RequestToken(self.0 + 1)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStatus {
    /// No fetch has succeeded yet
    NotLoaded,
    /// The last accepted fetch returned nothing
    Empty,
    Loaded(usize),
}

#[derive(Debug, Clone)]
pub struct HistoryView {
    projection: HistoryProjection,
    entries: Vec<HistoryEntry>,
    loaded: bool,
    latest: RequestToken,
    settled: RequestToken,
    last_error: Option<CalcError>,
}

impl HistoryView {
    pub fn new(projection: HistoryProjection) -> Self {
        Self {
            projection,
            entries: Vec::new(),
            loaded: false,
            latest: RequestToken::default(),
            settled: RequestToken::default(),
            last_error: None,
        }
    }

    /// Issue a fetch for the current projection
    pub fn refresh(&mut self) -> Command {
        self.latest = self.latest.next();
        debug!("History fetch #{} for {:?}", self.latest.get(), self.projection);
        Command::FetchHistory {
            token: self.latest,
            projection: self.projection,
        }
    }

    /// Change the projection; fetches only when it actually changed
    pub fn set_projection(&mut self, projection: HistoryProjection) -> Command {
        if projection == self.projection {
            return Command::None;
        }
        self.projection = projection;
        self.refresh()
    }

    pub fn set_filter(&mut self, filter: OperationFilter) -> Command {
        self.set_projection(self.projection.with_filter(filter))
    }

    pub fn set_order_by(&mut self, order_by: SortField) -> Command {
        self.set_projection(self.projection.with_order_by(order_by))
    }

    pub fn set_direction(&mut self, direction: SortDirection) -> Command {
        self.set_projection(self.projection.with_direction(direction))
    }

    /// Apply a fetch result. Returns `false` when the token is stale and the
    /// result was dropped.
    ///
    /// Failures keep the previously shown entries.
    pub fn apply(&mut self, token: RequestToken, result: Result<Vec<HistoryEntry>, CalcError>) -> bool {
        if token != self.latest {
            debug!(
                "Dropping stale history response #{} (latest is #{})",
                token.get(),
                self.latest.get()
            );
            return false;
        }

        self.settled = token;
        match result {
            Ok(entries) => {
                debug!("History fetch #{} returned {} entries", token.get(), entries.len());
                self.entries = entries;
                self.loaded = true;
                self.last_error = None;
            }
            Err(e) => {
                warn!("History fetch #{} failed, keeping previous entries: {}", token.get(), e);
                self.last_error = Some(e);
            }
        }
        true
    }

    pub fn projection(&self) -> &HistoryProjection {
        &self.projection
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// A fetch has been issued that has not been answered yet
    pub fn is_pending(&self) -> bool {
        self.settled != self.latest
    }

    pub fn status(&self) -> HistoryStatus {
        if !self.loaded {
            HistoryStatus::NotLoaded
        } else if self.entries.is_empty() {
            HistoryStatus::Empty
        } else {
            HistoryStatus::Loaded(self.entries.len())
        }
    }

    /// Message for the empty state. The service does not say whether the
    /// filter or an empty log caused it, so one message covers both.
    pub fn empty_message(&self) -> String {
        match self.projection.filter {
            OperationFilter::All => "No operations in history".to_string(),
            OperationFilter::Only(op) => format!("No {} operations in history", op),
        }
    }
}

impl Default for HistoryView {
    fn default() -> Self {
        Self::new(HistoryProjection::default())
    }
}
