//! Client-chosen filter and sort applied to a history fetch

use super::filters::OperationFilter;
use super::orderby::{OrderBy, SortDirection, SortField};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryProjection {
    #[serde(default, rename = "operation")]
    pub filter: OperationFilter,
    #[serde(default)]
    pub order_by: SortField,
    #[serde(default, rename = "sort_order")]
    pub direction: SortDirection,
}

impl HistoryProjection {
    pub fn new(filter: OperationFilter, order_by: SortField, direction: SortDirection) -> Self {
        Self {
            filter,
            order_by,
            direction,
        }
    }

    pub fn with_filter(mut self, filter: OperationFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_order_by(mut self, order_by: SortField) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn order(&self) -> OrderBy {
        OrderBy {
            field: self.order_by,
            direction: self.direction,
        }
    }

    /// Query parameters for `GET /history`.
    ///
    /// `operation` is omitted entirely for [`OperationFilter::All`];
    /// `order_by` and `sort_order` are always sent.
    pub fn to_query_params(&self) -> Vec<(&'static str, &'static str)> {
        let mut params = Vec::with_capacity(3);
        if let Some(operation) = self.filter.as_param() {
            params.push(("operation", operation));
        }
        params.extend(self.order().to_params());
        params
    }
}
