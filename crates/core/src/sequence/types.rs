//! Line numbering domain types.

use erpvn_shared::types::LineId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Host models whose lines carry a "#" column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineModel {
    /// `sale.order.line`, numbered per sale order.
    SaleOrderLine,
    /// `purchase.order.line`, numbered per purchase order.
    PurchaseOrderLine,
    /// `purchase.request.line`, numbered per purchase request.
    PurchaseRequestLine,
    /// `stock.move`, numbered per picking.
    StockMove,
}

impl LineModel {
    /// Returns the host model name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SaleOrderLine => "sale.order.line",
            Self::PurchaseOrderLine => "purchase.order.line",
            Self::PurchaseRequestLine => "purchase.request.line",
            Self::StockMove => "stock.move",
        }
    }

    /// Returns the field linking a line to its parent document.
    #[must_use]
    pub fn parent_field(&self) -> &'static str {
        match self {
            Self::SaleOrderLine | Self::PurchaseOrderLine => "order_id",
            Self::PurchaseRequestLine => "request_id",
            Self::StockMove => "picking_id",
        }
    }
}

impl fmt::Display for LineModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One numbered line of a parent document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Line identifier.
    pub id: LineId,
    /// Drag-handle position in the form view.
    pub sequence: i32,
    /// Displayed line number; 0 means not assigned yet.
    pub sequence_number: u32,
}

impl OrderLine {
    /// Creates a line with the given handle position and number.
    #[must_use]
    pub fn new(id: LineId, sequence: i32, sequence_number: u32) -> Self {
        Self {
            id,
            sequence,
            sequence_number,
        }
    }

    /// Returns true if the line has no number yet.
    #[must_use]
    pub fn is_unnumbered(&self) -> bool {
        self.sequence_number == 0
    }
}
