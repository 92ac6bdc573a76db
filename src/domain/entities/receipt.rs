//! Receipt entity consumed by the points engine.

/// A single purchased item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub description: String,
    pub price_cents: u64,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(description: impl Into<String>, price_cents: u64) -> Self {
        Self {
            description: description.into(),
            price_cents,
        }
    }
}

/// A parsed purchase receipt.
///
/// Amounts are already converted to cents. The purchase date and time are kept
/// as submitted (`YYYY-MM-DD` and `HH:MM`); the points engine parses them and
/// skips the date and time rules when they are malformed.
///
/// `total_cents` is scored as stated and is not checked against the item prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<LineItem>,
    pub total_cents: u64,
}

impl Receipt {
    /// Creates a new Receipt instance.
    pub fn new(
        retailer: impl Into<String>,
        purchase_date: impl Into<String>,
        purchase_time: impl Into<String>,
        items: Vec<LineItem>,
        total_cents: u64,
    ) -> Self {
        Self {
            retailer: retailer.into(),
            purchase_date: purchase_date.into(),
            purchase_time: purchase_time.into(),
            items,
            total_cents,
        }
    }
}
