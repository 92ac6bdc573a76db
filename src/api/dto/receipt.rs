//! DTOs for receipt processing and points lookup.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::intake::{ItemSubmission, ReceiptSubmission};

/// Receipt submitted for scoring.
///
/// Missing fields are treated as empty. Amounts are decimal dollar strings.
/// At most 1000 items are accepted; the retailer name and item descriptions
/// are limited to 1024 characters.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessReceiptRequest {
    #[validate(length(max = 1024))]
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`.
    pub purchase_time: String,

    #[validate(length(max = 1000), nested)]
    pub items: Vec<ItemRequest>,

    /// Total amount paid, e.g. `"35.35"`.
    pub total: String,
}

/// Single line item on a submitted receipt.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemRequest {
    #[validate(length(max = 1024))]
    pub short_description: String,

    /// Item price, e.g. `"6.49"`.
    pub price: String,
}

impl From<ProcessReceiptRequest> for ReceiptSubmission {
    fn from(request: ProcessReceiptRequest) -> Self {
        Self {
            retailer: request.retailer,
            purchase_date: request.purchase_date,
            purchase_time: request.purchase_time,
            items: request
                .items
                .into_iter()
                .map(|item| ItemSubmission {
                    description: item.short_description,
                    price: item.price,
                })
                .collect(),
            total: request.total,
        }
    }
}

/// Identifier assigned to a processed receipt.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// Points awarded to a processed receipt.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}
