//! Receipt intake: turns a raw submission into a scorable [`Receipt`].
//!
//! Intake trims every text field and converts every price and the total to
//! cents. The purchase date and time are passed through as text; the points
//! engine decides whether they are usable.

use std::fmt;

use crate::domain::entities::{LineItem, Receipt};
use crate::utils::money::{AmountError, parse_cents};

/// A receipt as submitted, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiptSubmission {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ItemSubmission>,
    pub total: String,
}

/// A line item as submitted, with its price still in dollar text form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSubmission {
    pub description: String,
    pub price: String,
}

/// Identifies which amount on a submission failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountField {
    /// Price of the item at this zero-based index.
    Item(usize),
    Total,
}

impl AmountField {
    pub fn is_total(&self) -> bool {
        matches!(self, AmountField::Total)
    }
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountField::Item(index) => write!(f, "items[{index}].price"),
            AmountField::Total => write!(f, "total"),
        }
    }
}

/// Errors that reject a submission before scoring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Invalid amount in {field}: {source}")]
    InvalidAmount {
        field: AmountField,
        #[source]
        source: AmountError,
    },
}

/// Parses a submission into a [`Receipt`].
///
/// Prices are trimmed before parsing. The first malformed amount rejects the
/// whole submission.
///
/// # Errors
///
/// Returns [`IntakeError::InvalidAmount`] naming the offending item index or
/// the total.
pub fn parse_receipt(submission: ReceiptSubmission) -> Result<Receipt, IntakeError> {
    let items = submission
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let price_cents = parse_amount(&item.price, AmountField::Item(index))?;
            Ok(LineItem::new(item.description.trim(), price_cents))
        })
        .collect::<Result<Vec<_>, IntakeError>>()?;

    let total_cents = parse_amount(&submission.total, AmountField::Total)?;

    Ok(Receipt::new(
        submission.retailer.trim(),
        submission.purchase_date.trim(),
        submission.purchase_time.trim(),
        items,
        total_cents,
    ))
}

fn parse_amount(text: &str, field: AmountField) -> Result<u64, IntakeError> {
    parse_cents(text.trim()).map_err(|source| IntakeError::InvalidAmount { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, price: &str) -> ItemSubmission {
        ItemSubmission {
            description: description.to_string(),
            price: price.to_string(),
        }
    }

    fn submission(items: Vec<ItemSubmission>, total: &str) -> ReceiptSubmission {
        ReceiptSubmission {
            retailer: "  Target ".to_string(),
            purchase_date: " 2022-01-01".to_string(),
            purchase_time: "13:01 ".to_string(),
            items,
            total: total.to_string(),
        }
    }

    #[test]
    fn test_parse_receipt_trims_and_converts() {
        let receipt = parse_receipt(submission(
            vec![item("  Mountain Dew 12PK  ", "6.49"), item("Pizza", " 12.5 ")],
            "18.99",
        ))
        .unwrap();

        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items[0], LineItem::new("Mountain Dew 12PK", 649));
        assert_eq!(receipt.items[1], LineItem::new("Pizza", 1250));
        assert_eq!(receipt.total_cents, 1899);
    }

    #[test]
    fn test_parse_receipt_preserves_item_order() {
        let receipt =
            parse_receipt(submission(vec![item("b", "2"), item("a", "1")], "3")).unwrap();

        assert_eq!(receipt.items[0].description, "b");
        assert_eq!(receipt.items[1].description, "a");
    }

    #[test]
    fn test_parse_receipt_reports_item_index() {
        let err = parse_receipt(submission(
            vec![item("ok", "1.00"), item("bad", "1.234")],
            "2.23",
        ))
        .unwrap_err();

        assert_eq!(
            err,
            IntakeError::InvalidAmount {
                field: AmountField::Item(1),
                source: AmountError::InvalidCents("234".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_receipt_reports_total() {
        let err = parse_receipt(submission(vec![item("ok", "1.00")], "abc")).unwrap_err();

        let IntakeError::InvalidAmount { field, .. } = err;
        assert_eq!(field, AmountField::Total);
    }

    #[test]
    fn test_parse_receipt_empty_submission() {
        let receipt = parse_receipt(ReceiptSubmission::default()).unwrap();

        assert_eq!(receipt.retailer, "");
        assert!(receipt.items.is_empty());
        assert_eq!(receipt.total_cents, 0);
    }

    #[test]
    fn test_amount_field_display() {
        assert_eq!(AmountField::Item(0).to_string(), "items[0].price");
        assert_eq!(AmountField::Total.to_string(), "total");
    }
}
