//! Receipt points calculation.
//!
//! Scoring is a pure function of a [`Receipt`]. Seven independent rules each
//! contribute points and the total is their sum:
//!
//! | Rule            | Points                                                        |
//! |-----------------|---------------------------------------------------------------|
//! | Retailer        | one per ASCII letter or digit in the retailer name            |
//! | Round dollar    | 50 if the total has no cents                                  |
//! | Quarter         | 25 if the total is a multiple of 0.25                         |
//! | Item pairs      | 5 for every two items                                         |
//! | Descriptions    | `ceil(price * 0.2)` per item whose trimmed description length is a multiple of 3 |
//! | Odd day         | 6 if the purchase day is odd                                  |
//! | Afternoon       | 10 if purchased after 14:00 and before 16:00                  |
//!
//! A malformed purchase date zeroes both the odd day and afternoon rules; a
//! malformed purchase time zeroes only the afternoon rule. Scoring never fails.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::domain::entities::{LineItem, Receipt};
use crate::utils::text::count_alphanumeric;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// `price * 0.2` in dollars is `price_cents / 500`.
const DESCRIPTION_PRICE_DIVISOR: u64 = 500;

/// Start of the afternoon window; purchases at exactly this time do not count.
pub const AFTERNOON_START: NaiveTime = match NaiveTime::from_hms_opt(14, 0, 0) {
    Some(t) => t,
    None => panic!("invalid afternoon start"),
};

/// End of the afternoon window; purchases at exactly this time do not count.
pub const AFTERNOON_END: NaiveTime = match NaiveTime::from_hms_opt(16, 0, 0) {
    Some(t) => t,
    None => panic!("invalid afternoon end"),
};

/// Points awarded by each rule for a single receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rule contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Applies the scoring rules to receipts.
///
/// The afternoon window is fixed when the engine is built. The engine holds no
/// mutable state and can be shared freely between request handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsEngine {
    afternoon_start: NaiveTime,
    afternoon_end: NaiveTime,
}

impl Default for PointsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PointsEngine {
    /// Creates an engine using the standard 14:00–16:00 afternoon window.
    pub fn new() -> Self {
        Self::with_window(AFTERNOON_START, AFTERNOON_END)
    }

    /// Creates an engine with a custom afternoon window (both bounds exclusive).
    pub fn with_window(afternoon_start: NaiveTime, afternoon_end: NaiveTime) -> Self {
        Self {
            afternoon_start,
            afternoon_end,
        }
    }

    /// Returns the total points for a receipt.
    pub fn score(&self, receipt: &Receipt) -> u64 {
        self.breakdown(receipt).total()
    }

    /// Returns the points awarded by each rule.
    pub fn breakdown(&self, receipt: &Receipt) -> PointsBreakdown {
        let purchase_date = parse_date(&receipt.purchase_date);
        // The time only counts on receipts with a valid date.
        let purchase_time = purchase_date.and_then(|_| parse_time(&receipt.purchase_time));

        PointsBreakdown {
            retailer: count_alphanumeric(&receipt.retailer),
            round_dollar: award(receipt.total_cents % 100 == 0, ROUND_DOLLAR_POINTS),
            quarter: award(receipt.total_cents % 25 == 0, QUARTER_POINTS),
            item_pairs: ITEM_PAIR_POINTS.saturating_mul(receipt.items.len() as u64 / 2),
            descriptions: receipt
                .items
                .iter()
                .map(description_points)
                .fold(0, u64::saturating_add),
            odd_day: award(
                purchase_date.is_some_and(|d| d.day() % 2 == 1),
                ODD_DAY_POINTS,
            ),
            afternoon: award(
                purchase_time.is_some_and(|t| self.is_afternoon(t)),
                AFTERNOON_POINTS,
            ),
        }
    }

    fn is_afternoon(&self, time: NaiveTime) -> bool {
        time > self.afternoon_start && time < self.afternoon_end
    }
}

/// Parses a `YYYY-MM-DD` date. Month and day must have two digits.
fn parse_date(text: &str) -> Option<NaiveDate> {
    if !has_shape(text, "dddd-dd-dd") {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Parses an `HH:MM` time. Hour and minute must have two digits.
fn parse_time(text: &str) -> Option<NaiveTime> {
    if !has_shape(text, "dd:dd") {
        return None;
    }
    NaiveTime::parse_from_str(text, TIME_FORMAT).ok()
}

/// `d` in `pattern` matches an ASCII digit; any other byte must match exactly.
fn has_shape(text: &str, pattern: &str) -> bool {
    text.len() == pattern.len()
        && text
            .bytes()
            .zip(pattern.bytes())
            .all(|(b, p)| if p == b'd' { b.is_ascii_digit() } else { b == p })
}

fn award(condition: bool, points: u64) -> u64 {
    if condition { points } else { 0 }
}

fn description_points(item: &LineItem) -> u64 {
    let length = item.description.trim().chars().count();
    if length % 3 == 0 {
        item.price_cents.div_ceil(DESCRIPTION_PRICE_DIVISOR)
    } else {
        0
    }
}
