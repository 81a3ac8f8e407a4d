//! Fixed display fixtures: category tables, prediction tables, summary.
//!
//! RULE: Every static literal lives here exactly once. The in-memory
//! dashboard consumers and the JSON artifact both read this module, so
//! numbers cannot drift between call sites.

use crate::types::{Cell, Table};
use serde::Serialize;

// ── Product distribution ──────────────────────────────────────────

/// Product lines in the distribution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    MutualFund,
    FixedDeposit,
    Portfolio,
}

impl Product {
    pub const ALL: [Product; 3] = [Self::MutualFund, Self::FixedDeposit, Self::Portfolio];

    pub fn label(&self) -> &'static str {
        match self {
            Self::MutualFund => "MUTUAL FUND",
            Self::FixedDeposit => "FD",
            Self::Portfolio => "PORTFOLIO",
        }
    }

    pub fn customers(&self) -> i64 {
        match self {
            Self::MutualFund => 2800,
            Self::FixedDeposit => 3100,
            Self::Portfolio => 4100,
        }
    }

    pub fn income(&self) -> f64 {
        match self {
            Self::MutualFund => 2_041_976.21,
            Self::FixedDeposit => 1_765_430.99,
            Self::Portfolio => 1_607_418.08,
        }
    }

    pub fn trades(&self) -> f64 {
        match self {
            Self::MutualFund => 69_200.00,
            Self::FixedDeposit => 1_564_498.00,
            Self::Portfolio => 3_369_000.00,
        }
    }
}

pub fn product_table() -> Table {
    let mut table = Table::new(vec!["product", "customers", "income", "trades"]);
    for product in Product::ALL {
        table.push_row(vec![
            Cell::Text(product.label()),
            Cell::Int(product.customers()),
            Cell::Float(product.income()),
            Cell::Float(product.trades()),
        ]);
    }
    table
}

// ── Aging buckets ─────────────────────────────────────────────────

/// Payment aging buckets (outstanding amounts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentAging {
    UpTo30Days,
    Days31To60,
    Days61To90,
    Over90Days,
}

impl PaymentAging {
    pub const ALL: [PaymentAging; 4] = [
        Self::UpTo30Days,
        Self::Days31To60,
        Self::Days61To90,
        Self::Over90Days,
    ];

    pub fn range_label(&self) -> &'static str {
        match self {
            Self::UpTo30Days => "0-30 Days",
            Self::Days31To60 => "31-60 Days",
            Self::Days61To90 => "61-90 Days",
            Self::Over90Days => "91+ Days",
        }
    }

    pub fn amount(&self) -> i64 {
        match self {
            Self::UpTo30Days => 2_679,
            Self::Days31To60 => 0,
            Self::Days61To90 => 3_669_666,
            Self::Over90Days => 36_805,
        }
    }
}

pub fn payment_aging_table() -> Table {
    let mut table = Table::new(vec!["range", "amount"]);
    for bucket in PaymentAging::ALL {
        table.push_row(vec![
            Cell::Text(bucket.range_label()),
            Cell::Int(bucket.amount()),
        ]);
    }
    table
}

/// Ticket aging buckets (open ticket counts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketAging {
    UpTo15Days,
    Days16To30,
    Days31To45,
    Over45Days,
}

impl TicketAging {
    pub const ALL: [TicketAging; 4] = [
        Self::UpTo15Days,
        Self::Days16To30,
        Self::Days31To45,
        Self::Over45Days,
    ];

    pub fn range_label(&self) -> &'static str {
        match self {
            Self::UpTo15Days => "0-15 days",
            Self::Days16To30 => "16-30 days",
            Self::Days31To45 => "31-45 days",
            Self::Over45Days => "45+ days",
        }
    }

    pub fn count(&self) -> i64 {
        match self {
            Self::UpTo15Days => 0,
            Self::Days16To30 => 2,
            Self::Days31To45 => 7,
            Self::Over45Days => 29,
        }
    }
}

pub fn tickets_aging_table() -> Table {
    let mut table = Table::new(vec!["range", "count"]);
    for bucket in TicketAging::ALL {
        table.push_row(vec![
            Cell::Text(bucket.range_label()),
            Cell::Int(bucket.count()),
        ]);
    }
    table
}

// ── Prediction tables ─────────────────────────────────────────────

/// Projection grid: three months per year, three years out.
const PREDICTION_MONTHS: [&str; 3] = ["Sep", "Oct", "Nov"];
const PREDICTION_YEARS: [&str; 3] = ["2023", "2024", "2025"];

fn prediction_table(values: [Cell; 9]) -> Table {
    let mut table = Table::new(vec!["month", "year", "count"]);
    for (i, value) in values.into_iter().enumerate() {
        table.push_row(vec![
            Cell::Text(PREDICTION_MONTHS[i % 3]),
            Cell::Text(PREDICTION_YEARS[i / 3]),
            value,
        ]);
    }
    table
}

fn float_predictions(values: [f64; 9]) -> Table {
    prediction_table(values.map(Cell::Float))
}

pub fn transaction_prediction_table() -> Table {
    float_predictions([2.74, 3.71, 2.21, 3.0, 3.73, 3.89, 4.3, 4.54, 3.98])
}

pub fn client_prediction_table() -> Table {
    float_predictions([21.67, 29.27, 22.14, 30.03, 26.6, 30.54, 40.23, 49.61, 45.39])
}

/// Event counts are whole numbers, unlike the other projections.
pub fn events_details_table() -> Table {
    prediction_table([240, 290, 320, 250, 220, 200, 350, 340, 340].map(Cell::Int))
}

pub fn entitlements_prediction_table() -> Table {
    float_predictions([34.26, 24.59, 14.79, 20.07, 27.27, 13.91, 36.87, 36.36, 35.34])
}

// ── Headline summary ──────────────────────────────────────────────

/// Fixed headline totals appended to the artifact as `summary`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_customers: i64,
    pub total_income: f64,
    pub total_trades: i64,
    pub open_events: i64,
    pub open_entitlements: i64,
}

pub const SUMMARY: Summary = Summary {
    total_customers: 10_000,
    total_income: 5_414_825.28,
    total_trades: 5_002_698,
    open_events: 38,
    open_entitlements: 3_709_150,
};
