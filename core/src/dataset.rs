//! Sample dataset assembly — the generator's single entry point.
//!
//! One call builds the full snapshot: four monthly tables resampled from
//! freshly drawn daily series, three static category tables, and four
//! prediction tables. Pure generation into memory; no I/O, no failure
//! path.

use crate::{
    calendar,
    fixtures,
    rng::SampleRng,
    series::{DailySeries, MetricSpec, Reducer, SeriesKind},
    types::Table,
};
use chrono::NaiveDate;

/// Artifact table names, in declaration order.
pub const TABLE_NAMES: [&str; 11] = [
    "customers_monthly",
    "income_monthly",
    "trade_monthly",
    "event_monthly",
    "product_df",
    "payment_aging_df",
    "tickets_aging_df",
    "transaction_prediction_df",
    "client_prediction_df",
    "events_details_df",
    "entitlements_prediction_df",
];

const CUSTOMERS_METRICS: [MetricSpec; 2] = [
    MetricSpec {
        name: "total_customers",
        low: 10,
        high: 100,
        kind: SeriesKind::Cumulative,
        reducer: Reducer::Last,
    },
    MetricSpec {
        name: "new_customers",
        low: 10,
        high: 200,
        kind: SeriesKind::Flow,
        reducer: Reducer::Sum,
    },
];

const INCOME_METRICS: [MetricSpec; 2] = [
    MetricSpec {
        name: "total_income",
        low: 10_000,
        high: 50_000,
        kind: SeriesKind::Cumulative,
        reducer: Reducer::Last,
    },
    MetricSpec {
        name: "new_income",
        low: 1_000,
        high: 5_000,
        kind: SeriesKind::Flow,
        reducer: Reducer::Sum,
    },
];

// total_trades charts as a monthly total, not a month-end snapshot.
const TRADE_METRICS: [MetricSpec; 2] = [
    MetricSpec {
        name: "total_trades",
        low: 100,
        high: 500,
        kind: SeriesKind::Cumulative,
        reducer: Reducer::Sum,
    },
    MetricSpec {
        name: "trade_volume",
        low: 10_000,
        high: 50_000,
        kind: SeriesKind::Flow,
        reducer: Reducer::Sum,
    },
];

const EVENT_METRICS: [MetricSpec; 2] = [
    MetricSpec {
        name: "open_events",
        low: 0,
        high: 5,
        kind: SeriesKind::Flow,
        reducer: Reducer::Sum,
    },
    MetricSpec {
        name: "open_entitlements",
        low: 1_000,
        high: 10_000,
        kind: SeriesKind::Flow,
        reducer: Reducer::Sum,
    },
];

/// The eleven named tables of one generation run.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub customers_monthly: Table,
    pub income_monthly: Table,
    pub trade_monthly: Table,
    pub event_monthly: Table,
    pub product_df: Table,
    pub payment_aging_df: Table,
    pub tickets_aging_df: Table,
    pub transaction_prediction_df: Table,
    pub client_prediction_df: Table,
    pub events_details_df: Table,
    pub entitlements_prediction_df: Table,
}

impl Dataset {
    /// Tables paired with their artifact names, declaration order.
    pub fn tables(&self) -> [(&'static str, &Table); 11] {
        [
            ("customers_monthly", &self.customers_monthly),
            ("income_monthly", &self.income_monthly),
            ("trade_monthly", &self.trade_monthly),
            ("event_monthly", &self.event_monthly),
            ("product_df", &self.product_df),
            ("payment_aging_df", &self.payment_aging_df),
            ("tickets_aging_df", &self.tickets_aging_df),
            ("transaction_prediction_df", &self.transaction_prediction_df),
            ("client_prediction_df", &self.client_prediction_df),
            ("events_details_df", &self.events_details_df),
            ("entitlements_prediction_df", &self.entitlements_prediction_df),
        ]
    }
}

/// Build the full dataset for `today`.
///
/// The caller captures `today` exactly once; all four series then share
/// an identical date index. Every random draw comes from `rng`, so a
/// seeded source makes the whole snapshot reproducible.
pub fn generate_sample_data(today: NaiveDate, rng: &mut SampleRng) -> Dataset {
    let index = calendar::daily_index(today);

    let customers = DailySeries::generate(&index, &CUSTOMERS_METRICS, rng);
    let income = DailySeries::generate(&index, &INCOME_METRICS, rng);
    let trade = DailySeries::generate(&index, &TRADE_METRICS, rng);
    let event = DailySeries::generate(&index, &EVENT_METRICS, rng);

    log::debug!(
        "generated 4 daily series over {} days ending {today}",
        index.len()
    );

    Dataset {
        customers_monthly: customers.resample_monthly(),
        income_monthly: income.resample_monthly(),
        trade_monthly: trade.resample_monthly(),
        event_monthly: event.resample_monthly(),
        product_df: fixtures::product_table(),
        payment_aging_df: fixtures::payment_aging_table(),
        tickets_aging_df: fixtures::tickets_aging_table(),
        transaction_prediction_df: fixtures::transaction_prediction_table(),
        client_prediction_df: fixtures::client_prediction_table(),
        events_details_df: fixtures::events_details_table(),
        entitlements_prediction_df: fixtures::entitlements_prediction_table(),
    }
}
