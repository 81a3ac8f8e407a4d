//! Daily time-series construction and monthly resampling.
//!
//! A series is a shared date index plus one or more metric columns.
//! Cumulative metrics are running sums of per-day draws, so they are
//! non-decreasing by construction. Flow metrics are independent per-day
//! draws. Resampling collapses the daily rows into one row per calendar
//! month, labelled with the month-end date.

use crate::{
    calendar,
    rng::SampleRng,
    types::{Cell, Table},
};
use chrono::{Datelike, NaiveDate};

/// How a metric's daily values are constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Running sum of per-day draws; non-decreasing across the series.
    Cumulative,
    /// Independent per-day draws; each day stands alone.
    Flow,
}

/// How a metric collapses into a monthly bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    /// Value recorded on the latest day present in the bucket.
    Last,
    /// Sum of all days in the bucket.
    Sum,
}

/// Declaration of one metric column.
#[derive(Debug, Clone, Copy)]
pub struct MetricSpec {
    pub name: &'static str,
    /// Lower bound of the half-open per-day draw range [low, high).
    pub low: i64,
    /// Upper bound (exclusive) of the per-day draw range.
    pub high: i64,
    pub kind: SeriesKind,
    pub reducer: Reducer,
}

/// One metric column with its generated daily values.
#[derive(Debug, Clone)]
pub struct MetricColumn {
    pub spec: MetricSpec,
    pub values: Vec<i64>,
}

/// A generated daily table: one value per metric per index day.
#[derive(Debug, Clone)]
pub struct DailySeries {
    pub dates: Vec<NaiveDate>,
    pub metrics: Vec<MetricColumn>,
}

impl DailySeries {
    /// Draw every metric over the shared date index.
    ///
    /// Draw order is fixed: metrics in declaration order, days ascending
    /// within each metric. A seeded rng therefore reproduces the table
    /// exactly.
    pub fn generate(dates: &[NaiveDate], specs: &[MetricSpec], rng: &mut SampleRng) -> Self {
        let metrics = specs
            .iter()
            .map(|spec| {
                let mut values = Vec::with_capacity(dates.len());
                let mut running = 0i64;
                for _ in dates {
                    let draw = rng.next_i64_in(spec.low, spec.high);
                    match spec.kind {
                        SeriesKind::Cumulative => {
                            running += draw;
                            values.push(running);
                        }
                        SeriesKind::Flow => values.push(draw),
                    }
                }
                MetricColumn {
                    spec: *spec,
                    values,
                }
            })
            .collect();

        Self {
            dates: dates.to_vec(),
            metrics,
        }
    }

    /// Collapse to one row per calendar month touched by the index.
    ///
    /// The bucket label is the month end, even when the window only
    /// partially covers the month. The index is ascending, so buckets
    /// come out ascending too.
    pub fn resample_monthly(&self) -> Table {
        let mut columns = vec!["date"];
        columns.extend(self.metrics.iter().map(|m| m.spec.name));
        let mut table = Table::new(columns);

        let mut start = 0usize;
        while start < self.dates.len() {
            let month = (self.dates[start].year(), self.dates[start].month());
            let mut end = start + 1;
            while end < self.dates.len()
                && (self.dates[end].year(), self.dates[end].month()) == month
            {
                end += 1;
            }

            let mut row = vec![Cell::Date(calendar::month_end(self.dates[start]))];
            for metric in &self.metrics {
                let bucket = &metric.values[start..end];
                let reduced = match metric.spec.reducer {
                    Reducer::Last => bucket[bucket.len() - 1],
                    Reducer::Sum => bucket.iter().sum(),
                };
                row.push(Cell::Int(reduced));
            }
            table.push_row(row);

            start = end;
        }

        log::debug!(
            "resampled {} daily rows into {} monthly buckets",
            self.dates.len(),
            table.row_count()
        );
        table
    }
}
