use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily totals keyed by calendar day. `BTreeMap` keeps the date domain
/// sorted chronologically, so iteration order is never insertion order.
pub type DailySeries = BTreeMap<NaiveDate, f64>;

/// The two health quantities the app tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    StepCount,
    ActiveEnergy,
}

impl MetricKind {
    pub fn default_unit(self) -> Unit {
        match self {
            MetricKind::StepCount => Unit::Count,
            MetricKind::ActiveEnergy => Unit::Kilocalorie,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Count,
    Kilocalorie,
}

impl Unit {
    /// A query with a unit that does not fit the metric is treated the same
    /// as an unsupported metric: no data.
    pub fn compatible_with(self, metric: MetricKind) -> bool {
        matches!(
            (metric, self),
            (MetricKind::StepCount, Unit::Count) | (MetricKind::ActiveEnergy, Unit::Kilocalorie)
        )
    }
}

/// A raw timestamped reading from the provider, before daily bucketing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub at: NaiveDateTime,
    pub value: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub authorized: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub next_disabled: bool,
    /// Present only on navigation responses. `Some(false)` means a `next`
    /// was rejected at the current-week boundary and the window was left
    /// unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved: Option<bool>,
    pub steps: DailySeries,
    pub calories: DailySeries,
    pub chart: Vec<crate::chart::ChartBar>,
}
