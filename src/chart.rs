use crate::models::DailySeries;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Vertical space the bars are normalized into, matching the chart card on
/// the front page.
pub const CHART_HEIGHT: f64 = 200.0;

/// One date on the chart: raw totals plus the two bar heights scaled against
/// the shared maximum of both series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub date: NaiveDate,
    pub steps_value: f64,
    pub calories_value: f64,
    pub steps_height: f64,
    pub calories_height: f64,
}

/// Normalizes both series against one shared maximum so the two sets of bars
/// live on a single vertical scale. Equal bar heights therefore mean "equal
/// fraction of the week's peak", never equal real-world quantities.
///
/// Pure: the date domain is the sorted union of both key sets, missing values
/// count as 0, and a shared maximum of 0 yields zero-height bars throughout.
pub fn render(steps: &DailySeries, calories: &DailySeries, chart_height: f64) -> Vec<ChartBar> {
    let shared_max = steps
        .values()
        .chain(calories.values())
        .copied()
        .fold(0.0_f64, f64::max);

    let dates: BTreeSet<NaiveDate> = steps.keys().chain(calories.keys()).copied().collect();

    dates
        .into_iter()
        .map(|date| {
            let steps_value = steps.get(&date).copied().unwrap_or(0.0);
            let calories_value = calories.get(&date).copied().unwrap_or(0.0);
            let scale = |value: f64| {
                if shared_max == 0.0 {
                    0.0
                } else {
                    (value / shared_max) * chart_height
                }
            };
            ChartBar {
                date,
                steps_value,
                calories_value,
                steps_height: scale(steps_value),
                calories_height: scale(calories_value),
            }
        })
        .collect()
}
