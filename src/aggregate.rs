use crate::models::{DailySeries, MetricKind, Sample, Unit};
use crate::provider::HealthProvider;
use chrono::{Duration, NaiveDate};
use tracing::warn;

/// Sums a metric's raw samples into 1-day buckets over `[start, end)`.
///
/// Every bucket appears in the result, zero included: an explicit 0 means
/// "measured nothing that day". Provider failures (denied authorization,
/// unsupported metric, failed query) and incompatible units all degrade to an
/// empty mapping instead, which callers must read as "no data".
pub async fn aggregate(
    provider: &dyn HealthProvider,
    metric: MetricKind,
    unit: Unit,
    start: NaiveDate,
    end: NaiveDate,
) -> DailySeries {
    if !unit.compatible_with(metric) {
        warn!("unit {unit:?} is not compatible with {metric:?}, returning no data");
        return DailySeries::new();
    }

    match provider.query_samples(metric, start, end).await {
        Ok(samples) => bucket_daily(&samples, start, end),
        Err(err) => {
            warn!("{metric:?} query failed: {err}");
            DailySeries::new()
        }
    }
}

/// Partitions `[start, end)` into consecutive calendar-day buckets anchored
/// at `start` and sums each sample into the bucket its timestamp falls in.
/// Samples outside the range are ignored.
pub fn bucket_daily(samples: &[Sample], start: NaiveDate, end: NaiveDate) -> DailySeries {
    let mut series = DailySeries::new();
    let mut day = start;
    while day < end {
        series.insert(day, 0.0);
        day = day + Duration::days(1);
    }

    for sample in samples {
        let date = sample.at.date();
        if let Some(total) = series.get_mut(&date) {
            *total += sample.value;
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SimulatedProvider;
    use chrono::NaiveDateTime;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn at(d: u32, h: u32) -> NaiveDateTime {
        date(d).and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn one_bucket_per_day_with_explicit_zeros() {
        let series = bucket_daily(&[], date(5), date(12));
        assert_eq!(series.len(), 7);
        assert!(series.values().all(|&v| v == 0.0));
        let days: Vec<_> = series.keys().copied().collect();
        assert_eq!(days.first(), Some(&date(5)));
        assert_eq!(days.last(), Some(&date(11)));
    }

    #[test]
    fn samples_sum_into_their_own_day() {
        let samples = vec![
            Sample { at: at(5, 8), value: 1200.0 },
            Sample { at: at(5, 18), value: 800.0 },
            Sample { at: at(7, 12), value: 500.0 },
        ];
        let series = bucket_daily(&samples, date(5), date(12));
        assert_eq!(series[&date(5)], 2000.0);
        assert_eq!(series[&date(6)], 0.0);
        assert_eq!(series[&date(7)], 500.0);

        let in_range: f64 = samples.iter().map(|sample| sample.value).sum();
        assert_eq!(series.values().sum::<f64>(), in_range);
    }

    #[test]
    fn out_of_range_samples_are_ignored() {
        let samples = vec![
            Sample { at: at(4, 23), value: 100.0 },
            Sample { at: at(12, 0), value: 100.0 },
            Sample { at: at(6, 9), value: 40.0 },
        ];
        let series = bucket_daily(&samples, date(5), date(12));
        assert_eq!(series.values().sum::<f64>(), 40.0);
    }

    #[test]
    fn empty_range_yields_an_empty_mapping() {
        assert!(bucket_daily(&[], date(5), date(5)).is_empty());
    }

    #[tokio::test]
    async fn aggregate_returns_explicit_zeros_for_a_quiet_week() {
        let provider = SimulatedProvider::new();
        assert!(provider.request_authorization().await);
        let series = aggregate(
            &provider,
            MetricKind::StepCount,
            Unit::Count,
            date(5),
            date(12),
        )
        .await;
        assert_eq!(series.len(), 7);
        assert!(series.values().all(|&v| v == 0.0));
    }

    #[tokio::test]
    async fn aggregate_degrades_to_empty_on_denied_authorization() {
        let provider = SimulatedProvider::denying();
        assert!(!provider.request_authorization().await);
        let series = aggregate(
            &provider,
            MetricKind::StepCount,
            Unit::Count,
            date(5),
            date(12),
        )
        .await;
        assert!(series.is_empty());
    }

    #[tokio::test]
    async fn aggregate_degrades_to_empty_on_unsupported_metric() {
        let provider = SimulatedProvider::new().with_unsupported(MetricKind::ActiveEnergy);
        assert!(provider.request_authorization().await);
        let series = aggregate(
            &provider,
            MetricKind::ActiveEnergy,
            Unit::Kilocalorie,
            date(5),
            date(12),
        )
        .await;
        assert!(series.is_empty());
    }

    #[tokio::test]
    async fn aggregate_degrades_to_empty_on_query_failure() {
        let provider = SimulatedProvider::new()
            .with_samples(MetricKind::StepCount, vec![Sample { at: at(5, 8), value: 10.0 }])
            .with_query_failure("no results object");
        assert!(provider.request_authorization().await);
        let series = aggregate(
            &provider,
            MetricKind::StepCount,
            Unit::Count,
            date(5),
            date(12),
        )
        .await;
        assert!(series.is_empty());
    }

    #[tokio::test]
    async fn aggregate_rejects_an_incompatible_unit() {
        let provider = SimulatedProvider::new()
            .with_samples(MetricKind::StepCount, vec![Sample { at: at(5, 8), value: 10.0 }]);
        assert!(provider.request_authorization().await);
        let series = aggregate(
            &provider,
            MetricKind::StepCount,
            Unit::Kilocalorie,
            date(5),
            date(12),
        )
        .await;
        assert!(series.is_empty());
    }
}
