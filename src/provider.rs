use crate::errors::ProviderError;
use crate::models::{DailySeries, MetricKind, Sample};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, warn};

/// Boundary to the device health-data store. The callback style of the
/// underlying platform API stays behind this trait; everything inside the app
/// awaits futures.
#[async_trait]
pub trait HealthProvider: Send + Sync {
    /// Ask for read access to both tracked metrics. `false` leaves the app on
    /// the unauthorized view; there is no retry loop.
    async fn request_authorization(&self) -> bool;

    /// Raw samples for one metric whose timestamps fall inside the local-day
    /// range `[start, end)`.
    async fn query_samples(
        &self,
        metric: MetricKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Sample>, ProviderError>;
}

/// In-memory provider standing in for the device store. Samples can be
/// seeded from a JSON file; authorization can be configured to deny.
#[derive(Debug, Default)]
pub struct SimulatedProvider {
    deny: bool,
    authorized: AtomicBool,
    steps: Vec<Sample>,
    calories: Vec<Sample>,
    unsupported: Vec<MetricKind>,
    query_failure: Option<String>,
}

impl SimulatedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose authorization prompt is always declined.
    pub fn denying() -> Self {
        Self {
            deny: true,
            ..Self::default()
        }
    }

    pub fn with_samples(mut self, metric: MetricKind, samples: Vec<Sample>) -> Self {
        match metric {
            MetricKind::StepCount => self.steps = samples,
            MetricKind::ActiveEnergy => self.calories = samples,
        }
        self
    }

    pub fn with_unsupported(mut self, metric: MetricKind) -> Self {
        self.unsupported.push(metric);
        self
    }

    /// Makes every statistics query fail with the given message, standing in
    /// for a store that returns no results object.
    pub fn with_query_failure(mut self, message: impl Into<String>) -> Self {
        self.query_failure = Some(message.into());
        self
    }

    /// Seeds the sample store from a JSON file of the shape
    /// `{"steps": [{"at": ..., "value": ...}], "calories": [...]}`.
    /// A missing file means an empty store.
    pub async fn from_file(path: &Path) -> Self {
        let file = match tokio::fs::read(path).await {
            Ok(bytes) => match serde_json::from_slice::<SamplesFile>(&bytes) {
                Ok(file) => file,
                Err(err) => {
                    error!("failed to parse samples file: {err}");
                    SamplesFile::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => SamplesFile::default(),
            Err(err) => {
                error!("failed to read samples file: {err}");
                SamplesFile::default()
            }
        };

        Self {
            steps: file.steps,
            calories: file.calories,
            ..Self::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SamplesFile {
    #[serde(default)]
    steps: Vec<Sample>,
    #[serde(default)]
    calories: Vec<Sample>,
}

#[async_trait]
impl HealthProvider for SimulatedProvider {
    async fn request_authorization(&self) -> bool {
        if self.deny {
            return false;
        }
        self.authorized.store(true, Ordering::SeqCst);
        true
    }

    async fn query_samples(
        &self,
        metric: MetricKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Sample>, ProviderError> {
        if !self.authorized.load(Ordering::SeqCst) {
            return Err(ProviderError::Unauthorized);
        }
        if self.unsupported.contains(&metric) {
            return Err(ProviderError::UnsupportedMetric(metric));
        }
        if let Some(message) = &self.query_failure {
            return Err(ProviderError::QueryFailed(message.clone()));
        }

        let from = start.and_time(NaiveTime::MIN);
        let to = end.and_time(NaiveTime::MIN);
        let samples = match metric {
            MetricKind::StepCount => &self.steps,
            MetricKind::ActiveEnergy => &self.calories,
        };
        Ok(samples
            .iter()
            .filter(|sample| sample.at >= from && sample.at < to)
            .cloned()
            .collect())
    }
}

/// One uniformly-random plausible value per day, anchored at `start`.
pub fn mock_series(metric: MetricKind, start: NaiveDate, days: u32) -> DailySeries {
    let mut rng = rand::thread_rng();
    (0..days)
        .map(|offset| {
            let value = match metric {
                MetricKind::StepCount => rng.gen_range(1000.0..=12000.0),
                MetricKind::ActiveEnergy => rng.gen_range(1200.0..=3600.0),
            };
            (start + Duration::days(i64::from(offset)), value)
        })
        .collect()
}

/// When to substitute generated data for a fetched series.
///
/// `ReplaceNonEmpty` reproduces the app's long-standing wiring: a fetch that
/// returned any keys is swapped for mock data, while an empty fetch is kept
/// as-is. That reads inverted next to `WhenEmpty`, so the choice is exposed
/// here instead of being hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockPolicy {
    #[default]
    ReplaceNonEmpty,
    WhenEmpty,
    Never,
}

impl MockPolicy {
    pub fn from_env() -> Self {
        match env::var("FITNESS_MOCK_POLICY").as_deref() {
            Ok("replace-non-empty") | Err(_) => MockPolicy::ReplaceNonEmpty,
            Ok("when-empty") => MockPolicy::WhenEmpty,
            Ok("never") => MockPolicy::Never,
            Ok(other) => {
                warn!("unknown FITNESS_MOCK_POLICY '{other}', using replace-non-empty");
                MockPolicy::ReplaceNonEmpty
            }
        }
    }

    /// Applies the policy to a fetched series for a 7-day window.
    pub fn apply(self, metric: MetricKind, window_start: NaiveDate, fetched: DailySeries) -> DailySeries {
        let substitute = match self {
            MockPolicy::ReplaceNonEmpty => !fetched.is_empty(),
            MockPolicy::WhenEmpty => fetched.is_empty(),
            MockPolicy::Never => false,
        };
        if substitute {
            mock_series(metric, window_start, 7)
        } else {
            fetched
        }
    }
}
