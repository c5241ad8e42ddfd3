use crate::aggregate::aggregate;
use crate::models::{DailySeries, MetricKind};
use crate::provider::{HealthProvider, MockPolicy};
use crate::window::WeekWindow;
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Everything the app remembers between requests. Lifecycle:
/// init -> authorize -> active (fetch/navigate)* -> log_out -> init.
#[derive(Debug, Clone)]
pub struct Session {
    pub authorized: bool,
    pub window: WeekWindow,
    pub steps: DailySeries,
    pub calories: DailySeries,
    /// Bumped on every refresh and log-out. In-flight fetches carry the
    /// generation they were dispatched under and are discarded on completion
    /// if it no longer matches, so a slow fetch for an abandoned window can
    /// never overwrite a newer one.
    pub generation: u64,
}

impl Session {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            authorized: false,
            window: WeekWindow::current(today),
            steps: DailySeries::new(),
            calories: DailySeries::new(),
            generation: 0,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub provider: Arc<dyn HealthProvider>,
    pub mock_policy: MockPolicy,
}

impl AppState {
    pub fn new(provider: Arc<dyn HealthProvider>, mock_policy: MockPolicy) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new(Local::now().date_naive()))),
            provider,
            mock_policy,
        }
    }
}

/// Kicks off two independent fetches (steps, calories) for the session's
/// current window. The two may complete in either order; each assigns its own
/// series slot on completion and nothing coordinates them, so the chart may
/// briefly show one series stale or empty.
pub async fn refresh(state: &AppState) {
    let (generation, window) = {
        let mut session = state.session.lock().await;
        session.generation += 1;
        (session.generation, session.window)
    };
    info!(
        "refreshing week starting {} (generation {generation})",
        window.start()
    );
    spawn_fetch(state.clone(), MetricKind::StepCount, generation, window);
    spawn_fetch(state.clone(), MetricKind::ActiveEnergy, generation, window);
}

fn spawn_fetch(state: AppState, metric: MetricKind, generation: u64, window: WeekWindow) {
    tokio::spawn(async move {
        fetch_metric(&state, metric, generation, window).await;
    });
}

async fn fetch_metric(state: &AppState, metric: MetricKind, generation: u64, window: WeekWindow) {
    let fetched = aggregate(
        state.provider.as_ref(),
        metric,
        metric.default_unit(),
        window.start(),
        window.end_exclusive(),
    )
    .await;
    let series = state.mock_policy.apply(metric, window.start(), fetched);

    let mut session = state.session.lock().await;
    if session.generation != generation {
        warn!(
            "discarding stale {metric:?} fetch (generation {generation}, current {})",
            session.generation
        );
        return;
    }
    match metric {
        MetricKind::StepCount => session.steps = series,
        MetricKind::ActiveEnergy => session.calories = series,
    }
}

/// Clears both series, drops authorization and returns the window to the
/// current week. The generation bump orphans any in-flight fetches.
pub async fn log_out(state: &AppState) {
    let mut session = state.session.lock().await;
    session.authorized = false;
    session.steps.clear();
    session.calories.clear();
    session.window = WeekWindow::current(Local::now().date_naive());
    session.generation += 1;
    info!("logged out, session reset");
}
