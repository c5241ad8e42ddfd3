use crate::chart::{render, CHART_HEIGHT};
use crate::errors::AppError;
use crate::models::{AuthResponse, WeekResponse};
use crate::session::{self, AppState, Session};
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::Local;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(session.authorized))
}

pub async fn authorize(State(state): State<AppState>) -> Result<Json<AuthResponse>, AppError> {
    let granted = state.provider.request_authorization().await;
    if granted {
        state.session.lock().await.authorized = true;
        info!("health data read access granted");
        session::refresh(&state).await;
    } else {
        info!("health data read access denied");
    }
    Ok(Json(AuthResponse { authorized: granted }))
}

pub async fn log_out(State(state): State<AppState>) -> Result<Json<AuthResponse>, AppError> {
    session::log_out(&state).await;
    Ok(Json(AuthResponse { authorized: false }))
}

pub async fn get_week(State(state): State<AppState>) -> Result<Json<WeekResponse>, AppError> {
    let session = state.session.lock().await;
    ensure_authorized(&session)?;
    Ok(Json(week_response(&session)))
}

pub async fn previous_week(State(state): State<AppState>) -> Result<Json<WeekResponse>, AppError> {
    {
        let mut session = state.session.lock().await;
        ensure_authorized(&session)?;
        session.window = session.window.previous();
        // Series for the old window are discarded outright, no reuse.
        session.steps.clear();
        session.calories.clear();
    }
    session::refresh(&state).await;

    let session = state.session.lock().await;
    let mut response = week_response(&session);
    response.moved = Some(true);
    Ok(Json(response))
}

pub async fn next_week(State(state): State<AppState>) -> Result<Json<WeekResponse>, AppError> {
    let today = Local::now().date_naive();
    let moved = {
        let mut session = state.session.lock().await;
        ensure_authorized(&session)?;
        match session.window.next(today) {
            Some(window) => {
                session.window = window;
                session.steps.clear();
                session.calories.clear();
                true
            }
            // At the boundary of today's week: leave the window unchanged
            // and report the action as unavailable.
            None => false,
        }
    };
    if moved {
        session::refresh(&state).await;
    }

    let session = state.session.lock().await;
    let mut response = week_response(&session);
    response.moved = Some(moved);
    Ok(Json(response))
}

fn ensure_authorized(session: &Session) -> Result<(), AppError> {
    if session.authorized {
        Ok(())
    } else {
        Err(AppError::unauthorized("authorize health data access first"))
    }
}

fn week_response(session: &Session) -> WeekResponse {
    let today = Local::now().date_naive();
    WeekResponse {
        start_date: session.window.start(),
        end_date: session.window.last_day(),
        next_disabled: session.window.next_disabled(today),
        moved: None,
        steps: session.steps.clone(),
        calories: session.calories.clone(),
        chart: render(&session.steps, &session.calories, CHART_HEIGHT),
    }
}
