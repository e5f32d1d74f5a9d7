use axum::Json;
use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{Html, IntoResponse};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};

use crate::core::logic::Core;
use crate::core::calculator::summary::summarize;
use crate::errors::AppResult;
use crate::export::{DOWNLOAD_FILE_NAME, EventExport, csv_bytes};
use crate::models::{SlotStatus, Summary};
use crate::web::page;
use crate::web::query::DashboardQuery;
use crate::web::state::AppState;

type RawQuery = Query<Vec<(String, String)>>;

#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub summary: Summary,
    pub events: Vec<EventExport>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub date: Option<NaiveDate>,
    pub source_id: Option<String>,
    pub slots: Vec<SlotStatus>,
}

/// GET /: the dashboard page. Every request is a full fetch-and-aggregate pass.
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(pairs): RawQuery,
) -> AppResult<Html<String>> {
    let query = DashboardQuery::from_pairs(pairs);
    let filter = query.filter()?;
    let accepted = query.accepted_statuses()?;

    let dashboard = {
        let accepted = accepted.clone();
        state
            .with_store(move |store| Core::build_dashboard(store, &filter, &accepted))
            .await?
    };

    Ok(Html(page::render_dashboard(&dashboard, &accepted)))
}

/// GET /export.csv: the fetched events, before aggregation.
pub async fn export_csv(
    State(state): State<AppState>,
    Query(pairs): RawQuery,
) -> AppResult<impl IntoResponse> {
    let filter = DashboardQuery::from_pairs(pairs).filter()?;
    let events = state
        .with_store(move |store| store.fetch_events(&filter))
        .await?;
    let body = csv_bytes(&events)?;

    tracing::info!(rows = events.len(), "csv export served");

    Ok((
        [
            (CONTENT_TYPE, "text/csv".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\""),
            ),
        ],
        body,
    ))
}

/// GET /api/sources
pub async fn api_sources(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let sources = state.with_store(|store| store.fetch_sources()).await?;
    Ok(Json(sources))
}

/// GET /api/events
pub async fn api_events(
    State(state): State<AppState>,
    Query(pairs): RawQuery,
) -> AppResult<Json<EventsResponse>> {
    let filter = DashboardQuery::from_pairs(pairs).filter()?;
    let events = state
        .with_store(move |store| store.fetch_events(&filter))
        .await?;

    Ok(Json(EventsResponse {
        summary: summarize(&events),
        events: events.iter().map(EventExport::from).collect(),
    }))
}

/// GET /api/calendar
pub async fn api_calendar(
    State(state): State<AppState>,
    Query(pairs): RawQuery,
) -> AppResult<Json<CalendarResponse>> {
    let query = DashboardQuery::from_pairs(pairs);
    let filter = query.filter()?;
    let accepted = query.accepted_statuses()?;

    let (date, source_id) = (filter.date, filter.source_id.clone());
    let events = state
        .with_store(move |store| store.fetch_events(&filter))
        .await?;

    Ok(Json(CalendarResponse {
        date,
        source_id,
        slots: Core::build_calendar(&events, &accepted),
    }))
}

/// GET /health: liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
