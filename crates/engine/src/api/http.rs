//! HTTP routes.

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use lotto_domain::{DrawRange, DrawResult};

use crate::api::views;
use crate::app::App;
use crate::use_cases::LottoError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/lotto", get(lotto_page))
        .route("/api/lotto", get(lotto_json))
}

async fn health() -> &'static str {
    "OK"
}

/// Query parameters for a draw. Missing bounds fall back to the configured range.
#[derive(Debug, Deserialize)]
struct DrawQuery {
    min: Option<i32>,
    max: Option<i32>,
}

impl DrawQuery {
    fn bounds(&self, defaults: DrawRange) -> (i32, i32) {
        (
            self.min.unwrap_or(defaults.min()),
            self.max.unwrap_or(defaults.max()),
        )
    }
}

fn draw(app: &App, query: &DrawQuery) -> Result<((i32, i32), DrawResult), ApiError> {
    let (min, max) = query.bounds(app.default_range);
    let result = app.use_cases.lotto.draw.classify(min, max)?;
    Ok(((min, max), result))
}

async fn lotto_page(
    State(app): State<Arc<App>>,
    Query(query): Query<DrawQuery>,
) -> Result<Html<String>, ApiError> {
    let ((min, max), result) = draw(&app, &query)?;
    Ok(Html(views::draw_page(min, max, &result)))
}

async fn lotto_json(
    State(app): State<Arc<App>>,
    Query(query): Query<DrawQuery>,
) -> Result<Json<DrawResult>, ApiError> {
    let (_, result) = draw(&app, &query)?;
    Ok(Json(result))
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}

impl From<LottoError> for ApiError {
    fn from(e: LottoError) -> Self {
        match e {
            LottoError::InvalidRange { .. } => ApiError::BadRequest(e.to_string()),
        }
    }
}
