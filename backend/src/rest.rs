//! Axum handlers for the calculator API.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shared::{CalculateRequest, DefaultBracketsResponse, ErrorResponse, TaxBracket};
use tracing::{info, warn};

use crate::domain::{presentation, Calculator, User};

/// Application state shared across handlers. Only immutable configuration
/// lives here; every calculation is per-request.
#[derive(Clone)]
pub struct AppState {
    pub default_brackets: Vec<TaxBracket>,
}

impl AppState {
    pub fn new(default_brackets: Vec<TaxBracket>) -> Self {
        Self { default_brackets }
    }
}

/// UK 2024/25 income tax bands, with the personal allowance modeled as a
/// zero-rate bottom bracket. Used to prefill the form.
pub fn default_uk_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket {
            lower_bound: 0.0,
            rate: 0.0,
        },
        TaxBracket {
            lower_bound: 12_570.0,
            rate: 0.20,
        },
        TaxBracket {
            lower_bound: 50_270.0,
            rate: 0.40,
        },
        TaxBracket {
            lower_bound: 125_140.0,
            rate: 0.45,
        },
    ]
}

/// Axum handler for POST /api/calculate
pub async fn calculate(Json(request): Json<CalculateRequest>) -> impl IntoResponse {
    info!(
        "POST /api/calculate - salary: {}, {} brackets, {} expenses",
        request.gross_salary,
        request.brackets.len(),
        request.expenses.len()
    );

    let user = match User::from_request(&request) {
        Ok(user) => user,
        Err(e) => {
            warn!("Invalid calculation input: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    match Calculator::new(&user).compute() {
        Ok(breakdown) => {
            let response = presentation::build_response(&breakdown);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Unusable tax bracket configuration: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Axum handler for GET /api/brackets/default
pub async fn default_brackets(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/brackets/default");
    Json(DefaultBracketsResponse {
        brackets: state.default_brackets.clone(),
    })
}
