//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use super::AppState;
use super::types::{
    CropRecord, EnvironmentRecord, ErrorResponse, MonthQuery, SeriesResponse, SummaryRecord,
};
use crate::sim::types::Month;

type BadRequest = (StatusCode, Json<ErrorResponse>);

/// Resolves the `month` query parameter, defaulting to January.
fn parse_month(query: &MonthQuery) -> Result<Month, BadRequest> {
    Month::new(query.month.unwrap_or(1)).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })
}

/// Returns the full crop catalog.
///
/// `GET /crops` → 200 + `Vec<CropRecord>` JSON
pub async fn get_crops(State(state): State<Arc<AppState>>) -> Json<Vec<CropRecord>> {
    let records = state
        .dashboard
        .sim()
        .crops()
        .iter()
        .map(CropRecord::from)
        .collect();
    Json(records)
}

/// Returns the twelve month labels for chart axes.
///
/// `GET /months` → 200 + `[&str; 12]` JSON
pub async fn get_months(State(state): State<Arc<AppState>>) -> Json<[&'static str; 12]> {
    Json(state.dashboard.month_names())
}

/// Returns the environmental reading for one month.
///
/// `GET /environment?month=N` → 200 + `EnvironmentRecord` JSON
/// `GET /environment?month=13` → 400 + `ErrorResponse`
pub async fn get_environment(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<EnvironmentRecord>, BadRequest> {
    let month = parse_month(&query)?;
    let sample = state.dashboard.sim().environmental_sample(month);
    Ok(Json(EnvironmentRecord::from(sample)))
}

/// Returns the production summary for one month.
///
/// `GET /production?month=N` → 200 + `SummaryRecord` JSON
pub async fn get_production(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<SummaryRecord>, BadRequest> {
    let month = parse_month(&query)?;
    let summary = state.dashboard.sim().production_summary(month);
    Ok(Json(SummaryRecord::from(summary)))
}

/// Returns the annual production aggregate (month 0).
///
/// `GET /production/annual` → 200 + `SummaryRecord` JSON
pub async fn get_annual_production(State(state): State<Arc<AppState>>) -> Json<SummaryRecord> {
    Json(SummaryRecord::from(
        state.dashboard.sim().annual_production_summary(),
    ))
}

/// Returns the monthly harvest series with its mean threshold.
///
/// `GET /series/harvest` → 200 + `SeriesResponse` JSON
pub async fn get_harvest_series(State(state): State<Arc<AppState>>) -> Json<SeriesResponse> {
    Json(SeriesResponse::new(state.dashboard.harvest_series()))
}

/// Returns the monthly cost series with its mean threshold.
///
/// `GET /series/costs` → 200 + `SeriesResponse` JSON
pub async fn get_cost_series(State(state): State<Arc<AppState>>) -> Json<SeriesResponse> {
    Json(SeriesResponse::new(state.dashboard.cost_series()))
}

/// Returns the monthly profit series with its mean threshold.
///
/// `GET /series/profits` → 200 + `SeriesResponse` JSON
pub async fn get_profit_series(State(state): State<Arc<AppState>>) -> Json<SeriesResponse> {
    Json(SeriesResponse::new(state.dashboard.profit_series()))
}

/// Returns the monthly water consumption series with its mean threshold.
///
/// `GET /series/water` → 200 + `SeriesResponse` JSON
pub async fn get_water_series(State(state): State<Arc<AppState>>) -> Json<SeriesResponse> {
    Json(SeriesResponse::new(
        *state.dashboard.sim().monthly_water_totals(),
    ))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::config::ScenarioConfig;
    use crate::reporting::Dashboard;
    use crate::sim::engine::Simulator;
    use crate::sim::rng::MidpointSource;

    fn make_test_state() -> Arc<AppState> {
        let cfg = ScenarioConfig::baseline();
        let sim = Arc::new(Simulator::with_source(&cfg, Box::new(MidpointSource)));
        Arc::new(AppState {
            dashboard: Dashboard::new(sim),
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = router(make_test_state());
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn crops_returns_the_full_catalog() {
        let (status, json) = get_json("/crops").await;
        assert_eq!(status, StatusCode::OK);
        let crops = json.as_array().unwrap();
        assert_eq!(crops.len(), 7);
        assert_eq!(crops[0]["name"], "Pomodoro");
        assert_eq!(crops[0]["unitPrice"], 2.0);
        assert_eq!(crops[0]["monthlyHarvest"].as_array().unwrap().len(), 12);
        assert_eq!(crops[0]["monthlyCost"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn months_returns_twelve_labels() {
        let (status, json) = get_json("/months").await;
        assert_eq!(status, StatusCode::OK);
        let months = json.as_array().unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], "Jan");
        assert_eq!(months[11], "Dec");
    }

    #[tokio::test]
    async fn environment_defaults_to_january() {
        let (status, json) = get_json("/environment").await;
        assert_eq!(status, StatusCode::OK);
        // MidpointSource returns the configured means.
        assert_eq!(json["temperature"], 18.0);
        assert_eq!(json["relativeHumidity"], 55.0);
        assert_eq!(json["precipitation"], 80.0);
        assert_eq!(json["windSpeed"], 3.0);
        assert_eq!(json["luminosity"], 20000.0);
    }

    #[tokio::test]
    async fn environment_rejects_month_13() {
        let (status, json) = get_json("/environment?month=13").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn production_for_january_is_closed_form() {
        let (status, json) = get_json("/production?month=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["month"], 1);
        // Midpoint base 60 and January weights 0.2 + 0.3 + 0.1.
        assert_eq!(json["quantity"], 36.0);
    }

    #[tokio::test]
    async fn annual_production_uses_month_zero() {
        let (status, json) = get_json("/production/annual").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["month"], 0);
        assert!(json["quantity"].as_f64().unwrap() > 0.0);
        assert!(json.get("waterConsumption").is_some());
    }

    #[tokio::test]
    async fn series_carry_values_and_average() {
        for uri in [
            "/series/harvest",
            "/series/costs",
            "/series/profits",
            "/series/water",
        ] {
            let (status, json) = get_json(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(json["values"].as_array().unwrap().len(), 12, "{uri}");
            assert!(json.get("average").is_some(), "{uri}");
        }
    }

    #[tokio::test]
    async fn profit_series_agrees_with_monthly_summaries() {
        let (_, profits) = get_json("/series/profits").await;
        let (_, june) = get_json("/production?month=6").await;
        assert_eq!(profits["values"][5], june["profit"]);
    }
}
