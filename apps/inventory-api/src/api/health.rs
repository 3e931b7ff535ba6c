//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;
use serde_json::Value;
use std::time::Duration;

use crate::state::AppState;

/// Longest `/ready` waits on the MongoDB ping
pub const READY_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// 200 while MongoDB answers a ping in time, 503 otherwise
async fn readiness_check(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let mongodb: HealthCheckFuture<'_> = Box::pin(async {
        let Ok(status) =
            tokio::time::timeout(READY_CHECK_TIMEOUT, check_health_detailed(&state.db)).await
        else {
            return Err(format!("ping timed out after {:?}", READY_CHECK_TIMEOUT));
        };
        tracing::debug!(
            healthy = status.healthy,
            response_time_ms = status.response_time_ms,
            "MongoDB ping"
        );
        if status.healthy {
            Ok(())
        } else {
            Err(status.message.unwrap_or_else(|| "ping failed".to_string()))
        }
    });

    run_health_checks(vec![("mongodb", mongodb)]).await
}
