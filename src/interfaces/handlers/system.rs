use actix_web::{web, HttpResponse, Responder};
use humantime::format_duration;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::{constants::START_TIME, AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub uptime: String,
    pub timestamp: String,
    pub start_at: String,
    pub version: String,
    pub store: String,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    let store_status = match state.project_handler.check_store().await {
        Ok(()) => "OK",
        Err(e) => {
            warn!(error = %e, "Store health check failed");
            "Unavailable"
        }
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store_status.to_string(),
    })
}
