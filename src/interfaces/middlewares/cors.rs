use actix_cors::Cors;

use crate::settings::AppConfig;

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Builds the CORS policy. A `*` entry opens every origin, method and header.
pub fn build_cors(config: &AppConfig) -> Cors {
    let base = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(PREFLIGHT_MAX_AGE_SECS);

    if config.allows_any_origin() {
        return base.allow_any_origin();
    }

    config
        .cors_origins()
        .iter()
        .fold(base, |cors, origin| cors.allowed_origin(origin))
}
