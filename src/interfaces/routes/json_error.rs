use actix_web::web;

use crate::errors::AppError;

/// Malformed or incomplete JSON bodies surface as validation errors (422).
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::from(err).into()
    }));
}
