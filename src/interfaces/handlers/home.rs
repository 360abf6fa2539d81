use actix_web::{HttpResponse, Responder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

pub async fn api_root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Portfolio API is running".to_string(),
    })
}
