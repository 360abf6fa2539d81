use actix_web::web;

use crate::handlers::contact;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact")
            .route(web::post().to(contact::submit_contact_message))
            .route(web::get().to(contact::get_contact_messages))
    );
}
