use actix_web::web;

use crate::handlers::home::api_root;

mod contact;
mod json_error;
mod projects;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::resource("")
                    .route(web::get().to(api_root))
            )
            .configure(system::config_routes)
            .configure(projects::config_routes)
            .configure(contact::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
