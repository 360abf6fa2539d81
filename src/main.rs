use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use portfolio_api::{
    constants::START_TIME,
    graceful_shutdown::shutdown_signal,
    middlewares::cors::build_cors,
    routes::configure_routes,
    settings::AppConfig,
    shared_repos::SharedRepositories,
    telemetry::init_tracing,
    AppState,
};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_tracing();
    Lazy::force(&START_TIME);

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if config.is_production() && config.allows_any_origin() {
        tracing::warn!("CORS accepts any origin in production");
    }

    let repos = match SharedRepositories::connect(&config).await {
        Ok(repos) => repos,
        Err(e) => {
            tracing::error!("Failed to initialise store: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState::new(repos));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting {} v{} on {} (store: {})",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr,
        config.store_backend
    );

    let cors_config = config.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_config))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    let handle = server.handle();
    tokio::pin!(server);

    tokio::select! {
        res = &mut server => res,
        _ = shutdown_signal() => {
            handle.stop(true).await;
            Ok(())
        }
    }
}
