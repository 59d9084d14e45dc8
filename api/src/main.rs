use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use lend_api::{app, middleware};
use lend_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    info!(environment = %config.environment, "starting lendify api");

    let pool = lend_infra::create_pool(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("database pool initialization failed: {}", e))?;
    let state = web::Data::new(app::AppState::new(pool));

    let bind_address = config.server.bind_address();
    info!(%bind_address, "server binding");

    let environment = config.environment;
    let workers = config.server.workers;

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .wrap(middleware::cors::create_cors(environment))
            .configure(app::configure)
            .default_service(web::route().to(app::not_found))
    })
    .bind(&bind_address)?;

    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await?;
    Ok(())
}
