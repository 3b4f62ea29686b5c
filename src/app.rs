use std::sync::Arc;

use crate::{
    config::Settings,
    handlers::{health, leaderboard},
    repositories::{self, leaderboard::LeaderboardDao, LeaderboardStore},
    services::leaderboard::LeaderboardSrv,
};
use actix_web::{http::header, middleware, web, App, HttpServer};
use anyhow::Context;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    health::route(cfg);
    leaderboard::route(cfg);
}

/// Permissive CORS on every response, errors and 404s included.
pub fn cors_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}

pub async fn create_app() -> anyhow::Result<()> {
    let settings = Settings::from_env().context("invalid configuration")?;

    // Init DB
    let target = settings.database_target();
    log::info!("database {}", target.redacted());
    let db = Arc::new(repositories::create_pool(&target)?);
    let leaderboard_dao = LeaderboardDao::new(db.clone());
    leaderboard_dao
        .ensure_schema()
        .await
        .context("ensure leaderboard table")?;

    match leaderboard_dao.count_rows().await {
        Ok(n) => log::info!("leaderboard table has {} row(s)", n),
        Err(err) => log::warn!("leaderboard row count: {:#}", err),
    }

    let leaderboard_store: Arc<dyn LeaderboardStore> = Arc::new(leaderboard_dao);
    let leaderboard_service = web::Data::new(LeaderboardSrv::new(leaderboard_store));

    let listen_address = settings.listen_address();

    log::info!("API server listening on {}", listen_address);

    HttpServer::new(move || {
        App::new()
            .app_data(leaderboard_service.clone())
            .wrap(cors_headers())
            .wrap(middleware::Logger::default())
            .configure(init_routes)
    })
    .bind(&listen_address)
    .with_context(|| format!("failed to bind {listen_address}"))?
    .run()
    .await
    .context("HTTP server stopped")?;

    Ok(())
}
