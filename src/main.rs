use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;

use crate::config::app_config::AppConfig;
use crate::logger::init_logger;
use crate::services::github_client::GitHubClient;
use crate::services::repository_service::RepositoryService;

mod app;
mod config;
mod errors;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = AppConfig::from_env().context("Configuración inválida")?;
    log::info!(
        "GitHub base_url={}, token={}, branch_concurrency={}",
        config.github.base_url,
        if config.github.token.is_some() { "sí" } else { "no" },
        config.github.branch_concurrency
    );

    let github_client = GitHubClient::new(&config.github)?;
    let repository_service =
        RepositoryService::new(github_client, config.github.branch_concurrency);

    let bind_addr = (config.server.host.clone(), config.server.port);
    log::info!("Levantando servidor en {}:{}", bind_addr.0, bind_addr.1);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repository_service.clone()))
            .configure(app::init_app)
    });
    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server
        .bind(bind_addr)
        .context("No se pudo hacer bind del servidor")?
        .run()
        .await
        .context("El servidor terminó con error")
}
