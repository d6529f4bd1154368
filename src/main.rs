use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenvy::dotenv;

mod api;
mod config;
mod docs;
mod error;
mod model;
mod models;
mod routes;
mod store;
mod utils;
mod views;

use config::Config;
use store::LeaveStore;

use crate::utils::logging;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // keep the guard alive so buffered log lines are flushed on shutdown
    let _guard = logging::init(&config)?;

    info!("Server starting on {}...", config.server_addr);

    // one store for the whole process, shared by every worker
    let store = Data::new(LeaveStore::new());

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(store.clone())
            .configure(routes::configure_docs)
            .configure(routes::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind(&config.server_addr)?.run().await?;

    info!("Server stopped.");
    Ok(())
}
