#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::feed::SalesFeed;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::settings_client::{SettingsClient, SettingsGateway};
#[cfg(feature = "server")]
use crate::source::HttpCsvSource;

#[cfg(feature = "data")]
pub mod aggregation;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod filter;
#[cfg(feature = "data")]
pub mod parser;
#[cfg(feature = "data")]
pub mod time_range;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod feed;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(all(test, feature = "server", feature = "test-mocks"))]
pub mod mock;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod settings_client;
#[cfg(feature = "server")]
pub mod source;

/// Starts the sheet refresh and runs the Actix-Web HTTP server until shutdown.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let source = HttpCsvSource::new(&server_config.sheet_url, server_config.request_timeout())
        .map_err(|e| std::io::Error::other(format!("Failed to build sheet client: {e}")))?;
    let feed = Arc::new(SalesFeed::new(Arc::new(source)));

    let settings_client = SettingsClient::new(
        &server_config.settings_url,
        &server_config.settings_api_key,
        server_config.request_timeout(),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build settings client: {e}")))?;
    let gateway: Arc<dyn SettingsGateway> = Arc::new(settings_client);

    // Keeps the timer alive for the lifetime of the server.
    let refresh = feed.spawn_refresh(server_config.refresh_interval());

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving sales data from {} on {}:{}",
        server_config.sheet_url,
        bind_address.0,
        bind_address.1
    );

    let feed_data = web::Data::from(feed);
    let gateway_data = web::Data::from(gateway);

    let result = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(feed_data.clone())
            .app_data(gateway_data.clone())
            .app_data(web::Data::new(server_config.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await;

    refresh.stop();
    result
}
