//! One-shot report: fetches the sheet once and prints the dashboard figures as JSON.

use std::env;
use std::sync::Arc;

use chrono::Local;
use dotenvy::dotenv;
use serde_json::json;

use pushkind_sales::aggregation::{analytics_summary, compute_metrics, rank_reps};
use pushkind_sales::feed::SalesFeed;
use pushkind_sales::models::config::load_server_config;
use pushkind_sales::source::HttpCsvSource;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = match load_server_config(&app_env) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let source = match HttpCsvSource::new(
        &server_config.sheet_url,
        server_config.request_timeout(),
    ) {
        Ok(source) => source,
        Err(err) => {
            log::error!("Error building sheet client: {err}");
            std::process::exit(1);
        }
    };

    let feed = SalesFeed::new(Arc::new(source));
    if let Err(err) = feed.refresh().await {
        log::error!("{err}");
        std::process::exit(1);
    }

    let records = feed.records();
    let report = json!({
        "generatedAt": Local::now().to_rfc3339(),
        "metrics": compute_metrics(&records),
        "analytics": analytics_summary(&records),
        "reps": rank_reps(&records),
    });

    match serde_json::to_string_pretty(&report) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            log::error!("Error rendering report: {err}");
            std::process::exit(1);
        }
    }
}
