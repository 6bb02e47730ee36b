pub mod config;
pub mod error;
pub mod mail;
pub mod pagination;
pub mod render;
pub mod session;
pub mod state;
pub mod storage;
pub mod upload;
pub mod web;

use std::env;

use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

use config::Config;
use mail::Mailer;
use state::AppState;

pub async fn run() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_env_filter(EnvFilter::from_env("MINIPRESS_LOG"))
        .init();

    let config = Config::load(config_path()).expect("Failed to load config file");

    let pool = storage::new_db_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let mailer = config
        .mail
        .as_ref()
        .map(Mailer::from_config)
        .transpose()
        .expect("Invalid [mail] config");

    let app = AppState::new(pool, config, mailer);

    web::run_server(app).await
}

fn config_path() -> String {
    env::var("MINIPRESS_CONFIG").unwrap_or_else(|_| "config.toml".to_string())
}
