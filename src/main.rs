use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use weimood::clients::completion::CompletionClient;
use weimood::clients::email::EmailClient;
use weimood::clients::google::GoogleVerifier;
use weimood::config::AppConfig;
use weimood::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    weimood::middleware::init_tracing("weimood");

    let config = AppConfig::load()?;
    let port = config.port;

    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let db = Pool::builder().max_size(10).build(manager)?;

    let email = EmailClient::new(&config.resend_api_key, &config.from_email, "WeiMood");
    let google = GoogleVerifier::new(&config.google_client_id);
    let completion = CompletionClient::new(
        &config.completion_base_url,
        &config.completion_api_key,
        &config.completion_model,
        config.completion_timeout_secs,
    );

    let state = Arc::new(AppState { db, config, email, google, completion });
    let app = weimood::app(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(addr = %addr, "weimood starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
