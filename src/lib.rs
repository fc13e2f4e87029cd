use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod clients;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod schema;
pub mod services;
pub mod types;

use clients::completion::CompletionClient;
use clients::email::EmailClient;
use clients::google::GoogleVerifier;
use config::AppConfig;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

pub struct AppState {
    pub db: DbPool,
    pub config: AppConfig,
    pub email: EmailClient,
    pub google: GoogleVerifier,
    pub completion: CompletionClient,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/register", post(routes::register::register))
        .route("/login", post(routes::login::login))
        .route("/google", post(routes::oauth::google_login))
        .route("/logout", post(routes::logout::logout))
        .route("/auth/me", get(routes::me::me))
        .route("/verify", post(routes::verify::verify_code))
        .route("/verify/send", post(routes::verify::send_verification))
        .route(
            "/profile",
            post(routes::profile::create_profile)
                .get(routes::profile::get_profile)
                .put(routes::profile::update_profile)
                .delete(routes::profile::delete_profile),
        )
        .route(
            "/moods",
            get(routes::moods::get_moods).post(routes::moods::create_mood),
        )
        .route(
            "/chat",
            get(routes::chat::get_history).post(routes::chat::save_chat),
        )
        .route(
            "/chat/:id",
            get(routes::chat::get_detail).delete(routes::chat::delete_chat),
        )
        .route("/ai", post(routes::generate::generate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
