use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<crate::config::Config>,
    pub contact_command: homeservice_contact::Command,
}

pub fn router(app_state: AppState) -> Router {
    let site = ServeDir::new(&app_state.config.site.root);

    Router::new()
        .route("/health", get(health::health))
        .route("/contact", post(contact::action).fallback(contact::denied))
        .route(
            "/contact.php",
            post(contact::action).fallback(contact::denied),
        )
        .fallback_service(site)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
