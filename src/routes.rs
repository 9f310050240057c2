use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::auth::auth_middleware;
use crate::state::AppState;

/// Builds the gateway router. Routes behind the auth middleware require a
/// bearer credential accepted by the identity service; everything else is
/// public.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .merge(auth_user_routes())
        .merge(mood_routes())
        .merge(advice_routes())
        .merge(quote_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health))
        .merge(auth_public_routes())
        .merge(protected)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

fn auth_user_routes() -> Router<AppState> {
    Router::new().route(
        "/auth/user",
        get(handlers::auth::get_user)
            .put(handlers::auth::update_user)
            .delete(handlers::auth::delete_user),
    )
}

fn mood_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/mood",
            post(handlers::mood::add_mood)
                .get(handlers::mood::get_moods)
                .put(handlers::mood::update_mood),
        )
        .route("/mood/types", get(handlers::mood::get_mood_types))
        .route("/mood/summary", get(handlers::mood::get_mood_summary))
        .route(
            "/mood/:id",
            get(handlers::mood::get_mood).delete(handlers::mood::delete_mood),
        )
}

fn advice_routes() -> Router<AppState> {
    Router::new().route("/advice", get(handlers::advice::get_advice))
}

fn quote_routes() -> Router<AppState> {
    Router::new().route("/quote/today", get(handlers::quote::get_today_quote))
}

async fn health() -> &'static str {
    "OK"
}
