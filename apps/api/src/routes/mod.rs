pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::cors::origin_guard;
use crate::errors::AppError;
use crate::facts::handlers::handle_facts;
use crate::state::AppState;
use crate::words::handlers::handle_random_words;

async fn method_not_allowed() -> Result<(), AppError> {
    Err(AppError::MethodNotAllowed)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler).fallback(method_not_allowed))
        .route(
            "/health",
            get(health::health_handler).fallback(method_not_allowed),
        )
        .route("/facts", post(handle_facts).fallback(method_not_allowed))
        .route(
            "/random-words",
            get(handle_random_words).fallback(method_not_allowed),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            origin_guard,
        ))
        .with_state(state)
}
