use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/static/index.html", get(handlers::index))
        .route("/signup", post(handlers::signup_form))
        .route("/remove", post(handlers::remove_form))
        .route("/activities", get(handlers::get_activities))
        .route("/activities/:activity_name/signup", post(handlers::signup))
        .route(
            "/activities/:activity_name/participants/:email",
            delete(handlers::remove_participant),
        )
        .with_state(state)
}
