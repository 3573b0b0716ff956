use crate::error::ErrorBody;
use crate::handlers::{
    add_exercise_handler, calculate_handler, conversion_options_handler, convert_handler,
    create_user_handler, exercise_log_handler, fallback_handler, file_analyse_handler,
    health_handler, hello_handler, list_users_handler, method_not_allowed_handler, now_handler,
    redirect_handler, shorten_handler, timestamp_handler, whoami_handler,
};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/api/", get(now_handler))
            .nest("/api", Self::api())
            .route("/file-metadata/api/fileanalyse", post(file_analyse_handler))
            .method_not_allowed_fallback(method_not_allowed_handler)
            .fallback(fallback_handler)
            .with_state(state)
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    fn api() -> Router<AppState> {
        Router::new()
            .route("/", get(now_handler))
            .route("/hello", get(hello_handler))
            .route("/whoami", get(whoami_handler))
            .route("/timestamp", get(now_handler))
            .route("/timestamp/", get(now_handler))
            .route("/timestamp/{date}", get(timestamp_handler))
            .route("/shorturl", post(shorten_handler))
            .route("/shorturl/new", post(shorten_handler))
            .route("/shorturl/{id}", get(redirect_handler))
            .route("/users", get(list_users_handler).post(create_user_handler))
            .route("/users/{id}/exercises", post(add_exercise_handler))
            .route("/users/{id}/logs", get(exercise_log_handler))
            .route("/convert", post(convert_handler))
            .route("/conversion-options", get(conversion_options_handler))
            .route("/calculate", post(calculate_handler))
            .route("/fileanalyse", post(file_analyse_handler))
            // Static segments above take precedence over this capture.
            .route("/{date}", get(timestamp_handler))
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new("internal server error")),
    )
        .into_response()
}
