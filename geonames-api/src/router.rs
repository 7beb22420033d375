use axum::{
    http::{HeaderName, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{
    adapters::inbound::http::{SORT_BY_HEADER, TOTAL_HEADER},
    app_state::AppState,
    routes,
};

pub fn create(app_state: AppState) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any)
        .expose_headers([
            HeaderName::from_static(SORT_BY_HEADER),
            HeaderName::from_static(TOTAL_HEADER),
        ]);

    Router::new()
        .route("/", get(|| async { "Geonames city lookup" }))
        .nest("/city", routes::city::router())
        .nest("/ip", routes::ip::router())
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
