use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::HeaderMap,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{ip_sources, IpCityResponse, Jsonp},
    app_state::AppState,
};

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(city_by_ip))
}

#[derive(Debug, Deserialize)]
pub struct IpQuery {
    pub ip: Option<String>,
    pub callback: Option<String>,
}

#[instrument(name = "GET /ip", skip(app_state, headers))]
async fn city_by_ip(
    State(app_state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Query(query): Query<IpQuery>,
) -> Result<Jsonp<IpCityResponse>, ApiError> {
    let peer = connect_info.map(|ConnectInfo(addr)| addr);
    let sources = ip_sources(query.ip, &headers, peer);

    let found = app_state
        .city_service
        .city_by_ip(sources)
        .await?
        .ok_or_else(|| ApiError::not_found("City not found"))?;

    Ok(Jsonp::new(query.callback.as_deref(), found.into()))
}
