use std::{net::SocketAddr, str::FromStr};

use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{ip_sources, CityResponse, Jsonp, SORT_BY_HEADER, TOTAL_HEADER},
    app_state::AppState,
    domain::models::{CityId, CitySearchRequest, SortMode},
};

use super::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cities))
        .route("/:id", get(get_city))
}

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub name: Option<String>,
    pub country: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "client-ip")]
    pub client_ip: Option<String>,
    pub callback: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub callback: Option<String>,
}

#[instrument(name = "GET /city", skip(app_state, headers))]
async fn list_cities(
    State(app_state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Query(query): Query<CityQuery>,
) -> Result<Response, ApiError> {
    let peer = connect_info.map(|ConnectInfo(addr)| addr);

    let request = CitySearchRequest {
        name: query.name.unwrap_or_default(),
        country: query.country.unwrap_or_default(),
        sort: SortMode::from_query(query.sort.as_deref()),
        limit: app_state.limits.normalize(query.limit.as_deref()),
        ip_sources: ip_sources(query.client_ip, &headers, peer),
    };

    let list = app_state.city_service.search_cities(request).await?;
    if list.downgraded {
        match list.client_ip {
            Some(ip) => tracing::debug!("no location for {}, sorted by population", ip),
            None => tracing::debug!("no client address, sorted by population"),
        }
    }

    let total = list.cities.len().to_string();
    let sort_by = list.sort_mode.to_string();

    if list.cities.is_empty() {
        return Ok((
            StatusCode::NO_CONTENT,
            [(TOTAL_HEADER, total), (SORT_BY_HEADER, sort_by)],
        )
            .into_response());
    }

    let body: Vec<CityResponse> = list.cities.into_iter().map(Into::into).collect();

    Ok((
        [(TOTAL_HEADER, total), (SORT_BY_HEADER, sort_by)],
        Jsonp::new(query.callback.as_deref(), body),
    )
        .into_response())
}

#[instrument(name = "GET /city/:id", skip(app_state))]
async fn get_city(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<CallbackQuery>,
) -> Result<Jsonp<CityResponse>, ApiError> {
    let id = CityId::from_str(&id).map_err(|_| ApiError::not_found("City not found"))?;

    let city = app_state
        .city_service
        .city_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("City not found"))?;

    Ok(Jsonp::new(query.callback.as_deref(), city.into()))
}
