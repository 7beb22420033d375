use std::sync::Arc;

use crate::{config::LimitSettings, domain::ports::inbound::CityLookupService};

#[derive(Clone)]
pub struct AppState {
    pub city_service: Arc<dyn CityLookupService>,
    pub limits: LimitSettings,
}

impl AppState {
    pub fn new(city_service: Arc<dyn CityLookupService>, limits: LimitSettings) -> Self {
        Self {
            city_service,
            limits,
        }
    }
}
