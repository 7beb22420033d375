use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{
        parse_ipv4, CityId, CityList, CitySearchRequest, EnrichedCity, IpCity, IpSources,
        LookupContext, SearchOrder,
    },
    ports::{
        inbound::CityLookupService,
        outbound::{
            AdminAreaRepository, CitySearch, CitySearchBackend, CountryRepository, GeoLocator,
            NameSearch,
        },
    },
    services::{
        join_admin_names, rank_by_country, resolve_country_codes, select_last, select_sort_mode,
    },
    CityLookupError,
};

/// Implementation of the CityLookupService inbound port.
///
/// Holds only the outbound ports. Everything resolved for a request stays in
/// that request's `LookupContext`.
pub struct CityLookupServiceImpl<S, C, A, G> {
    search: Arc<S>,
    countries: Arc<C>,
    admin_areas: Arc<A>,
    locator: Arc<G>,
}

impl<S, C, A, G> CityLookupServiceImpl<S, C, A, G> {
    pub fn new(search: Arc<S>, countries: Arc<C>, admin_areas: Arc<A>, locator: Arc<G>) -> Self {
        Self {
            search,
            countries,
            admin_areas,
            locator,
        }
    }
}

impl<S, C, A, G> CityLookupServiceImpl<S, C, A, G>
where
    S: CitySearchBackend,
    A: AdminAreaRepository,
{
    /// Run a search that answers with a single city and enrich it.
    async fn single_city(
        &self,
        search: CitySearch,
        country_codes: &[String],
    ) -> Result<Option<EnrichedCity>, CityLookupError> {
        let batch = self.search.search(&search).await?;

        let Some(selected) = select_last(rank_by_country(batch.candidates, country_codes)) else {
            return Ok(None);
        };

        let mut enriched =
            join_admin_names(self.admin_areas.as_ref(), vec![selected], &batch.admin1_codes)
                .await?;

        Ok(enriched.pop())
    }
}

#[async_trait]
impl<S, C, A, G> CityLookupService for CityLookupServiceImpl<S, C, A, G>
where
    S: CitySearchBackend,
    C: CountryRepository,
    A: AdminAreaRepository,
    G: GeoLocator,
{
    async fn search_cities(&self, request: CitySearchRequest) -> Result<CityList, CityLookupError> {
        let country_filter = request.country.trim();

        let country_codes = if country_filter.is_empty() {
            Vec::new()
        } else {
            let countries = self.countries.all_countries().await?;
            let codes = resolve_country_codes(&countries, country_filter);
            if codes.is_empty() {
                tracing::debug!("no country matches '{}'", country_filter);
                return Ok(CityList::empty(request.sort));
            }
            codes
        };

        let sort = select_sort_mode(request.sort, &request.ip_sources, self.locator.as_ref())?;

        let context = LookupContext {
            country_codes,
            sort,
        };

        let search = CitySearch::ByName(NameSearch {
            name: request.name.trim().to_string(),
            country_codes: context.country_codes.clone(),
            order: context.sort.order,
            limit: request.limit,
        });

        let batch = self.search.search(&search).await?;
        if batch.is_empty() {
            return Ok(CityList {
                cities: Vec::new(),
                sort_mode: context.sort.mode(),
                downgraded: context.sort.downgraded,
                client_ip: context.sort.client_ip,
            });
        }

        let ranked = rank_by_country(batch.candidates, &context.country_codes);
        let cities =
            join_admin_names(self.admin_areas.as_ref(), ranked, &batch.admin1_codes).await?;

        Ok(CityList {
            cities,
            sort_mode: context.sort.mode(),
            downgraded: context.sort.downgraded,
            client_ip: context.sort.client_ip,
        })
    }

    async fn city_by_id(&self, id: CityId) -> Result<Option<EnrichedCity>, CityLookupError> {
        self.single_city(CitySearch::ById(id), &[]).await
    }

    async fn city_by_ip(&self, sources: IpSources) -> Result<Option<IpCity>, CityLookupError> {
        let ip = sources
            .explicit_or_inferred()
            .and_then(parse_ipv4)
            .ok_or(CityLookupError::UndeterminedClientIp)?;

        let Some(location) = self.locator.locate(ip)? else {
            tracing::debug!("no location for {}", ip);
            return Ok(None);
        };
        let Some(city_name) = location.city_name else {
            tracing::debug!("location for {} has no city", ip);
            return Ok(None);
        };

        let country_codes: Vec<String> = location.country_code.into_iter().collect();
        let search = CitySearch::ByName(NameSearch {
            name: city_name,
            country_codes: country_codes.clone(),
            order: SearchOrder::Proximity(location.point),
            limit: 1,
        });

        let city = self.single_city(search, &country_codes).await?;

        Ok(city.map(|city| IpCity { city, ip }))
    }
}
