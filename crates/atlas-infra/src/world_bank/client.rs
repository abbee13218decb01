use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use atlas_core::config::AppConfig;
use atlas_core::ports::{CountryListingPort, FetchError, Indicator, IndicatorPort};
use atlas_core::{ListingRecord, ProviderCode};

use super::dto::{self, CountryRow, IndicatorResponse, ListingResponse};
use super::error::{map_status_code, map_transport_error, ClientBuildError};

/// Settings the World Bank adapter needs, extracted from [`AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldBankSettings {
    pub base_url: String,
    pub listing_page_size: u32,
    pub indicator_year: u16,
    pub population_indicator: String,
    pub gdp_indicator: String,
    pub request_timeout: Duration,
}

impl WorldBankSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.provider.base_url.clone(),
            listing_page_size: config.provider.listing_page_size,
            indicator_year: config.enrichment.indicator_year,
            population_indicator: config.enrichment.population_indicator.clone(),
            gdp_indicator: config.enrichment.gdp_indicator.clone(),
            request_timeout: Duration::from_secs(config.provider.request_timeout_secs),
        }
    }
}

/// HTTP client for the World Bank open data API.
///
/// One instance serves all concurrent lookups; `reqwest::Client` pools
/// connections internally.
#[derive(Debug, Clone)]
pub struct WorldBankClient {
    http: reqwest::Client,
    base_url: String,
    settings: WorldBankSettings,
}

impl WorldBankClient {
    pub fn new(settings: WorldBankSettings) -> Result<Self, ClientBuildError> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|source| ClientBuildError::InvalidBaseUrl {
            url: settings.base_url.clone(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .user_agent(concat!("world-atlas/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            settings,
        })
    }

    fn indicator_id(&self, indicator: Indicator) -> &str {
        match indicator {
            Indicator::Population => &self.settings.population_indicator,
            Indicator::Gdp => &self.settings.gdp_indicator,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| FetchError::InvalidKey(format!("{path}: {e}")))
    }

    pub(crate) fn listing_url(&self) -> Result<Url, FetchError> {
        let mut url = self.endpoint("country")?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("per_page", &self.settings.listing_page_size.to_string());
        Ok(url)
    }

    pub(crate) fn indicator_url(
        &self,
        code: &ProviderCode,
        indicator: Indicator,
    ) -> Result<Url, FetchError> {
        let key = code.lookup_key()?;
        let mut url = self.endpoint(&format!(
            "country/{key}/indicator/{}",
            self.indicator_id(indicator)
        ))?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("per_page", "1")
            .append_pair("date", &self.settings.indicator_year.to_string());
        Ok(url)
    }

    async fn get_json<T>(&self, url: Url) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        debug!(%url, "GET");
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_status_code(status));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        dto::decode(&body)
    }
}

#[async_trait]
impl CountryListingPort for WorldBankClient {
    async fn fetch_listing(&self) -> Result<Vec<ListingRecord>, FetchError> {
        let url = self.listing_url()?;
        let (meta, rows): ListingResponse = self.get_json(url).await?;

        debug!(
            page = meta.page,
            pages = meta.pages,
            per_page = meta.per_page.value(),
            total = meta.total,
            rows = rows.len(),
            "Country listing received"
        );
        if meta.pages > 1 {
            warn!(
                pages = meta.pages,
                total = meta.total,
                "Country listing spans several pages; only the first one is used"
            );
        }

        Ok(rows.into_iter().map(CountryRow::into_record).collect())
    }
}

#[async_trait]
impl IndicatorPort for WorldBankClient {
    async fn fetch_indicator(
        &self,
        code: &ProviderCode,
        indicator: Indicator,
    ) -> Result<Option<f64>, FetchError> {
        let url = self.indicator_url(code, indicator)?;
        let (_meta, points): IndicatorResponse = self.get_json(url).await?;

        Ok(points
            .and_then(|points| points.into_iter().next())
            .and_then(|point| point.numeric_value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> WorldBankClient {
        let mut config = AppConfig::with_defaults();
        config.provider.base_url = base_url.to_string();
        WorldBankClient::new(WorldBankSettings::from_config(&config)).unwrap()
    }

    #[test]
    fn listing_url_requests_one_large_page() {
        let url = client("https://api.worldbank.org/v2/").listing_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.worldbank.org/v2/country?format=json&per_page=400"
        );
    }

    #[test]
    fn indicator_url_targets_code_indicator_and_year() {
        let url = client("https://api.worldbank.org/v2")
            .indicator_url(&"US".into(), Indicator::Gdp)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.worldbank.org/v2/country/US/indicator/NY.GDP.MKTP.CD?format=json&per_page=1&date=2022"
        );
    }

    #[test]
    fn indicator_url_rejects_malformed_code() {
        let err = client("https://api.worldbank.org/v2")
            .indicator_url(&"U/S".into(), Indicator::Population)
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidKey(_)));
    }

    #[test]
    fn invalid_base_url_fails_construction() {
        let mut config = AppConfig::with_defaults();
        config.provider.base_url = "not a url".to_string();
        let err = WorldBankClient::new(WorldBankSettings::from_config(&config)).unwrap_err();
        assert!(matches!(err, ClientBuildError::InvalidBaseUrl { .. }));
    }
}
