use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, debug_span, Instrument};

use atlas_core::ports::{Indicator, IndicatorPort};
use atlas_core::{DetailRecord, ProviderCode};

/// Fetch population and GDP for one country.
/// 获取单个国家的人口与 GDP。
///
/// Both lookups run concurrently. Each one is bounded by `lookup_timeout`
/// and degrades to an absent value on any failure, so a problem with one
/// attribute never affects the other and `execute` itself cannot fail.
pub struct FetchEntityDetail {
    indicators: Arc<dyn IndicatorPort>,
    lookup_timeout: Duration,
}

impl FetchEntityDetail {
    pub fn new(indicators: Arc<dyn IndicatorPort>, lookup_timeout: Duration) -> Self {
        Self {
            indicators,
            lookup_timeout,
        }
    }

    pub async fn execute(&self, code: ProviderCode) -> DetailRecord {
        let span = debug_span!("usecase.fetch_entity_detail.execute", code = %code);

        async move {
            let (population, gdp) = tokio::join!(
                self.lookup(&code, Indicator::Population),
                self.lookup(&code, Indicator::Gdp),
            );

            DetailRecord::new(
                code,
                population.and_then(population_from_value),
                gdp.and_then(gdp_from_value),
            )
        }
        .instrument(span)
        .await
    }

    async fn lookup(&self, code: &ProviderCode, indicator: Indicator) -> Option<f64> {
        match tokio::time::timeout(
            self.lookup_timeout,
            self.indicators.fetch_indicator(code, indicator),
        )
        .await
        {
            Ok(Ok(value)) => value,
            Ok(Err(err)) => {
                debug!(%indicator, error = %err, "Indicator lookup failed; treating value as absent");
                None
            }
            Err(_) => {
                debug!(
                    %indicator,
                    timeout_ms = self.lookup_timeout.as_millis() as u64,
                    "Indicator lookup timed out; treating value as absent"
                );
                None
            }
        }
    }
}

fn population_from_value(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.round() as u64)
}

fn gdp_from_value(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}
