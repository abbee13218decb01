use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, info_span, warn, Instrument};

use atlas_core::{Collection, DetailRecord};

use super::FetchEntityDetail;

/// Fan out one detail fetch per country and wait for all of them.
/// 为每个国家并发获取详情，并等待全部完成。
///
/// # Behavior / 行为
/// - One task per distinct provider code, all started at once
/// - Optional concurrency cap; the default is the collection size
/// - Returns only after every task has finished (barrier)
/// - A task that panics or is cancelled is logged and left out of the result;
///   the other tasks are unaffected
///
/// Tasks never see the collection. They only produce [`DetailRecord`]s,
/// which the caller merges afterwards.
pub struct EnrichCollection {
    fetcher: Arc<FetchEntityDetail>,
    limiter: Option<Arc<Semaphore>>,
    /// Configured cap, `0` when unbounded
    max_concurrent: usize,
}

impl EnrichCollection {
    pub fn new(fetcher: Arc<FetchEntityDetail>) -> Self {
        Self {
            fetcher,
            limiter: None,
            max_concurrent: 0,
        }
    }

    /// Cap the number of countries fetched simultaneously. `0` means unbounded.
    ///
    /// Values above [`Semaphore::MAX_PERMITS`] are clamped to it.
    pub fn with_concurrency_limit(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.min(Semaphore::MAX_PERMITS);
        self.limiter =
            (self.max_concurrent > 0).then(|| Arc::new(Semaphore::new(self.max_concurrent)));
        self
    }

    pub fn concurrency_limit(&self) -> Option<usize> {
        (self.max_concurrent > 0).then_some(self.max_concurrent)
    }

    /// Result order is completion order, not collection order.
    pub async fn execute(&self, collection: &Collection) -> Vec<DetailRecord> {
        let codes = collection.distinct_codes();
        let span = info_span!(
            "usecase.enrich_collection.execute",
            countries = codes.len(),
            concurrency_cap = self.max_concurrent,
        );

        async move {
            let mut tasks = JoinSet::new();
            for code in codes {
                let fetcher = Arc::clone(&self.fetcher);
                let limiter = self.limiter.clone();
                tasks.spawn(
                    async move {
                        let _permit = match limiter {
                            Some(limiter) => limiter.acquire_owned().await.ok(),
                            None => None,
                        };
                        fetcher.execute(code).await
                    }
                    .in_current_span(),
                );
            }

            let mut records = Vec::with_capacity(tasks.len());
            let mut dropped = 0usize;
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok(record) => records.push(record),
                    Err(err) => {
                        dropped += 1;
                        warn!(error = %err, "Detail fetch task did not complete; dropping it");
                    }
                }
            }

            info!(
                records = records.len(),
                with_population = records.iter().filter(|r| r.population.is_some()).count(),
                with_gdp = records.iter().filter(|r| r.gdp.is_some()).count(),
                dropped,
                "Enrichment finished"
            );
            records
        }
        .instrument(span)
        .await
    }
}
