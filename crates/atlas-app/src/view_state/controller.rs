use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, info_span, warn, Instrument};

use atlas_core::config::EnrichmentConfig;
use atlas_core::{LoadFailure, LoadState};

use super::{ViewSnapshot, ViewStateStore};
use crate::usecases::{EnrichCollection, FetchEntityDetail, LoadBaseCollection};
use crate::AppDeps;

/// How one [`ViewStateController::reload`] cycle ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ReloadOutcome {
    /// Base collection published and enrichment merged
    Completed {
        generation: u64,
        countries: usize,
        merged: usize,
    },
    /// Base listing failed; the view shows `Failed`
    Failed {
        generation: u64,
        failure: LoadFailure,
    },
    /// A newer reload started before this one finished; its results were discarded
    Superseded { generation: u64 },
}

/// Runs the load sequence and is the only writer of the view state.
/// 执行加载流程，是视图状态的唯一写入者。
///
/// # Sequence / 流程
/// 1. New generation, state `Loading`
/// 2. Base listing; on error `Failed(reason)` and stop
/// 3. `Ready(collection)` right away, without details
/// 4. Enrichment fan-out, then merge into the ready collection
///
/// Steps 2–4 only write while their generation is still current, so a reload
/// started in the meantime always wins over an older cycle.
pub struct ViewStateController {
    load_base: LoadBaseCollection,
    enrich: EnrichCollection,
    store: ViewStateStore,
}

impl ViewStateController {
    pub fn new(load_base: LoadBaseCollection, enrich: EnrichCollection) -> Self {
        Self {
            load_base,
            enrich,
            store: ViewStateStore::new(),
        }
    }

    /// Construct the controller and its use cases from dependency bundle.
    pub fn from_deps(deps: AppDeps, config: &EnrichmentConfig) -> Self {
        let AppDeps {
            listing,
            indicators,
        } = deps;

        let fetcher = FetchEntityDetail::new(
            indicators,
            Duration::from_secs(config.lookup_timeout_secs),
        );
        let enrich = EnrichCollection::new(Arc::new(fetcher))
            .with_concurrency_limit(config.max_concurrent_fetches);

        Self::new(LoadBaseCollection::new(listing), enrich)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.store.subscribe()
    }

    /// (Re)start the full load sequence. Allowed from any state.
    pub async fn reload(&self) -> ReloadOutcome {
        let generation = self.store.begin_cycle();
        let span = info_span!("usecase.view_state.reload", generation);

        self.run_cycle(generation).instrument(span).await
    }

    async fn run_cycle(&self, generation: u64) -> ReloadOutcome {
        info!("Loading base collection");

        let collection = match self.load_base.execute().await {
            Ok(collection) => collection,
            Err(err) => {
                let failure = LoadFailure::from(&err);
                if !self
                    .store
                    .set_state(generation, LoadState::Failed(failure.clone()))
                {
                    return self.superseded(generation);
                }
                warn!(error = %err, "Load failed");
                return ReloadOutcome::Failed {
                    generation,
                    failure,
                };
            }
        };

        let countries = collection.len();
        if !self
            .store
            .set_state(generation, LoadState::Ready(collection.clone()))
        {
            return self.superseded(generation);
        }
        info!(countries, "Base collection ready; enriching");

        let details = self.enrich.execute(&collection).await;

        let mut merged = 0;
        let applied = self.store.update(generation, |snapshot| {
            if let LoadState::Ready(current) = &mut snapshot.state {
                merged = current.merge_details(&details);
            }
        });
        if !applied {
            return self.superseded(generation);
        }

        info!(countries, merged, "Enrichment merged");
        ReloadOutcome::Completed {
            generation,
            countries,
            merged,
        }
    }

    fn superseded(&self, generation: u64) -> ReloadOutcome {
        info!(
            current = self.store.current_generation(),
            "Newer load in progress; discarding results"
        );
        ReloadOutcome::Superseded { generation }
    }
}
