use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::watch;

use atlas_app::{AppDeps, ReloadOutcome, ViewStateController};
use atlas_core::config::AppConfig;
use atlas_core::ports::{CountryListingPort, FetchError, Indicator, IndicatorPort};
use atlas_core::{FailureKind, ListingRecord, LoadState, ProviderCode};

// ---------------------------------------------------------------------------
// Fake: CountryListingPort (scripted responses, one per call)
// ---------------------------------------------------------------------------

struct ScriptedListing {
    responses: Mutex<VecDeque<Result<Vec<ListingRecord>, FetchError>>>,
}

impl ScriptedListing {
    fn new(responses: Vec<Result<Vec<ListingRecord>, FetchError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl CountryListingPort for ScriptedListing {
    async fn fetch_listing(&self) -> Result<Vec<ListingRecord>, FetchError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("no scripted response".into())))
    }
}

// ---------------------------------------------------------------------------
// Fake: IndicatorPort (per code + indicator behavior)
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
enum Lookup {
    Value(f64),
    Fail,
    /// Never completes
    Hang,
    /// Completes with the value once the gate opens
    Gated(f64),
}

struct ScriptedIndicators {
    lookups: HashMap<(String, Indicator), Lookup>,
    gate: watch::Receiver<bool>,
}

impl ScriptedIndicators {
    fn new(gate: watch::Receiver<bool>) -> Self {
        Self {
            lookups: HashMap::new(),
            gate,
        }
    }

    fn with(mut self, code: &str, indicator: Indicator, lookup: Lookup) -> Self {
        self.lookups.insert((code.to_string(), indicator), lookup);
        self
    }
}

#[async_trait]
impl IndicatorPort for ScriptedIndicators {
    async fn fetch_indicator(
        &self,
        code: &ProviderCode,
        indicator: Indicator,
    ) -> Result<Option<f64>, FetchError> {
        let lookup = self
            .lookups
            .get(&(code.as_str().to_string(), indicator))
            .copied();

        match lookup {
            None => Ok(None),
            Some(Lookup::Value(v)) => Ok(Some(v)),
            Some(Lookup::Fail) => Err(FetchError::Network("connection reset".into())),
            Some(Lookup::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            Some(Lookup::Gated(v)) => {
                let mut gate = self.gate.clone();
                let _ = gate.wait_for(|open| *open).await;
                Ok(Some(v))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn controller(listing: ScriptedListing, indicators: ScriptedIndicators) -> ViewStateController {
    let mut config = AppConfig::with_defaults();
    config.enrichment.lookup_timeout_secs = 5;
    let deps = AppDeps {
        listing: Arc::new(listing),
        indicators: Arc::new(indicators),
    };
    ViewStateController::from_deps(deps, &config.enrichment)
}

fn two_countries_and_an_aggregate() -> Vec<ListingRecord> {
    vec![
        ListingRecord::new("US", "United States", "North America"),
        ListingRecord::new("1W", "World", "Aggregates"),
        ListingRecord::new("FR", "France", "Europe & Central Asia"),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ready_is_published_before_enrichment_completes() {
    init_tracing();
    let (gate_tx, gate_rx) = watch::channel(false);
    let listing = ScriptedListing::new(vec![Ok(two_countries_and_an_aggregate())]);
    let indicators = ScriptedIndicators::new(gate_rx)
        .with("US", Indicator::Population, Lookup::Gated(331_900_000.0))
        .with("FR", Indicator::Gdp, Lookup::Gated(2.78e12));
    let controller = Arc::new(controller(listing, indicators));
    let mut rx = controller.subscribe();

    let task = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.reload().await })
    };

    let ready = rx.wait_for(|s| s.state.is_ready()).await.unwrap().clone();
    let collection = ready.collection().unwrap();
    assert_eq!(collection.len(), 2);
    assert!(collection
        .iter()
        .all(|c| c.population.is_none() && c.gdp.is_none()));
    assert_eq!(ready.regions(), ["Europe & Central Asia", "North America"]);

    gate_tx.send(true).unwrap();
    let outcome = task.await.unwrap();

    assert!(matches!(
        outcome,
        ReloadOutcome::Completed {
            countries: 2,
            merged: 2,
            ..
        }
    ));
    let snapshot = controller.snapshot();
    let collection = snapshot.collection().unwrap();
    let us = collection.get(&"US".into()).unwrap();
    let fr = collection.get(&"FR".into()).unwrap();
    assert_eq!(us.population, Some(331_900_000));
    assert_eq!(us.gdp, None);
    assert_eq!(fr.population, None);
    assert_eq!(fr.gdp, Some(2.78e12));
}

#[tokio::test(start_paused = true)]
async fn timed_out_gdp_lookup_leaves_population_intact() {
    init_tracing();
    let (_gate_tx, gate_rx) = watch::channel(true);
    let listing = ScriptedListing::new(vec![Ok(vec![ListingRecord::new(
        "US",
        "United States",
        "North America",
    )])]);
    let indicators = ScriptedIndicators::new(gate_rx)
        .with("US", Indicator::Population, Lookup::Value(330_000_000.0))
        .with("US", Indicator::Gdp, Lookup::Hang);
    let controller = controller(listing, indicators);

    let outcome = controller.reload().await;

    assert!(matches!(outcome, ReloadOutcome::Completed { merged: 1, .. }));
    let snapshot = controller.snapshot();
    let us = snapshot.collection().unwrap().get(&"US".into()).cloned().unwrap();
    assert_eq!(us.population, Some(330_000_000));
    assert_eq!(us.gdp, None);
}

#[tokio::test]
async fn lookup_failures_are_isolated_per_attribute_and_per_country() {
    init_tracing();
    let (_gate_tx, gate_rx) = watch::channel(true);
    let listing = ScriptedListing::new(vec![Ok(vec![
        ListingRecord::new("XX", "Failing", "Region"),
        ListingRecord::new("YY", "Healthy", "Region"),
    ])]);
    let indicators = ScriptedIndicators::new(gate_rx)
        .with("XX", Indicator::Population, Lookup::Fail)
        .with("XX", Indicator::Gdp, Lookup::Value(10.0))
        .with("YY", Indicator::Population, Lookup::Value(20.0))
        .with("YY", Indicator::Gdp, Lookup::Value(30.0));
    let controller = controller(listing, indicators);

    controller.reload().await;

    let snapshot = controller.snapshot();
    let collection = snapshot.collection().unwrap();
    let xx = collection.get(&"XX".into()).unwrap();
    let yy = collection.get(&"YY".into()).unwrap();
    assert_eq!((xx.population, xx.gdp), (None, Some(10.0)));
    assert_eq!((yy.population, yy.gdp), (Some(20), Some(30.0)));
}

#[tokio::test]
async fn transport_failure_on_first_load_sets_failed_without_collection() {
    init_tracing();
    let (_gate_tx, gate_rx) = watch::channel(true);
    let listing = ScriptedListing::new(vec![Err(FetchError::Network(
        "dns error: no such host".into(),
    ))]);
    let controller = controller(listing, ScriptedIndicators::new(gate_rx));

    let outcome = controller.reload().await;

    let ReloadOutcome::Failed { failure, .. } = outcome else {
        panic!("expected the load to fail");
    };
    assert_eq!(failure.kind, FailureKind::Network);
    assert!(failure.message.contains("no such host"));
    let snapshot = controller.snapshot();
    assert!(matches!(snapshot.state, LoadState::Failed(_)));
    assert!(snapshot.collection().is_none());
}

#[tokio::test]
async fn failed_reload_keeps_previous_collection_and_can_be_retried() {
    init_tracing();
    let (_gate_tx, gate_rx) = watch::channel(true);
    let listing = ScriptedListing::new(vec![
        Ok(two_countries_and_an_aggregate()),
        Err(FetchError::Decode("expected a 2-element array".into())),
        Ok(vec![ListingRecord::new("JP", "Japan", "East Asia & Pacific")]),
    ]);
    let controller = controller(listing, ScriptedIndicators::new(gate_rx));

    controller.reload().await;
    let outcome = controller.reload().await;

    assert!(matches!(outcome, ReloadOutcome::Failed { generation: 2, .. }));
    let snapshot = controller.snapshot();
    assert_eq!(
        snapshot.state.failure().map(|f| f.kind),
        Some(FailureKind::Decode)
    );
    assert_eq!(snapshot.collection().map(|c| c.len()), Some(2));

    let outcome = controller.reload().await;

    assert!(matches!(outcome, ReloadOutcome::Completed { generation: 3, .. }));
    let snapshot = controller.snapshot();
    assert!(snapshot.state.is_ready());
    assert_eq!(snapshot.regions(), ["East Asia & Pacific"]);
}

#[tokio::test]
async fn results_of_a_superseded_load_are_never_merged() {
    init_tracing();
    let (gate_tx, gate_rx) = watch::channel(false);
    let listing = ScriptedListing::new(vec![
        Ok(vec![ListingRecord::new("DE", "Germany", "Europe & Central Asia")]),
        Ok(vec![ListingRecord::new("AT", "Austria", "Europe & Central Asia")]),
    ]);
    // DE lookups belong to the first cycle and are held until the second one finished
    let indicators = ScriptedIndicators::new(gate_rx)
        .with("DE", Indicator::Population, Lookup::Gated(83_800_000.0))
        .with("DE", Indicator::Gdp, Lookup::Gated(4.0e12))
        .with("AT", Indicator::Population, Lookup::Value(9_000_000.0));
    let controller = Arc::new(controller(listing, indicators));
    let mut rx = controller.subscribe();

    let stale = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.reload().await })
    };
    rx.wait_for(|s| s.generation == 1 && s.state.is_ready())
        .await
        .unwrap();

    let fresh = controller.reload().await;
    gate_tx.send(true).unwrap();
    let stale = stale.await.unwrap();

    assert!(matches!(fresh, ReloadOutcome::Completed { generation: 2, .. }));
    assert_eq!(stale, ReloadOutcome::Superseded { generation: 1 });

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.generation, 2);
    let collection = snapshot.collection().unwrap();
    assert!(collection.get(&"DE".into()).is_none());
    assert_eq!(
        collection.get(&"AT".into()).and_then(|c| c.population),
        Some(9_000_000)
    );
}

// ---------------------------------------------------------------------------
// Fake: CountryListingPort whose first call fails late
// ---------------------------------------------------------------------------

struct SlowFailingListing {
    calls: AtomicUsize,
    gate: watch::Receiver<bool>,
}

#[async_trait]
impl CountryListingPort for SlowFailingListing {
    async fn fetch_listing(&self) -> Result<Vec<ListingRecord>, FetchError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            let mut gate = self.gate.clone();
            let _ = gate.wait_for(|open| *open).await;
            return Err(FetchError::Network("operation timed out".into()));
        }
        Ok(vec![ListingRecord::new("KE", "Kenya", "Sub-Saharan Africa")])
    }
}

#[tokio::test]
async fn stale_failure_does_not_replace_newer_state() {
    init_tracing();
    let (gate_tx, gate_rx) = watch::channel(false);
    let (_open_tx, open_rx) = watch::channel(true);
    let listing = SlowFailingListing {
        calls: AtomicUsize::new(0),
        gate: gate_rx,
    };
    let mut config = AppConfig::with_defaults();
    config.enrichment.lookup_timeout_secs = 5;
    let deps = AppDeps {
        listing: Arc::new(listing),
        indicators: Arc::new(ScriptedIndicators::new(open_rx)),
    };
    let controller = Arc::new(ViewStateController::from_deps(deps, &config.enrichment));
    let mut rx = controller.subscribe();

    let stale = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.reload().await })
    };
    rx.wait_for(|s| s.generation == 1 && s.state.is_loading())
        .await
        .unwrap();

    let fresh = controller.reload().await;
    gate_tx.send(true).unwrap();
    let stale = stale.await.unwrap();

    assert!(matches!(fresh, ReloadOutcome::Completed { generation: 2, .. }));
    assert_eq!(stale, ReloadOutcome::Superseded { generation: 1 });
    let snapshot = controller.snapshot();
    assert!(snapshot.state.is_ready());
    assert_eq!(
        snapshot
            .countries_in("Sub-Saharan Africa")
            .iter()
            .map(|c| c.flag.as_str())
            .collect::<Vec<_>>(),
        ["🇰🇪"]
    );
}
