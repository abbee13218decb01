use chrono::{DateTime, Utc};
use tokio::sync::watch;

use atlas_core::{Collection, Country, LoadState, RegionView};

/// Immutable picture of the view state at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewSnapshot {
    /// Load cycle this snapshot belongs to; `0` before the first load
    pub generation: u64,
    pub state: LoadState,
    /// Last ready collection, kept while a newer cycle is loading or after it failed
    retained: Option<Collection>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ViewSnapshot {
    /// Collection to display: the ready one, or the previous one while
    /// reloading / after a failed reload. `None` until a load first succeeds.
    pub fn collection(&self) -> Option<&Collection> {
        self.state.collection().or(self.retained.as_ref())
    }

    pub fn region_view(&self) -> Option<RegionView<'_>> {
        self.collection().map(Collection::region_view)
    }

    /// Distinct region names, sorted.
    pub fn regions(&self) -> Vec<String> {
        self.region_view()
            .map(|view| view.regions().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Countries of `region`, in collection order.
    pub fn countries_in(&self, region: &str) -> Vec<&Country> {
        self.collection()
            .map(|collection| {
                collection
                    .iter()
                    .filter(|country| country.region == region)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Holder of the current [`ViewSnapshot`].
///
/// Every write goes through the `watch` sender's lock, so checking the
/// generation and applying a change happen atomically with respect to a
/// concurrent [`begin_cycle`](Self::begin_cycle).
pub struct ViewStateStore {
    tx: watch::Sender<ViewSnapshot>,
}

impl Default for ViewStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStateStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ViewSnapshot::default());
        Self { tx }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.tx.subscribe()
    }

    pub fn current_generation(&self) -> u64 {
        self.tx.borrow().generation
    }

    /// Start a new load cycle: bump the generation and switch to `Loading`.
    ///
    /// A ready collection is moved aside so it stays visible until the new
    /// cycle produces one. Returns the new generation.
    pub fn begin_cycle(&self) -> u64 {
        let mut generation = 0;
        self.tx.send_modify(|snapshot| {
            snapshot.generation += 1;
            generation = snapshot.generation;
            if let LoadState::Ready(collection) = std::mem::take(&mut snapshot.state) {
                snapshot.retained = Some(collection);
            }
            snapshot.state = LoadState::Loading;
            snapshot.updated_at = Some(Utc::now());
        });
        generation
    }

    /// Replace the state, but only while `generation` is still current.
    pub fn set_state(&self, generation: u64, state: LoadState) -> bool {
        self.update(generation, move |snapshot| {
            if state.is_ready() {
                snapshot.retained = None;
            }
            snapshot.state = state;
        })
    }

    /// Apply `f` to the snapshot, but only while `generation` is still current.
    ///
    /// Returns `false` (and leaves the snapshot untouched) for a stale generation.
    pub fn update<F>(&self, generation: u64, f: F) -> bool
    where
        F: FnOnce(&mut ViewSnapshot),
    {
        self.tx.send_if_modified(|snapshot| {
            if snapshot.generation != generation {
                return false;
            }
            f(snapshot);
            snapshot.updated_at = Some(Utc::now());
            true
        })
    }
}
