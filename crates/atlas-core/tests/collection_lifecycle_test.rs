//! End-to-end behaviour of the domain types, from listing rows to an
//! enriched, region-grouped collection.

use atlas_core::{
    Collection, DetailRecord, FailureKind, FetchError, ListingRecord, LoadFailure, LoadState,
    ProviderCode,
};

fn listing() -> Vec<ListingRecord> {
    vec![
        ListingRecord::new("AW", "Aruba", "Latin America & Caribbean"),
        ListingRecord::new("ZH", "Africa Eastern and Southern", "Aggregates"),
        ListingRecord::new("XK", "Kosovo", "Europe & Central Asia"),
        ListingRecord::new("1W", "World", "Aggregates"),
        ListingRecord::new("FR", "France", "Europe & Central Asia"),
    ]
}

fn base_collection() -> Collection {
    listing()
        .into_iter()
        .filter(|record| !record.is_aggregate())
        .map(ListingRecord::into_country)
        .collect()
}

#[test]
fn base_collection_has_flags_and_no_details() {
    let collection = base_collection();

    assert_eq!(collection.len(), 3);
    assert!(collection.iter().all(|c| !c.is_enriched()));
    assert!(collection.iter().all(|c| c.population.is_none() && c.gdp.is_none()));

    let france = collection.get(&ProviderCode::new("FR")).unwrap();
    assert_eq!(france.flag, "🇫🇷");
}

#[test]
fn partial_enrichment_then_region_grouping() {
    let mut collection = base_collection();
    let details = vec![
        DetailRecord::new("FR".into(), Some(67_971_311), Some(2.78e12)),
        DetailRecord::new("AW".into(), None, Some(3.5e9)),
        DetailRecord::empty("XK".into()),
        DetailRecord::new("1W".into(), Some(7_950_000_000), None),
    ];

    let merged = collection.merge_details(&details);

    assert_eq!(merged, 3);
    let aruba = collection.get(&"AW".into()).unwrap();
    assert_eq!((aruba.population, aruba.gdp), (None, Some(3.5e9)));
    assert!(!collection.get(&"XK".into()).unwrap().is_enriched());

    let view = collection.region_view();
    assert_eq!(view.regions(), ["Europe & Central Asia", "Latin America & Caribbean"]);
    let europe: Vec<_> = view
        .countries_in("Europe & Central Asia")
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(europe, ["Kosovo", "France"]);
}

#[test]
fn load_state_serializes_with_status_tag() {
    let idle = serde_json::to_value(LoadState::Idle).unwrap();
    assert_eq!(idle, serde_json::json!({ "status": "idle" }));

    let failed = LoadState::Failed(LoadFailure::from(FetchError::Decode("bad body".into())));
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["status"], "failed");
    assert_eq!(json["data"]["kind"], "decode");

    let ready = serde_json::to_value(LoadState::Ready(base_collection())).unwrap();
    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["data"].as_array().map(Vec::len), Some(3));
    assert_eq!(ready["data"][2]["code"], "FR");
}

#[test]
fn failure_kind_follows_fetch_error() {
    let cases = [
        (FetchError::Network("refused".into()), FailureKind::Network),
        (FetchError::Decode("eof".into()), FailureKind::Decode),
        (FetchError::InvalidKey("U/S".into()), FailureKind::InvalidKey),
    ];
    for (err, kind) in cases {
        assert_eq!(LoadFailure::from(&err).kind, kind);
    }
}
