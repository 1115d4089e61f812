mod common;

use categorizer_core::{
    store::seed_defaults, CategorizerError, CategoryRecord, CategoryStore, CategorySuggester,
    CategorySuggestion, InMemoryCategoryStore, JsonCategoryStore, Lexicon, SuggestionService,
};

fn default_service() -> SuggestionService<InMemoryCategoryStore> {
    SuggestionService::new(
        CategorySuggester::default(),
        InMemoryCategoryStore::with_defaults(),
    )
}

/// Store whose every lookup fails, as a broken database would.
struct FailingStore;

impl CategoryStore for FailingStore {
    fn find_by_name(&self, _name: &str) -> categorizer_core::errors::Result<Option<CategoryRecord>> {
        Err(CategorizerError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "connection reset",
        )))
    }

    fn list(&self) -> categorizer_core::errors::Result<Vec<CategoryRecord>> {
        Ok(Vec::new())
    }

    fn insert(
        &self,
        name: &str,
        _description: Option<String>,
    ) -> categorizer_core::errors::Result<CategoryRecord> {
        Err(CategorizerError::DuplicateCategory(name.to_string()))
    }
}

#[test]
fn matched_label_resolves_to_store_record() {
    let service = default_service();
    let expected = service
        .store()
        .find_by_name("Food & Drink")
        .expect("lookup")
        .expect("seeded");

    let suggestion = service.suggest("Starbucks Coffee #4521");

    assert_eq!(suggestion.suggested_category_id, Some(expected.id));
    assert_eq!(suggestion.suggested_category_name.as_deref(), Some("Food & Drink"));
}

#[test]
fn no_match_yields_null_payload() {
    let suggestion = default_service().suggest("random unrelated text");
    assert_eq!(suggestion, CategorySuggestion::none());
    assert!(suggestion.is_empty());
}

#[test]
fn payload_serializes_nulls_explicitly() {
    let json = serde_json::to_value(CategorySuggestion::none()).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "suggested_category_id": null,
            "suggested_category_name": null
        })
    );
}

#[test]
fn drifted_label_degrades_to_null_payload() {
    let lexicon = Lexicon::from_pairs([("gym", "Fitness")]).expect("lexicon");
    let service = SuggestionService::new(
        CategorySuggester::new(lexicon),
        InMemoryCategoryStore::with_defaults(),
    );

    assert_eq!(service.suggester().suggest("City Gym monthly"), Some("Fitness"));
    assert!(service.suggest("City Gym monthly").is_empty());
    assert_eq!(service.drift().expect("drift"), vec!["Fitness".to_string()]);
}

#[test]
fn store_failure_degrades_to_null_payload() {
    let service = SuggestionService::new(CategorySuggester::default(), FailingStore);
    assert!(service.suggest("UBER TRIP 8842").is_empty());
}

#[test]
fn default_lexicon_has_no_drift_against_seed_set() {
    assert!(default_service().drift().expect("drift").is_empty());
}

#[test]
fn service_threshold_applies_to_fuzzy_stage() {
    let strict = default_service();
    assert!(strict.suggest("netflx subscrption").is_empty());

    let relaxed = default_service().with_threshold(60);
    assert_eq!(
        relaxed.suggest("netflx subscrption").suggested_category_name.as_deref(),
        Some("Entertainment")
    );
}

#[test]
fn json_store_persists_seeded_categories() {
    let home = common::temp_home();
    let path = home.path().join("categories.json");

    let store = JsonCategoryStore::new(path.clone());
    assert!(store.list().expect("empty list").is_empty());
    assert_eq!(seed_defaults(&store).expect("seed"), 10);

    let reopened = JsonCategoryStore::new(path);
    let transport = reopened
        .find_by_name("Transport")
        .expect("lookup")
        .expect("persisted");
    assert_eq!(seed_defaults(&reopened).expect("reseed"), 0);

    let service = SuggestionService::new(CategorySuggester::default(), reopened);
    assert_eq!(
        service.suggest("Lyft ride home").suggested_category_id,
        Some(transport.id)
    );
}

#[test]
fn json_store_rejects_duplicates() {
    let home = common::temp_home();
    let store = JsonCategoryStore::new(home.path().join("categories.json"));
    store.insert("Pets", Some("vet and food".into())).expect("insert");
    let err = store.insert("Pets", None).unwrap_err();
    assert!(matches!(err, CategorizerError::DuplicateCategory(_)));
    assert_eq!(store.list().expect("list").len(), 1);
}
