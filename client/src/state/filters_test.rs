use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn default_filters_produce_no_query() {
    let filters = CourseFilters::default();
    assert!(filters.query_pairs().is_empty());
    assert!(filters.is_default());
}

#[test]
fn query_pairs_trim_and_skip_blank_values() {
    let filters = CourseFilters {
        query: "  night view ".to_owned(),
        region: Some(String::new()),
        sort: SortOrder::Rating,
    };
    assert_eq!(
        filters.query_pairs(),
        vec![("query", "night view".to_owned()), ("sort", "rating".to_owned())]
    );
}

#[test]
fn sort_order_param_round_trips_and_defaults_unknown() {
    for sort in SortOrder::ALL {
        assert_eq!(SortOrder::from_param(sort.as_param()), sort);
    }
    assert_eq!(SortOrder::from_param("cheapest"), SortOrder::Latest);
}

#[test]
fn filters_persist_through_store() {
    let store = MemoryStore::new();
    let filters = CourseFilters {
        query: "cafe".to_owned(),
        region: Some("Busan".to_owned()),
        sort: SortOrder::Popular,
    };
    filters.save(&store);
    assert_eq!(CourseFilters::load(&store), filters);
}

#[test]
fn corrupted_cache_loads_defaults() {
    let store = MemoryStore::new();
    store.set(LIST_FILTERS_KEY, "[1, 2");
    assert_eq!(CourseFilters::load(&store), CourseFilters::default());
}

#[test]
fn partial_cache_fills_missing_fields() {
    let store = MemoryStore::new();
    store.set(LIST_FILTERS_KEY, r#"{"region": "Jeju"}"#);
    let filters = CourseFilters::load(&store);
    assert_eq!(filters.region.as_deref(), Some("Jeju"));
    assert_eq!(filters.sort, SortOrder::Latest);
    assert_eq!(filters.query, "");
}
