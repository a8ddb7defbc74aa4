//! Marketplace search filters, cached in localStorage across visits.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use serde::{Deserialize, Serialize};

use crate::config::LIST_FILTERS_KEY;
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Regions offered in the marketplace filter.
pub const REGIONS: [&str; 8] = ["Seoul", "Gyeonggi", "Incheon", "Busan", "Daegu", "Gwangju", "Daejeon", "Jeju"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Latest,
    Popular,
    Rating,
    PriceLow,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [Self::Latest, Self::Popular, Self::Rating, Self::PriceLow];

    pub fn as_param(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Popular => "popular",
            Self::Rating => "rating",
            Self::PriceLow => "price_low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "Newest",
            Self::Popular => "Most purchased",
            Self::Rating => "Top rated",
            Self::PriceLow => "Lowest price",
        }
    }

    pub fn from_param(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_param() == raw)
            .unwrap_or_default()
    }
}

/// Marketplace filter state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseFilters {
    pub query: String,
    pub region: Option<String>,
    pub sort: SortOrder,
}

impl CourseFilters {
    /// Query-string pairs; blank values are omitted and the default sort is implicit.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let query = self.query.trim();
        if !query.is_empty() {
            pairs.push(("query", query.to_owned()));
        }
        if let Some(region) = self.region.as_deref().filter(|r| !r.is_empty()) {
            pairs.push(("region", region.to_owned()));
        }
        if self.sort != SortOrder::default() {
            pairs.push(("sort", self.sort.as_param().to_owned()));
        }
        pairs
    }

    pub fn is_default(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Load cached filters; anything unreadable falls back to defaults.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        load_json(store, LIST_FILTERS_KEY).unwrap_or_default()
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) {
        save_json(store, LIST_FILTERS_KEY, self);
    }
}
