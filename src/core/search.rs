//! Declarative list filters
//!
//! Each searchable field is tagged with a [`MatchMode`]. Fields whose query
//! value is absent are left out of the filter entirely, so an empty query
//! matches every record.

use std::collections::HashSet;

/// How a field is compared against the query value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Equal value
    Exact,
    /// Every query word is a whole word of the value, in any order, ignoring case
    ContainsWords,
    /// The query is a substring of the value, ignoring case
    ContainsFull,
}

/// Value of a search condition or of a record field
#[derive(Debug, Clone, PartialEq)]
pub enum SearchValue {
    Text(String),
    Number(f64),
}

impl From<String> for SearchValue {
    fn from(value: String) -> Self {
        SearchValue::Text(value)
    }
}

impl From<&str> for SearchValue {
    fn from(value: &str) -> Self {
        SearchValue::Text(value.to_string())
    }
}

impl From<f64> for SearchValue {
    fn from(value: f64) -> Self {
        SearchValue::Number(value)
    }
}

/// One field filter
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCondition {
    pub field: &'static str,
    pub mode: MatchMode,
    pub value: SearchValue,
}

impl SearchCondition {
    /// Lowercased words of a text query
    pub fn words(&self) -> Vec<String> {
        match &self.value {
            SearchValue::Text(text) => text.split_whitespace().map(str::to_lowercase).collect(),
            SearchValue::Number(_) => Vec::new(),
        }
    }

    fn matches_value(&self, candidate: &SearchValue) -> bool {
        match (self.mode, &self.value, candidate) {
            (_, SearchValue::Number(expected), SearchValue::Number(actual)) => {
                same_cents(*expected, *actual)
            }
            (MatchMode::Exact, SearchValue::Text(expected), SearchValue::Text(actual)) => {
                expected == actual
            }
            (MatchMode::ContainsFull, SearchValue::Text(expected), SearchValue::Text(actual)) => {
                actual.to_lowercase().contains(&expected.to_lowercase())
            }
            (MatchMode::ContainsWords, SearchValue::Text(_), SearchValue::Text(actual)) => {
                let present: HashSet<String> =
                    actual.split_whitespace().map(str::to_lowercase).collect();
                self.words().iter().all(|word| present.contains(word))
            }
            _ => false,
        }
    }
}

fn same_cents(a: f64, b: f64) -> bool {
    (a * 100.0).round() == (b * 100.0).round()
}

/// Records that expose named fields to the search filter
pub trait Searchable {
    fn search_field(&self, field: &str) -> Option<SearchValue>;
}

/// A conjunction of field conditions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    conditions: Vec<SearchCondition>,
}

impl SearchQuery {
    pub fn builder() -> SearchQueryBuilder {
        SearchQueryBuilder::default()
    }

    pub fn conditions(&self) -> &[SearchCondition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Whether a record satisfies every condition
    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        self.conditions.iter().all(|condition| {
            record
                .search_field(condition.field)
                .is_some_and(|value| condition.matches_value(&value))
        })
    }
}

/// Builds a [`SearchQuery`] from optional query values
#[derive(Debug, Default)]
pub struct SearchQueryBuilder {
    conditions: Vec<SearchCondition>,
}

impl SearchQueryBuilder {
    /// Add a condition when a value is present; `None` adds nothing
    pub fn field<V: Into<SearchValue>>(
        mut self,
        field: &'static str,
        mode: MatchMode,
        value: Option<V>,
    ) -> Self {
        if let Some(value) = value {
            let value = value.into();
            let blank = matches!(&value, SearchValue::Text(text) if text.trim().is_empty());
            if !blank {
                self.conditions.push(SearchCondition { field, mode, value });
            }
        }
        self
    }

    pub fn build(self) -> SearchQuery {
        SearchQuery {
            conditions: self.conditions,
        }
    }
}
