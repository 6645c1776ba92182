//! The list filter and its query-string parser.
//!
//! These types are shared between the server and client so both sides agree
//! on which filter values are meaningful.

use serde::{Deserialize, Serialize};

use super::error::QueryParamsError;

/// Optional constraints for listing games. `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameFilter {
    /// Case-insensitive substring of the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Exact, case-sensitive category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl GameFilter {
    /// Create an unconstrained filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain by title substring. Empty strings leave the filter unconstrained.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = non_empty(search.into());
        self
    }

    /// Constrain by category. Empty strings leave the filter unconstrained.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_empty(category.into());
        self
    }

    /// Returns true when neither field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_none() && self.category.is_none()
    }

    /// Parses a raw, still percent-encoded query string.
    ///
    /// Unknown keys are ignored. A repeated `search`/`category` key or a
    /// bracketed form such as `search[]=a` is rejected.
    pub fn from_query_string(raw: Option<&str>) -> Result<Self, QueryParamsError> {
        let mut filter = Self::default();
        let mut seen_search = false;
        let mut seen_category = false;

        for (key, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            let (name, nested) = match key.find('[') {
                Some(pos) => (&key[..pos], true),
                None => (key.as_ref(), false),
            };

            let (seen, slot) = match name {
                "search" => (&mut seen_search, &mut filter.search),
                "category" => (&mut seen_category, &mut filter.category),
                _ => continue,
            };

            if nested {
                return Err(QueryParamsError::Nested(name.to_string()));
            }
            if *seen {
                return Err(QueryParamsError::Repeated(name.to_string()));
            }
            *seen = true;
            *slot = non_empty(value.into_owned());
        }

        Ok(filter)
    }

    /// Query pairs for the non-empty fields, in `search`, `category` order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(search) = &self.search {
            pairs.push(("search", search.as_str()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.as_str()));
        }
        pairs
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
