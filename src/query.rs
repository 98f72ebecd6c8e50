use log::debug;
use reqwest::Url;

use crate::model::SearchState;
use crate::FinderError;

/// Query parameter keys understood by the filter endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    /// `c=` category filter
    Category,
    /// `i=` ingredient filter
    Ingredient,
}

impl FilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Category => "c",
            FilterKey::Ingredient => "i",
        }
    }
}

/// The single outbound request built from a [`SearchState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestDescriptor {
    /// `search.php?s={term}`
    SearchByName { term: String },
    /// `filter.php?c=..&c=..&i=..`, parameters in emission order
    Filter { params: Vec<(FilterKey, String)> },
    /// `lookup.php?i={id}`
    LookupById { id: String },
}

impl RequestDescriptor {
    fn endpoint(&self) -> &'static str {
        match self {
            RequestDescriptor::SearchByName { .. } => "search.php",
            RequestDescriptor::Filter { .. } => "filter.php",
            RequestDescriptor::LookupById { .. } => "lookup.php",
        }
    }

    /// Query pairs in the order they are sent
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        match self {
            RequestDescriptor::SearchByName { term } => vec![("s", term.as_str())],
            RequestDescriptor::Filter { params } => params
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str()))
                .collect(),
            RequestDescriptor::LookupById { id } => vec![("i", id.as_str())],
        }
    }

    /// Render the request against the API base URL
    pub fn url(&self, base_url: &str) -> Result<Url, FinderError> {
        let endpoint = format!("{}/{}", base_url.trim_end_matches('/'), self.endpoint());
        let mut url =
            Url::parse(&endpoint).map_err(|e| FinderError::InvalidUrl(format!("{endpoint}: {e}")))?;

        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }
}

/// Build exactly one request from the current search state.
///
/// A non-empty search term always wins: the filter endpoint cannot match on
/// name, so every checked criterion and the ingredient are ignored. Otherwise
/// the filter request carries dietary, then cuisine, then ingredient
/// parameters. Duplicate `c` keys are all emitted.
pub fn build_request(state: &SearchState) -> RequestDescriptor {
    if !state.search_term.is_empty() {
        return RequestDescriptor::SearchByName {
            term: state.search_term.clone(),
        };
    }

    let mut params: Vec<(FilterKey, String)> = Vec::new();

    params.extend(
        state
            .dietary_restrictions
            .checked_params()
            .into_iter()
            .map(|name| (FilterKey::Category, name)),
    );
    params.extend(
        state
            .cuisine_categories
            .checked_params()
            .into_iter()
            .map(|name| (FilterKey::Category, name)),
    );

    if !state.must_include_ingredients.is_empty() {
        params.push((
            FilterKey::Ingredient,
            state.must_include_ingredients.clone(),
        ));
    }

    debug!("Built filter request with {} parameter(s)", params.len());
    RequestDescriptor::Filter { params }
}
