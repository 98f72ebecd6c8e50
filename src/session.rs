use log::debug;

use crate::model::{Cuisine, Dietary, RecipeDetails, ResultSet, SearchState};
use crate::query::{build_request, RequestDescriptor};
use crate::FinderError;

/// A bulk query that has been issued but not yet settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub token: u64,
    pub request: RequestDescriptor,
}

/// What happened to the results of one bulk query
#[derive(Debug)]
pub enum QueryOutcome {
    /// Results replaced the displayed list
    Applied { count: usize },
    /// The query failed; the displayed list was left as it was
    Failed(FinderError),
    /// A newer query (or a reset) superseded this one; its results were dropped
    Superseded,
}

/// State of the finder page.
///
/// Only the transition methods below mutate it. Every bulk query gets a
/// strictly increasing token and only the latest token may touch the
/// results, so overlapping queries cannot overwrite each other out of order.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SearchState,
    results: ResultSet,
    loading: bool,
    was_reset: bool,
    latest_token: u64,
    last_error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn was_reset(&self) -> bool {
        self.was_reset
    }

    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether the "no recipes found" message belongs on screen
    pub fn shows_no_results_message(&self) -> bool {
        self.results.is_empty() && !self.was_reset && !self.loading && self.last_error.is_none()
    }

    /// Replace every input at once, e.g. from command-line flags
    pub fn load_state(&mut self, state: SearchState) {
        self.state = state;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
    }

    pub fn set_must_include_ingredients(&mut self, ingredients: impl Into<String>) {
        self.state.must_include_ingredients = ingredients.into();
    }

    /// Check or uncheck a dietary restriction; checking clears the sibling
    pub fn set_dietary(&mut self, dietary: Dietary, checked: bool) {
        self.state.dietary_restrictions.set(dietary, checked);
    }

    /// Select a cuisine category, clearing any other cuisine
    pub fn select_cuisine(&mut self, cuisine: Cuisine) {
        self.state.cuisine_categories.select(cuisine);
    }

    /// Clear every input and the displayed results.
    ///
    /// Also advances the token, so a query still in flight cannot repopulate
    /// the cleared list, and hides the empty-result message until the next
    /// query is issued.
    pub fn reset(&mut self) {
        self.state = SearchState::default();
        self.results.clear();
        self.was_reset = true;
        self.loading = false;
        self.last_error = None;
        self.latest_token += 1;
    }

    /// Start a bulk query from the current inputs: `idle -> loading`
    pub fn begin_query(&mut self) -> PendingQuery {
        self.latest_token += 1;
        self.loading = true;
        self.was_reset = false;
        self.last_error = None;

        PendingQuery {
            token: self.latest_token,
            request: build_request(&self.state),
        }
    }

    /// Settle a bulk query: `loading -> idle` when `token` is the latest.
    pub fn settle(&mut self, token: u64, outcome: Result<ResultSet, FinderError>) -> QueryOutcome {
        if token != self.latest_token {
            debug!(
                "Discarding results of query {} (latest is {})",
                token, self.latest_token
            );
            return QueryOutcome::Superseded;
        }

        self.loading = false;
        match outcome {
            Ok(results) => {
                let count = results.len();
                self.results = results;
                QueryOutcome::Applied { count }
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                QueryOutcome::Failed(e)
            }
        }
    }

    /// Release the loading flag for a query that will never settle
    pub fn abandon(&mut self, token: u64) {
        if token == self.latest_token && self.loading {
            debug!("Query {} abandoned before settling", token);
            self.loading = false;
        }
    }

    /// Apply enrichment for one item of the results produced by `token`.
    ///
    /// Returns false when those results are no longer displayed.
    pub fn apply_details(&mut self, token: u64, id: &str, details: RecipeDetails) -> bool {
        if token != self.latest_token {
            return false;
        }

        match self.results.iter_mut().find(|r| r.id == id) {
            Some(summary) => {
                summary.apply_details(details);
                true
            }
            None => false,
        }
    }
}
