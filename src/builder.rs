use std::time::Duration;

use crate::client::MealDbClient;
use crate::config::FinderConfig;
use crate::finder::RecipeFinder;
use crate::FinderError;

/// Builder for configuring a finder backed by TheMealDB
#[derive(Debug, Default)]
pub struct RecipeFinderBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    enrich: Option<bool>,
}

impl RecipeFinderBuilder {
    /// Start from a loaded configuration; later calls override it
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{FinderConfig, RecipeFinderBuilder};
    ///
    /// let builder = RecipeFinderBuilder::default().config(&FinderConfig::default());
    /// ```
    pub fn config(mut self, config: &FinderConfig) -> Self {
        self.base_url = Some(config.api_base_url.clone());
        self.timeout = Some(Duration::from_secs(config.timeout));
        self.user_agent = Some(config.user_agent.clone());
        self.enrich = Some(config.enrich);
        self
    }

    /// Set the API base URL, e.g. a local mirror of TheMealDB
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinderBuilder;
    ///
    /// let builder = RecipeFinderBuilder::default()
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Turn per-item enrichment on or off
    pub fn enrich(mut self, enrich: bool) -> Self {
        self.enrich = Some(enrich);
        self
    }

    /// Build the finder
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - The base URL is empty
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<RecipeFinder<MealDbClient>, FinderError> {
        let defaults = FinderConfig::default();

        let base_url = self.base_url.unwrap_or(defaults.api_base_url);
        if base_url.trim().is_empty() {
            return Err(FinderError::BuilderError(
                "API base URL cannot be empty".to_string(),
            ));
        }

        let user_agent = self.user_agent.unwrap_or(defaults.user_agent);
        let client = MealDbClient::new(base_url, self.timeout, &user_agent)?;

        Ok(RecipeFinder::new(client).with_enrichment(self.enrich.unwrap_or(defaults.enrich)))
    }
}

impl RecipeFinder<MealDbClient> {
    /// Creates a new builder for a TheMealDB-backed finder
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}
