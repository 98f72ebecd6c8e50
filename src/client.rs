use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::model::{RecipeDetails, RecipeSummary, ResultSet};
use crate::query::RequestDescriptor;
use crate::FinderError;

/// The recipe lookup service the finder talks to
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Issue the single network call described by `request`.
    ///
    /// A missing or null `meals` list is an empty result, never an error.
    async fn execute(&self, request: &RequestDescriptor) -> Result<ResultSet, FinderError>;

    /// Fetch the fields that bulk responses leave out. `Ok(None)` means the
    /// API had no record for `id`.
    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetails>, FinderError>;

    /// Fill in `category` and `source_url` for one summary.
    ///
    /// Failures are logged and leave the summary untouched.
    async fn enrich(&self, mut summary: RecipeSummary) -> RecipeSummary {
        let outcome = self.lookup(&summary.id).await;
        match outcome {
            Ok(Some(details)) => {
                debug!("Enriched recipe {}: {:?}", summary.id, details);
                summary.apply_details(details);
            }
            Ok(None) => warn!("No meal details found for recipe {}", summary.id),
            Err(e) => warn!("Error fetching details for recipe {}: {}", summary.id, e),
        }
        summary
    }
}

#[derive(Debug, Deserialize)]
struct MealsResponse {
    #[serde(default)]
    meals: Option<Vec<MealRecord>>,
}

#[derive(Debug, Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<MealRecord> for RecipeSummary {
    fn from(record: MealRecord) -> Self {
        RecipeSummary {
            id: record.id,
            title: record.name.unwrap_or_default(),
            thumbnail_url: record.thumbnail.unwrap_or_default(),
            category: None,
            source_url: None,
        }
    }
}

impl From<MealRecord> for RecipeDetails {
    fn from(record: MealRecord) -> Self {
        RecipeDetails {
            category: non_empty(record.category),
            source_url: non_empty(record.source),
        }
    }
}

/// HTTP client for TheMealDB-compatible APIs
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        user_agent: &str,
    ) -> Result<Self, FinderError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_meals(
        &self,
        request: &RequestDescriptor,
    ) -> Result<Vec<MealRecord>, FinderError> {
        let url = request.url(&self.base_url)?;
        debug!("Constructed URL: {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FinderError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let parsed: MealsResponse = serde_json::from_str(&body)?;
        Ok(parsed.meals.unwrap_or_default())
    }
}

#[async_trait]
impl RecipeApi for MealDbClient {
    async fn execute(&self, request: &RequestDescriptor) -> Result<ResultSet, FinderError> {
        let meals = self.fetch_meals(request).await?;
        debug!("Recipe API returned {} meal(s)", meals.len());
        Ok(meals.into_iter().map(RecipeSummary::from).collect())
    }

    async fn lookup(&self, id: &str) -> Result<Option<RecipeDetails>, FinderError> {
        let request = RequestDescriptor::LookupById { id: id.to_string() };
        let meals = self.fetch_meals(&request).await?;
        Ok(meals.into_iter().next().map(RecipeDetails::from))
    }
}
