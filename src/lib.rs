//! Search TheMealDB by name, dietary restriction, cuisine category and a
//! must-include ingredient.
//!
//! The finder keeps the page state in a [`Session`], turns it into exactly
//! one request per query ([`build_request`]), and fills in each result's
//! category and source link with a follow-up lookup.

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod finder;
pub mod model;
pub mod pages;
pub mod query;
pub mod render;
pub mod session;
pub mod shell;

pub use builder::RecipeFinderBuilder;
pub use client::{MealDbClient, RecipeApi};
pub use config::FinderConfig;
pub use error::FinderError;
pub use finder::RecipeFinder;
pub use model::{
    Criterion, Cuisine, Dietary, FilterCriterion, RecipeDetails, RecipeSummary, ResultSet,
    SearchState, Selection,
};
pub use pages::Page;
pub use query::{build_request, FilterKey, RequestDescriptor};
pub use session::{PendingQuery, QueryOutcome, Session};

/// Run one query against TheMealDB and return the enriched results
///
/// # Example
/// ```no_run
/// use recipe_finder::{find_recipes, SearchState};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let state = SearchState {
///     search_term: "Arrabiata".to_string(),
///     ..Default::default()
/// };
/// let recipes = find_recipes(state).await?;
/// # Ok(())
/// # }
/// ```
pub async fn find_recipes(state: SearchState) -> Result<ResultSet, FinderError> {
    let finder = RecipeFinder::builder().build()?;
    find_recipes_with(&finder, state).await
}

/// Like [`find_recipes`] but with a caller-configured finder.
///
/// Returns [`FinderError::Superseded`] when another query or a reset on the
/// same finder replaced this one before it settled.
pub async fn find_recipes_with<A: RecipeApi + 'static>(
    finder: &RecipeFinder<A>,
    state: SearchState,
) -> Result<ResultSet, FinderError> {
    finder.update(|session| session.load_state(state));

    match finder.search().await {
        QueryOutcome::Failed(e) => Err(e),
        QueryOutcome::Superseded => Err(FinderError::Superseded),
        QueryOutcome::Applied { .. } => Ok(finder.snapshot().results().clone()),
    }
}
