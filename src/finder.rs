use log::{debug, error, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinSet;

use crate::client::RecipeApi;
use crate::model::{RecipeDetails, RecipeSummary};
use crate::session::{QueryOutcome, Session};

/// Drives a [`Session`] through bulk queries and per-item enrichment
pub struct RecipeFinder<A> {
    api: Arc<A>,
    session: Arc<Mutex<Session>>,
    enrich: bool,
}

/// Releases the loading flag if a query future is dropped before it settles
struct SettleGuard<'a> {
    session: &'a Mutex<Session>,
    token: u64,
    settled: bool,
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            lock(self.session).abandon(self.token);
        }
    }
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<A: RecipeApi + 'static> RecipeFinder<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Arc::new(api),
            session: Arc::new(Mutex::new(Session::new())),
            enrich: true,
        }
    }

    /// Turn per-item enrichment on or off
    pub fn with_enrichment(mut self, enrich: bool) -> Self {
        self.enrich = enrich;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Run `f` against the session, e.g. to apply a user input event
    pub fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut lock(&self.session))
    }

    /// A copy of the current session for rendering
    pub fn snapshot(&self) -> Session {
        lock(&self.session).clone()
    }

    /// Issue one bulk query from the current inputs and apply its results.
    ///
    /// Failures are logged and recorded on the session; they never panic
    /// and always leave the loading flag cleared. When the results are
    /// applied, every item is enriched concurrently before returning.
    pub async fn search(&self) -> QueryOutcome {
        let pending = lock(&self.session).begin_query();
        let mut guard = SettleGuard {
            session: &self.session,
            token: pending.token,
            settled: false,
        };

        let result = self.api.execute(&pending.request).await;
        if let Err(e) = &result {
            error!("Error fetching recipes: {}", e);
        }

        let outcome = lock(&self.session).settle(pending.token, result);
        guard.settled = true;
        drop(guard);

        if let QueryOutcome::Applied { count } = &outcome {
            debug!("Query {} applied {} recipe(s)", pending.token, count);
            if self.enrich {
                self.enrich_results(pending.token).await;
            }
        }

        outcome
    }

    /// Look up every displayed item independently; each lookup is applied
    /// as soon as it completes. Results for a superseded query are dropped.
    async fn enrich_results(&self, token: u64) {
        let summaries: Vec<RecipeSummary> = lock(&self.session).results().clone();
        let mut lookups = JoinSet::new();

        for summary in summaries {
            let api = Arc::clone(&self.api);
            lookups.spawn(async move { api.enrich(summary).await });
        }

        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok(enriched) if enriched.is_enriched() => {
                    let details = RecipeDetails {
                        category: enriched.category,
                        source_url: enriched.source_url,
                    };
                    if !lock(&self.session).apply_details(token, &enriched.id, details) {
                        debug!(
                            "Dropping details for recipe {} from superseded query",
                            enriched.id
                        );
                    }
                }
                Ok(_) => {}
                Err(e) => warn!("Enrichment task failed: {}", e),
            }
        }
    }
}
