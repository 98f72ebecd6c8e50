use crate::model::{FilterCriterion, RecipeSummary, ResultSet};
use crate::pages::{Page, StaticPage};
use crate::session::Session;

pub const NO_RESULTS_MESSAGE: &str = "No recipes found matching the search criteria.";
pub const LOADING_MESSAGE: &str = "Loading...";

/// Navigation bar with the active page marked
pub fn render_nav(active: Page) -> String {
    Page::ALL
        .iter()
        .map(|page| {
            if *page == active {
                format!("[{}]", page.label())
            } else {
                format!("{} ({})", page.label(), page.path())
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_checkboxes(criteria: &[FilterCriterion]) -> String {
    criteria
        .iter()
        .map(|c| format!("[{}] {}", if c.checked { "x" } else { " " }, c.name))
        .collect::<Vec<_>>()
        .join("  ")
}

/// One result card. Pending enrichment renders as blanks.
pub fn render_recipe_item(recipe: &RecipeSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("* {}\n", recipe.title));
    output.push_str(&format!("  Image: {}\n", recipe.thumbnail_url));
    output.push_str(&format!(
        "  Category: {}\n",
        recipe.category.as_deref().unwrap_or("")
    ));
    output.push_str(&format!(
        "  See Full Recipe: {}\n",
        recipe.source_url.as_deref().unwrap_or("(not available)")
    ));
    output
}

/// The finder page: inputs, then results or the appropriate message
pub fn render_finder(session: &Session) -> String {
    let state = session.state();
    let mut output = String::new();

    output.push_str("Recipe Finder\n\n");
    output.push_str(&format!("Search: {}\n", state.search_term));
    output.push_str(&format!(
        "Dietary Restrictions: {}\n",
        render_checkboxes(&state.dietary_restrictions.criteria())
    ));
    output.push_str(&format!(
        "Cuisine Categories: {}\n",
        render_checkboxes(&state.cuisine_categories.criteria())
    ));
    output.push_str(&format!(
        "Must include: {}\n\n",
        state.must_include_ingredients
    ));

    for recipe in session.results() {
        output.push_str(&render_recipe_item(recipe));
    }

    if let Some(error) = session.last_error() {
        output.push_str(&format!("Could not load recipes: {error}\n"));
    } else if session.shows_no_results_message() {
        output.push_str(NO_RESULTS_MESSAGE);
        output.push('\n');
    }

    if session.is_loading() {
        output.push_str(LOADING_MESSAGE);
        output.push('\n');
    }

    output
}

pub fn render_static_page(page: &StaticPage) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", page.title));

    for section in &page.sections {
        output.push('\n');
        if let Some(heading) = &section.heading {
            output.push_str(&format!("## {heading}\n"));
        }
        for paragraph in &section.paragraphs {
            output.push_str(&format!("{paragraph}\n"));
        }
    }

    output
}

pub fn render_json(results: &ResultSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}
