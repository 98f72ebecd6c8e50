use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FinderError;

/// A selectable tag in one of the two criterion sets
pub trait Criterion: Copy + Eq + fmt::Debug + 'static {
    /// Every criterion of this kind, in display order
    const ALL: &'static [Self];

    /// Display name, e.g. "Vegetarian"
    fn name(&self) -> &'static str;

    /// Value sent to the recipe API (lower-cased display name)
    fn param(&self) -> String {
        self.name().to_lowercase()
    }
}

fn parse_criterion<C: Criterion>(value: &str) -> Result<C, FinderError> {
    let wanted = value.trim();
    C::ALL
        .iter()
        .copied()
        .find(|c| c.name().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| FinderError::UnknownCriterion(wanted.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dietary {
    Vegetarian,
    Vegan,
}

impl Criterion for Dietary {
    const ALL: &'static [Self] = &[Dietary::Vegetarian, Dietary::Vegan];

    fn name(&self) -> &'static str {
        match self {
            Dietary::Vegetarian => "Vegetarian",
            Dietary::Vegan => "Vegan",
        }
    }
}

impl FromStr for Dietary {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_criterion(s)
    }
}

impl fmt::Display for Dietary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cuisine {
    Beef,
    Breakfast,
    Chicken,
    Dessert,
    Goat,
    Lamb,
    Miscellaneous,
    Pasta,
    Pork,
    Seafood,
    Side,
    Starter,
}

impl Criterion for Cuisine {
    const ALL: &'static [Self] = &[
        Cuisine::Beef,
        Cuisine::Breakfast,
        Cuisine::Chicken,
        Cuisine::Dessert,
        Cuisine::Goat,
        Cuisine::Lamb,
        Cuisine::Miscellaneous,
        Cuisine::Pasta,
        Cuisine::Pork,
        Cuisine::Seafood,
        Cuisine::Side,
        Cuisine::Starter,
    ];

    fn name(&self) -> &'static str {
        match self {
            Cuisine::Beef => "Beef",
            Cuisine::Breakfast => "Breakfast",
            Cuisine::Chicken => "Chicken",
            Cuisine::Dessert => "Dessert",
            Cuisine::Goat => "Goat",
            Cuisine::Lamb => "Lamb",
            Cuisine::Miscellaneous => "Miscellaneous",
            Cuisine::Pasta => "Pasta",
            Cuisine::Pork => "Pork",
            Cuisine::Seafood => "Seafood",
            Cuisine::Side => "Side",
            Cuisine::Starter => "Starter",
        }
    }
}

impl FromStr for Cuisine {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_criterion(s)
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Checkbox view of one criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCriterion {
    pub name: &'static str,
    pub checked: bool,
}

/// A single-select criterion set.
///
/// At most one criterion is selected at any time, so selecting one
/// implicitly clears its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<C> {
    selected: Option<C>,
}

impl<C> Default for Selection<C> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<C: Criterion> Selection<C> {
    /// Select `criterion`, clearing whichever sibling was selected
    pub fn select(&mut self, criterion: C) {
        self.selected = Some(criterion);
    }

    /// Checkbox semantics: checking selects, unchecking the selected one clears the set
    pub fn set(&mut self, criterion: C, checked: bool) {
        if checked {
            self.selected = Some(criterion);
        } else if self.selected == Some(criterion) {
            self.selected = None;
        }
    }

    pub fn selected(&self) -> Option<C> {
        self.selected
    }

    pub fn is_checked(&self, criterion: C) -> bool {
        self.selected == Some(criterion)
    }

    /// API values of every checked criterion
    pub fn checked_params(&self) -> Vec<String> {
        self.selected.iter().map(|c| c.param()).collect()
    }

    /// The whole set as checkboxes, in catalogue order
    pub fn criteria(&self) -> Vec<FilterCriterion> {
        C::ALL
            .iter()
            .map(|c| FilterCriterion {
                name: c.name(),
                checked: self.is_checked(*c),
            })
            .collect()
    }
}

/// Everything the user has entered on the finder page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub search_term: String,
    pub must_include_ingredients: String,
    pub dietary_restrictions: Selection<Dietary>,
    pub cuisine_categories: Selection<Cuisine>,
}

/// One recipe as displayed in the result list.
///
/// `category` and `source_url` are `None` until enrichment fills them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub category: Option<String>,
    pub source_url: Option<String>,
}

impl RecipeSummary {
    pub fn is_enriched(&self) -> bool {
        self.category.is_some() || self.source_url.is_some()
    }

    pub fn apply_details(&mut self, details: RecipeDetails) {
        self.category = details.category;
        self.source_url = details.source_url;
    }
}

/// Fields only available from a lookup-by-id call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetails {
    pub category: Option<String>,
    pub source_url: Option<String>,
}

/// Ordered results of one bulk query, replaced wholesale on every success
pub type ResultSet = Vec<RecipeSummary>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_criterion_case_insensitive() {
        assert_eq!("vegan".parse::<Dietary>().unwrap(), Dietary::Vegan);
        assert_eq!(" SEAFOOD ".parse::<Cuisine>().unwrap(), Cuisine::Seafood);
    }

    #[test]
    fn test_parse_unknown_criterion() {
        let err = "keto".parse::<Dietary>().unwrap_err();
        assert!(matches!(err, FinderError::UnknownCriterion(name) if name == "keto"));
    }

    #[test]
    fn test_param_is_lowercase() {
        assert_eq!(Dietary::Vegetarian.param(), "vegetarian");
        assert_eq!(Cuisine::Miscellaneous.param(), "miscellaneous");
    }

    #[test]
    fn test_selecting_second_criterion_clears_first() {
        let mut cuisine = Selection::default();
        cuisine.select(Cuisine::Beef);
        cuisine.select(Cuisine::Dessert);

        assert!(!cuisine.is_checked(Cuisine::Beef));
        assert!(cuisine.is_checked(Cuisine::Dessert));
        assert_eq!(
            cuisine.criteria().iter().filter(|c| c.checked).count(),
            1
        );
    }

    #[test]
    fn test_unchecking_only_clears_selected() {
        let mut dietary = Selection::default();
        dietary.set(Dietary::Vegan, true);
        dietary.set(Dietary::Vegetarian, false);
        assert_eq!(dietary.selected(), Some(Dietary::Vegan));

        dietary.set(Dietary::Vegan, false);
        assert_eq!(dietary.selected(), None);
        assert!(dietary.checked_params().is_empty());
    }

    #[test]
    fn test_sets_are_independent() {
        let mut state = SearchState::default();
        state.dietary_restrictions.select(Dietary::Vegetarian);
        state.cuisine_categories.select(Cuisine::Pasta);
        state.cuisine_categories.select(Cuisine::Pork);

        assert_eq!(state.dietary_restrictions.selected(), Some(Dietary::Vegetarian));
        assert_eq!(state.cuisine_categories.selected(), Some(Cuisine::Pork));
    }

    #[test]
    fn test_criteria_catalogue_order() {
        let names: Vec<_> = Selection::<Dietary>::default()
            .criteria()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Vegetarian", "Vegan"]);
        assert_eq!(Cuisine::ALL.len(), 12);
    }
}
