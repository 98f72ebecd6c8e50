use crate::config::FinderConfig;

/// Every page reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    CodeRequirements,
    Questions,
    Contact,
}

impl Page {
    /// Pages in navigation bar order
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::CodeRequirements,
        Page::Questions,
        Page::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::CodeRequirements => "/code-requirements",
            Page::Questions => "/questions",
            Page::Contact => "/contact",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::CodeRequirements => "Code Requirements",
            Page::Questions => "Questions",
            Page::Contact => "Contact Us",
        }
    }

    /// Resolve a path to a page. A trailing slash is ignored and an
    /// unknown path has no page.
    pub fn route(path: &str) -> Option<Page> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        Page::ALL.into_iter().find(|page| page.path() == normalized)
    }
}

/// A page whose content does not depend on search state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPage {
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<String>,
    pub paragraphs: Vec<String>,
}

impl Section {
    fn new(heading: Option<&str>, paragraphs: &[&str]) -> Self {
        Section {
            heading: heading.map(str::to_string),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Content of a static page; `None` for the finder page, which is rendered from a session
pub fn static_page(page: Page, config: &FinderConfig) -> Option<StaticPage> {
    match page {
        Page::Home => None,
        Page::About => Some(about()),
        Page::CodeRequirements => Some(code_requirements()),
        Page::Questions => Some(questions()),
        Page::Contact => Some(contact(config)),
    }
}

fn about() -> StaticPage {
    StaticPage {
        title: "About Recipe Finder".to_string(),
        sections: vec![Section::new(
            None,
            &[
                "Recipe Finder helps you discover recipes from a large public collection, \
                 covering everyday dinners as well as desserts and special occasions.",
                "Search recipes by name, or narrow the list by dietary restriction, cuisine \
                 category and an ingredient the recipe must include.",
                "Pick a recipe, follow the link to its full instructions, and start cooking.",
            ],
        )],
    }
}

fn code_requirements() -> StaticPage {
    StaticPage {
        title: "Code Requirements".to_string(),
        sections: vec![
            Section::new(
                None,
                &["How the pieces of Recipe Finder fit together."],
            ),
            Section::new(
                Some("Criterion sets"),
                &[
                    "Dietary restrictions (Vegetarian, Vegan) and cuisine categories (Beef, \
                     Chicken, Dessert and more) are single-select sets: choosing one entry \
                     clears any other entry in the same set.",
                    "Results hold the recipes returned by the last successful query. Each \
                     result is looked up again by id to fill in its category and source link.",
                ],
            ),
            Section::new(
                Some("Queries"),
                &[
                    "A search term sends a name search and ignores every filter. Without a \
                     search term the filters are sent to the filter endpoint: dietary first, \
                     then cuisine, then the must-include ingredient.",
                    "Every query carries a token. Results from a query that has since been \
                     replaced, or cleared by a reset, are dropped.",
                ],
            ),
            Section::new(
                Some("Routes"),
                &[
                    "The navigation bar links the finder page with the About, Code \
                     Requirements, Questions and Contact Us pages.",
                ],
            ),
            Section::new(
                Some("API"),
                &["Recipes come from TheMealDB (themealdb.com)."],
            ),
        ],
    }
}

fn questions() -> StaticPage {
    StaticPage {
        title: "Additional Questions".to_string(),
        sections: vec![
            Section::new(
                Some("What was the most satisfying part of this project?"),
                &[
                    "Working out that name searches and filtered searches need different API \
                     endpoints, and choosing between them from the user's input.",
                ],
            ),
            Section::new(
                Some("What was the most useful thing we learned in this class?"),
                &[
                    "Client-side routing: each page lives at its own path and switching \
                     between them never reloads the whole page, which made moving around \
                     the site much simpler.",
                ],
            ),
            Section::new(
                Some("What would come next?"),
                &[
                    "Letting users add their own recipes when they cannot find one, which \
                     needs somewhere to store them.",
                ],
            ),
        ],
    }
}

fn contact(config: &FinderConfig) -> StaticPage {
    let line = match &config.contact_email {
        Some(email) => format!("You can reach us via email at {email}"),
        None => "Contact details have not been configured.".to_string(),
    };

    StaticPage {
        title: "Contact Us".to_string(),
        sections: vec![Section {
            heading: None,
            paragraphs: vec![line],
        }],
    }
}
