use thiserror::Error;

/// Errors that can occur while searching for recipes
#[derive(Error, Debug)]
pub enum FinderError {
    /// Transport failure talking to the recipe API
    #[error("Failed to fetch recipes: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("Recipe API responded with status {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape
    #[error("Failed to decode recipe response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured API base URL could not be turned into a request URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// A newer query or a reset replaced this one before it settled
    #[error("Query was superseded by a newer query")]
    Superseded,

    /// A dietary restriction or cuisine name that is not in the catalogue
    #[error("Unknown criterion: {0}")]
    UnknownCriterion(String),

    /// An interactive command that could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
