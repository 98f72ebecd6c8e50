use clap::{Parser, Subcommand};
use log::{debug, error};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use recipe_finder::pages::static_page;
use recipe_finder::render::{render_finder, render_json, render_nav, render_static_page};
use recipe_finder::shell::{ShellCommand, HELP};
use recipe_finder::{
    Cuisine, Dietary, FinderConfig, FinderError, MealDbClient, Page, QueryOutcome, RecipeFinder,
    SearchState,
};

#[derive(Parser)]
#[command(name = "recipe-finder")]
#[command(version)]
#[command(about = "Find recipes on TheMealDB by name, diet, cuisine and ingredient", long_about = None)]
struct Cli {
    /// Override the recipe API base URL
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one query and print the results
    Search {
        /// Search by recipe name (filters are ignored when set)
        #[arg(short, long)]
        name: Option<String>,

        /// Dietary restriction (Vegetarian, Vegan)
        #[arg(short, long)]
        diet: Option<Dietary>,

        /// Cuisine category (Beef, Dessert, Seafood, ...)
        #[arg(short, long)]
        cuisine: Option<Cuisine>,

        /// Ingredient every recipe must include
        #[arg(short, long)]
        ingredient: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Skip the per-recipe category/source lookups
        #[arg(long)]
        no_enrich: bool,
    },

    /// Print the page at a path (/, /about, /code-requirements, /questions, /contact)
    Page {
        #[arg(default_value = "/")]
        path: String,
    },

    /// Interactive finder
    Shell,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, FinderError> {
    let mut config = FinderConfig::load()?;
    if let Some(url) = cli.api_base_url {
        config.api_base_url = url;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    debug!("Using configuration: {:?}", config);

    match cli.command {
        Commands::Search {
            name,
            diet,
            cuisine,
            ingredient,
            json,
            no_enrich,
        } => {
            let mut state = SearchState {
                search_term: name.unwrap_or_default(),
                must_include_ingredients: ingredient.unwrap_or_default(),
                ..Default::default()
            };
            if let Some(diet) = diet {
                state.dietary_restrictions.select(diet);
            }
            if let Some(cuisine) = cuisine {
                state.cuisine_categories.select(cuisine);
            }

            let finder = build_finder(&config)?.with_enrichment(config.enrich && !no_enrich);
            finder.update(|session| session.load_state(state));
            let outcome = finder.search().await;
            let session = finder.snapshot();

            if json {
                println!("{}", render_json(session.results())?);
            } else {
                print!("{}", render_finder(&session));
            }

            Ok(match outcome {
                QueryOutcome::Failed(_) => ExitCode::FAILURE,
                _ => ExitCode::SUCCESS,
            })
        }

        Commands::Page { path } => {
            let finder = build_finder(&config)?;
            if !show_page(&finder, &config, &path).await {
                eprintln!("No page at {}", path);
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Shell => {
            let finder = build_finder(&config)?;
            run_shell(&finder, &config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_finder(config: &FinderConfig) -> Result<RecipeFinder<MealDbClient>, FinderError> {
    RecipeFinder::builder().config(config).build()
}

/// Print the page at `path`. Opening the finder page runs its query first.
async fn show_page(finder: &RecipeFinder<MealDbClient>, config: &FinderConfig, path: &str) -> bool {
    let Some(page) = Page::route(path) else {
        return false;
    };

    println!("{}\n", render_nav(page));
    match static_page(page, config) {
        Some(content) => print!("{}", render_static_page(&content)),
        None => {
            finder.search().await;
            print!("{}", render_finder(&finder.snapshot()));
        }
    }
    true
}

async fn run_shell(
    finder: &RecipeFinder<MealDbClient>,
    config: &FinderConfig,
) -> Result<(), FinderError> {
    println!("{}\n", render_nav(Page::Home));
    if config.fetch_on_start {
        finder.search().await;
    }
    print!("{}", render_finder(&finder.snapshot()));
    println!("\nType 'help' for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            debug!("Failed to flush stdout: {}", e);
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            ShellCommand::Name(term) => finder.update(|s| s.set_search_term(term)),
            ShellCommand::Diet { dietary, checked } => {
                finder.update(|s| s.set_dietary(dietary, checked))
            }
            ShellCommand::Cuisine(cuisine) => finder.update(|s| s.select_cuisine(cuisine)),
            ShellCommand::Ingredient(text) => {
                finder.update(|s| s.set_must_include_ingredients(text))
            }
            ShellCommand::Search => {
                finder.search().await;
                print!("{}", render_finder(&finder.snapshot()));
            }
            ShellCommand::Reset => {
                finder.update(|s| s.reset());
                print!("{}", render_finder(&finder.snapshot()));
            }
            ShellCommand::Show => print!("{}", render_finder(&finder.snapshot())),
            ShellCommand::Go(path) => {
                if !show_page(finder, config, &path).await {
                    println!("No page at {}", path);
                }
            }
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => break,
            ShellCommand::Nothing => {}
        }
    }

    Ok(())
}
