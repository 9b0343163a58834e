use std::fs::{self, File};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use quick_recipes::recipe::{FilterQuery, SeededRecipes};
use quick_recipes::{App, Config, Recipe, RecipeStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quick-recipes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Skip the simulated fetch delay
    #[arg(long, global = true)]
    no_delay: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every recipe
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Find recipes containing all the given ingredients
    Search {
        /// Comma-separated ingredients, e.g. "Banana, Milk"
        #[arg(default_value = "")]
        query: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show a recipe with its steps
    Show {
        /// Recipe name (case-insensitive)
        name: String,
    },
}

/// Initialize logging. The TUI owns the terminal, so it logs to a file.
fn init_logging(tui: bool) -> Result<()> {
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "quick_recipes=info".into()),
    );

    if tui {
        let path = Config::log_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file {:?}", path))?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.is_none())?;

    let mut config = Config::load()?;
    if cli.no_delay {
        config.fetch_delay_ms = 0;
    }

    match cli.command {
        Some(Commands::List { json }) => {
            let store = load_store(config.fetch_delay()).await;
            print_recipes(store.all(), json)?;
        }
        Some(Commands::Search { query, json }) => {
            let store = load_store(config.fetch_delay()).await;
            let query = FilterQuery::parse(&query);
            tracing::debug!(terms = ?query.terms(), "Searching");
            let found = query.apply(store.all());
            if found.is_empty() && !json {
                println!("No recipes found! Try different ingredients.");
            } else {
                print_recipes(&found, json)?;
            }
        }
        Some(Commands::Show { name }) => {
            let store = load_store(config.fetch_delay()).await;
            let Some(recipe) = store.find_by_name(&name) else {
                bail!("No recipe named '{}'", name);
            };
            print_details(recipe);
        }
        None => {
            // Launch TUI
            let mut app = App::new(config)?;
            app.run().await?;
        }
    }

    Ok(())
}

async fn load_store(delay: Duration) -> RecipeStore {
    RecipeStore::load(&SeededRecipes::new(delay)).await
}

fn print_recipes(recipes: &[Recipe], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(recipes).context("Failed to serialize recipes")?;
        println!("{out}");
    } else {
        for recipe in recipes {
            println!("{:<18} {}", recipe.name(), recipe.summary());
        }
    }
    Ok(())
}

fn print_details(recipe: &Recipe) {
    println!("{}", recipe.name());
    println!("Ingredients: {}", recipe.ingredients());
    println!("{} | {} min", recipe.nutrition(), recipe.time_minutes());
    println!();
    if recipe.steps().is_empty() {
        println!("{}", quick_recipes::recipe::COMPLETION_MESSAGE);
    }
    for (i, step) in recipe.steps().iter().enumerate() {
        println!("{:>2}. {}", i + 1, step);
    }
}
