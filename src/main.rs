use clap::{Parser, Subcommand};
use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_finder::ingredients::{canonical_units, parse_ingredient};
use recipe_finder::render::{format_count, render_item, TextView};
use recipe_finder::shell::{self, ShellInput};
use recipe_finder::{App, AppConfig, Command, ViewUpdate};

#[derive(Parser)]
#[command(name = "recipe-finder", version)]
#[command(about = "Search recipes, scale servings, keep a shopping list and favorites", long_about = None)]
struct Cli {
    /// Recipe API base URL (overrides configuration)
    #[arg(long, env = "RECIPE_FINDER_API", global = true)]
    api: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes
    Search {
        /// Words to search for
        #[arg(required = true)]
        query: Vec<String>,

        /// Result page to show (1-based)
        #[arg(long, short = 'p', default_value_t = 1)]
        page: usize,
    },

    /// Show a recipe with its ingredients
    Recipe {
        id: String,

        /// Scale ingredients to this many servings
        #[arg(long, short = 's')]
        servings: Option<u32>,
    },

    /// Like a recipe, or unlike it if already liked
    Like { id: String },

    /// List favorite recipes
    Likes,

    /// Parse ingredient lines and print count, unit and name
    Parse {
        /// Ingredient lines (quote each one)
        lines: Vec<String>,
    },

    /// Interactive session with shopping list
    Shell,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if let Commands::Parse { lines } = &cli.command {
        print_parsed(lines);
        return Ok(());
    }

    let config = AppConfig::load()?;
    let mut builder = App::builder().config(&config);
    if let Some(url) = cli.api {
        builder = builder.base_url(url);
    }
    let mut app = builder.build()?;
    let view = TextView {
        minutes_per_ingredient: app.settings().minutes_per_ingredient,
    };

    match cli.command {
        Commands::Search { query, page } => {
            let updates = app.dispatch(Command::SearchSubmitted(query.join(" "))).await;
            if page > 1 && app.search().is_some() {
                print_updates(&view, &app.dispatch(Command::PageRequested(page - 1)).await);
            } else {
                print_updates(&view, &updates);
            }
        }
        Commands::Recipe { id, servings } => {
            app.dispatch(Command::PageLoaded).await;
            let mut updates = app.dispatch(Command::RecipeSelected(id)).await;
            if let Some(servings) = servings {
                let liked = app
                    .recipe()
                    .is_some_and(|recipe| app.likes().is_liked(&recipe.id));
                if let Some(recipe) = app.recipe_mut() {
                    recipe.set_servings(servings);
                    updates = vec![ViewUpdate::RecipeRendered {
                        recipe: recipe.clone(),
                        liked,
                    }];
                }
            }
            print_updates(&view, &updates);
        }
        Commands::Like { id } => {
            app.dispatch(Command::PageLoaded).await;
            let loaded = app.dispatch(Command::RecipeSelected(id)).await;
            if app.recipe().is_none() {
                print_updates(&view, &loaded);
            } else {
                print_updates(&view, &app.dispatch(Command::LikeToggled).await);
            }
        }
        Commands::Likes => {
            print_updates(&view, &app.dispatch(Command::PageLoaded).await);
        }
        Commands::Shell => run_shell(&mut app, &view).await?,
        Commands::Parse { lines } => print_parsed(&lines),
    }

    Ok(())
}

async fn run_shell(app: &mut App, view: &TextView) -> Result<(), Box<dyn std::error::Error>> {
    print_updates(view, &app.dispatch(Command::PageLoaded).await);
    println!("type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match shell::parse_line(&line) {
            Ok(ShellInput::Command(command)) => {
                let updates = app.dispatch(command).await;
                debug!("{} view updates", updates.len());
                print_updates(view, &updates);
            }
            Ok(ShellInput::ShowList) => match app.list() {
                Some(list) if !list.is_empty() => {
                    for item in list.items() {
                        println!("{}", render_item(item));
                    }
                }
                _ => println!("Shopping list is empty"),
            },
            Ok(ShellInput::ShowLikes) => {
                let likes = app.likes().likes().to_vec();
                println!("{}", view.render(&ViewUpdate::LikesRestored(likes)));
            }
            Ok(ShellInput::Help(text)) => println!("{}", text),
            Ok(ShellInput::Quit) => break,
            Ok(ShellInput::Empty) => {}
            Err(message) => eprintln!("{}", message),
        }
    }

    Ok(())
}

fn print_updates(view: &TextView, updates: &[ViewUpdate]) {
    for update in updates {
        match update {
            ViewUpdate::Notification(_) => eprintln!("{}", view.render(update)),
            _ => println!("{}", view.render(update)),
        }
    }
}

fn print_parsed(lines: &[String]) {
    if lines.is_empty() {
        println!("known units: {}", canonical_units().join(", "));
        return;
    }
    for line in lines {
        let ingredient = parse_ingredient(line);
        println!(
            "{:>8} | {:<6} | {}",
            format_count(ingredient.count),
            ingredient.unit,
            ingredient.ingredient
        );
    }
}
