//! Sofra - mood-based food suggestions from the command line.
//!
//! Wires the local engine (sofra-core), SQLite storage (sofra-storage) and
//! the remote adapters (sofra-remote) behind a small set of subcommands.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use sofra_core::history::RECENT_WINDOW;
use sofra_core::{
    catalog, HistoryItem, Mood, NotificationTime, Quota, RateLimiter, RecommendationEngine, Region,
    SuggestionRequest, UserPreferences, DEFAULT_SUGGESTION_COUNT,
};
use sofra_remote::{
    AiAdapter, ApiClient, ApiConfig, CatalogProvider, NearbyRestaurant, PlacesAdapter,
    WeatherProvider,
};
use sofra_storage::Database;
use tracing_subscriber::EnvFilter;

/// Sofra - food suggestions that match your mood
#[derive(Parser, Debug)]
#[command(name = "sofra", version, about)]
struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Database path (defaults to the app data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest foods for a mood
    Suggest {
        /// Mood: happy, sad, energetic, tired, stressed or relaxed
        mood: String,
        /// City, used to surface regional specialties
        #[arg(long)]
        city: Option<String>,
        /// Number of foods to suggest
        #[arg(long, default_value_t = DEFAULT_SUGGESTION_COUNT)]
        count: usize,
        /// Restrict to a cuisine when possible
        #[arg(long)]
        cuisine: Option<String>,
    },
    /// Suggest again, avoiding foods already shown this session
    Refresh {
        mood: String,
        #[arg(long)]
        city: Option<String>,
        #[arg(long, default_value_t = DEFAULT_SUGGESTION_COUNT)]
        count: usize,
        #[arg(long)]
        cuisine: Option<String>,
        /// Food ids to avoid (repeatable)
        #[arg(long = "exclude")]
        exclude: Vec<String>,
    },
    /// Record an accepted suggestion into history
    Pick {
        /// Catalog food id
        food_id: String,
        mood: String,
        #[arg(long)]
        city: Option<String>,
    },
    /// Ask the AI backend for a personalized recommendation
    Ai {
        mood: String,
        #[arg(long)]
        city: Option<String>,
    },
    /// Find restaurants near a location
    Nearby {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        /// Food to search for; omit to list any restaurant nearby
        #[arg(long)]
        food: Option<String>,
        /// Search radius in meters
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Show current weather at a location
    Weather {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
    /// List the food catalog
    Foods {
        /// Only show specialties of one region (e.g. karadeniz)
        #[arg(long)]
        region: Option<String>,
        /// List known cuisines instead of foods
        #[arg(long)]
        cuisines: bool,
    },
    /// Pick one diet-compliant food to feature today
    Featured,
    /// Show or clear the suggestion history
    History {
        /// Delete all history entries
        #[arg(long)]
        clear: bool,
    },
    /// Manage favorite foods
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Show or change preferences
    Prefs {
        /// Set the vegetarian flag
        #[arg(long)]
        vegetarian: Option<bool>,
        /// Set the vegan flag (also turns vegetarian on)
        #[arg(long)]
        vegan: Option<bool>,
        /// Set the gluten-free flag
        #[arg(long)]
        gluten_free: Option<bool>,
        /// UI language: auto, tr or en
        #[arg(long)]
        language: Option<String>,
        /// Preferred cuisine ("none" to clear)
        #[arg(long)]
        cuisine: Option<String>,
        /// Enable or disable the daily notification
        #[arg(long)]
        notifications: Option<bool>,
        /// Daily notification time as HH:MM
        #[arg(long)]
        time: Option<String>,
        /// Reset everything to defaults
        #[arg(long)]
        reset: bool,
    },
    /// Show remaining daily API quota
    Quota,
    /// Check whether the backend is reachable
    Health,
}

#[derive(Subcommand, Debug)]
enum FavoritesAction {
    /// Add a food to favorites
    Add { food_id: String },
    /// Remove a food from favorites
    Remove { food_id: String },
    /// Toggle a favorite
    Toggle { food_id: String },
    /// List favorites, newest first
    List,
}

fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sofra={log_level},warn")));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn open_db(args: &Args) -> anyhow::Result<Database> {
    match &args.db {
        Some(path) => Database::with_path(path).context("opening database"),
        None => Database::new().context("opening database"),
    }
}

fn api_client(args: &Args) -> ApiClient {
    let mut config = ApiConfig::default();
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.trim_end_matches('/').to_string();
    }
    ApiClient::new(config)
}

fn parse_mood(s: &str) -> anyhow::Result<Mood> {
    Mood::parse(s).ok_or_else(|| {
        let known: Vec<&str> = Mood::all().iter().map(|m| m.as_str()).collect();
        anyhow!("unknown mood '{}', expected one of: {}", s, known.join(", "))
    })
}

fn print_suggestion(suggestion: &sofra_core::FoodSuggestion) {
    println!("{}", suggestion.message);
    if let Some(region) = &suggestion.region_name {
        if suggestion.is_regional {
            println!("({region} bölgesinden lezzetler)");
        }
    }
    if suggestion.foods.is_empty() {
        println!("Tercihlerine uyan bir yemek bulunamadı.");
        return;
    }
    for food in &suggestion.foods {
        println!("  {} {} [{}] - {}", food.emoji, food.name, food.id, food.description);
    }
}

fn print_restaurants(restaurants: &[NearbyRestaurant]) {
    if restaurants.is_empty() {
        println!("No restaurants found (or the daily Places quota is spent).");
        return;
    }
    for r in restaurants {
        let rating = r
            .rating
            .map(|v| format!("{v:.1}★"))
            .unwrap_or_else(|| "-".to_string());
        let open = match r.is_open {
            Some(true) => "open",
            Some(false) => "closed",
            None => "hours unknown",
        };
        println!("  {} ({rating}, {}, {open})", r.name, r.distance);
        println!("    {} {}", r.address, r.price_level);
        for review in &r.reviews {
            println!("    \"{}\" — {}", review.text, review.author);
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let engine = RecommendationEngine::new();

    match &args.command {
        Command::Suggest {
            mood,
            city,
            count,
            cuisine,
        } => {
            let mood = parse_mood(mood)?;
            let db = open_db(&args)?;
            let prefs = db.preferences()?;
            let provider = CatalogProvider::new(api_client(&args));
            let foods = provider.catalog(None, prefs.language).await;

            let recent: HashSet<String> = db
                .recent_food_ids(RECENT_WINDOW as i64)?
                .into_iter()
                .collect();
            let req = SuggestionRequest {
                mood,
                city: city.clone(),
                count: *count,
                cuisine: cuisine.clone(),
            };
            print_suggestion(&engine.suggest(&foods, &prefs, &recent, &req));
        }
        Command::Refresh {
            mood,
            city,
            count,
            cuisine,
            exclude,
        } => {
            let mood = parse_mood(mood)?;
            let db = open_db(&args)?;
            let prefs = db.preferences()?;
            let provider = CatalogProvider::new(api_client(&args));
            let foods = provider.catalog(None, prefs.language).await;

            let exclude: HashSet<String> = exclude.iter().cloned().collect();
            let req = SuggestionRequest {
                mood,
                city: city.clone(),
                count: *count,
                cuisine: cuisine.clone(),
            };
            print_suggestion(&engine.suggest_excluding(&foods, &prefs, &exclude, &req));
        }
        Command::Pick {
            food_id,
            mood,
            city,
        } => {
            let mood = parse_mood(mood)?;
            let db = open_db(&args)?;
            let prefs = db.preferences()?;
            let provider = CatalogProvider::new(api_client(&args));
            let foods = provider.catalog(None, prefs.language).await;

            let food = foods
                .into_iter()
                .find(|f| f.id == *food_id)
                .ok_or_else(|| anyhow!("no food with id '{food_id}' in the catalog"))?;
            let name = food.name.clone();
            db.add_to_history(&HistoryItem::new(food, mood, city.clone()))?;
            println!("Recorded {name} for mood {mood}.");
        }
        Command::Ai { mood, city } => {
            let mood = parse_mood(mood)?;
            let db = open_db(&args)?;
            let prefs = db.preferences()?;
            let client = api_client(&args);
            let provider = CatalogProvider::new(client.clone());
            let foods = provider.catalog(None, prefs.language).await;

            let adapter = AiAdapter::new(client, RateLimiter::new(db));
            match adapter
                .recommend(&foods, mood, city.as_deref(), &prefs)
                .await
            {
                Some(rec) => {
                    println!("{}", rec.recommendation);
                    if !rec.explanation.is_empty() {
                        println!("{}", rec.explanation);
                    }
                    for food in &rec.suggested_foods {
                        println!("  {} {} - {}", food.emoji, food.name, food.description);
                    }
                    for tip in &rec.tips {
                        println!("  İpucu: {tip}");
                    }
                }
                None => {
                    bail!("no AI recommendation available (quota spent or backend unreachable)")
                }
            }
        }
        Command::Nearby {
            lat,
            lon,
            food,
            radius,
        } => {
            let db = open_db(&args)?;
            let adapter = PlacesAdapter::new(api_client(&args), RateLimiter::new(db));
            let restaurants = match food {
                Some(food) => adapter.search_restaurants(food, *lat, *lon, *radius).await,
                None => adapter.search_nearby(*lat, *lon, *radius).await,
            };
            print_restaurants(&restaurants);
        }
        Command::Weather { lat, lon } => {
            let provider = WeatherProvider::new();
            match provider.current(*lat, *lon).await {
                Some(weather) => {
                    println!("{}°C, {}", weather.temperature, weather.condition)
                }
                None => bail!("weather unavailable"),
            }
        }
        Command::Foods { region, cuisines } => {
            let db = open_db(&args)?;
            let prefs = db.preferences()?;
            let region = match region.as_deref() {
                Some(s) => Some(Region::parse(s).ok_or_else(|| {
                    let known: Vec<&str> = Region::all().iter().map(|r| r.as_str()).collect();
                    anyhow!("unknown region '{}', expected one of: {}", s, known.join(", "))
                })?),
                None => None,
            };
            let provider = CatalogProvider::new(api_client(&args));
            let foods = provider.catalog(region, prefs.language).await;

            if *cuisines {
                for cuisine in catalog::cuisines(&foods) {
                    println!("{cuisine}");
                }
            } else {
                for food in &foods {
                    println!("  {} {} [{}] - {}", food.emoji, food.name, food.id, food.description);
                }
                println!("{} foods", foods.len());
            }
        }
        Command::Featured => {
            let db = open_db(&args)?;
            let prefs = db.preferences()?;
            let provider = CatalogProvider::new(api_client(&args));
            let foods = provider.catalog(None, prefs.language).await;

            match engine.featured_food(&foods, &prefs) {
                Some(food) => println!("{} {} - {}", food.emoji, food.name, food.description),
                None => bail!("preferences exclude every food in the catalog"),
            }
        }
        Command::History { clear } => {
            let db = open_db(&args)?;
            if *clear {
                let deleted = db.clear_history()?;
                println!("Removed {deleted} entries.");
            } else {
                let items = db.history(sofra_core::HISTORY_LIMIT as i64)?;
                if items.is_empty() {
                    println!("History is empty.");
                }
                for item in items {
                    let city = item.city.as_deref().unwrap_or("-");
                    println!(
                        "  {} {} ({}, {city}, {})",
                        item.food.emoji,
                        item.food.name,
                        item.mood,
                        item.date.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }
        Command::Favorites { action } => {
            let db = open_db(&args)?;
            match action {
                FavoritesAction::Add { food_id } => {
                    let food = find_in_catalog(&args, &db, food_id).await?;
                    db.add_favorite(&food)?;
                    println!("Added {}.", food.name);
                }
                FavoritesAction::Remove { food_id } => {
                    if db.remove_favorite(food_id)? {
                        println!("Removed.");
                    } else {
                        println!("Not a favorite.");
                    }
                }
                FavoritesAction::Toggle { food_id } => {
                    let food = find_in_catalog(&args, &db, food_id).await?;
                    if db.toggle_favorite(&food)? {
                        println!("Added {}.", food.name);
                    } else {
                        println!("Removed {}.", food.name);
                    }
                }
                FavoritesAction::List => {
                    let favorites = db.favorites()?;
                    if favorites.is_empty() {
                        println!("No favorites yet.");
                    }
                    for food in favorites {
                        println!("  {} {} [{}]", food.emoji, food.name, food.id);
                    }
                }
            }
        }
        Command::Prefs {
            vegetarian,
            vegan,
            gluten_free,
            language,
            cuisine,
            notifications,
            time,
            reset,
        } => {
            let db = open_db(&args)?;
            if *reset {
                db.reset_preferences()?;
                println!("Preferences reset to defaults.");
                return Ok(());
            }

            let mut prefs = db.preferences()?;
            let mut changed = false;

            // Order matters: an explicit vegetarian flag is applied after
            // vegan so `--vegan true --vegetarian false` ends up consistent.
            if let Some(on) = vegan {
                prefs.set_vegan(*on);
                changed = true;
            }
            if let Some(on) = vegetarian {
                prefs.set_vegetarian(*on);
                changed = true;
            }
            if let Some(on) = gluten_free {
                prefs.set_gluten_free(*on);
                changed = true;
            }
            if let Some(language) = language {
                prefs.language = sofra_core::Language::parse(language)
                    .ok_or_else(|| anyhow!("unknown language '{language}', expected auto, tr or en"))?;
                changed = true;
            }
            if let Some(cuisine) = cuisine {
                prefs.preferred_cuisine = if cuisine == "none" {
                    None
                } else {
                    Some(cuisine.clone())
                };
                changed = true;
            }
            if let Some(on) = notifications {
                prefs.notifications_enabled = *on;
                changed = true;
            }
            if let Some(time) = time {
                prefs.notification_time = NotificationTime::parse(time)
                    .ok_or_else(|| anyhow!("invalid time '{time}', expected HH:MM"))?;
                changed = true;
            }

            if changed {
                db.save_preferences(&prefs)?;
            }
            print_prefs(&prefs);
        }
        Command::Quota => {
            let db = open_db(&args)?;
            let config = ApiConfig::default();
            let limiter = RateLimiter::new(db);
            println!(
                "AI: {}/{} calls left today",
                limiter.remaining(Quota::Ai, config.ai_daily_limit),
                config.ai_daily_limit
            );
            println!(
                "Places: {}/{} calls left today",
                limiter.remaining(Quota::Places, config.places_daily_limit),
                config.places_daily_limit
            );
        }
        Command::Health => {
            let client = api_client(&args);
            if client.health().await {
                println!("Backend is reachable.");
            } else {
                bail!("backend is unreachable");
            }
        }
    }

    Ok(())
}

async fn find_in_catalog(
    args: &Args,
    db: &Database,
    food_id: &str,
) -> anyhow::Result<sofra_core::Food> {
    let prefs = db.preferences()?;
    let provider = CatalogProvider::new(api_client(args));
    provider
        .catalog(None, prefs.language)
        .await
        .into_iter()
        .find(|f| f.id == food_id)
        .ok_or_else(|| anyhow!("no food with id '{food_id}' in the catalog"))
}

fn print_prefs(prefs: &UserPreferences) {
    println!("vegetarian:     {}", prefs.is_vegetarian);
    println!("vegan:          {}", prefs.is_vegan);
    println!("gluten-free:    {}", prefs.is_gluten_free);
    println!("language:       {}", prefs.language.as_str());
    println!(
        "cuisine:        {}",
        prefs.preferred_cuisine.as_deref().unwrap_or("-")
    );
    println!("notifications:  {}", prefs.notifications_enabled);
    println!("notify at:      {}", prefs.notification_time);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    run(args).await
}
