use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use daily_menu_planner::catalog::FoodCatalog;
use daily_menu_planner::cli::{Cli, Command};
use daily_menu_planner::error::{PlannerError, Result};
use daily_menu_planner::interface::{
    SessionAction, display_catalog, display_energy, display_generation_report, display_menu,
    display_search_results, prompt_catalog_item, prompt_extra_to_remove, prompt_profile,
    prompt_search_pick, prompt_search_query, prompt_session_action, prompt_slot_category,
    prompt_yes_no,
};
use daily_menu_planner::models::Profile;
use daily_menu_planner::planner::{MenuSession, compute_energy};
use daily_menu_planner::search::{FoodSearch, LocalFoodSearch};
use daily_menu_planner::state::{load_profile, save_menu_json, save_profile, write_menu_csv};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            calories,
            seed,
            json,
            csv,
        } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            cmd_plan(&cli.profile, &catalog, calories, seed, json.as_deref(), csv.as_deref())
        }
        Command::Energy => cmd_energy(&cli.profile),
        Command::Session { calories, seed } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            cmd_session(&cli.profile, &catalog, &cli.foods, calories, seed)
        }
        Command::Profile => cmd_profile(&cli.profile),
        Command::Catalog => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            display_catalog(&catalog);
            Ok(())
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<FoodCatalog> {
    match path {
        Some(p) => FoodCatalog::from_csv(p),
        None => Ok(FoodCatalog::bundled()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Resolve the daily calorie target: explicit override, else the profile's.
///
/// Returns `None` when the profile cannot produce a target.
fn daily_target(profile_path: &Path, override_calories: Option<f64>) -> Result<Option<f64>> {
    if let Some(calories) = override_calories {
        return Ok(Some(calories));
    }

    if !profile_path.exists() {
        eprintln!("Profile file not found: {}", profile_path.display());
        eprintln!("Run the 'profile' command or pass --calories.");
        return Ok(None);
    }

    let profile = load_profile(profile_path)?;
    match compute_energy(&profile) {
        Ok(energy) => Ok(Some(energy.recommended_daily_calories as f64)),
        Err(e @ PlannerError::Unavailable(_)) => {
            println!("{}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Generate and display a menu, optionally exporting it.
fn cmd_plan(
    profile_path: &Path,
    catalog: &FoodCatalog,
    calories: Option<f64>,
    seed: Option<u64>,
    json: Option<&Path>,
    csv: Option<&Path>,
) -> Result<()> {
    let Some(daily) = daily_target(profile_path, calories)? else {
        return Ok(());
    };

    let mut session = MenuSession::new(catalog, make_rng(seed));
    let report = session.generate(daily);

    display_menu(&session);
    display_generation_report(&report);

    let snapshot = session.snapshot();
    if let Some(path) = json {
        save_menu_json(path, &snapshot)?;
        info!(path = %path.display(), "menu written as JSON");
    }
    if let Some(path) = csv {
        write_menu_csv(path, &snapshot)?;
        info!(path = %path.display(), "menu written as CSV");
    }

    Ok(())
}

/// Show the energy model output for the profile.
fn cmd_energy(profile_path: &Path) -> Result<()> {
    if !profile_path.exists() {
        eprintln!("Profile file not found: {}", profile_path.display());
        return Ok(());
    }

    let profile = load_profile(profile_path)?;
    match compute_energy(&profile) {
        Ok(energy) => display_energy(&energy, &profile),
        Err(e @ PlannerError::Unavailable(_)) => println!("{}", e),
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Prompt for the profile and save it.
fn cmd_profile(profile_path: &Path) -> Result<()> {
    let current = if profile_path.exists() {
        load_profile(profile_path)?
    } else {
        Profile::default()
    };

    let profile = prompt_profile(&current)?;

    match compute_energy(&profile) {
        Ok(energy) => display_energy(&energy, &profile),
        Err(e) => println!("{}", e),
    }

    if prompt_yes_no("Save profile?", true)? {
        save_profile(profile_path, &profile)?;
        println!("Profile saved.");
    }
    Ok(())
}

/// Interactive loop: generate once, then replace/add/remove/reset until quit.
fn cmd_session(
    profile_path: &Path,
    catalog: &FoodCatalog,
    foods_path: &Path,
    calories: Option<f64>,
    seed: Option<u64>,
) -> Result<()> {
    let Some(daily) = daily_target(profile_path, calories)? else {
        return Ok(());
    };

    let search = if foods_path.exists() {
        LocalFoodSearch::from_json(foods_path)?
    } else {
        warn!(path = %foods_path.display(), "food table not found, extras search disabled");
        LocalFoodSearch::default()
    };

    let mut session = MenuSession::new(catalog, make_rng(seed));
    let report = session.generate(daily);
    display_menu(&session);
    display_generation_report(&report);

    loop {
        match prompt_session_action()? {
            SessionAction::Show => display_menu(&session),
            SessionAction::Replace => {
                let (slot, category) = prompt_slot_category()?;
                let items = catalog.items_for(slot, category);
                if items.is_empty() {
                    println!("{}", PlannerError::EmptyCategory { slot, category });
                    continue;
                }
                let Some(id) = prompt_catalog_item(&items)? else {
                    continue;
                };
                match session.replace(slot, category, &id) {
                    Ok(item) => println!(
                        "{} {}: {} {:.1}g ({:.0} kcal)",
                        slot, category, item.name, item.quantity_grams, item.calories
                    ),
                    Err(e) => println!("{}", e),
                }
            }
            SessionAction::AddExtra => {
                let query = prompt_search_query()?;
                if query.is_empty() {
                    continue;
                }
                let results = match search.search(&query) {
                    Ok(r) => r,
                    Err(e) => {
                        println!("{} (try again)", e);
                        continue;
                    }
                };
                display_search_results(&results);
                if results.is_empty() {
                    continue;
                }
                if let Some(food) = prompt_search_pick(&results)? {
                    let label = food.label.clone();
                    match session.add_extra(food) {
                        Ok(Some(_)) => println!("Replaced extra: {}", label),
                        Ok(None) => println!("Added extra: {}", label),
                        Err(e) => println!("{}", e),
                    }
                }
            }
            SessionAction::RemoveExtra => {
                let names: Vec<String> = session
                    .selection()
                    .extras()
                    .map(|f| f.label.clone())
                    .collect();
                if names.is_empty() {
                    println!("No extras to remove.");
                    continue;
                }
                if let Some(name) = prompt_extra_to_remove(&names)? {
                    if session.remove_extra(&name).is_some() {
                        println!("Removed extra: {}", name);
                    }
                }
            }
            SessionAction::Reset => {
                let report = session.reset();
                display_menu(&session);
                display_generation_report(&report);
            }
            SessionAction::Quit => break,
        }
    }

    let totals = session.totals();
    println!(
        "Final: {:.0} kcal | P {:.1} g | F {:.1} g | C {:.1} g",
        totals.calories, totals.protein, totals.fat, totals.carbs
    );
    Ok(())
}
