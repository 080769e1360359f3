use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Daily menu planner: turns a profile's calorie target into a scaled, macro-balanced menu.
#[derive(Parser, Debug)]
#[command(name = "daily_menu_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the profile JSON file.
    #[arg(short, long, default_value = "profile.json")]
    pub profile: PathBuf,

    /// Replacement food catalog (CSV: name,category,calories,protein,fat,carbs per 100 g).
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Food table used to search for extras (JSON array).
    #[arg(short, long, default_value = "foods.json")]
    pub foods: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a day's menu from the profile's calorie target.
    Plan {
        /// Use this daily calorie target instead of the profile's.
        #[arg(long)]
        calories: Option<f64>,

        /// Random seed for a reproducible menu.
        #[arg(long)]
        seed: Option<u64>,

        /// Write the menu as JSON.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the menu as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show BMR, TDEE and the recommended daily calories.
    Energy,

    /// Generate a menu and edit it interactively.
    Session {
        /// Use this daily calorie target instead of the profile's.
        #[arg(long)]
        calories: Option<f64>,

        /// Random seed for reproducible menus.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Enter or update the profile.
    Profile,

    /// List the food catalog.
    Catalog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            calories: None,
            seed: None,
            json: None,
            csv: None,
        }
    }
}
