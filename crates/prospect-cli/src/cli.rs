// Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::GenerationDefaults;
use crate::export::ExportFormat;

#[derive(Debug, Parser)]
#[command(name = "prospect")]
#[command(about = "Generate randomized football and basketball player profiles")]
#[command(version)]
pub struct Cli {
    /// Directory holding defaults/ and config/ (default: current directory)
    #[arg(long, global = true, env = "PROSPECT_HOME", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Database path, overriding storage.db_path
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a batch and add it to the stored collection
    Generate(GenerateArgs),
    /// Print the stored collection, newest batch first
    List,
    /// Export the stored collection
    Export(ExportArgs),
    /// Remove every stored player
    Clear,
    /// Show the position breakdown of the last generated batch
    Last,
}

/// Overrides for the `[defaults]` table. Unset flags keep the file value.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// american_football (football, nfl) or basketball (nba)
    #[arg(long)]
    pub sport: Option<String>,

    /// Position code (QB, WR, PG, G/F, ...)
    #[arg(long)]
    pub position: Option<String>,

    /// Use the chosen position (or the sport's first) for every player
    #[arg(long)]
    pub lock_position: bool,

    /// Number of players (1-200)
    #[arg(long, short = 'n')]
    pub quantity: Option<usize>,

    /// Generate a full draft class (60 basketball, 224 football)
    #[arg(long)]
    pub draft_class: bool,

    /// random, random_college, random_country, college or country
    #[arg(long)]
    pub origin: Option<String>,

    /// College used by --origin college
    #[arg(long)]
    pub college: Option<String>,

    /// Country used by --origin country
    #[arg(long)]
    pub country: Option<String>,

    /// Resolve the origin once for the whole batch
    #[arg(long)]
    pub lock_origin: bool,

    /// Manual age
    #[arg(long)]
    pub age: Option<i32>,

    /// Resolve the age once for the whole batch
    #[arg(long)]
    pub lock_age: bool,

    /// Manual height, feet part
    #[arg(long, requires = "weight")]
    pub height_feet: Option<i32>,

    /// Manual height, inches part
    #[arg(long, requires = "height_feet")]
    pub height_inches: Option<i32>,

    /// Manual weight in pounds
    #[arg(long, requires = "height_feet")]
    pub weight: Option<i32>,

    /// Resolve the size once for the whole batch
    #[arg(long)]
    pub lock_size: bool,

    /// Manual jersey number
    #[arg(long)]
    pub number: Option<String>,

    /// Seed text; the same seed and options repeat a batch
    #[arg(long)]
    pub seed: Option<String>,

    /// Replace the stored collection instead of adding to it
    #[arg(long)]
    pub clear_before: bool,
}

impl GenerateArgs {
    /// Layer these flags over the file defaults. Boolean flags can only turn
    /// a setting on.
    pub fn apply(&self, defaults: &mut GenerationDefaults) {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }

        set(&mut defaults.sport, &self.sport);
        set(&mut defaults.position, &self.position);
        set(&mut defaults.quantity, &self.quantity);
        set(&mut defaults.origin, &self.origin);
        set(&mut defaults.college, &self.college);
        set(&mut defaults.country, &self.country);
        set(&mut defaults.number, &self.number);
        set(&mut defaults.seed, &self.seed);

        if self.age.is_some() {
            defaults.age = self.age;
        }
        if self.height_feet.is_some() {
            defaults.height_feet = self.height_feet;
            defaults.height_inches = self.height_inches;
            defaults.weight_pounds = self.weight;
        }

        defaults.lock_position |= self.lock_position;
        defaults.draft_class |= self.draft_class;
        defaults.lock_origin |= self.lock_origin;
        defaults.lock_age |= self.lock_age;
        defaults.lock_size |= self.lock_size;
    }
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[arg(long, value_enum, default_value = "text")]
    pub format: ExportFormat,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}
