use clap::{Parser, Subcommand};

/// MealLog — count calories per meal against a daily goal.
#[derive(Parser, Debug)]
#[command(name = "meal_log")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the meal storage slots.
    #[arg(short, long, default_value = ".meal_log")]
    pub dir: String,

    /// Storage slot holding the meal list.
    #[arg(short, long, default_value = "meals")]
    pub slot: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive meal screen.
    Screen,

    /// Print the logged meals, total and warnings.
    List,

    /// Log a new meal.
    Add {
        /// Meal name.
        meal: String,

        /// Calories (whole number).
        calories: String,

        /// Meal type, e.g. Breakfast.
        meal_type: String,
    },

    /// Change a logged meal, found by id or name.
    Edit {
        /// Id or name of the meal.
        target: String,

        /// New meal name.
        #[arg(long)]
        meal: Option<String>,

        /// New calories.
        #[arg(long)]
        calories: Option<String>,

        /// New meal type.
        #[arg(long)]
        meal_type: Option<String>,
    },

    /// Delete a logged meal, found by id or name.
    Delete {
        /// Id or name of the meal.
        target: String,
    },

    /// Export the logged meals as CSV.
    Export {
        /// Output file.
        out: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Screen
    }
}
