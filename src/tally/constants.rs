/// Daily calorie goal; totals strictly above it raise the limit warning.
pub const DAILY_CONSUMPTION_GOAL: u64 = 2500;

/// Shown while the running total exceeds the daily goal.
pub const LIMIT_WARNING: &str = "Warnung: Sie haben das tägliche Kalorienlimit überschritten!";

/// Shown after a save attempt named an already logged meal.
pub const DUPLICATE_WARNING: &str = "Fehler: Diese Mahlzeit ist bereits gespeichert!";

/// Screen header.
pub const SCREEN_TITLE: &str = "Calories-Counting";

/// Primary action label in create mode.
pub const SAVE_LABEL: &str = "Save Meal";

/// Primary action label in edit mode.
pub const UPDATE_LABEL: &str = "Update Meal";

// ─────────────────────────────────────────────────────────────────────────────
// Input placeholders
// ─────────────────────────────────────────────────────────────────────────────

pub const MEAL_PLACEHOLDER: &str = "Enter your Meal";
pub const CALORIES_PLACEHOLDER: &str = "Enter your Calories";
pub const MEAL_TYPE_PLACEHOLDER: &str = "Enter your Meal Type";

/// Default storage slot holding the JSON list.
pub const DEFAULT_SLOT: &str = "meals";

/// Minimum Jaro-Winkler score for a fuzzy entry match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;
