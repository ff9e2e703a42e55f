use crate::models::MealEntry;
use crate::state::MealLedger;
use crate::tally::{
    DUPLICATE_WARNING, LIMIT_WARNING, SAVE_LABEL, SCREEN_TITLE, UPDATE_LABEL,
};

/// `"{name} - {calories} kcal - {mealType}"`
pub fn format_entry(entry: &MealEntry) -> String {
    format!("{} - {} kcal - {}", entry.name, entry.calories, entry.meal_type)
}

pub fn format_total(total: u64) -> String {
    format!("Total Calories: {} kcal", total)
}

pub fn format_goal(goal: u64) -> String {
    format!("Daily Goal: {} kcal", goal)
}

/// Primary button label for the current mode.
pub fn action_label(editing: bool) -> &'static str {
    if editing { UPDATE_LABEL } else { SAVE_LABEL }
}

/// Warning texts currently active, limit first.
pub fn active_warnings(ledger: &MealLedger) -> Vec<&'static str> {
    let mut warnings = Vec::new();
    if ledger.limit_reached() {
        warnings.push(LIMIT_WARNING);
    }
    if ledger.meal_exists_warning() {
        warnings.push(DUPLICATE_WARNING);
    }
    warnings
}

/// Every line of the screen, top to bottom, without decoration.
pub fn screen_lines(ledger: &MealLedger) -> Vec<String> {
    let mut lines = vec![SCREEN_TITLE.to_string()];
    lines.extend(ledger.entries().iter().map(format_entry));
    lines.push(format_total(ledger.total_calories()));
    lines.push(format_goal(ledger.daily_goal()));
    lines.extend(active_warnings(ledger).into_iter().map(str::to_string));
    lines
}

/// Print the screen to stdout.
pub fn display_screen(ledger: &MealLedger) {
    println!();
    println!("=== {} ===", SCREEN_TITLE);
    println!();

    if ledger.is_empty() {
        println!("  (no meals logged)");
    }
    for (i, entry) in ledger.entries().iter().enumerate() {
        let marker = if ledger.editing_id() == Some(&entry.id) {
            " *"
        } else {
            ""
        };
        println!("{:>3}. {}{}", i + 1, format_entry(entry), marker);
    }

    println!();
    println!("{}", format_total(ledger.total_calories()));
    println!("{}", format_goal(ledger.daily_goal()));

    for warning in active_warnings(ledger) {
        println!("{}", warning);
    }

    let draft = ledger.draft();
    if ledger.is_editing() {
        println!();
        println!("Editing: {} - {} kcal - {}", draft.name, draft.calories, draft.meal_type);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryId;

    #[test]
    fn test_format_entry() {
        let entry = MealEntry::new(EntryId::from("1"), "Pizza", "800", "Dinner");
        assert_eq!(format_entry(&entry), "Pizza - 800 kcal - Dinner");
    }

    #[test]
    fn test_format_total_and_goal() {
        assert_eq!(format_total(550), "Total Calories: 550 kcal");
        assert_eq!(format_goal(2500), "Daily Goal: 2500 kcal");
    }

    #[test]
    fn test_action_label() {
        assert_eq!(action_label(false), "Save Meal");
        assert_eq!(action_label(true), "Update Meal");
    }
}
