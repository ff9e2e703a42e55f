use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{Draft, EntryId, MealEntry};
use crate::tally::{
    CALORIES_PLACEHOLDER, FUZZY_MATCH_THRESHOLD, MEAL_PLACEHOLDER, MEAL_TYPE_PLACEHOLDER,
};

use super::render::{action_label, format_entry};

/// What the user picked from the screen menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Submit,
    Edit,
    Delete,
    CancelEdit,
    Quit,
}

/// Prompt for one draft field, pre-filled with its current value.
fn prompt_field(placeholder: &str, current: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(placeholder)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt for all three draft fields.
pub fn prompt_draft(current: &Draft) -> Result<Draft> {
    let name = prompt_field(MEAL_PLACEHOLDER, &current.name)?;
    let calories = prompt_field(CALORIES_PLACEHOLDER, &current.calories)?;
    let meal_type = prompt_field(MEAL_TYPE_PLACEHOLDER, &current.meal_type)?;
    Ok(Draft::new(name, calories, meal_type))
}

/// Show the screen menu.
pub fn prompt_action(editing: bool, has_entries: bool) -> Result<ScreenAction> {
    let mut actions = vec![(action_label(editing).to_string(), ScreenAction::Submit)];
    if has_entries {
        actions.push(("Edit".to_string(), ScreenAction::Edit));
        actions.push(("Delete".to_string(), ScreenAction::Delete));
    }
    if editing {
        actions.push(("Cancel edit".to_string(), ScreenAction::CancelEdit));
    }
    actions.push(("Quit".to_string(), ScreenAction::Quit));

    let labels: Vec<&str> = actions.iter().map(|(label, _)| label.as_str()).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection].1)
}

/// Pick an entry from the list.
pub fn select_entry(entries: &[MealEntry], prompt: &str) -> Result<Option<EntryId>> {
    if entries.is_empty() {
        return Ok(None);
    }

    let mut options: Vec<String> = entries.iter().map(format_entry).collect();
    options.push("Back".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(entries.get(selection).map(|e| e.id.clone()))
}

/// Entries whose name resembles `input`, best first.
pub fn fuzzy_candidates<'a>(entries: &'a [MealEntry], input: &str) -> Vec<(&'a MealEntry, f64)> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&MealEntry, f64)> = entries
        .iter()
        .map(|e| (e, jaro_winkler(&e.key(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Resolve a typed target (id or meal name) to an entry.
///
/// Tries an exact id, then an exact case-insensitive name, then asks the
/// user to confirm a fuzzy match.
pub fn resolve_entry(entries: &[MealEntry], target: &str) -> Result<Option<EntryId>> {
    let target = target.trim();

    if let Some(entry) = entries.iter().find(|e| e.id.as_str() == target) {
        return Ok(Some(entry.id.clone()));
    }

    let key = target.to_lowercase();
    if let Some(entry) = entries.iter().find(|e| e.key() == key) {
        return Ok(Some(entry.id.clone()));
    }

    let candidates = fuzzy_candidates(entries, target);

    match candidates.as_slice() {
        [] => {
            println!("No matching meal found for '{}'", target);
            Ok(None)
        }
        [(entry, _)] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", entry.name), true)?;
            Ok(confirm.then(|| entry.id.clone()))
        }
        _ => {
            let options: Vec<&MealEntry> = candidates.iter().take(5).map(|(e, _)| *e).collect();
            let mut labels: Vec<String> = options.iter().map(|e| format_entry(e)).collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            Ok(options.get(selection).map(|e| e.id.clone()))
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
