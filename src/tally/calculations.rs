use crate::models::{EntryId, MealEntry};

/// Parse a calorie field: trimmed, digits only.
pub fn parse_calories(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Sum of parsed calories over all entries.
///
/// Entries whose calories do not parse contribute 0.
pub fn total_calories(entries: &[MealEntry]) -> u64 {
    entries
        .iter()
        .map(|e| e.calorie_value().map(u64::from).unwrap_or(0))
        .sum()
}

/// Whether the total is strictly above the goal.
#[inline]
pub fn is_over_goal(total: u64, goal: u64) -> bool {
    total > goal
}

/// Find an entry with the same name (case-insensitive) that is not the
/// entry currently being edited.
pub fn find_duplicate<'a>(
    entries: &'a [MealEntry],
    name: &str,
    editing_id: Option<&EntryId>,
) -> Option<&'a MealEntry> {
    let key = name.trim().to_lowercase();
    entries
        .iter()
        .find(|e| e.key() == key && Some(&e.id) != editing_id)
}

/// Entries whose calorie field does not parse.
pub fn malformed_entries(entries: &[MealEntry]) -> Vec<&MealEntry> {
    entries
        .iter()
        .filter(|e| e.calorie_value().is_none())
        .collect()
}
