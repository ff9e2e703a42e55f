use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Opaque identifier of a logged meal.
///
/// Fresh ids are UUID v4 strings; ids read back from storage are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One logged meal, in its persisted shape.
///
/// Calories are kept as the entered text and parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: EntryId,

    #[serde(rename = "meal")]
    pub name: String,

    #[serde(deserialize_with = "calories_from_text_or_number")]
    pub calories: String,

    #[serde(rename = "mealType")]
    pub meal_type: String,
}

impl MealEntry {
    pub fn new(
        id: EntryId,
        name: impl Into<String>,
        calories: impl Into<String>,
        meal_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            calories: calories.into(),
            meal_type: meal_type.into(),
        }
    }

    /// Parsed calorie value, `None` when the stored text is not a
    /// non-negative integer.
    pub fn calorie_value(&self) -> Option<u32> {
        crate::tally::calculations::parse_calories(&self.calories)
    }

    /// Canonical key for duplicate checks (trimmed, lowercase name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

// Older hand-edited slots sometimes carry calories as a bare number.
fn calories_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_field_names() {
        let entry = MealEntry::new(EntryId::from("1"), "Salad", "200", "Lunch");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"id":"1","meal":"Salad","calories":"200","mealType":"Lunch"}"#
        );
    }

    #[test]
    fn test_numeric_calories_accepted() {
        let json = r#"{"id":"7","meal":"Soup","calories":150,"mealType":"Lunch"}"#;
        let entry: MealEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.calories, "150");
        assert_eq!(entry.calorie_value(), Some(150));
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        assert_ne!(EntryId::new(), EntryId::new());
    }

    #[test]
    fn test_key_is_lowercase() {
        let entry = MealEntry::new(EntryId::from("1"), " Chicken Salad ", "250", "Lunch");
        assert_eq!(entry.key(), "chicken salad");
    }
}
