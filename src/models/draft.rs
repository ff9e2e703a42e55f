use super::MealEntry;

/// The not-yet-committed input fields of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub calories: String,
    pub meal_type: String,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        calories: impl Into<String>,
        meal_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
            meal_type: meal_type.into(),
        }
    }

    /// Copy an entry's fields into a draft for editing.
    pub fn from_entry(entry: &MealEntry) -> Self {
        Self::new(&entry.name, &entry.calories, &entry.meal_type)
    }

    /// True when every field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.calories.trim().is_empty()
            && !self.meal_type.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.calories.clear();
        self.meal_type.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_is_incomplete() {
        assert!(!Draft::new("  ", "800", "Dinner").is_complete());
        assert!(!Draft::new("Pizza", "", "Dinner").is_complete());
        assert!(Draft::new("Pizza", "800", "Dinner").is_complete());
    }

    #[test]
    fn test_clear() {
        let mut draft = Draft::new("Pizza", "800", "Dinner");
        draft.clear();
        assert_eq!(draft, Draft::default());
    }
}
