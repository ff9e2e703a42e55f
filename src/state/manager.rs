use crate::error::{MealError, Result};
use crate::models::{Draft, EntryId, LoadOutcome, MealEntry, SubmitOutcome};
use crate::tally::{self, DAILY_CONSUMPTION_GOAL};

use super::persistence::MealGateway;
use super::queue::{PendingSave, SaveQueue};

/// The meal list, the draft form, and every value derived from them.
///
/// Each mutation updates the list and the derived fields together, then
/// queues a full snapshot for persistence without waiting on it.
#[derive(Debug)]
pub struct MealLedger {
    /// Entries in insertion order.
    entries: Vec<MealEntry>,
    draft: Draft,
    /// Entry currently loaded into the draft, if any.
    editing_id: Option<EntryId>,
    total_calories: u64,
    limit_reached: bool,
    meal_exists_warning: bool,
    gateway: MealGateway,
    queue: SaveQueue,
}

impl MealLedger {
    /// Create an empty ledger and start its save queue.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(gateway: MealGateway) -> Self {
        let queue = SaveQueue::spawn(gateway.clone());
        Self {
            entries: Vec::new(),
            draft: Draft::default(),
            editing_id: None,
            total_calories: 0,
            limit_reached: false,
            meal_exists_warning: false,
            gateway,
            queue,
        }
    }

    /// Populate the list from storage.
    ///
    /// A failed load is logged and leaves the ledger empty.
    pub async fn initialize(&mut self) -> LoadOutcome {
        let loaded = self.gateway.load_all().await;
        match loaded {
            Ok(entries) if entries.is_empty() => LoadOutcome::Empty,
            Ok(entries) => {
                for entry in tally::malformed_entries(&entries) {
                    tracing::warn!(
                        "Stored meal '{}' has unreadable calories '{}', counting 0",
                        entry.name,
                        entry.calories
                    );
                }
                let count = entries.len();
                self.entries = entries;
                self.recompute();
                tracing::info!("Loaded {} meals from slot '{}'", count, self.gateway.slot());
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::error!("Failed to load meals from slot '{}': {}", self.gateway.slot(), e);
                LoadOutcome::Failed(e)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Draft input
    // ─────────────────────────────────────────────────────────────────────

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_calories(&mut self, calories: impl Into<String>) {
        self.draft.calories = calories.into();
    }

    pub fn set_meal_type(&mut self, meal_type: impl Into<String>) {
        self.draft.meal_type = meal_type.into();
    }

    pub fn set_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Commit the draft: append in create mode, replace in place in edit mode.
    pub fn submit_draft(&mut self) -> SubmitOutcome {
        if !self.draft.is_complete() {
            return SubmitOutcome::RejectedEmpty;
        }

        let edit_target = match self.editing_id.clone() {
            Some(id) => match self.position(&id) {
                Some(idx) => Some(idx),
                None => {
                    tracing::warn!("Meal {} was removed while being edited", id);
                    self.editing_id = None;
                    self.meal_exists_warning = false;
                    return SubmitOutcome::RejectedStaleEdit;
                }
            },
            None => None,
        };

        let name = self.draft.name.trim().to_string();
        if tally::find_duplicate(&self.entries, &name, self.editing_id.as_ref()).is_some() {
            self.meal_exists_warning = true;
            return SubmitOutcome::RejectedDuplicate;
        }
        self.meal_exists_warning = false;

        if tally::parse_calories(&self.draft.calories).is_none() {
            return SubmitOutcome::RejectedInvalidCalories;
        }

        let calories = self.draft.calories.trim().to_string();
        let meal_type = self.draft.meal_type.trim().to_string();

        let (id, updated) = match edit_target {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                entry.name = name;
                entry.calories = calories;
                entry.meal_type = meal_type;
                self.editing_id = None;
                tracing::debug!("Updated meal {}", entry.id);
                (entry.id.clone(), true)
            }
            None => {
                let entry = MealEntry::new(EntryId::new(), name, calories, meal_type);
                let id = entry.id.clone();
                tracing::debug!("Added meal {} ({})", id, entry.name);
                self.entries.push(entry);
                (id, false)
            }
        };

        self.recompute();
        let save = self.persist();
        self.draft.clear();

        if updated {
            SubmitOutcome::Updated { id, save }
        } else {
            SubmitOutcome::Saved { id, save }
        }
    }

    /// Load an entry into the draft and switch to edit mode.
    pub fn begin_edit(&mut self, id: &EntryId) -> Result<()> {
        let entry = self
            .get(id)
            .ok_or_else(|| MealError::EntryNotFound(id.to_string()))?;

        self.draft = Draft::from_entry(entry);
        self.editing_id = Some(id.clone());
        Ok(())
    }

    /// Leave edit mode and discard the draft.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.meal_exists_warning = false;
        self.draft.clear();
    }

    /// Remove an entry; `None` (and no write) when the id is unknown.
    pub fn delete_entry(&mut self, id: &EntryId) -> Option<PendingSave> {
        let idx = self.position(id)?;
        let removed = self.entries.remove(idx);
        tracing::debug!("Deleted meal {} ({})", removed.id, removed.name);

        self.recompute();
        Some(self.persist())
    }

    /// Wait until every queued write has reached storage.
    pub async fn flush(&self) -> Result<()> {
        self.queue.flush().await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read access
    // ─────────────────────────────────────────────────────────────────────

    pub fn entries(&self) -> &[MealEntry] {
        &self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&MealEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Find an entry by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&MealEntry> {
        tally::find_duplicate(&self.entries, name, None)
    }

    pub fn total_calories(&self) -> u64 {
        self.total_calories
    }

    pub fn limit_reached(&self) -> bool {
        self.limit_reached
    }

    pub fn meal_exists_warning(&self) -> bool {
        self.meal_exists_warning
    }

    pub fn editing_id(&self) -> Option<&EntryId> {
        self.editing_id.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn daily_goal(&self) -> u64 {
        DAILY_CONSUMPTION_GOAL
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    fn recompute(&mut self) {
        self.total_calories = tally::total_calories(&self.entries);
        self.limit_reached = tally::is_over_goal(self.total_calories, DAILY_CONSUMPTION_GOAL);
    }

    fn persist(&self) -> PendingSave {
        self.queue.enqueue(self.entries.clone())
    }
}
