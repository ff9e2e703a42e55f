use super::EntryId;
use crate::error::MealError;
use crate::state::PendingSave;

/// Result of submitting the draft.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A new entry was appended.
    Saved { id: EntryId, save: PendingSave },
    /// The entry under edit was replaced in place.
    Updated { id: EntryId, save: PendingSave },
    /// A draft field was empty after trimming.
    RejectedEmpty,
    /// Another entry already uses this name (case-insensitive).
    RejectedDuplicate,
    /// Calories did not parse as a non-negative integer.
    RejectedInvalidCalories,
    /// The entry under edit no longer exists; edit mode was cleared.
    RejectedStaleEdit,
}

impl SubmitOutcome {
    /// True when the list was mutated and a write was issued.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Saved { .. } | Self::Updated { .. })
    }

    pub fn id(&self) -> Option<&EntryId> {
        match self {
            Self::Saved { id, .. } | Self::Updated { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Take the pending write, if one was issued.
    pub fn into_save(self) -> Option<PendingSave> {
        match self {
            Self::Saved { save, .. } | Self::Updated { save, .. } => Some(save),
            _ => None,
        }
    }
}

/// Result of the startup load.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(usize),
    Empty,
    /// The slot could not be read or decoded; the ledger started empty.
    Failed(MealError),
}

impl LoadOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
