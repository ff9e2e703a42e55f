mod draft;
mod entry;
mod outcome;

pub use draft::Draft;
pub use entry::{EntryId, MealEntry};
pub use outcome::{LoadOutcome, SubmitOutcome};
