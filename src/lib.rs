pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod state;
pub mod tally;

pub use error::{MealError, Result};
pub use models::{Draft, EntryId, LoadOutcome, MealEntry, SubmitOutcome};
pub use state::{MealGateway, MealLedger};
