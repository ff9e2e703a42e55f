mod manager;
mod persistence;
mod queue;
mod storage;

pub use manager::MealLedger;
pub use persistence::MealGateway;
pub use queue::{PendingSave, SaveQueue};
pub use storage::{FileStorage, MemoryStorage, SlotStorage};
