use std::sync::Arc;

use tempfile::tempdir;

use meal_log_rs::models::{Draft, LoadOutcome};
use meal_log_rs::state::{FileStorage, MealGateway, MealLedger};

#[tokio::test]
async fn test_meals_survive_restart() {
    let dir = tempdir().unwrap();

    {
        let storage = Arc::new(FileStorage::new(dir.path()));
        let mut ledger = MealLedger::new(MealGateway::new(storage));
        assert!(matches!(ledger.initialize().await, LoadOutcome::Empty));

        ledger.set_draft(Draft::new("Oatmeal", "350", "Breakfast"));
        drop(ledger.submit_draft());
        ledger.set_draft(Draft::new("Salad", "200", "Lunch"));
        drop(ledger.submit_draft());
        ledger.flush().await.unwrap();
    }

    let storage = Arc::new(FileStorage::new(dir.path()));
    let mut ledger = MealLedger::new(MealGateway::new(storage.clone()));
    assert!(matches!(ledger.initialize().await, LoadOutcome::Loaded(2)));
    assert_eq!(ledger.total_calories(), 550);
    assert_eq!(ledger.entries()[0].name, "Oatmeal");

    let raw = std::fs::read_to_string(storage.slot_path("meals")).unwrap();
    assert!(raw.contains(r#""mealType":"Breakfast""#));
    assert!(raw.contains(r#""calories":"350""#));
}

#[tokio::test]
async fn test_slots_are_independent() {
    let dir = tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(dir.path()));

    let mut monday = MealLedger::new(MealGateway::with_slot(storage.clone(), "monday"));
    monday.set_draft(Draft::new("Pizza", "800", "Dinner"));
    drop(monday.submit_draft());
    monday.flush().await.unwrap();

    let mut tuesday = MealLedger::new(MealGateway::with_slot(storage.clone(), "tuesday"));
    assert!(matches!(tuesday.initialize().await, LoadOutcome::Empty));
    assert!(storage.slot_path("monday").exists());
    assert!(!storage.slot_path("tuesday").exists());
}
