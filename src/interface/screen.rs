use crate::error::Result;
use crate::models::SubmitOutcome;
use crate::state::MealLedger;

use super::prompts::{prompt_action, prompt_draft, prompt_yes_no, select_entry, ScreenAction};
use super::render::display_screen;

/// Run the interactive meal screen until the user quits.
pub async fn run_screen(ledger: &mut MealLedger) -> Result<()> {
    loop {
        display_screen(ledger);

        match prompt_action(ledger.is_editing(), !ledger.is_empty())? {
            ScreenAction::Submit => {
                let draft = prompt_draft(ledger.draft())?;
                ledger.set_draft(draft);
                report(ledger.submit_draft());
            }
            ScreenAction::Edit => {
                if let Some(id) = select_entry(ledger.entries(), "Edit which meal?")? {
                    ledger.begin_edit(&id)?;
                }
            }
            ScreenAction::Delete => {
                if let Some(id) = select_entry(ledger.entries(), "Delete which meal?")? {
                    if prompt_yes_no("Delete this meal?", false)? {
                        // Write failures are logged by the save queue.
                        drop(ledger.delete_entry(&id));
                    }
                }
            }
            ScreenAction::CancelEdit => ledger.cancel_edit(),
            ScreenAction::Quit => break,
        }
    }

    ledger.flush().await
}

fn report(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::RejectedInvalidCalories => {
            println!("Calories must be a whole, non-negative number.");
        }
        SubmitOutcome::RejectedStaleEdit => {
            println!("The meal being edited no longer exists.");
        }
        // Duplicates surface through the screen warning; empty input is silent.
        SubmitOutcome::RejectedDuplicate | SubmitOutcome::RejectedEmpty => {}
        SubmitOutcome::Saved { .. } | SubmitOutcome::Updated { .. } => {}
    }
}
