use std::path::Path;
use std::sync::Arc;

use clap::Parser;

use meal_log_rs::cli::{Cli, Command};
use meal_log_rs::error::{MealError, Result};
use meal_log_rs::export::write_csv;
use meal_log_rs::interface::{
    active_warnings, display_screen, format_entry, format_total, resolve_entry, run_screen,
};
use meal_log_rs::models::{Draft, LoadOutcome, SubmitOutcome};
use meal_log_rs::state::{FileStorage, MealGateway, MealLedger};
use meal_log_rs::tally::DUPLICATE_WARNING;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let storage = Arc::new(FileStorage::new(&cli.dir));
    let gateway = MealGateway::with_slot(storage, cli.slot.clone());
    let mut ledger = MealLedger::new(gateway);
    let command = cli.command.unwrap_or_default();

    match ledger.initialize().await {
        // The screen starts empty; one-shot commands refuse to overwrite
        // a slot they could not read.
        LoadOutcome::Failed(e) if !matches!(command, Command::Screen) => return Err(e),
        LoadOutcome::Failed(e) => {
            eprintln!("Could not read saved meals ({}), starting empty.", e);
        }
        LoadOutcome::Loaded(_) | LoadOutcome::Empty => {}
    }

    match command {
        Command::Screen => run_screen(&mut ledger).await,
        Command::List => {
            display_screen(&ledger);
            Ok(())
        }
        Command::Add {
            meal,
            calories,
            meal_type,
        } => cmd_add(&mut ledger, Draft::new(meal, calories, meal_type)).await,
        Command::Edit {
            target,
            meal,
            calories,
            meal_type,
        } => cmd_edit(&mut ledger, &target, meal, calories, meal_type).await,
        Command::Delete { target } => cmd_delete(&mut ledger, &target).await,
        Command::Export { out } => cmd_export(&ledger, &out),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

/// Log a new meal.
async fn cmd_add(ledger: &mut MealLedger, draft: Draft) -> Result<()> {
    ledger.set_draft(draft);
    let outcome = ledger.submit_draft();
    finish(ledger, outcome).await
}

/// Edit a meal, keeping any field not given on the command line.
async fn cmd_edit(
    ledger: &mut MealLedger,
    target: &str,
    meal: Option<String>,
    calories: Option<String>,
    meal_type: Option<String>,
) -> Result<()> {
    let Some(id) = resolve_entry(ledger.entries(), target)? else {
        return Ok(());
    };

    ledger.begin_edit(&id)?;
    if let Some(meal) = meal {
        ledger.set_name(meal);
    }
    if let Some(calories) = calories {
        ledger.set_calories(calories);
    }
    if let Some(meal_type) = meal_type {
        ledger.set_meal_type(meal_type);
    }

    let outcome = ledger.submit_draft();
    finish(ledger, outcome).await
}

/// Delete a meal.
async fn cmd_delete(ledger: &mut MealLedger, target: &str) -> Result<()> {
    let Some(id) = resolve_entry(ledger.entries(), target)? else {
        return Ok(());
    };

    if let Some(save) = ledger.delete_entry(&id) {
        save.wait().await?;
        println!("Deleted. {} meals left.", ledger.len());
    }
    print_status(ledger);
    Ok(())
}

/// Export meals as CSV.
fn cmd_export(ledger: &MealLedger, out: &str) -> Result<()> {
    write_csv(Path::new(out), ledger.entries())?;
    println!("Exported {} meals to {}", ledger.len(), out);
    Ok(())
}

/// Report a submit outcome and wait for its write.
async fn finish(ledger: &MealLedger, outcome: SubmitOutcome) -> Result<()> {
    let id = outcome.id().cloned();

    match outcome {
        SubmitOutcome::Saved { save, .. } | SubmitOutcome::Updated { save, .. } => {
            save.wait().await?;
        }
        SubmitOutcome::RejectedDuplicate => {
            println!("{}", DUPLICATE_WARNING);
            return Ok(());
        }
        SubmitOutcome::RejectedEmpty => {
            return Err(MealError::InvalidInput(
                "meal, calories and meal type must not be empty".to_string(),
            ));
        }
        SubmitOutcome::RejectedInvalidCalories => {
            return Err(MealError::InvalidInput(
                "calories must be a whole, non-negative number".to_string(),
            ));
        }
        SubmitOutcome::RejectedStaleEdit => {
            return Err(MealError::InvalidInput(
                "the meal being edited no longer exists".to_string(),
            ));
        }
    }

    if let Some(entry) = id.as_ref().and_then(|id| ledger.get(id)) {
        println!("Saved: {}", format_entry(entry));
    }
    print_status(ledger);
    Ok(())
}

fn print_status(ledger: &MealLedger) {
    println!("{}", format_total(ledger.total_calories()));
    for warning in active_warnings(ledger) {
        println!("{}", warning);
    }
}
