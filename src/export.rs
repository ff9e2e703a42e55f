use std::path::Path;

use crate::error::Result;
use crate::models::MealEntry;

/// Write entries as CSV with an `id,meal,calories,mealType` header.
pub fn write_csv<P: AsRef<Path>>(path: P, entries: &[MealEntry]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}
