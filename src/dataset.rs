use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::Person;

const SAMPLE_DATASET: &str = include_str!("../assets/people.json");

/// Load person records from a JSON array at `path`, or the bundled sample when `None`.
///
/// The dataset is read once and lives for the rest of the process.
pub fn load(path: Option<&Path>) -> Result<&'static [Person]> {
    let records: Vec<Person> = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Fail to read dataset `{}`", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Fail to parse dataset `{}`", path.display()))?
        }
        None => serde_json::from_str(SAMPLE_DATASET).context("Fail to parse bundled dataset")?,
    };
    info!(records = records.len(), source = ?path, "Dataset loaded");
    Ok(Box::leak(records.into_boxed_slice()))
}
