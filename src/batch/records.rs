use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AlcError, Result};
use crate::models::{DrinkInput, Grade, VolumeUnit};
use crate::state::Session;

/// One drink read from a batch CSV.
///
/// Cells stay raw strings so they go through the same validation as typed input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BatchRow {
    #[serde(default)]
    pub alcohol: String,
    #[serde(default)]
    pub volume: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub price: String,
}

impl BatchRow {
    pub fn to_input(&self) -> DrinkInput {
        DrinkInput::new(&*self.alcohol, &*self.volume, &*self.quantity, &*self.price)
    }
}

/// Outcome for one batch row: either a grade and score, or the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub row: usize,
    pub alcohol: String,
    pub volume: String,
    pub unit: String,
    pub quantity: String,
    pub price: String,
    pub grade: Option<Grade>,
    pub score: Option<i64>,
    pub error: Option<String>,
}

impl BatchResult {
    pub fn is_scored(&self) -> bool {
        self.error.is_none()
    }
}

/// Counts of accepted and rejected rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub scored: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[BatchResult]) -> Self {
        let scored = results.iter().filter(|r| r.is_scored()).count();
        Self {
            scored,
            rejected: results.len() - scored,
        }
    }
}

/// Columns every batch file must have. `unit` is optional.
const REQUIRED_COLUMNS: [&str; 4] = ["alcohol", "volume", "quantity", "price"];

/// Read drinks from CSV with an `alcohol,volume,unit,quantity,price` header.
///
/// Header names are trimmed. `unit` may be left out entirely or per row; any
/// other missing column is an error rather than a column of blanks.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<BatchRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?;
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(AlcError::MissingColumn(missing.to_string()));
    }

    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Read drinks from a CSV file.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<BatchRow>> {
    let file = File::open(path)?;
    read_rows(file)
}

/// Submit each row to `session` in file order.
///
/// Rows are numbered from 1. A rejected row leaves the session as it was,
/// just like a rejected form submission.
pub fn score_rows(
    rows: &[BatchRow],
    default_unit: VolumeUnit,
    session: Session,
) -> (Session, Vec<BatchResult>) {
    let mut session = session;
    let mut results = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let unit = match row.unit.as_deref().map(str::parse::<VolumeUnit>) {
            None => Ok(default_unit),
            Some(parsed) => parsed,
        };

        let mut result = BatchResult {
            row: i + 1,
            alcohol: row.alcohol.clone(),
            volume: row.volume.clone(),
            unit: row
                .unit
                .clone()
                .unwrap_or_else(|| default_unit.label().to_string()),
            quantity: row.quantity.clone(),
            price: row.price.clone(),
            grade: None,
            score: None,
            error: None,
        };

        let submitted = unit.and_then(|unit| {
            session
                .submit(&row.to_input(), unit)
                .map_err(AlcError::from)
        });
        match submitted {
            Ok((next, outcome)) => {
                session = next;
                result.grade = Some(outcome.entry.grade);
                result.score = Some(outcome.entry.score);
            }
            Err(e) => {
                log::debug!("Row {} rejected: {}", i + 1, e);
                result.error = Some(e.to_string());
            }
        }

        results.push(result);
    }

    let summary = BatchSummary::from_results(&results);
    log::info!("Batch: scored {}, rejected {}", summary.scored, summary.rejected);

    (session, results)
}

/// Write results as CSV with a header row.
pub fn write_csv<W: Write>(results: &[BatchResult], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for result in results {
        wtr.serialize(result)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write results as a pretty-printed JSON array.
pub fn write_json<W: Write>(results: &[BatchResult], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, results)?;
    writeln!(writer)?;
    Ok(())
}
