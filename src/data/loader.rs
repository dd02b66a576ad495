use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use serde::Deserialize;

use super::error::LoadError;
use super::model::{Racket, RacketTable};

/// Columns every source must provide.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "name",
    "overall",
    "power",
    "control",
    "rebound",
    "omgang",
    "sweetspot",
    "price",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a racket catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row naming [`REQUIRED_COLUMNS`]; empty `price` cells are missing prices
/// * `.json` – `[{ "name": "...", "overall": 8, ..., "price": null }, ...]`
///
/// A path without an extension is read as CSV.
pub fn load_file(path: &Path) -> Result<RacketTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" | "" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }?;

    log::info!("Loaded {} rackets from {}", table.len(), path.display());
    Ok(table)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path).map(BufReader::new).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

// ---------------------------------------------------------------------------
// Row shape shared by both formats
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RacketRow {
    name: Option<String>,
    overall: i64,
    power: i64,
    control: i64,
    rebound: i64,
    omgang: i64,
    sweetspot: i64,
    price: Option<f64>,
}

impl RacketRow {
    /// Normalise blanks and reject values that cannot be a price.
    /// `row` is 1-based, counting data rows only.
    fn into_racket(self, row: usize) -> Result<Racket, LoadError> {
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let price = match self.price {
            Some(p) if p.is_nan() => None,
            Some(p) if p < 0.0 || p.is_infinite() => {
                return Err(LoadError::InvalidRecord {
                    row,
                    reason: format!("price must be a non-negative number, got {p}"),
                })
            }
            other => other,
        };

        Ok(Racket {
            name,
            overall: self.overall,
            power: self.power,
            control: self.control,
            rebound: self.rebound,
            omgang: self.omgang,
            sweetspot: self.sweetspot,
            price,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one racket per row.
/// Column order is free and extra columns are ignored.
fn load_csv(path: &Path) -> Result<RacketTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(open(path)?);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }

    let mut rackets = Vec::new();
    for (i, result) in reader.deserialize::<RacketRow>().enumerate() {
        rackets.push(result?.into_racket(i + 1)?);
    }

    Ok(RacketTable::from_rackets(rackets))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON (the default `df.to_json(orient='records')`), with
/// `null` for a missing price.
fn load_json(path: &Path) -> Result<RacketTable, LoadError> {
    let rows: Vec<RacketRow> = serde_json::from_reader(open(path)?)?;

    let rackets = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| row.into_racket(i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RacketTable::from_rackets(rackets))
}
