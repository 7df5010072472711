// File: crates/mekko-demo/src/load.rs
// Summary: CSV → Dataset conversion (headers become the schema, cells are type-inferred).

use anyhow::{Context, Result};
use mekko_core::{Dataset, Field};
use std::io::Read;
use std::path::Path;

/// Load a headered CSV file. Ragged rows are kept; the engine reports any that lack a key column.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_dataset(rdr)
}

pub fn read_dataset<R: Read>(mut rdr: csv::Reader<R>) -> Result<Dataset> {
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let mut ds = Dataset::new(headers);
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading record {}", i + 1))?;
        ds.push_row(rec.iter().map(Field::infer).collect());
    }
    Ok(ds)
}
