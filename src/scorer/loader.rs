use crate::consts::SMOOTHING_FLOOR;
use crate::error::{ProlomError, ProlomResult};
use crate::scorer::TransitionMatrix;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Load a transition matrix from headerless CSV: one row per source symbol,
/// one column per target symbol. Fields that do not parse as finite floats
/// take the smoothing floor.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> ProlomResult<TransitionMatrix> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut weights: Vec<f32> = Vec::new();
    let mut rows = 0usize;
    let mut cols: Option<usize> = None;

    for result in rdr.records() {
        let record = result?;
        match cols {
            None => cols = Some(record.len()),
            Some(c) if c != record.len() => {
                return Err(ProlomError::Config(format!(
                    "Matrix row {} has {} columns, expected {}",
                    rows,
                    record.len(),
                    c
                )));
            }
            _ => {}
        }
        for field in record.iter() {
            let w = field.trim().parse::<f32>().unwrap_or(SMOOTHING_FLOOR);
            weights.push(if w.is_finite() { w } else { SMOOTHING_FLOOR });
        }
        rows += 1;
    }

    let cols = cols.unwrap_or(0);
    if rows == 0 || rows != cols {
        return Err(ProlomError::Config(format!(
            "Matrix must be square, got {} rows x {} columns",
            rows, cols
        )));
    }

    debug!(dim = rows, "Loaded transition matrix");
    TransitionMatrix::from_log_weights(rows, weights)
}

/// Write a matrix as headerless CSV, the same shape `load_matrix` reads.
pub fn save_matrix<P: AsRef<Path>>(matrix: &TransitionMatrix, path: P) -> ProlomResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    for row in matrix.rows() {
        wtr.write_record(row.iter().map(|w| w.to_string()))?;
    }
    wtr.flush()?;
    info!(dim = matrix.dim(), "Saved transition matrix");
    Ok(())
}
