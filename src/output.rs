use crate::prelude::*;
use csv::Writer;
use std::path::Path;

/// Writes one `epoch,mse` record per entry, epochs counted from 1.
pub fn write_error_history_to_csv<P: AsRef<Path>>(errors: &[f64], file_path: P) -> Result<()> {
    let mut wtr = Writer::from_path(file_path)?;
    wtr.write_record(["epoch", "mse"])?;

    for (epoch, error) in errors.iter().enumerate() {
        wtr.write_record(&[(epoch + 1).to_string(), error.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
