use std::io::Error;
use std::path::Path;

/// Writes a payments CSV with a `method, amount` header.
pub fn write_payments_csv(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;

    wtr.write_record(["method", "amount"])?;
    for (method, amount) in rows {
        wtr.write_record([method, amount])?;
    }

    wtr.flush()?;
    Ok(())
}
