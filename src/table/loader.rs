use super::MetricTable;
use crate::error::{CmpResult, CompareError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Loads a `<id> <value>` summary file (tab or space separated, `#` comments).
pub fn load_table<P: AsRef<Path>>(path: P) -> CmpResult<MetricTable> {
    let path = path.as_ref();
    debug!("Loading metric table from: {}", path.display());
    let file = File::open(path)?;
    let table = load_table_from_reader(file)?;
    info!("Loaded {} entries from {}", table.len(), path.display());
    Ok(table)
}

pub fn load_table_from_reader<R: Read>(reader: R) -> CmpResult<MetricTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut table = MetricTable::new();

    for result in rdr.records() {
        let rec = result?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);

        // Columns may be split by tabs (csv) or runs of spaces inside a field.
        let tokens: Vec<&str> = rec.iter().flat_map(str::split_whitespace).collect();
        let Some(&id) = tokens.first() else {
            continue;
        };
        if id.starts_with('#') {
            continue;
        }
        let Some(raw) = tokens.get(1) else {
            return Err(CompareError::parse(
                line,
                format!("missing metric value for '{}'", id),
            ));
        };

        let value: f64 = raw.parse().map_err(|_| {
            CompareError::parse(line, format!("invalid metric value '{}' for '{}'", raw, id))
        })?;

        table.insert_at(id, value, line)?;
    }

    Ok(table)
}
