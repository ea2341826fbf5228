pub mod compare;
pub mod group;
pub mod show;

use foldcmp::error::CmpResult;
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes `text` to `path`, creating missing parent directories.
pub fn write_output(path: &Path, text: &str) -> CmpResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)?;
    info!("💾 Wrote {}", path.display());
    Ok(())
}
