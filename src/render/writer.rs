//! Writing configuration directories

use super::{config_name, Definition};
use crate::error::{IoResultExt, Result};
use crate::workload::Workload;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File holding the definition inside each configuration directory
pub const DEFINITION_FILE: &str = "parameters.h";

/// Create `<root>/<name>/parameters.h` for `workload`
///
/// An existing definition is overwritten. Returns the configuration
/// directory.
pub fn write_configuration(root: &Path, workload: &Workload<'_>) -> Result<PathBuf> {
    let dir = root.join(config_name(workload));
    fs::create_dir_all(&dir).with_path(&dir)?;

    let path = dir.join(DEFINITION_FILE);
    let file = File::create(&path).with_path(&path)?;
    let mut writer = BufWriter::new(file);
    write!(writer, "{}", Definition(workload)).with_path(&path)?;
    // BufWriter swallows errors on drop
    writer.flush().with_path(&path)?;

    tracing::debug!("Wrote {}", path.display());
    Ok(dir)
}
