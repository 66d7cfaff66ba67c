//! `loadcalc config init` — write a loadcalc.toml scaffold.

use std::path::Path;

use anyhow::{Context, Result, bail};
use loadcalc_core::CalcConfig;
use loadcalc_core::config::CONFIG_FILE_NAME;
use tracing::info;

/// Write the scaffold into `path`, refusing to overwrite an existing file.
pub fn init(path: &str) -> Result<String> {
    let output = Path::new(path).join(CONFIG_FILE_NAME);
    if output.exists() {
        bail!("{} already exists", output.display());
    }

    let content = CalcConfig::scaffold().to_toml_string()?;
    std::fs::write(&output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Wrote {}", output.display());
    Ok(format!("✓ Generated {}", output.display()))
}
