use std::path::Path;

use anyhow::Result;

use glide_core::AppConfig;

pub fn run(config: &AppConfig, path: &Path, init: bool) -> Result<()> {
    if init {
        if path.exists() {
            println!("Config file already exists: {}", path.display());
        } else {
            config.save_to(path)?;
            println!("Wrote config file: {}", path.display());
        }
        return Ok(());
    }

    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };
    println!("# {}", source);
    print!("{}", config.to_toml()?);

    Ok(())
}
