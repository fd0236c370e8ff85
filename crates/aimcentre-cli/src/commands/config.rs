use anyhow::Result;

use aimcentre_core::AppConfig;

pub fn run(config: &AppConfig, path_only: bool) -> Result<()> {
    let path = AppConfig::config_path();
    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    let source = if path.exists() { "file" } else { "defaults" };
    println!("# {} ({})", path.display(), source);
    print!("{}", config.to_toml()?);
    Ok(())
}
