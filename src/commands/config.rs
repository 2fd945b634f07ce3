use anyhow::Result;
use calgrid_core::config::CalGridConfig;
use owo_colors::OwoColorize;

use crate::context::AppContext;

pub fn run(ctx: &AppContext) -> Result<()> {
    if let Ok(path) = CalGridConfig::config_path() {
        println!("{}", format!("# default location: {}", path.display()).dimmed());
    }
    println!("{}", ctx.config.to_toml()?);

    Ok(())
}
