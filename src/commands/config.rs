use anyhow::{Context, Result};
use tracing::info;

use passcraft::configtool::{self, ConfigFile};

use crate::ConfigCommand;

pub fn run(cmd: ConfigCommand) -> Result<()> {
    let path = configtool::config_path()?;

    match cmd {
        ConfigCommand::Show => {
            let config = ConfigFile::load_from(&path).context("Failed to load config")?;
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            ConfigFile::default()
                .save_to(&path)
                .context("Failed to write config")?;
            info!(path = %path.display(), "wrote default config");
            println!("Config written to {}", path.display());
        }
    }
    Ok(())
}
