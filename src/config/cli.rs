use crate::config::toml_config::{OutputFormat, SiteConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "jbhub")]
#[command(about = "Render the JbHub portfolio page")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long)]
    pub reveal_delay_ms: Option<u64>,

    #[arg(long, help = "Render the first mounted frame without waiting for skill bars")]
    pub no_settle: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file if one was given, then applies flag overrides.
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut SiteConfig) {
        if let Some(path) = &self.output_path {
            config.output.path = path.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(delay) = self.reveal_delay_ms {
            config.animation.reveal_delay_ms = delay;
        }
        if self.no_settle {
            config.animation.settle = false;
        }
    }
}
