use crate::utils::error::{PortfolioError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_REVEAL_DELAY_MS: u64 = 300;
pub const MAX_REVEAL_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub animation: AnimationConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Document title of the rendered page.
    pub title: String,
    /// Overrides the brand shown in the header and footer.
    pub brand: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "JbHub | WordPress Developer".to_string(),
            brand: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub reveal_delay_ms: u64,
    /// Wait for every skill bar to fill before rendering.
    pub settle: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            settle: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub format: OutputFormat,
    /// File name without extension.
    pub filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./output".to_string(),
            format: OutputFormat::Html,
            filename: "index".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SITE_TITLE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| PortfolioError::config(format!("bad substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.animation.reveal_delay_ms)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("site.title", &self.site.title)?;
        if let Some(brand) = &self.site.brand {
            validate_non_empty_string("site.brand", brand)?;
        }
        validate_range(
            "animation.reveal_delay_ms",
            self.animation.reveal_delay_ms,
            0,
            MAX_REVEAL_DELAY_MS,
        )?;
        validate_path("output.path", &self.output.path)?;
        validate_non_empty_string("output.filename", &self.output.filename)?;
        if self.output.filename.contains(['/', '\\']) {
            return Err(PortfolioError::InvalidConfigValueError {
                field: "output.filename".to_string(),
                value: self.output.filename.clone(),
                reason: "File name cannot contain path separators".to_string(),
            });
        }
        Ok(())
    }
}
