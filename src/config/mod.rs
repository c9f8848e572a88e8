use crate::errors::{AppError, AppResult};
use crate::export::ArtifactFormat;
use crate::models::InputSchema;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Overrides the configuration directory (tests, portable setups).
pub const HOME_ENV: &str = "FOCUSTIMELINE_HOME";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Focus-session CSV log
    #[serde(default = "default_input")]
    pub input: String,
    /// Directory receiving the week artifacts and the index page
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub schema: InputSchema,
    #[serde(default)]
    pub artifact_format: ArtifactFormat,
    /// Markdown/text file embedded as "Key Insights"
    #[serde(default)]
    pub insights_file: Option<String>,
    /// Externally generated AI analysis embedded as "AI Analysis"
    #[serde(default)]
    pub ai_notes_file: Option<String>,
    /// Write the analysis charts with every report
    #[serde(default)]
    pub charts: bool,
}

fn default_input() -> String {
    "logs.csv".to_string()
}
fn default_output_dir() -> String {
    "focus_timeline_report".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
            schema: InputSchema::default(),
            artifact_format: ArtifactFormat::default(),
            insights_file: None,
            ai_notes_file: None,
            charts: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV) {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("focustimeline")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".focustimeline")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("focustimeline.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse {}: {e}", path.display()))
        })?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration file (creating its directory).
    /// In test mode nothing is written and the path that would be used is returned.
    pub fn init(is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if is_test {
            return Ok(path);
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }

    pub fn input_path(&self) -> PathBuf {
        expand_tilde(&self.input)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    pub fn insights_path(&self) -> Option<PathBuf> {
        self.insights_file.as_deref().map(expand_tilde)
    }

    pub fn ai_notes_path(&self) -> Option<PathBuf> {
        self.ai_notes_file.as_deref().map(expand_tilde)
    }
}
