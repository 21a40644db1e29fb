use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Schema version written by this build. Files from a newer build are refused
/// rather than silently losing their unknown fields on the next save.
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";
const HISTORY_FILE: &str = "screening_results.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Markdown,
    Docx,
    #[default]
    Pdf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuroFocusConfig {
    #[serde(default = "current_version")]
    pub config_version: u32,
    /// Where history is kept. `None` = platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Format used by `take --export` when `--format` is not given.
    #[serde(default)]
    pub export_format: ExportFormat,
    pub created_at: jiff::Timestamp,
}

#[derive(Deserialize)]
struct VersionHeader {
    #[serde(default = "current_version")]
    config_version: u32,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

impl Default for NeuroFocusConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: None,
            export_format: ExportFormat::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl NeuroFocusConfig {
    /// Path of the history file, honouring a CLI override of the data directory.
    pub fn history_path(&self, data_dir_override: Option<&Path>) -> eyre::Result<PathBuf> {
        let dir = match (data_dir_override, &self.data_dir) {
            (Some(dir), _) => dir.to_path_buf(),
            (None, Some(dir)) => dir.clone(),
            (None, None) => default_data_dir()?,
        };
        Ok(dir.join(HISTORY_FILE))
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("neurofocus"))
}

fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("neurofocus"))
}

pub fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Load the config from `dir`, or defaults when none has been saved yet.
pub fn load_or_default_in(dir: &Path) -> eyre::Result<NeuroFocusConfig> {
    if config_path_in(dir).exists() {
        load_config_in(dir)
    } else {
        tracing::debug!(dir = %dir.display(), "no config found, using defaults");
        Ok(NeuroFocusConfig::default())
    }
}

pub fn load_config_in(dir: &Path) -> eyre::Result<NeuroFocusConfig> {
    let path = config_path_in(dir);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Check the version before the full shape so a newer layout is reported
    // as such rather than as a parse error.
    let header: VersionHeader = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid config at {}: {e}", path.display()))?;
    if header.config_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {} is newer than this build supports ({CURRENT_VERSION}). \
             Please update NeuroFocus.",
            header.config_version
        ));
    }

    let config: NeuroFocusConfig = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid config at {}: {e}", path.display()))?;
    Ok(config)
}

pub fn save_config_in(dir: &Path, config: &NeuroFocusConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = config_path_in(dir);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Readers never see a half-written config.
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
