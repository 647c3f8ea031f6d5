use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use super::{ConfigError, Settings};

pub const HOME_ENV: &str = "INVEST_CORE_HOME";
const DEFAULT_DIR_NAME: &str = ".invest_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Handles persistence for [`Settings`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Resolves `$INVEST_CORE_HOME/config.json`, defaulting to `~/.invest_core`.
    pub fn from_default_location() -> Self {
        Self::new(base_dir().join(CONFIG_FILE))
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the stored settings, or defaults when nothing has been saved yet.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            let settings: Settings =
                serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))?;
            settings.validate()
        } else {
            Ok(Settings::default())
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

fn base_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::Granularity;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::new(dir.path().join("absent.json"));
        assert_eq!(manager.load().unwrap(), Settings::default());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().join("nested")).unwrap();
        let settings = Settings {
            default_horizon_months: 24,
            default_granularity: Granularity::SemiAnnual,
            ..Settings::default()
        };
        manager.save(&settings).unwrap();
        assert!(!tmp_path(manager.config_path()).exists());
        assert_eq!(manager.load().unwrap(), settings);
    }

    #[test]
    fn stored_horizon_past_the_limit_is_rejected() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"default_horizon_months": 400000000}"#).unwrap();
        let err = ConfigManager::new(path).load().expect_err("oversized horizon");
        assert!(
            matches!(err, ConfigError::Invalid { key: "default_horizon_months", .. }),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn corrupt_file_reports_serde_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = ConfigManager::new(path).load().expect_err("corrupt config");
        assert!(matches!(err, ConfigError::Serde(_)), "unexpected error: {err:?}");
    }
}
