use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::LevelFilter;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// JSON file replacing the bundled knowledge base.
    pub knowledge_base: Option<PathBuf>,
    pub log_level: String,
}

impl Settings {
    pub fn log_level(&self) -> Result<LevelFilter, SettingsError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| SettingsError::InvalidLogLevel(self.log_level.clone()))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            knowledge_base: None,
            log_level: "warn".to_string(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid log level \"{0}\"")]
    InvalidLogLevel(String),
}

/// Reads the settings from `path`. A missing file results in the default settings.
pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(err) => match err.kind() {
            ErrorKind::NotFound => Ok(Settings::default()),
            _ => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn write(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            load(&dir.path().join("repwise.json")).unwrap(),
            Settings::default()
        );
    }

    #[test]
    fn test_load() {
        let file = write(r#"{ "knowledge_base": "/srv/kb.json", "log_level": "debug" }"#);

        let settings = load(file.path()).unwrap();

        assert_eq!(
            settings,
            Settings {
                knowledge_base: Some(PathBuf::from("/srv/kb.json")),
                log_level: "debug".to_string(),
            }
        );
        assert_eq!(settings.log_level().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_load_partial() {
        let file = write(r#"{ "log_level": "info" }"#);

        assert_eq!(
            load(file.path()).unwrap(),
            Settings {
                knowledge_base: None,
                log_level: "info".to_string(),
            }
        );
    }

    #[test]
    fn test_load_invalid() {
        let file = write("{ log_level = info }");

        assert!(matches!(load(file.path()), Err(SettingsError::Json(_))));
    }

    #[rstest]
    #[case("warn", Some(LevelFilter::Warn))]
    #[case("TRACE", Some(LevelFilter::Trace))]
    #[case("off", Some(LevelFilter::Off))]
    #[case("loud", None)]
    fn test_settings_log_level(#[case] level: &str, #[case] expected: Option<LevelFilter>) {
        let settings = Settings {
            log_level: level.to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.log_level().ok(), expected);
    }
}
