use crate::error::FireError;
use crate::fire::step::EdgePolicy;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Optional values from `config.toml`; anything left out falls back to defaults
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub pixel_size: Option<u32>,
    pub frame_rate: Option<u32>,
    pub seed: Option<u64>,
    pub edge: Option<EdgePolicy>,
    /// 36 `#rrggbb` colors, coolest first
    pub palette: Option<Vec<String>>,
}

impl Settings {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, FireError> {
        let path = path.map_or_else(Self::config_path, Path::to_path_buf);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(FireError::Settings { path, message: e.to_string() });
            }
        };

        Self::parse(&content).map_err(|message| FireError::Settings { path, message })
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("doomfire")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_file() {
        let settings = Settings::parse("width = 80\nedge = \"wrap\"\n").unwrap();
        assert_eq!(settings.width, Some(80));
        assert_eq!(settings.edge, Some(EdgePolicy::Wrap));
        assert_eq!(settings.height, None);
    }

    #[test]
    fn parse_rejects_unknown_keys_and_bad_types() {
        assert!(Settings::parse("widht = 80").is_err());
        assert!(Settings::parse("width = \"wide\"").is_err());
        assert!(Settings::parse("edge = \"bounce\"").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("doomfire-settings-does-not-exist.toml");
        assert_eq!(Settings::load(Some(path.as_path())), Ok(Settings::default()));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("doomfire-settings-{}.toml", std::process::id()));
        fs::write(&path, "width = [").unwrap();
        let result = Settings::load(Some(path.as_path()));
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(FireError::Settings { .. })));
    }

    #[test]
    fn default_path_ends_in_app_dir() {
        assert!(Settings::config_path().ends_with("doomfire/config.toml"));
    }
}
