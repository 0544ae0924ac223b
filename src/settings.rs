use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::ocr::DEFAULT_LANGUAGE;
use crate::paths;

const DEFAULT_SETTINGS_TOML: &str = include_str!("../settings.toml");

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub ocr_language: String,
    pub ocr_psm: Option<u32>,
    pub ocr_dpi: Option<u32>,
    pub tesseract_command: String,
    pub capture_command: String,
    pub capture_args: Vec<String>,
    pub capture_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ocr_language: DEFAULT_LANGUAGE.to_string(),
            ocr_psm: None,
            ocr_dpi: None,
            tesseract_command: "tesseract".to_string(),
            capture_command: "gnome-screenshot".to_string(),
            capture_args: vec!["-a".to_string(), "-f".to_string()],
            capture_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    ocr: Option<OcrSettings>,
    tesseract: Option<TesseractSettings>,
    capture: Option<CaptureSettings>,
}

#[derive(Debug, Default, Deserialize)]
struct OcrSettings {
    language: Option<String>,
    psm: Option<u32>,
    dpi: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct TesseractSettings {
    command: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CaptureSettings {
    command: Option<String>,
    args: Option<Vec<String>>,
    timeout_secs: Option<u64>,
}

/// Loads built-in defaults, then every settings file that exists, later files
/// winning: `./settings.toml`, `./settings.local.toml`, the same two names in
/// the user settings directory, and finally `extra_path`.
pub fn load_settings(extra_path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();
    let defaults: SettingsFile =
        toml::from_str(DEFAULT_SETTINGS_TOML).with_context(|| "failed to parse built-in settings")?;
    settings.merge(defaults);
    if let Err(err) = ensure_home_settings_file() {
        warn!("settings: {:#}", err);
    }

    let mut ordered_paths = vec![
        PathBuf::from("settings.toml"),
        PathBuf::from("settings.local.toml"),
    ];

    if let Some(dir) = paths::settings_dir() {
        ordered_paths.push(dir.join("settings.toml"));
        ordered_paths.push(dir.join("settings.local.toml"));
    }

    if let Some(extra) = extra_path {
        if !extra.exists() {
            return Err(anyhow!("settings file not found: {}", extra.display()));
        }
        ordered_paths.push(extra.to_path_buf());
    }

    for path in ordered_paths {
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read settings: {}", path.display()))?;
            let parsed: SettingsFile = toml::from_str(&content)
                .with_context(|| format!("failed to parse settings: {}", path.display()))?;
            settings.merge(parsed);
        }
    }

    Ok(settings)
}

impl Settings {
    fn merge(&mut self, incoming: SettingsFile) {
        if let Some(ocr) = incoming.ocr {
            if let Some(language) = ocr.language
                && !language.trim().is_empty()
            {
                self.ocr_language = language.trim().to_string();
            }
            if ocr.psm.is_some() {
                self.ocr_psm = ocr.psm;
            }
            if let Some(dpi) = ocr.dpi
                && dpi > 0
            {
                self.ocr_dpi = Some(dpi);
            }
        }
        if let Some(tesseract) = incoming.tesseract
            && let Some(command) = tesseract.command
            && !command.trim().is_empty()
        {
            self.tesseract_command = command;
        }
        if let Some(capture) = incoming.capture {
            if let Some(command) = capture.command
                && !command.trim().is_empty()
            {
                self.capture_command = command;
            }
            if let Some(args) = capture.args {
                self.capture_args = args;
            }
            if let Some(secs) = capture.timeout_secs
                && secs > 0
            {
                self.capture_timeout = Duration::from_secs(secs);
            }
        }
    }
}

fn ensure_home_settings_file() -> Result<()> {
    let Some(dir) = paths::settings_dir() else {
        return Ok(());
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create settings directory: {}", dir.display()))?;
    let path = dir.join("settings.toml");
    if !path.exists() {
        fs::write(&path, DEFAULT_SETTINGS_TOML)
            .with_context(|| format!("failed to write settings: {}", path.display()))?;
    }
    Ok(())
}
