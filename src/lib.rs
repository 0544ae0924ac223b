use std::path::{Path, PathBuf};

use tracing::info;

pub mod capture;
pub mod cli;
pub mod error;
pub mod logging;
pub mod ocr;
mod paths;
pub mod settings;
#[cfg(test)]
mod test_util;

pub use error::OcrError;
pub use ocr::{DependencyReport, OcrDocument, OcrOutcome, Recognizer, Tesseract};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub image_path: Option<String>,
    pub language: Option<String>,
    pub capture: bool,
    pub settings_path: Option<String>,
}

/// One invocation: resolve the image (a file or a fresh screen capture) and
/// recognize it with tesseract. Never fails; problems become a failure outcome.
pub async fn run(config: Config) -> OcrOutcome {
    if config.image_path.is_none() && !config.capture {
        return OcrError::Usage.into();
    }

    let settings = match load_settings(config.settings_path.as_deref()) {
        Ok(settings) => settings,
        Err(err) => return err.into(),
    };
    let language = config
        .language
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(settings.ocr_language.as_str())
        .to_string();
    let recognizer = Tesseract::from_settings(&settings);

    if config.capture {
        let screenshot = match capture::capture_region(&settings).await {
            Ok(path) => path,
            Err(err) => return err.into(),
        };
        return ocr::extract_text(&recognizer, &screenshot, &language);
    }

    let image_path = PathBuf::from(config.image_path.unwrap_or_default());
    info!("ocr: {} ({})", image_path.display(), language);
    ocr::extract_text(&recognizer, &image_path, &language)
}

/// Dependency report without recognizing anything.
pub fn dependency_report(settings_path: Option<&str>) -> DependencyReport {
    check_environment(settings_path).into()
}

pub fn check_environment(settings_path: Option<&str>) -> Result<(), OcrError> {
    let settings = load_settings(settings_path)?;
    let missing = ocr::missing_dependencies(&Tesseract::from_settings(&settings));
    if missing.is_empty() {
        Ok(())
    } else {
        Err(OcrError::Environment(missing))
    }
}

pub fn list_languages(settings_path: Option<&str>) -> Result<Vec<String>, OcrError> {
    let settings = load_settings(settings_path)?;
    let langs = Tesseract::from_settings(&settings).languages()?;
    Ok(langs.into_iter().collect())
}

fn load_settings(path: Option<&str>) -> Result<settings::Settings, OcrError> {
    settings::load_settings(path.map(Path::new))
        .map_err(|err| OcrError::Settings(format!("{:#}", err)))
}
