use std::collections::BTreeSet;
use std::io;
use std::path::Path;
use std::process::{Command, Output};

use tracing::debug;

use crate::error::OcrError;
use crate::ocr::Token;
use crate::settings::Settings;

use super::Recognizer;
use super::parse::parse_tsv_tokens;

/// Drives the `tesseract` command line tool.
#[derive(Debug, Clone)]
pub struct Tesseract {
    command: String,
    psm: Option<u32>,
    dpi: Option<u32>,
}

impl Tesseract {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            psm: None,
            dpi: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            command: settings.tesseract_command.clone(),
            psm: settings.ocr_psm,
            dpi: settings.ocr_dpi,
        }
    }

    fn run(&self, image: &Path, language: &str, format: Option<&str>) -> Result<String, OcrError> {
        let mut command = Command::new(&self.command);
        command.arg(image).arg("stdout").arg("-l").arg(language);
        if let Some(psm) = self.psm {
            command.arg("--psm").arg(psm.to_string());
        }
        if let Some(dpi) = self.dpi {
            command.arg("--dpi").arg(dpi.to_string());
        }
        if let Some(format) = format {
            command.arg(format);
        }
        debug!("tesseract: {:?}", command);

        let output = command.output().map_err(spawn_error)?;
        if !output.status.success() {
            return Err(OcrError::RecognitionFailed(failure_message(&output)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn answers_version(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

impl Recognizer for Tesseract {
    fn languages(&self) -> Result<BTreeSet<String>, OcrError> {
        let output = Command::new(&self.command)
            .arg("--list-langs")
            .output()
            .map_err(spawn_error)?;
        if !output.status.success() {
            return Err(OcrError::RecognitionFailed(format!(
                "tesseract --list-langs failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(parse_language_list(&String::from_utf8_lossy(&output.stdout)))
    }

    fn recognize_tokens(&self, image: &Path, language: &str) -> Result<Vec<Token>, OcrError> {
        let tsv = self.run(image, language, Some("tsv"))?;
        Ok(parse_tsv_tokens(&tsv))
    }

    fn recognize_text(&self, image: &Path, language: &str) -> Result<String, OcrError> {
        self.run(image, language, None)
    }

    fn missing_dependencies(&self) -> Vec<String> {
        if !self.answers_version() {
            return vec!["Tesseract OCR not found. Install tesseract-ocr package.".to_string()];
        }
        match self.languages() {
            Ok(langs) if !langs.is_empty() => Vec::new(),
            _ => vec![
                "Tesseract language data not found. Install a tesseract-ocr language pack."
                    .to_string(),
            ],
        }
    }
}

/// `--list-langs` prints a header line followed by one code per line.
pub(super) fn parse_language_list(stdout: &str) -> BTreeSet<String> {
    let mut langs = BTreeSet::new();
    for (idx, line) in stdout.lines().enumerate() {
        if idx == 0 && line.starts_with("List of available languages") {
            continue;
        }
        let value = line.trim();
        if !value.is_empty() {
            langs.insert(value.to_string());
        }
    }
    langs
}

fn spawn_error(err: io::Error) -> OcrError {
    if err.kind() == io::ErrorKind::NotFound {
        OcrError::EngineMissing
    } else {
        OcrError::RecognitionFailed(format!("failed to run tesseract: {}", err))
    }
}

fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("tesseract failed with {}", output.status)
    } else {
        format!("tesseract failed: {}", stderr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING_BINARY: &str = "text-extractor-rust-no-such-tesseract";

    #[test]
    fn language_list_skips_header() {
        let stdout = "List of available languages in \"/usr/share/tesseract-ocr/5/tessdata/\" (3):\neng\nosd\ndeu\n\n";
        let langs = parse_language_list(stdout);
        assert_eq!(
            langs.into_iter().collect::<Vec<_>>(),
            vec!["deu".to_string(), "eng".to_string(), "osd".to_string()]
        );
    }

    #[test]
    fn language_list_without_header_keeps_first_line() {
        let langs = parse_language_list("eng\nfra\n");
        assert!(langs.contains("eng"));
        assert!(langs.contains("fra"));
    }

    #[test]
    fn missing_binary_is_reported_as_engine_missing() {
        let engine = Tesseract::new(MISSING_BINARY);
        let err = engine
            .recognize_tokens(Path::new("/tmp/whatever.png"), "eng")
            .unwrap_err();
        assert_eq!(err, OcrError::EngineMissing);
        assert_eq!(engine.languages().unwrap_err(), OcrError::EngineMissing);
    }

    #[test]
    fn failing_run_carries_stderr() {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = dir.path().join("fail.sh");
        std::fs::write(&script, "echo boom >&2\nexit 2\n").expect("write script");
        // `sh <script> stdout -l eng tsv` runs the script with tesseract's args.
        let engine = Tesseract::new("sh");
        let err = engine.recognize_tokens(&script, "eng").unwrap_err();
        assert_eq!(err, OcrError::RecognitionFailed("tesseract failed: boom".to_string()));

        let quiet = dir.path().join("quiet.sh");
        std::fs::write(&quiet, "exit 3\n").expect("write script");
        match engine.recognize_text(&quiet, "eng").unwrap_err() {
            OcrError::RecognitionFailed(message) => {
                assert!(message.starts_with("tesseract failed with"), "{message}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_binary_shows_up_in_dependency_report() {
        let missing = Tesseract::new(MISSING_BINARY).missing_dependencies();
        assert_eq!(missing.len(), 1);
        assert!(missing[0].contains("Tesseract OCR not found"));
    }
}
