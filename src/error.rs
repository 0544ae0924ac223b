use std::path::PathBuf;

/// Every way an invocation can fail. All of them end up in the failure payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OcrError {
    #[error("Usage: text-extractor-rust <image_path> [language]")]
    Usage,

    #[error("{}", .0.join("; "))]
    Environment(Vec<String>),

    #[error("Image file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Tesseract OCR is not installed or not in PATH")]
    EngineMissing,

    #[error("{0}")]
    RecognitionFailed(String),

    #[error("No text found in the image")]
    EmptyResult,

    #[error("invalid settings: {0}")]
    Settings(String),

    #[error("screen capture failed: {0}")]
    Capture(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_message_lists_every_missing_dependency() {
        let err = OcrError::Environment(vec![
            "Tesseract OCR not found. Install tesseract-ocr package.".to_string(),
            "PNG decoding support is not available".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Tesseract OCR not found. Install tesseract-ocr package.; PNG decoding support is not available"
        );
    }

    #[test]
    fn input_not_found_names_the_path() {
        let err = OcrError::InputNotFound(PathBuf::from("/tmp/missing-shot.png"));
        assert_eq!(err.to_string(), "Image file not found: /tmp/missing-shot.png");
    }
}
