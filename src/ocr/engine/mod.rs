mod assemble;
mod environment;
mod filter;
mod geom;
mod language;
mod merge;
mod parse;
mod tesseract;

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{info, warn};

use crate::error::OcrError;
use crate::ocr::{OcrDocument, OcrOutcome, Token};

pub use assemble::assemble;
pub use environment::missing_dependencies;
pub use filter::filter_tokens;
pub use language::{select_language, DEFAULT_LANGUAGE};
pub use merge::{aggregate_lines, LineKey};
pub use parse::parse_tsv_tokens;
pub use tesseract::Tesseract;

/// The recognition engine, seen as a black box that produces tokens.
pub trait Recognizer {
    /// Language codes the engine can recognize right now.
    fn languages(&self) -> Result<BTreeSet<String>, OcrError>;

    /// Per-word token stream, in emission order and unfiltered.
    fn recognize_tokens(&self, image: &Path, language: &str) -> Result<Vec<Token>, OcrError>;

    /// The engine's own layout-aware text for the whole image.
    fn recognize_text(&self, image: &Path, language: &str) -> Result<String, OcrError>;

    /// Human readable descriptions of whatever the engine needs but cannot find.
    fn missing_dependencies(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Runs one image through recognition and structuring.
pub fn extract_text(recognizer: &dyn Recognizer, image_path: &Path, language: &str) -> OcrOutcome {
    match extract_document(recognizer, image_path, language) {
        Ok(document) => OcrOutcome::Success(document),
        Err(err) => {
            warn!("ocr: {}", err);
            OcrOutcome::Failure(err)
        }
    }
}

fn extract_document(
    recognizer: &dyn Recognizer,
    image_path: &Path,
    requested: &str,
) -> Result<OcrDocument, OcrError> {
    let missing = missing_dependencies(recognizer);
    if !missing.is_empty() {
        return Err(OcrError::Environment(missing));
    }
    if !image_path.exists() {
        return Err(OcrError::InputNotFound(image_path.to_path_buf()));
    }

    let (width, height) = image::image_dimensions(image_path)
        .map_err(|err| OcrError::RecognitionFailed(format!("failed to decode image: {}", err)))?;

    let available = match recognizer.languages() {
        Ok(langs) => langs,
        Err(err) => {
            warn!("ocr: could not list languages: {}", err);
            BTreeSet::new()
        }
    };
    let language = select_language(requested, &available);
    if language != requested {
        info!("ocr: language {} not installed; using {}", requested, language);
    }

    let tokens = recognizer.recognize_tokens(image_path, &language)?;
    let token_count = tokens.len();
    let tokens = filter_tokens(tokens);
    let full_text = recognizer.recognize_text(image_path, &language)?;
    if tokens.is_empty() || full_text.trim().is_empty() {
        return Err(OcrError::EmptyResult);
    }

    let lines = aggregate_lines(&tokens);
    info!(
        "ocr: {}x{} {}: {} tokens, {} kept, {} lines",
        width,
        height,
        language,
        token_count,
        tokens.len(),
        lines.len()
    );
    Ok(assemble(tokens, lines, width, height, &language, &full_text))
}
