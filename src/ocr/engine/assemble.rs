use std::collections::BTreeMap;

use crate::ocr::{LineRegion, OcrDocument, Token, WordRegion};

use super::merge::LineKey;

/// Builds the success document from already computed parts.
///
/// `full_text` is the recognizer's own whole-image text; it is not rebuilt from
/// the lines since the recognizer's serialization keeps paragraph breaks the
/// token stream does not carry.
pub fn assemble(
    tokens: Vec<Token>,
    lines: BTreeMap<LineKey, LineRegion>,
    image_width: u32,
    image_height: u32,
    language: &str,
    full_text: &str,
) -> OcrDocument {
    OcrDocument {
        text: full_text.trim().to_string(),
        regions: tokens.into_iter().map(WordRegion::from).collect(),
        lines: lines.into_values().collect(),
        image_width,
        image_height,
        language: language.to_string(),
    }
}
