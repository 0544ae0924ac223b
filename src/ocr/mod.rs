mod engine;
mod outcome;

pub use engine::{
    aggregate_lines, assemble, extract_text, filter_tokens, missing_dependencies,
    parse_tsv_tokens, select_language, LineKey, Recognizer, Tesseract, DEFAULT_LANGUAGE,
};
pub use outcome::{DependencyReport, OcrOutcome};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BBoxPx {
    pub x: u32,
    pub y: u32,
    #[serde(rename = "width")]
    pub w: u32,
    #[serde(rename = "height")]
    pub h: u32,
}

impl BBoxPx {
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }
}

/// One fragment as emitted by the recognizer, before any filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Recognizer scale (0..=100); negative marks a box without text.
    pub confidence: i32,
    pub bbox: BBoxPx,
    pub block_num: u32,
    pub line_num: u32,
    pub word_num: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRegion {
    pub text: String,
    #[serde(flatten)]
    pub bbox: BBoxPx,
    pub confidence: i32,
    pub line_num: u32,
    pub block_num: u32,
    pub word_num: u32,
}

impl From<Token> for WordRegion {
    fn from(token: Token) -> Self {
        Self {
            text: token.text,
            bbox: token.bbox,
            confidence: token.confidence,
            line_num: token.line_num,
            block_num: token.block_num,
            word_num: token.word_num,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRegion {
    pub text: String,
    #[serde(flatten)]
    pub bbox: BBoxPx,
    pub block_num: u32,
    pub line_num: u32,
    pub words: Vec<WordRegion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrDocument {
    pub text: String,
    pub regions: Vec<WordRegion>,
    pub lines: Vec<LineRegion>,
    pub image_width: u32,
    pub image_height: u32,
    pub language: String,
}
