use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::OcrError;
use crate::ocr::{LineRegion, OcrDocument, WordRegion};

/// What a caller gets back: either the document or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OcrOutcome {
    Success(OcrDocument),
    Failure(OcrError),
}

impl OcrOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, OcrOutcome::Success(_))
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<OcrError> for OcrOutcome {
    fn from(err: OcrError) -> Self {
        OcrOutcome::Failure(err)
    }
}

impl Serialize for OcrOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OcrOutcome::Success(doc) => {
                let mut state = serializer.serialize_struct("OcrOutcome", 8)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("error", &Option::<String>::None)?;
                state.serialize_field("text", &doc.text)?;
                state.serialize_field("regions", &doc.regions)?;
                state.serialize_field("lines", &doc.lines)?;
                state.serialize_field("image_width", &doc.image_width)?;
                state.serialize_field("image_height", &doc.image_height)?;
                state.serialize_field("language", &doc.language)?;
                state.end()
            }
            OcrOutcome::Failure(err) => {
                let mut state = serializer.serialize_struct("OcrOutcome", 5)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", &err.to_string())?;
                state.serialize_field("text", "")?;
                state.serialize_field("regions", &[] as &[WordRegion])?;
                state.serialize_field("lines", &[] as &[LineRegion])?;
                state.end()
            }
        }
    }
}

/// Result of a standalone dependency check (`--check`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DependencyReport {
    pub success: bool,
    pub error: Option<String>,
    pub missing: Vec<String>,
}

impl DependencyReport {
    pub fn exit_code(&self) -> i32 {
        if self.success { 0 } else { 1 }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<Result<(), OcrError>> for DependencyReport {
    fn from(result: Result<(), OcrError>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                error: None,
                missing: Vec::new(),
            },
            Err(err) => {
                let missing = match &err {
                    OcrError::Environment(missing) => missing.clone(),
                    _ => Vec::new(),
                };
                Self {
                    success: false,
                    error: Some(err.to_string()),
                    missing,
                }
            }
        }
    }
}
