use std::path::PathBuf;

use text_extractor_rust::{OcrError, OcrOutcome};

#[test]
fn missing_image_payload_snapshot() {
    let outcome = OcrOutcome::Failure(OcrError::InputNotFound(PathBuf::from(
        "/tmp/text-extractor-shot.png",
    )));
    insta::assert_json_snapshot!(outcome, @r###"
    {
      "success": false,
      "error": "Image file not found: /tmp/text-extractor-shot.png",
      "text": "",
      "regions": [],
      "lines": []
    }
    "###);
}

#[test]
fn no_text_payload_snapshot() {
    insta::assert_json_snapshot!(OcrOutcome::Failure(OcrError::EmptyResult), @r###"
    {
      "success": false,
      "error": "No text found in the image",
      "text": "",
      "regions": [],
      "lines": []
    }
    "###);
}
