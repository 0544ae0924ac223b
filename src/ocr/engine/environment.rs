use image::ImageFormat;

use super::Recognizer;

const REQUIRED_DECODERS: &[(ImageFormat, &str)] =
    &[(ImageFormat::Png, "PNG"), (ImageFormat::Jpeg, "JPEG")];

/// Collects every missing runtime dependency so one report shows them all.
pub fn missing_dependencies(recognizer: &dyn Recognizer) -> Vec<String> {
    let mut missing = missing_decoders(REQUIRED_DECODERS);
    missing.extend(recognizer.missing_dependencies());
    missing
}

fn missing_decoders(formats: &[(ImageFormat, &str)]) -> Vec<String> {
    formats
        .iter()
        .filter(|(format, _)| !format.reading_enabled())
        .map(|(_, name)| {
            format!("{} image decoding support is not available in this build", name)
        })
        .collect()
}
