use std::io;

use tempfile::TempPath;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::error::OcrError;
use crate::settings::Settings;

/// Lets the user pick a screen region with the configured screenshot tool.
///
/// The tool gets the configured arguments followed by the target path. The
/// returned path is deleted when dropped.
pub async fn capture_region(settings: &Settings) -> Result<TempPath, OcrError> {
    let path = tempfile::Builder::new()
        .prefix("text-extractor-")
        .suffix(".png")
        .tempfile()
        .map_err(|err| OcrError::Capture(format!("failed to create temp file: {}", err)))?
        .into_temp_path();

    let mut command = Command::new(&settings.capture_command);
    command
        .args(&settings.capture_args)
        .arg(&*path)
        .kill_on_drop(true);
    debug!("capture: {:?}", command);

    let output = match timeout(settings.capture_timeout, command.output()).await {
        Ok(result) => result.map_err(|err| spawn_error(&settings.capture_command, err))?,
        Err(_) => {
            return Err(OcrError::Capture(format!(
                "screenshot took longer than {}s",
                settings.capture_timeout.as_secs_f32()
            )));
        }
    };
    if !output.status.success() {
        return Err(OcrError::Capture(format!(
            "{} exited with {}",
            settings.capture_command, output.status
        )));
    }

    let size = std::fs::metadata(&path).map(|meta| meta.len()).unwrap_or(0);
    if size == 0 {
        return Err(OcrError::Capture("no region was captured".to_string()));
    }
    info!("capture: {} bytes at {}", size, path.display());
    Ok(path)
}

fn spawn_error(command: &str, err: io::Error) -> OcrError {
    if err.kind() == io::ErrorKind::NotFound {
        OcrError::Capture(format!("{} not found", command))
    } else {
        OcrError::Capture(format!("failed to run {}: {}", command, err))
    }
}
