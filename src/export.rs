//! # Export
//!
//! Getting a painted label out of the process: PNG bytes for download, or a
//! hand-off to the platform print spooler.
//!
//! ```text
//! RasterSurface ──encode_png──► PNG bytes ──┬──► save_png (file)
//!                                           └──► PrintHandoff (lp, ...)
//! ```

use chrono::{DateTime, Utc};
use image::ImageEncoder;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::PricetagError;
use crate::surface::RasterSurface;

/// Encode the surface as an RGB PNG.
pub fn encode_png(surface: &RasterSurface) -> Result<Vec<u8>, PricetagError> {
    let image = surface.image();
    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e: image::ImageError| PricetagError::Export(e.to_string()))?;

    Ok(png_bytes)
}

/// Encode the surface and write it to `path`.
pub fn save_png(surface: &RasterSurface, path: &Path) -> Result<(), PricetagError> {
    let png_bytes = encode_png(surface)?;
    std::fs::write(path, &png_bytes).map_err(|e| {
        PricetagError::Export(format!("failed to write {}: {}", path.display(), e))
    })?;
    tracing::info!(path = %path.display(), bytes = png_bytes.len(), "label saved");
    Ok(())
}

/// Default download name: `barcode_label_<wsn>_<unix millis>.png`.
pub fn download_file_name(wsn: &str, now: DateTime<Utc>) -> String {
    format!("barcode_label_{}_{}.png", wsn, now.timestamp_millis())
}

/// Hands a finished label to whatever prints it.
pub trait PrintHandoff {
    fn print(&self, png: &[u8], job_name: &str) -> Result<(), PricetagError>;
}

/// Pipes the PNG into a spooler command (`lp` by default).
///
/// ```text
/// lp [-d <destination>] -t <job name>   < label.png
/// ```
#[derive(Debug, Clone)]
pub struct SystemPrinter {
    command: String,
    destination: Option<String>,
}

impl SystemPrinter {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            destination: None,
        }
    }

    /// Send jobs to a named printer instead of the system default.
    pub fn destination(mut self, name: impl Into<String>) -> Self {
        self.destination = Some(name.into());
        self
    }

    fn args(&self, job_name: &str) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(dest) = &self.destination {
            args.push("-d".to_string());
            args.push(dest.clone());
        }
        args.push("-t".to_string());
        args.push(job_name.to_string());
        args
    }
}

impl Default for SystemPrinter {
    fn default() -> Self {
        Self::new("lp")
    }
}

impl PrintHandoff for SystemPrinter {
    fn print(&self, png: &[u8], job_name: &str) -> Result<(), PricetagError> {
        let mut child = Command::new(&self.command)
            .args(self.args(job_name))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| PricetagError::Export(format!("cannot start '{}': {}", self.command, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(png) {
                // Close the pipe and reap the spooler before reporting.
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(PricetagError::Export(format!(
                    "failed to send label to '{}': {}",
                    self.command, e
                )));
            }
        }

        let status = child
            .wait()
            .map_err(|e| PricetagError::Export(format!("'{}' did not finish: {}", self.command, e)))?;
        if !status.success() {
            return Err(PricetagError::Export(format!(
                "'{}' exited with {}",
                self.command, status
            )));
        }

        tracing::info!(command = %self.command, job = job_name, "label sent to printer");
        Ok(())
    }
}
