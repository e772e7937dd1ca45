use crate::constants::{EXPORT_FILE_EXT, EXPORT_FILE_PREFIX};
use crate::surface::{RasterSurface, SurfaceError};

/// Encoded canvas plus the suggested download name.
#[derive(Clone, Debug)]
pub struct ExportedImage {
    pub file_name: String,
    pub png: Vec<u8>,
}

/// `2024-05-01T12:34:56.789Z` -> `graffiti-2024-05-01-12-34-56.png`
pub fn export_file_name(iso8601: &str) -> String {
    let whole_seconds = iso8601.split('.').next().unwrap_or_default();
    let stamp = whole_seconds.trim_end_matches('Z').replace([':', 'T'], "-");
    format!("{EXPORT_FILE_PREFIX}{stamp}{EXPORT_FILE_EXT}")
}

pub fn export_png<S: RasterSurface + ?Sized>(
    surface: &S,
    iso8601: &str,
) -> Result<ExportedImage, SurfaceError> {
    let png = surface.encode_png()?;
    let file_name = export_file_name(iso8601);
    log::info!("[export] {} ({} bytes)", file_name, png.len());
    Ok(ExportedImage { file_name, png })
}
