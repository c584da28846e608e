use std::io::Cursor;
use std::path::Path;

use crate::foundation::error::{FoldtraceError, FoldtraceResult};
use crate::render::frame::FrameRgba;

/// Encode a frame as PNG bytes.
pub fn encode_png(frame: &FrameRgba) -> FoldtraceResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut bytes),
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| FoldtraceError::encode(format!("encode png: {e}")))?;
    Ok(bytes)
}

/// Write a frame to `path` as a PNG file, creating parent directories.
pub fn write_png(frame: &FrameRgba, path: impl AsRef<Path>) -> FoldtraceResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                FoldtraceError::encode(format!(
                    "create output dir '{}': {e}",
                    parent.display()
                ))
            })?;
        }
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| FoldtraceError::encode(format!("write png '{}': {e}", path.display())))
}
