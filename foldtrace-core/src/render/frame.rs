use crate::foundation::error::{FoldtraceError, FoldtraceResult};

/// One opaque grayscale pixel as RGBA8 (r = g = b = shade, a = 255).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; always 255 in rendered output.
    pub a: u8,
}

impl PixelRgba {
    /// Convert a shading intensity to an opaque gray pixel.
    ///
    /// Intensity is clamped to `[0, 1]` here, at the pixel-output stage;
    /// non-finite intensities collapse to background black.
    pub fn from_intensity(intensity: f64) -> Self {
        let clamped = if intensity.is_finite() {
            intensity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let shade = (clamped * 255.0) as u8;
        Self {
            r: shade,
            g: shade,
            b: shade,
            a: 255,
        }
    }
}

/// One rendered scanline: the unit of parallel work and its result.
///
/// Produced exactly once per row and placed into the frame by `row_index`,
/// never by arrival order.
#[derive(Clone, Debug)]
pub struct RowResult {
    /// Row coordinate this result belongs to, in `[0, height)`.
    pub row_index: u32,
    /// All pixels of the row, left to right; length equals the frame width.
    pub pixels: Vec<PixelRgba>,
}

/// A rendered frame as RGBA8 pixels.
///
/// `data` is tightly packed, row-major, 4 bytes per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Allocate a zeroed frame.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize) * 4;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Copy a finished row into its slot, keyed by the row's own index.
    pub fn place_row(&mut self, row: &RowResult) -> FoldtraceResult<()> {
        if row.row_index >= self.height {
            return Err(FoldtraceError::render(format!(
                "row index {} out of range for height {}",
                row.row_index, self.height
            )));
        }
        if row.pixels.len() != self.width as usize {
            return Err(FoldtraceError::render(format!(
                "row {} has {} pixels, expected {}",
                row.row_index,
                row.pixels.len(),
                self.width
            )));
        }

        let start = (row.row_index as usize) * (self.width as usize) * 4;
        for (x, px) in row.pixels.iter().enumerate() {
            let at = start + x * 4;
            self.data[at] = px.r;
            self.data[at + 1] = px.g;
            self.data[at + 2] = px.b;
            self.data[at + 3] = px.a;
        }
        Ok(())
    }

    /// Read back the pixel at `(x, y)`. Panics outside the frame bounds.
    pub fn pixel(&self, x: u32, y: u32) -> PixelRgba {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let at = ((y as usize) * (self.width as usize) + x as usize) * 4;
        PixelRgba {
            r: self.data[at],
            g: self.data[at + 1],
            b: self.data[at + 2],
            a: self.data[at + 3],
        }
    }
}
