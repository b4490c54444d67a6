//! RGB bitmap with clipped primitive fills.

use std::path::Path;

use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};
use log::debug;

use crate::error::RasterError;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

/// Row-major RGB raster.
///
/// Drawing calls take signed coordinates and silently clip whatever falls
/// outside the image, so callers can draw partially visible shapes directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![fill; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Resize the image, keeping the allocation when possible.
    ///
    /// Pixel contents are unspecified afterwards; callers repaint.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.pixels.resize(len, Rgb::default());
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fill the rectangle whose corners `(x0, y0)` and `(x1, y1)` are both
    /// inside it. Empty when `x1 < x0` or `y1 < y0`.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let left = x0.max(0);
        let top = y0.max(0);
        let right = x1.min(self.width as i32 - 1);
        let bottom = y1.min(self.height as i32 - 1);
        if right < left || bottom < top {
            return;
        }
        let stride = self.width as usize;
        for y in top..=bottom {
            let row = (y as usize) * stride;
            self.pixels[row + left as usize..=row + right as usize].fill(color);
        }
    }

    /// Fill the ellipse inscribed in the inclusive box `(x0, y0)..=(x1, y1)`.
    pub fn fill_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        if x1 < x0 || y1 < y0 {
            return;
        }
        let cx = (x0 + x1) as f64 / 2.0;
        let cy = (y0 + y1) as f64 / 2.0;
        let rx = (x1 - x0) as f64 / 2.0;
        let ry = (y1 - y0) as f64 / 2.0;
        if rx == 0.0 || ry == 0.0 {
            self.fill_rect(x0, y0, x1, y1, color);
            return;
        }
        for y in y0.max(0)..=y1.min(self.height as i32 - 1) {
            let ny = (y as f64 - cy) / ry;
            for x in x0.max(0)..=x1.min(self.width as i32 - 1) {
                let nx = (x as f64 - cx) / rx;
                if nx * nx + ny * ny <= 1.0 {
                    self.set(x, y, color);
                }
            }
        }
    }

    /// Number of pixels with exactly this color.
    pub fn count(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Packed `RGBRGB...` bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            out.extend_from_slice(&[p.r, p.g, p.b]);
        }
        out
    }

    /// Encode as a PNG file image.
    pub fn to_png(&self) -> Result<Vec<u8>, RasterError> {
        if self.width == 0 || self.height == 0 {
            return Err(RasterError::EmptyImage(self.width, self.height));
        }
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(
            &self.to_rgb_bytes(),
            self.width,
            self.height,
            ColorType::Rgb8,
        )?;
        debug!(
            "encoded {}x{} frame as {} PNG bytes",
            self.width,
            self.height,
            out.len()
        );
        Ok(out)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        let bytes = self.to_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
