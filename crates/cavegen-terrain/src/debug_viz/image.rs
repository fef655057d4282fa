//! A 2D debug image represented as a flat array of RGBA pixels.

/// A 2D debug image, stored as row-major RGBA pixels with row 0 at the top.
#[derive(Clone, Debug)]
pub struct DebugImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in row-major RGBA format. Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl DebugImage {
    /// Create a new transparent black image with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Set a single pixel's RGBA value. Writes outside the image are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(idx) = self.offset(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&rgba);
        }
    }

    /// Get a pixel's RGBA value, or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.offset(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(rgba)
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize * self.width as usize + x as usize) * 4)
    }
}
