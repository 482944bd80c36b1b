/// An RGBA pixel buffer holding one rasterized gradient.
///
/// Write-once in practice: the rasterizer fills it, the resolver only
/// reads, and it is dropped after the placement pass.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, 4 bytes per pixel, row-major order.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer filled with black (opaque).
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        for chunk in pixels.chunks_exact_mut(4) {
            chunk[3] = 255;
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Read the RGB triple at `(x, y)`. O(1).
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.index(x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Write the RGB triple at `(x, y)`, leaving alpha opaque.
    #[inline]
    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.index(x, y);
        self.pixels[i] = rgb[0];
        self.pixels[i + 1] = rgb[1];
        self.pixels[i + 2] = rgb[2];
        self.pixels[i + 3] = 255;
    }

    /// Fill an axis-aligned rectangle with one color. Out-of-bounds parts
    /// are skipped.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, w: u32, h: u32, rgb: [u8; 3]) {
        for y in y0..(y0 + h).min(self.height) {
            for x in x0..(x0 + w).min(self.width) {
                self.set_rgb(x, y, rgb);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black_opaque() {
        let buf = PixelBuffer::new(4, 4);
        assert_eq!(buf.pixels.len(), 4 * 4 * 4);
        for chunk in buf.pixels.chunks_exact(4) {
            assert_eq!(chunk, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn set_and_read_round_trip() {
        let mut buf = PixelBuffer::new(8, 8);
        buf.set_rgb(3, 5, [10, 20, 30]);
        assert_eq!(buf.rgb(3, 5), [10, 20, 30]);
        assert_eq!(buf.rgb(0, 0), [0, 0, 0]);
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.fill_rect(2, 2, 10, 10, [255, 0, 0]);
        assert_eq!(buf.rgb(3, 3), [255, 0, 0]);
        assert_eq!(buf.rgb(1, 1), [0, 0, 0]);
    }
}
