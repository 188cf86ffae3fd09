//! Shared primitives for the patina pixel-transformation engines.
//!
//! Provides [`PixelBuffer`], the RGBA byte raster every engine consumes and
//! produces, plus the seeded [`SineRng`] generator and the perceptual
//! luminance weighting they share.
//!
//! # Example
//!
//! ```ignore
//! use rhizome_patina_core::PixelBuffer;
//!
//! let image = PixelBuffer::open("input.png")?;
//! let pixel = image.get_pixel(0, 0);
//! ```

use std::path::Path;

use image::GenericImageView;
use thiserror::Error;

// ============================================================================
// Pixel Buffer
// ============================================================================

/// Errors from loading or saving pixel buffers.
#[derive(Debug, Error)]
pub enum PixelBufferError {
    /// Failed to decode or encode the image.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    /// I/O error reading or writing the file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A row-major RGBA byte raster.
///
/// Channel order is R, G, B, A with one byte per channel, so `data` holds
/// `4 * width * height` bytes. Engines take a buffer by reference and return
/// a fresh one; the caller owns both.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelBuffer {
    /// Raw RGBA bytes, row-major.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl PixelBuffer {
    /// Creates a zeroed (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; (width as usize) * (height as usize) * 4],
            width,
            height,
        }
    }

    /// Creates a buffer filled with one RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for _ in 0..(width as usize) * (height as usize) {
            data.extend_from_slice(&rgba);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Creates a buffer from raw RGBA bytes.
    ///
    /// `data` must be row-major RGBA with length `4 * width * height`.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * 4,
            "data length must equal 4 * width * height"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Loads a buffer from an image file, converting to RGBA8.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PixelBufferError> {
        let img = image::open(path)?;
        let (width, height) = img.dimensions();
        Ok(Self::from_raw(img.to_rgba8().into_raw(), width, height))
    }

    /// Saves the buffer as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), PixelBufferError> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| {
                PixelBufferError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "buffer length does not match dimensions",
                ))
            })?;
        img.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    /// Returns the buffer dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Byte offset of the pixel at (x, y).
    #[inline]
    pub fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) as usize) * 4
    }

    /// Returns the RGBA value at (x, y).
    ///
    /// Coordinates must be inside the buffer.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.pixel_index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Writes the RGBA value at (x, y).
    ///
    /// Coordinates must be inside the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.pixel_index(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }
}

// ============================================================================
// Luminance
// ============================================================================

/// Perceptual luminance of an RGB triple, in [0, 255].
///
/// Uses the Rec. 601 weights 0.299, 0.587, 0.114.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Clamps a float channel value to a byte, rounding half away from zero.
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

// ============================================================================
// Seeded RNG
// ============================================================================

/// Deterministic counter-based random generator.
///
/// Each draw takes the sine of a running counter, scales it by 10000, and
/// keeps the fractional part, yielding values in [0, 1). The sequence is
/// fully determined by the seed and the number of draws, so any transform
/// built on it is reproducible.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SineRng {
    state: f64,
}

impl Default for SineRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SineRng {
    /// Creates a new generator with the given seed.
    pub fn new(seed: i32) -> Self {
        Self {
            state: seed as f64,
        }
    }

    /// Returns the next value in [0, 1).
    ///
    /// Note this is `x - floor(x)`, which stays in [0, 1) even when the
    /// scaled sine is negative.
    pub fn next_f64(&mut self) -> f64 {
        let x = self.state.sin() * 10000.0;
        self.state += 1.0;
        x - x.floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_roundtrip_pixels() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.set_pixel(2, 1, [10, 20, 30, 40]);
        assert_eq!(buf.get_pixel(2, 1), [10, 20, 30, 40]);
        assert_eq!(buf.get_pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_buffer_filled() {
        let buf = PixelBuffer::filled(2, 2, [1, 2, 3, 4]);
        assert_eq!(buf.data.len(), 16);
        assert_eq!(buf.get_pixel(1, 1), [1, 2, 3, 4]);
    }

    #[test]
    #[should_panic]
    fn test_from_raw_rejects_bad_length() {
        let _ = PixelBuffer::from_raw(vec![0; 7], 2, 2);
    }

    #[test]
    fn test_pixel_index_row_major() {
        let buf = PixelBuffer::new(4, 4);
        assert_eq!(buf.pixel_index(0, 0), 0);
        assert_eq!(buf.pixel_index(1, 0), 4);
        assert_eq!(buf.pixel_index(0, 1), 16);
    }

    #[test]
    fn test_luminance_weights() {
        assert_eq!(luminance(0, 0, 0), 0.0);
        assert!((luminance(255, 255, 255) - 255.0).abs() < 0.001);
        // Green dominates the weighting
        assert!(luminance(0, 255, 0) > luminance(255, 0, 0));
        assert!(luminance(255, 0, 0) > luminance(0, 0, 255));
    }

    #[test]
    fn test_clamp_channel_saturates_and_rounds() {
        assert_eq!(clamp_channel(-3.0), 0);
        assert_eq!(clamp_channel(300.0), 255);
        assert_eq!(clamp_channel(127.5), 128);
        assert_eq!(clamp_channel(0.4), 0);
    }

    #[test]
    fn test_sine_rng_known_sequence() {
        let mut rng = SineRng::new(1);
        // sin(1) * 10000 = 8414.709848..., fractional part 0.709848...
        let first = rng.next_f64();
        assert!((first - 0.709_848_078_965_066_5).abs() < 1e-9);
        // sin(2) * 10000 = 9092.974268..., fractional part 0.974268...
        let second = rng.next_f64();
        assert!((second - 0.974_268_256_816_954).abs() < 1e-9);
    }

    #[test]
    fn test_sine_rng_always_unit_interval() {
        for seed in [-50, -1, 0, 1, 7, 1000] {
            let mut rng = SineRng::new(seed);
            for _ in 0..500 {
                let v = rng.next_f64();
                assert!((0.0..1.0).contains(&v), "out of range for seed {seed}: {v}");
            }
        }
    }

    #[test]
    fn test_sine_rng_deterministic() {
        let mut a = SineRng::new(42);
        let mut b = SineRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }
}
