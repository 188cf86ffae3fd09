//! Error-diffusion dithering with retro palettes.
//!
//! Reduces an image to a small fixed palette, optionally pixelating it
//! first, and spreads the per-pixel quantization error to neighboring
//! pixels through a selectable diffusion kernel.
//!
//! # Example
//!
//! ```ignore
//! use rhizome_patina_core::PixelBuffer;
//! use rhizome_patina_dither::{dither, DitherAlgorithm, DitherOptions, DitherPalette};
//!
//! let input = PixelBuffer::open("photo.png")?;
//! let options = DitherOptions {
//!     algorithm: DitherAlgorithm::Atkinson,
//!     palette: DitherPalette::GameBoy,
//!     pixel_size: 2.0,
//! };
//! dither(&input, &options).save_png("dithered.png")?;
//! ```

use rhizome_patina_core::PixelBuffer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Diffusion Kernels
// ============================================================================

/// Error diffusion kernel entry: (dx, dy, weight).
type DiffusionEntry = (i32, i32, f32);

/// Error diffusion kernel for dithering.
///
/// Each kernel defines how quantization error is distributed to neighboring
/// pixels that have not been processed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffusionKernel {
    /// Floyd-Steinberg - classic, high quality.
    #[default]
    FloydSteinberg,
    /// Atkinson - lighter, preserves highlights (Mac classic look).
    Atkinson,
    /// Stucki - sharp, large kernel.
    Stucki,
    /// Burkes - simplified Stucki.
    Burkes,
    /// Sierra - smooth gradients.
    Sierra,
    /// Jarvis-Judice-Ninke - very smooth, large kernel.
    JarvisJudiceNinke,
}

impl DiffusionKernel {
    /// Returns the diffusion coefficients for this kernel.
    ///
    /// Atkinson deliberately diffuses only 6/8 of the error; every other
    /// kernel's weights sum to 1.
    fn coefficients(&self) -> &'static [DiffusionEntry] {
        match self {
            Self::FloydSteinberg => &[
                (1, 0, 7.0 / 16.0),
                (-1, 1, 3.0 / 16.0),
                (0, 1, 5.0 / 16.0),
                (1, 1, 1.0 / 16.0),
            ],
            Self::Atkinson => &[
                (1, 0, 1.0 / 8.0),
                (2, 0, 1.0 / 8.0),
                (-1, 1, 1.0 / 8.0),
                (0, 1, 1.0 / 8.0),
                (1, 1, 1.0 / 8.0),
                (0, 2, 1.0 / 8.0),
            ],
            Self::Stucki => &[
                (1, 0, 8.0 / 42.0),
                (2, 0, 4.0 / 42.0),
                (-2, 1, 2.0 / 42.0),
                (-1, 1, 4.0 / 42.0),
                (0, 1, 8.0 / 42.0),
                (1, 1, 4.0 / 42.0),
                (2, 1, 2.0 / 42.0),
                (-2, 2, 1.0 / 42.0),
                (-1, 2, 2.0 / 42.0),
                (0, 2, 4.0 / 42.0),
                (1, 2, 2.0 / 42.0),
                (2, 2, 1.0 / 42.0),
            ],
            Self::Burkes => &[
                (1, 0, 8.0 / 32.0),
                (2, 0, 4.0 / 32.0),
                (-2, 1, 2.0 / 32.0),
                (-1, 1, 4.0 / 32.0),
                (0, 1, 8.0 / 32.0),
                (1, 1, 4.0 / 32.0),
                (2, 1, 2.0 / 32.0),
            ],
            Self::Sierra => &[
                (1, 0, 5.0 / 32.0),
                (2, 0, 3.0 / 32.0),
                (-2, 1, 2.0 / 32.0),
                (-1, 1, 4.0 / 32.0),
                (0, 1, 5.0 / 32.0),
                (1, 1, 4.0 / 32.0),
                (2, 1, 2.0 / 32.0),
                (-1, 2, 2.0 / 32.0),
                (0, 2, 3.0 / 32.0),
                (1, 2, 2.0 / 32.0),
            ],
            Self::JarvisJudiceNinke => &[
                (1, 0, 7.0 / 48.0),
                (2, 0, 5.0 / 48.0),
                (-2, 1, 3.0 / 48.0),
                (-1, 1, 5.0 / 48.0),
                (0, 1, 7.0 / 48.0),
                (1, 1, 5.0 / 48.0),
                (2, 1, 3.0 / 48.0),
                (-2, 2, 1.0 / 48.0),
                (-1, 2, 3.0 / 48.0),
                (0, 2, 5.0 / 48.0),
                (1, 2, 3.0 / 48.0),
                (2, 2, 1.0 / 48.0),
            ],
        }
    }
}

/// Dithering algorithm selection.
///
/// Every variant except [`DitherAlgorithm::None`] wraps a diffusion kernel;
/// `None` keeps the pixelate and palette steps but skips error diffusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg error diffusion.
    #[default]
    FloydSteinberg,
    /// Atkinson error diffusion.
    Atkinson,
    /// Stucki error diffusion.
    Stucki,
    /// Burkes error diffusion.
    Burkes,
    /// Three-row Sierra error diffusion.
    Sierra,
    /// Jarvis-Judice-Ninke error diffusion.
    JarvisJudiceNinke,
    /// Plain palette quantization without diffusion.
    None,
}

impl DitherAlgorithm {
    /// Returns the diffusion kernel for this algorithm, or `None` for plain
    /// quantization.
    pub fn kernel(&self) -> Option<DiffusionKernel> {
        match self {
            Self::FloydSteinberg => Some(DiffusionKernel::FloydSteinberg),
            Self::Atkinson => Some(DiffusionKernel::Atkinson),
            Self::Stucki => Some(DiffusionKernel::Stucki),
            Self::Burkes => Some(DiffusionKernel::Burkes),
            Self::Sierra => Some(DiffusionKernel::Sierra),
            Self::JarvisJudiceNinke => Some(DiffusionKernel::JarvisJudiceNinke),
            Self::None => None,
        }
    }

    /// Lowercase display id.
    pub fn id(&self) -> &'static str {
        match self {
            Self::FloydSteinberg => "floyd",
            Self::Atkinson => "atkinson",
            Self::Stucki => "stucki",
            Self::Burkes => "burkes",
            Self::Sierra => "sierra",
            Self::JarvisJudiceNinke => "jarvis",
            Self::None => "none",
        }
    }
}

// ============================================================================
// Palettes
// ============================================================================

/// Fixed target palette for quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DitherPalette {
    /// Pure black and white.
    #[default]
    BlackWhite,
    /// Four evenly spaced grays.
    Grayscale,
    /// The eight corners of the RGB cube.
    Rgb,
    /// The four greens of the original Game Boy LCD.
    GameBoy,
    /// Black, cyan, magenta, white (CGA palette 1).
    Cga,
    /// Four warm sepia tones.
    Sepia,
}

impl DitherPalette {
    /// Lowercase display id.
    pub fn id(&self) -> &'static str {
        match self {
            Self::BlackWhite => "bw",
            Self::Grayscale => "gray",
            Self::Rgb => "rgb",
            Self::GameBoy => "gameboy",
            Self::Cga => "cga",
            Self::Sepia => "sepia",
        }
    }

    /// Returns the palette entries as RGB triples.
    pub fn colors(&self) -> &'static [[u8; 3]] {
        match self {
            Self::BlackWhite => &[[0, 0, 0], [255, 255, 255]],
            Self::Grayscale => &[[0, 0, 0], [85, 85, 85], [170, 170, 170], [255, 255, 255]],
            Self::Rgb => &[
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ],
            Self::GameBoy => &[
                [0x0f, 0x38, 0x0f],
                [0x30, 0x62, 0x30],
                [0x8b, 0xac, 0x0f],
                [0x9b, 0xbc, 0x0f],
            ],
            Self::Cga => &[
                [0, 0, 0],
                [0x55, 0xff, 0xff],
                [0xff, 0x55, 0xff],
                [255, 255, 255],
            ],
            Self::Sepia => &[
                [0x2b, 0x1d, 0x0e],
                [0x70, 0x42, 0x14],
                [0xb0, 0x8d, 0x57],
                [0xf0, 0xe0, 0xc0],
            ],
        }
    }

    /// Nearest palette entry by squared RGB distance. Ties keep the
    /// lowest-index entry.
    fn nearest(&self, rgb: [f32; 3]) -> [u8; 3] {
        let colors = self.colors();
        let mut best = colors[0];
        let mut best_dist = f32::INFINITY;
        for &color in colors {
            let dr = rgb[0] - color[0] as f32;
            let dg = rgb[1] - color[1] as f32;
            let db = rgb[2] - color[2] as f32;
            let dist = dr * dr + dg * dg + db * db;
            if dist < best_dist {
                best_dist = dist;
                best = color;
            }
        }
        best
    }
}

// ============================================================================
// Dither Pipeline
// ============================================================================

/// Configuration for [`dither`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DitherOptions {
    /// Quantization algorithm.
    pub algorithm: DitherAlgorithm,
    /// Target palette.
    pub palette: DitherPalette,
    /// Pixelation block size in source pixels (>= 1, fractional allowed).
    pub pixel_size: f32,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            algorithm: DitherAlgorithm::FloydSteinberg,
            palette: DitherPalette::BlackWhite,
            pixel_size: 1.0,
        }
    }
}

impl DitherOptions {
    /// Creates options with the given algorithm and the default palette.
    pub fn new(algorithm: DitherAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Sets the target palette.
    pub fn palette(mut self, palette: DitherPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the pixelation block size.
    pub fn pixel_size(mut self, pixel_size: f32) -> Self {
        self.pixel_size = pixel_size;
        self
    }
}

/// Dithers an image to a fixed palette.
///
/// The image is first shrunk by `pixel_size` with a box filter, then
/// quantized in raster order with the selected kernel spreading each
/// pixel's error to unprocessed neighbors, and finally blown back up to
/// the original dimensions with nearest-neighbor sampling so the blocks
/// stay crisp. Output dimensions always equal input dimensions.
pub fn dither(image: &PixelBuffer, options: &DitherOptions) -> PixelBuffer {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return image.clone();
    }

    let pixel_size = options.pixel_size.max(1.0);
    let down_w = (((width as f32) / pixel_size).floor() as u32).max(1);
    let down_h = (((height as f32) / pixel_size).floor() as u32).max(1);

    let (mut rgb, alphas) = downsample(image, down_w, down_h);

    let coeffs = options.algorithm.kernel().map(|k| k.coefficients());
    let mut quantized: Vec<[u8; 3]> = Vec::with_capacity((down_w * down_h) as usize);

    for y in 0..down_h {
        for x in 0..down_w {
            let idx = (y * down_w + x) as usize;
            let old_pixel = rgb[idx];
            let new_pixel = options.palette.nearest(old_pixel);

            if let Some(coeffs) = coeffs {
                let error = [
                    old_pixel[0] - new_pixel[0] as f32,
                    old_pixel[1] - new_pixel[1] as f32,
                    old_pixel[2] - new_pixel[2] as f32,
                ];

                for &(dx, dy, weight) in coeffs {
                    let nx = x as i32 + dx;
                    let ny = y as i32 + dy;

                    if nx >= 0 && nx < down_w as i32 && ny < down_h as i32 {
                        let nidx = (ny as u32 * down_w + nx as u32) as usize;
                        // Accumulated values clamp on write, matching byte
                        // raster semantics, so later reads never see values
                        // outside 0-255.
                        for c in 0..3 {
                            rgb[nidx][c] = (rgb[nidx][c] + error[c] * weight).clamp(0.0, 255.0);
                        }
                    }
                }
            }

            quantized.push(new_pixel);
        }
    }

    let mut output = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let sx = (x as u64 * down_w as u64 / width as u64) as u32;
            let sy = (y as u64 * down_h as u64 / height as u64) as u32;
            let sidx = (sy * down_w + sx) as usize;
            let [r, g, b] = quantized[sidx];
            let a = alphas[sidx].round().clamp(0.0, 255.0) as u8;
            output.set_pixel(x, y, [r, g, b, a]);
        }
    }

    output
}

/// Shrinks the image to `down_w` x `down_h` by box-averaging each
/// destination pixel's covering source rectangle.
fn downsample(image: &PixelBuffer, down_w: u32, down_h: u32) -> (Vec<[f32; 3]>, Vec<f32>) {
    let (width, height) = image.dimensions();
    let len = (down_w * down_h) as usize;
    let mut rgb: Vec<[f32; 3]> = Vec::with_capacity(len);
    let mut alphas: Vec<f32> = Vec::with_capacity(len);

    for dy in 0..down_h {
        let y0 = (dy as u64 * height as u64 / down_h as u64) as u32;
        let y1 = (((dy + 1) as u64 * height as u64 / down_h as u64) as u32).max(y0 + 1);
        for dx in 0..down_w {
            let x0 = (dx as u64 * width as u64 / down_w as u64) as u32;
            let x1 = (((dx + 1) as u64 * width as u64 / down_w as u64) as u32).max(x0 + 1);

            let mut sum = [0.0f64; 4];
            for y in y0..y1 {
                for x in x0..x1 {
                    let p = image.get_pixel(x, y);
                    sum[0] += p[0] as f64;
                    sum[1] += p[1] as f64;
                    sum[2] += p[2] as f64;
                    sum[3] += p[3] as f64;
                }
            }

            let count = ((x1 - x0) * (y1 - y0)) as f64;
            rgb.push([
                (sum[0] / count) as f32,
                (sum[1] / count) as f32,
                (sum[2] / count) as f32,
            ]);
            alphas.push((sum[3] / count) as f32);
        }
    }

    (rgb, alphas)
}

// ============================================================================
// Tests
// ============================================================================
