//! Seeded glitch-style image distortions.
//!
//! Seven independent single-pass transforms: channel shift, pixel sort,
//! noise, scanlines, block scramble, wave distortion, and VHS jitter.
//! Every random draw comes from the seeded generator carried in the
//! options, so a fixed `(image, options, mode)` triple always produces
//! the same output. Each pass reads from a snapshot of the input taken
//! before any write, never from its own output.
//!
//! # Example
//!
//! ```ignore
//! use rhizome_patina_core::PixelBuffer;
//! use rhizome_patina_glitch::{glitch, GlitchMode, GlitchOptions};
//!
//! let input = PixelBuffer::open("frame.png")?;
//! let options = GlitchOptions::new(0.8, 42);
//! glitch(&input, &options, GlitchMode::VhsJitter).save_png("glitched.png")?;
//! ```

use rhizome_patina_core::{PixelBuffer, SineRng, clamp_channel};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Modes and Options
// ============================================================================

/// Glitch transform selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GlitchMode {
    /// Shift red forward and blue backward through the flat byte buffer.
    #[default]
    ChannelShift,
    /// Sort bright horizontal runs by brightness.
    PixelSort,
    /// Add random noise bursts to a fraction of pixels.
    Noise,
    /// Darken every Nth row.
    Scanlines,
    /// Swap rectangular blocks around the image.
    BlockScramble,
    /// Shift each row sideways along a sine wave.
    WaveDistortion,
    /// Per-row jitter with chromatic fringing and occasional tracking tears.
    VhsJitter,
}

impl GlitchMode {
    /// Lowercase display id.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ChannelShift => "channel_shift",
            Self::PixelSort => "pixel_sort",
            Self::Noise => "noise",
            Self::Scanlines => "scanlines",
            Self::BlockScramble => "block_scramble",
            Self::WaveDistortion => "wave_distortion",
            Self::VhsJitter => "vhs_jitter",
        }
    }
}

/// Configuration for [`glitch`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlitchOptions {
    /// Effect strength (0-1). Out-of-range values clamp.
    pub amount: f32,
    /// Seed for every random draw the pass makes.
    pub seed: i32,
    /// Unused; retained so saved option sets keep their shape.
    pub iterations: u32,
    /// Unused; retained so saved option sets keep their shape.
    pub quality: u32,
}

impl Default for GlitchOptions {
    fn default() -> Self {
        Self {
            amount: 0.5,
            seed: 1,
            iterations: 1,
            quality: 1,
        }
    }
}

impl GlitchOptions {
    /// Creates options with the given strength and seed.
    pub fn new(amount: f32, seed: i32) -> Self {
        Self {
            amount,
            seed,
            ..Self::default()
        }
    }
}

/// Applies one glitch transform to an image.
///
/// The input is copied once; the selected mode runs a single pass over the
/// copy and the result is returned. Output dimensions always equal input
/// dimensions and every channel stays in 0-255.
pub fn glitch(image: &PixelBuffer, options: &GlitchOptions, mode: GlitchMode) -> PixelBuffer {
    let mut output = image.clone();
    let amount = f64::from(options.amount.clamp(0.0, 1.0));
    let mut rng = SineRng::new(options.seed);

    match mode {
        GlitchMode::ChannelShift => channel_shift(&mut output, amount),
        GlitchMode::PixelSort => pixel_sort(&mut output, amount),
        GlitchMode::Noise => noise(&mut output, amount, &mut rng),
        GlitchMode::Scanlines => scanlines(&mut output, amount),
        GlitchMode::BlockScramble => block_scramble(&mut output, amount, &mut rng),
        GlitchMode::WaveDistortion => wave_distortion(&mut output, amount, options.seed),
        GlitchMode::VhsJitter => vhs_jitter(&mut output, amount, &mut rng),
    }

    output
}

// ============================================================================
// Mode Passes
// ============================================================================

/// Pulls red from `shift` pixels ahead and blue from `shift` pixels behind
/// in the flat byte buffer. The offset is a raw byte distance, so large
/// shifts bleed across row boundaries.
fn channel_shift(image: &mut PixelBuffer, amount: f64) {
    let shift = (amount * 50.0).floor() as usize * 4;
    let snapshot = image.data.clone();
    let len = image.data.len();

    for i in (0..len).step_by(4) {
        if i + shift < len {
            image.data[i] = snapshot[i + shift];
        }
        if i >= shift {
            image.data[i + 2] = snapshot[i - shift + 2];
        }
    }
}

/// Channel mean brightness used by the pixel sorter.
fn mean_brightness(pixel: [u8; 4]) -> f64 {
    (f64::from(pixel[0]) + f64::from(pixel[1]) + f64::from(pixel[2])) / 3.0
}

/// Sorts bright horizontal runs ascending by brightness. A run only sorts
/// once it closes at a pixel back under the threshold; a run still open at
/// the row's end stays untouched.
fn pixel_sort(image: &mut PixelBuffer, amount: f64) {
    let (width, height) = image.dimensions();
    let threshold = 255.0 * (1.0 - amount);

    for y in 0..height {
        let mut start_x: Option<u32> = None;
        for x in 0..width {
            let brightness = mean_brightness(image.get_pixel(x, y));

            if brightness > threshold {
                if start_x.is_none() {
                    start_x = Some(x);
                }
            } else if let Some(start) = start_x.take() {
                if x - start > 1 {
                    sort_run(image, start, x, y);
                }
            }
        }
    }
}

/// Sorts the pixels in `start..end` of row `y` ascending by brightness.
fn sort_run(image: &mut PixelBuffer, start: u32, end: u32, y: u32) {
    let mut pixels: Vec<([u8; 4], f64)> = (start..end)
        .map(|x| {
            let p = image.get_pixel(x, y);
            (p, mean_brightness(p))
        })
        .collect();

    pixels.sort_by(|a, b| a.1.total_cmp(&b.1));

    for (k, &(pixel, _)) in pixels.iter().enumerate() {
        image.set_pixel(start + k as u32, y, pixel);
    }
}

/// Adds one random offset to R, G, and B of roughly `amount / 2` of the
/// pixels. The gate draw advances the generator for every pixel; the value
/// draw only happens when the gate fires.
fn noise(image: &mut PixelBuffer, amount: f64, rng: &mut SineRng) {
    for i in (0..image.data.len()).step_by(4) {
        if rng.next_f64() < amount * 0.5 {
            let noise = (rng.next_f64() - 0.5) * 255.0 * amount;
            for c in 0..3 {
                let value = f64::from(image.data[i + c]) + noise;
                image.data[i + c] = clamp_channel(value);
            }
        }
    }
}

/// Darkens every Nth row by 50 per color channel, saturating at zero.
fn scanlines(image: &mut PixelBuffer, amount: f64) {
    let line_size = ((4.0 * (1.1 - amount)).floor() as u32).max(1);
    let (width, height) = image.dimensions();

    for y in (0..height).step_by(line_size as usize) {
        for x in 0..width {
            let idx = image.pixel_index(x, y);
            for c in 0..3 {
                image.data[idx + c] = image.data[idx + c].saturating_sub(50);
            }
        }
    }
}

/// Copies random blocks of the original image over other blocks. Stronger
/// amounts mean smaller blocks and more copies. Source rectangles clip at
/// the buffer edge and destination writes skip out-of-bounds pixels.
fn block_scramble(image: &mut PixelBuffer, amount: f64, rng: &mut SineRng) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let block = (100.0 * (1.0 - amount) + 10.0).floor().max(10.0) as u32;
    let blocks_x = width.div_ceil(block);
    let blocks_y = height.div_ceil(block);
    let copies = (amount * 20.0).floor() as u32;
    let snapshot = image.clone();

    for _ in 0..copies {
        let src_bx = (rng.next_f64() * f64::from(blocks_x)).floor() as u32;
        let src_by = (rng.next_f64() * f64::from(blocks_y)).floor() as u32;
        let dst_bx = (rng.next_f64() * f64::from(blocks_x)).floor() as u32;
        let dst_by = (rng.next_f64() * f64::from(blocks_y)).floor() as u32;

        let w = block.min(width - src_bx * block);
        let h = block.min(height - src_by * block);

        for y in 0..h {
            for x in 0..w {
                let dst_x = dst_bx * block + x;
                let dst_y = dst_by * block + y;
                if dst_x >= width || dst_y >= height {
                    continue;
                }
                let pixel = snapshot.get_pixel(src_bx * block + x, src_by * block + y);
                image.set_pixel(dst_x, dst_y, pixel);
            }
        }
    }
}

/// Shifts each row sideways by a sine of the row index, wrapping around
/// the row so any width is safe.
fn wave_distortion(image: &mut PixelBuffer, amount: f64, seed: i32) {
    let (width, height) = image.dimensions();
    if width == 0 {
        return;
    }

    let amplitude = amount * 50.0;
    let snapshot = image.clone();

    for y in 0..height {
        let shift = ((f64::from(y) * 0.1 + f64::from(seed)).sin() * amplitude).floor() as i64;
        for x in 0..width {
            let src_x = (i64::from(x) + shift).rem_euclid(i64::from(width)) as u32;
            image.set_pixel(x, y, snapshot.get_pixel(src_x, y));
        }
    }
}

/// Per-row horizontal jitter with a one-in-ten chance of a larger tracking
/// tear. The jitter branch offsets green +2 and blue -2 relative to the
/// jittered red sample; the tear branch moves RGB together. Alpha never
/// moves, and out-of-bounds sources leave the original channel in place.
fn vhs_jitter(image: &mut PixelBuffer, amount: f64, rng: &mut SineRng) {
    let (width, height) = image.dimensions();
    let jitter_amount = amount * 20.0;
    let snapshot = image.clone();

    for y in 0..height {
        let jitter = ((rng.next_f64() - 0.5) * jitter_amount).floor() as i64;

        if rng.next_f64() > 0.9 {
            let tear = ((rng.next_f64() - 0.5) * jitter_amount * 5.0).floor() as i64;
            for x in 0..width {
                let src_x = i64::from(x) + tear;
                if src_x >= 0 && src_x < i64::from(width) {
                    let src = snapshot.get_pixel(src_x as u32, y);
                    let idx = image.pixel_index(x, y);
                    image.data[idx] = src[0];
                    image.data[idx + 1] = src[1];
                    image.data[idx + 2] = src[2];
                }
            }
        } else {
            for x in 0..width {
                let src_x = i64::from(x) + jitter;
                if src_x >= 0 && src_x < i64::from(width) {
                    let idx = image.pixel_index(x, y);
                    image.data[idx] = snapshot.get_pixel(src_x as u32, y)[0];

                    let green_x = i64::from(x) + jitter + 2;
                    if green_x >= 0 && green_x < i64::from(width) {
                        image.data[idx + 1] = snapshot.get_pixel(green_x as u32, y)[1];
                    }

                    let blue_x = i64::from(x) + jitter - 2;
                    if blue_x >= 0 && blue_x < i64::from(width) {
                        image.data[idx + 2] = snapshot.get_pixel(blue_x as u32, y)[2];
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
