//! Glyph-grid rasterization of pixel buffers, better known as ASCII art.
//!
//! Maps source luminance onto a ranked character ramp to produce a text
//! grid, and renders such grids back into pixel buffers with an embedded
//! 8x8 pixel font. Rendering is monochrome on a flat background, or tints
//! each glyph with the source pixel under it.
//!
//! # Example
//!
//! ```ignore
//! use rhizome_patina_ascii::{AsciiOptions, AsciiRenderStyle, image_to_ascii, render_ascii};
//! use rhizome_patina_core::PixelBuffer;
//!
//! let source = PixelBuffer::open("photo.png")?;
//! let options = AsciiOptions::new("blocks").width(120);
//! let art = image_to_ascii(&source, &options);
//! println!("{}", art.ascii);
//!
//! let style = AsciiRenderStyle::default();
//! render_ascii(&art.lines, &options, &style, None).save_png("art.png")?;
//! ```

use rhizome_patina_color::Rgb;
use rhizome_patina_core::{PixelBuffer, luminance};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod atlas;

// ============================================================================
// Character Sets
// ============================================================================

/// A ranked glyph ramp. `chars` runs darkest to brightest, so index 0 is
/// drawn for the darkest pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterSet {
    /// Display name.
    pub name: &'static str,
    /// Ramp glyphs, darkest first.
    pub chars: &'static str,
}

/// Ten-step general-purpose ramp.
pub const STANDARD: CharacterSet = CharacterSet {
    name: "Standard",
    chars: " .:-=+*#%@",
};

/// Seventy-step ramp for fine tonal detail.
pub const DETAILED: CharacterSet = CharacterSet {
    name: "Detailed",
    chars: " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$",
};

/// Unicode shade blocks.
pub const BLOCKS: CharacterSet = CharacterSet {
    name: "Blocks",
    chars: " ░▒▓█",
};

/// Space, zero, one.
pub const BINARY: CharacterSet = CharacterSet {
    name: "Binary",
    chars: " 01",
};

/// Four-step ramp.
pub const MINIMAL: CharacterSet = CharacterSet {
    name: "Minimal",
    chars: " .+@",
};

/// Half-width katakana and digits.
pub const MATRIX: CharacterSet = CharacterSet {
    name: "Matrix",
    chars: " ｦｱｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜﾝ0123456789",
};

/// Braille cells of increasing dot count.
pub const BRAILLE: CharacterSet = CharacterSet {
    name: "Braille",
    chars: " ⠁⠃⠇⠏⠟⠿⣿",
};

/// Space and digits.
pub const NUMBERS: CharacterSet = CharacterSet {
    name: "Numbers",
    chars: " 0123456789",
};

/// Classic nine-step ramp.
pub const ASCII_ART: CharacterSet = CharacterSet {
    name: "ASCII Art",
    chars: " .-:=+*#@",
};

/// Line-hatching strokes.
pub const HATCHING: CharacterSet = CharacterSet {
    name: "Hatching",
    chars: " /|\\X#",
};

/// Ramp keys accepted by [`charset`], in catalog order.
pub const CHARSET_KEYS: [&str; 10] = [
    "standard",
    "detailed",
    "blocks",
    "binary",
    "minimal",
    "matrix",
    "braille",
    "numbers",
    "ascii_art",
    "hatching",
];

/// Looks up a ramp by key. Unknown keys fall back to the standard ramp.
pub fn charset(key: &str) -> &'static CharacterSet {
    match key {
        "detailed" => &DETAILED,
        "blocks" => &BLOCKS,
        "binary" => &BINARY,
        "minimal" => &MINIMAL,
        "matrix" => &MATRIX,
        "braille" => &BRAILLE,
        "numbers" => &NUMBERS,
        "ascii_art" => &ASCII_ART,
        "hatching" => &HATCHING,
        _ => &STANDARD,
    }
}

// ============================================================================
// Options
// ============================================================================

/// Configuration for [`image_to_ascii`] and [`render_ascii`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AsciiOptions {
    /// Ramp key, resolved through [`charset`].
    pub character_set: String,
    /// Output width in glyph columns.
    pub width: u32,
    /// Map bright pixels to dark glyphs instead.
    pub invert: bool,
    /// Contrast factor applied around mid-gray (1.0 leaves input unchanged).
    pub contrast: f32,
    /// Brightness offset in channel units, added before the contrast curve.
    pub brightness: f32,
    /// Scales the rendered cell metrics (base glyph height is 10 pixels).
    pub font_size_multiplier: f32,
}

impl Default for AsciiOptions {
    fn default() -> Self {
        Self {
            character_set: "standard".to_string(),
            width: 100,
            invert: false,
            contrast: 1.0,
            brightness: 0.0,
            font_size_multiplier: 1.0,
        }
    }
}

impl AsciiOptions {
    /// Creates options for the given ramp key with default adjustments.
    pub fn new(character_set: impl Into<String>) -> Self {
        Self {
            character_set: character_set.into(),
            ..Self::default()
        }
    }

    /// Sets the output width in glyph columns.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Enables or disables ramp inversion.
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Sets the contrast factor.
    pub fn contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    /// Sets the brightness offset.
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    /// Sets the cell-metric multiplier used when rendering.
    pub fn font_size_multiplier(mut self, multiplier: f32) -> Self {
        self.font_size_multiplier = multiplier;
        self
    }
}

// ============================================================================
// Luminance Mapping
// ============================================================================

/// Output of [`image_to_ascii`]: the joined text plus its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AsciiArt {
    /// All lines joined with newlines.
    pub ascii: String,
    /// One string per glyph row.
    pub lines: Vec<String>,
}

/// Maps a pixel buffer onto the configured character ramp.
///
/// The grid is `options.width` columns wide; the row count follows from the
/// source aspect ratio scaled by 0.5 to compensate for glyph height, with a
/// minimum of one row. Each cell samples the source by nearest neighbor,
/// applies the brightness offset and the contrast curve around mid-gray,
/// then picks the ramp glyph at `floor(normalized * (ramp_len - 1))`.
pub fn image_to_ascii(image: &PixelBuffer, options: &AsciiOptions) -> AsciiArt {
    let glyphs: Vec<char> = charset(&options.character_set).chars.chars().collect();
    let (src_w, src_h) = image.dimensions();
    let columns = options.width;

    if src_w == 0 || src_h == 0 {
        return AsciiArt {
            ascii: String::new(),
            lines: Vec::new(),
        };
    }

    let rows = (f64::from(columns) * f64::from(src_h) * 0.5 / f64::from(src_w))
        .floor()
        .max(1.0) as u32;

    let mut lines = Vec::with_capacity(rows as usize);
    for y in 0..rows {
        let mut line = String::with_capacity(columns as usize);
        for x in 0..columns {
            let src_x = (f64::from(x) / f64::from(columns) * f64::from(src_w)).floor() as u32;
            let src_y = (f64::from(y) / f64::from(rows) * f64::from(src_h)).floor() as u32;
            let [r, g, b, _] = image.get_pixel(src_x, src_y);

            let mut bright = f64::from(luminance(r, g, b));
            bright += f64::from(options.brightness);
            bright = ((bright / 255.0 - 0.5) * f64::from(options.contrast) + 0.5) * 255.0;
            bright = bright.clamp(0.0, 255.0);

            let mut normalized = bright / 255.0;
            if options.invert {
                normalized = 1.0 - normalized;
            }

            let index = (normalized * (glyphs.len() - 1) as f64).floor() as usize;
            line.push(glyphs[index]);
        }
        lines.push(line);
    }

    AsciiArt {
        ascii: lines.join("\n"),
        lines,
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// How rendered glyphs are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorMode {
    /// Every glyph uses the style's text color.
    #[default]
    Mono,
    /// Each glyph takes the color of the source pixel under its cell.
    Color,
}

/// Colors for [`render_ascii`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AsciiRenderStyle {
    /// Glyph coloring mode.
    pub color_mode: ColorMode,
    /// Glyph color in mono mode.
    pub text_color: Rgb,
    /// Background fill.
    pub background: Rgb,
}

impl Default for AsciiRenderStyle {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Mono,
            text_color: Rgb::from_u24(0x00ff00),
            background: Rgb::BLACK,
        }
    }
}

/// Rasterizes mapped glyph lines into a pixel buffer.
///
/// Cell metrics derive from the font size multiplier: a 10 pixel base glyph
/// height, 1.2x line height, 0.6x advance width. The buffer measures
/// `ceil(options.width * char_width)` by `ceil(lines.len() * line_height)`.
/// Glyphs come from an embedded 8x8 pixel font scaled into each cell;
/// characters outside the font's coverage stay blank. [`ColorMode::Color`]
/// without a source buffer falls back to mono.
pub fn render_ascii(
    lines: &[String],
    options: &AsciiOptions,
    style: &AsciiRenderStyle,
    source: Option<&PixelBuffer>,
) -> PixelBuffer {
    let font_size = 10.0 * options.font_size_multiplier;
    let line_height = font_size * 1.2;
    let char_width = font_size * 0.6;

    let width = (options.width as f32 * char_width).ceil() as u32;
    let height = (lines.len() as f32 * line_height).ceil() as u32;

    let bg = style.background;
    let mut buffer = PixelBuffer::filled(width, height, [bg.r, bg.g, bg.b, 255]);

    for (row, line) in lines.iter().enumerate() {
        let y0 = row as f32 * line_height;
        for (col, ch) in line.chars().enumerate() {
            let bitmap = atlas::glyph(ch);
            if bitmap == [0u8; 8] {
                continue;
            }

            let color = glyph_color(style, source, col, row, options.width, lines.len());
            let x0 = col as f32 * char_width;
            blit_glyph(&mut buffer, &bitmap, x0, y0, char_width, font_size, color);
        }
    }

    buffer
}

/// Color for the glyph at grid cell (col, row).
fn glyph_color(
    style: &AsciiRenderStyle,
    source: Option<&PixelBuffer>,
    col: usize,
    row: usize,
    columns: u32,
    rows: usize,
) -> Rgb {
    if style.color_mode == ColorMode::Color {
        if let Some(image) = source {
            let (src_w, src_h) = image.dimensions();
            if src_w > 0 && src_h > 0 && columns > 0 && rows > 0 {
                let src_x = (col as f64 / f64::from(columns) * f64::from(src_w)).floor() as u32;
                let src_y = (row as f64 / rows as f64 * f64::from(src_h)).floor() as u32;
                let [r, g, b, _] = image.get_pixel(src_x.min(src_w - 1), src_y.min(src_h - 1));
                return Rgb::new(r, g, b);
            }
        }
    }
    style.text_color
}

/// Draws one 8x8 bitmap scaled into the box at (x0, y0).
///
/// Output pixels inside the box map back onto the bitmap by nearest
/// neighbor; only set bits are painted, so the background shows through.
fn blit_glyph(
    buffer: &mut PixelBuffer,
    bitmap: &[u8; 8],
    x0: f32,
    y0: f32,
    box_w: f32,
    box_h: f32,
    color: Rgb,
) {
    let (buf_w, buf_h) = buffer.dimensions();

    let px_start = x0.floor().max(0.0) as u32;
    let px_end = ((x0 + box_w).ceil().max(0.0) as u32).min(buf_w);
    let py_start = y0.floor().max(0.0) as u32;
    let py_end = ((y0 + box_h).ceil().max(0.0) as u32).min(buf_h);

    for py in py_start..py_end {
        let v = ((py as f32 - y0) / box_h * 8.0).floor() as i32;
        if !(0..8).contains(&v) {
            continue;
        }
        for px in px_start..px_end {
            let u = ((px as f32 - x0) / box_w * 8.0).floor() as i32;
            if !(0..8).contains(&u) {
                continue;
            }
            if bitmap[v as usize] & (0x80 >> u) != 0 {
                buffer.set_pixel(px, py, [color.r, color.g, color.b, 255]);
            }
        }
    }
}
