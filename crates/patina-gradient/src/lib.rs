//! Procedural gradient synthesis with mesh effects.
//!
//! Renders linear, radial, and conic multi-stop gradients into pixel
//! buffers, layers optional blur and noise post-processing on top, and
//! exports the same gradient as CSS, a Tailwind config snippet, or CSS
//! custom properties. A preset catalog lives in [`presets`].
//!
//! # Example
//!
//! ```ignore
//! use rhizome_patina_gradient::{css, render, presets};
//!
//! let options = presets::sunset();
//! println!("{}", css(&options));
//! render(&options, 800, 600).save_png("sunset.png")?;
//! ```

use glam::Vec2;
use rhizome_patina_color::Rgb;
use rhizome_patina_core::{PixelBuffer, SineRng, clamp_channel};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod perlin;
pub mod presets;

// ============================================================================
// Gradient Types
// ============================================================================

/// Gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GradientKind {
    /// Straight color ramp along an angle.
    #[default]
    Linear,
    /// Concentric ramp out of a center point.
    Radial,
    /// Angular ramp sweeping around a center point.
    Conic,
}

/// Shape of a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RadialShape {
    /// Uniform radius in every direction.
    #[default]
    Circle,
    /// Radii scaled to the buffer's aspect ratio.
    Ellipse,
}

impl RadialShape {
    /// Lowercase CSS keyword.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
        }
    }
}

/// A color at a position along the gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorStop {
    /// Stop color.
    pub color: Rgb,
    /// Position along the gradient (0-100).
    pub position: f32,
}

impl ColorStop {
    /// Creates a new color stop.
    pub const fn new(color: Rgb, position: f32) -> Self {
        Self { color, position }
    }
}

/// Style of noise layered over the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoiseStyle {
    /// Independent random offset per pixel.
    #[default]
    Grain,
    /// Smooth tiled Perlin field.
    Perlin,
    /// Two-level static, each pixel either lightened or darkened.
    Static,
}

/// Post-processing applied after the gradient fill.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshEffects {
    /// Noise strength as a percentage (0 disables).
    pub noise: f32,
    /// Blur strength as a percentage (0 disables; kernel radius is
    /// `floor(blur / 10)`).
    pub blur: f32,
    /// Noise style.
    pub style: NoiseStyle,
    /// Seed for every random draw the noise stage makes.
    pub seed: i32,
}

impl Default for MeshEffects {
    fn default() -> Self {
        Self {
            noise: 0.0,
            blur: 0.0,
            style: NoiseStyle::Grain,
            seed: 0,
        }
    }
}

/// Full description of a gradient.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GradientOptions {
    /// Geometry of the ramp.
    pub kind: GradientKind,
    /// Angle in degrees (linear direction, conic start).
    pub angle: f32,
    /// Color stops in any order; they sort by position before use.
    pub stops: Vec<ColorStop>,
    /// Radial shape.
    pub radial_shape: RadialShape,
    /// Center point for radial and conic ramps, in percent of the buffer.
    pub center: Vec2,
    /// Post-processing.
    pub mesh: MeshEffects,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            angle: 135.0,
            stops: vec![
                ColorStop::new(Rgb::new(0x66, 0x7e, 0xea), 0.0),
                ColorStop::new(Rgb::new(0x76, 0x4b, 0xa2), 100.0),
            ],
            radial_shape: RadialShape::Circle,
            center: Vec2::new(50.0, 50.0),
            mesh: MeshEffects::default(),
        }
    }
}

impl GradientOptions {
    /// Stops sorted ascending by position. Sorting is stable, so stops
    /// sharing a position keep their insertion order.
    fn sorted_stops(&self) -> Vec<ColorStop> {
        let mut stops = self.stops.clone();
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        stops
    }
}

// ============================================================================
// CSS Export
// ============================================================================

/// Formats the gradient as a CSS `*-gradient(...)` value.
pub fn css(options: &GradientOptions) -> String {
    let stops: Vec<String> = options
        .sorted_stops()
        .iter()
        .map(|s| format!("{} {}%", s.color.to_hex_string(), s.position))
        .collect();
    let stops = stops.join(", ");

    match options.kind {
        GradientKind::Linear => format!("linear-gradient({}deg, {})", options.angle, stops),
        GradientKind::Radial => format!(
            "radial-gradient({} at {}% {}%, {})",
            options.radial_shape.id(),
            options.center.x,
            options.center.y,
            stops
        ),
        GradientKind::Conic => format!(
            "conic-gradient(from {}deg at {}% {}%, {})",
            options.angle, options.center.x, options.center.y, stops
        ),
    }
}

/// Formats the gradient as a Tailwind `backgroundImage` config snippet.
pub fn tailwind_config(options: &GradientOptions) -> String {
    format!(
        "// tailwind.config.js\n\
         module.exports = {{\n  \
         theme: {{\n    \
         extend: {{\n      \
         backgroundImage: {{\n        \
         'custom-gradient': '{}',\n      \
         }},\n    \
         }},\n  \
         }},\n\
         }}\n\n\
         // Usage:\n\
         // <div className=\"bg-custom-gradient\" />",
        css(options)
    )
}

/// Formats the gradient as CSS custom properties, one per stop plus the
/// combined value.
pub fn css_variables(options: &GradientOptions) -> String {
    let mut out = String::from(":root {\n");
    for (index, stop) in options.sorted_stops().iter().enumerate() {
        out.push_str(&format!(
            "  --gradient-color-{}: {};\n",
            index + 1,
            stop.color.to_hex_string()
        ));
    }
    out.push_str(&format!("  --gradient: {};\n", css(options)));
    out.push_str("}\n\n/* Usage: */\n.element {\n  background: var(--gradient);\n}");
    out
}

// ============================================================================
// Rendering
// ============================================================================

/// Renders the gradient into a fresh buffer.
pub fn render(options: &GradientOptions, width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    render_into(&mut buffer, options);
    buffer
}

/// Renders the gradient over an existing buffer.
///
/// Every pixel is overwritten by the fill (opaque), then blur and noise run
/// in that order when enabled. Without stops the fill is skipped and the
/// effects apply to the buffer's existing content.
pub fn render_into(buffer: &mut PixelBuffer, options: &GradientOptions) {
    let (width, height) = buffer.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let stops = options.sorted_stops();
    if !stops.is_empty() {
        fill_gradient(buffer, options, &stops);
    }

    if options.mesh.blur > 0.0 {
        apply_blur(buffer, f64::from(options.mesh.blur));
    }

    if options.mesh.noise > 0.0 {
        apply_noise(buffer, &options.mesh);
    }
}

/// Paints the base gradient, one parameter evaluation per pixel.
fn fill_gradient(buffer: &mut PixelBuffer, options: &GradientOptions, stops: &[ColorStop]) {
    let (width, height) = buffer.dimensions();
    let w = width as f32;
    let h = height as f32;

    let geometry = match options.kind {
        GradientKind::Linear => {
            let angle_rad = (options.angle - 90.0).to_radians();
            let half = Vec2::new(angle_rad.cos() * w / 2.0, angle_rad.sin() * h / 2.0);
            let center = Vec2::new(w / 2.0, h / 2.0);
            Geometry::Linear {
                start: center - half,
                span: half * 2.0,
            }
        }
        GradientKind::Radial => Geometry::Radial {
            center: options.center / 100.0 * Vec2::new(w, h),
            shape: options.radial_shape,
        },
        GradientKind::Conic => Geometry::Conic {
            center: options.center / 100.0 * Vec2::new(w, h),
            start: options.angle.to_radians(),
        },
    };

    for y in 0..height {
        for x in 0..width {
            let p = Vec2::new(x as f32, y as f32);
            let t = geometry.parameter(p, w, h);
            let color = color_at(stops, t);
            buffer.set_pixel(x, y, [color.r, color.g, color.b, 255]);
        }
    }
}

/// Per-kind parameterization of a pixel position.
enum Geometry {
    Linear { start: Vec2, span: Vec2 },
    Radial { center: Vec2, shape: RadialShape },
    Conic { center: Vec2, start: f32 },
}

impl Geometry {
    fn parameter(&self, p: Vec2, w: f32, h: f32) -> f32 {
        match *self {
            Self::Linear { start, span } => {
                let len_sq = span.length_squared();
                if len_sq <= f32::EPSILON {
                    0.0
                } else {
                    (p - start).dot(span) / len_sq
                }
            }
            Self::Radial { center, shape } => match shape {
                RadialShape::Circle => p.distance(center) / w.max(h),
                RadialShape::Ellipse => {
                    let d = (p - center) / Vec2::new(w, h);
                    d.length()
                }
            },
            Self::Conic { center, start } => {
                let d = p - center;
                let angle = d.y.atan2(d.x) - start;
                angle.rem_euclid(std::f32::consts::TAU) / std::f32::consts::TAU
            }
        }
    }
}

/// Color of the sorted stop list at parameter `t`.
///
/// Before the first stop the first color holds, after the last the last
/// color; in between the bracketing stops lerp per channel.
fn color_at(stops: &[ColorStop], t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0) * 100.0;

    let mut previous = &stops[0];
    if t <= previous.position {
        return previous.color;
    }

    for stop in &stops[1..] {
        if t <= stop.position {
            let span = f64::from(stop.position - previous.position);
            if span <= 0.0 {
                return stop.color;
            }
            let local = (f64::from(t) - f64::from(previous.position)) / span;
            return lerp_rgb(previous.color, stop.color, local);
        }
        previous = stop;
    }

    previous.color
}

fn lerp_rgb(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let channel = |a: u8, b: u8| -> u8 {
        (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
    };
    Rgb::new(
        channel(a.r, b.r),
        channel(a.g, b.g),
        channel(a.b, b.b),
    )
}

// ============================================================================
// Mesh Effects
// ============================================================================

/// Box blur over all four channels. Kernel radius is `floor(amount / 10)`;
/// below one radius the pass is a no-op. Edge pixels average only their
/// in-bounds neighbors.
fn apply_blur(buffer: &mut PixelBuffer, amount: f64) {
    let radius = (amount / 10.0).floor() as i64;
    if radius < 1 {
        return;
    }

    let (width, height) = buffer.dimensions();
    let snapshot = buffer.data.clone();

    for y in 0..height {
        for x in 0..width {
            let mut sum = [0.0f64; 4];
            let mut count = 0.0f64;

            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let nx = i64::from(x) + dx;
                    let ny = i64::from(y) + dy;

                    if nx >= 0 && nx < i64::from(width) && ny >= 0 && ny < i64::from(height) {
                        let idx = ((ny as u32 * width + nx as u32) as usize) * 4;
                        for c in 0..4 {
                            sum[c] += f64::from(snapshot[idx + c]);
                        }
                        count += 1.0;
                    }
                }
            }

            let idx = buffer.pixel_index(x, y);
            for c in 0..4 {
                buffer.data[idx + c] = (sum[c] / count).round() as u8;
            }
        }
    }
}

/// Adds one noise value per pixel to R, G, and B. Grain and static draw
/// from the seeded generator per pixel; Perlin precomputes a field whose
/// permutation shuffle consumes the generator first.
fn apply_noise(buffer: &mut PixelBuffer, mesh: &MeshEffects) {
    let (width, height) = buffer.dimensions();
    let amount = f64::from(mesh.noise) / 100.0;
    let mut rng = SineRng::new(mesh.seed);

    match mesh.style {
        NoiseStyle::Grain => {
            for i in (0..buffer.data.len()).step_by(4) {
                let noise = (rng.next_f64() - 0.5) * 2.0 * amount * 128.0;
                add_to_rgb(buffer, i, noise);
            }
        }
        NoiseStyle::Perlin => {
            let field = perlin::field(width, height, 50.0, &mut rng);
            for i in (0..buffer.data.len()).step_by(4) {
                let noise = (field[i / 4] - 0.5) * 2.0 * amount * 128.0;
                add_to_rgb(buffer, i, noise);
            }
        }
        NoiseStyle::Static => {
            for i in (0..buffer.data.len()).step_by(4) {
                let noise = if rng.next_f64() > 0.5 {
                    amount * 64.0
                } else {
                    -amount * 64.0
                };
                add_to_rgb(buffer, i, noise);
            }
        }
    }
}

/// Adds `noise` to the three color channels of the pixel at byte `i`,
/// clamping to 0-255.
fn add_to_rgb(buffer: &mut PixelBuffer, i: usize, noise: f64) {
    for c in 0..3 {
        let value = f64::from(buffer.data[i + c]) + noise;
        buffer.data[i + c] = clamp_channel(value);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bw_stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new(Rgb::BLACK, 0.0),
            ColorStop::new(Rgb::WHITE, 100.0),
        ]
    }

    #[test]
    fn test_css_linear_default() {
        let options = GradientOptions::default();
        assert_eq!(
            css(&options),
            "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"
        );
    }

    #[test]
    fn test_css_sorts_stops() {
        let options = GradientOptions {
            stops: vec![
                ColorStop::new(Rgb::WHITE, 100.0),
                ColorStop::new(Rgb::BLACK, 0.0),
            ],
            ..GradientOptions::default()
        };
        assert_eq!(
            css(&options),
            "linear-gradient(135deg, #000000 0%, #ffffff 100%)"
        );
    }

    #[test]
    fn test_css_radial_and_conic_forms() {
        assert_eq!(
            css(&presets::mesh_dream()),
            "radial-gradient(ellipse at 30% 30%, #667eea 0%, #764ba2 50%, #f093fb 100%)"
        );
        assert_eq!(
            css(&presets::soft_mesh()),
            "conic-gradient(from 45deg at 50% 50%, #a8edea 0%, #fed6e3 50%, #d299c2 100%)"
        );
    }

    #[test]
    fn test_css_fractional_positions_print_plainly() {
        let options = GradientOptions {
            stops: vec![
                ColorStop::new(Rgb::BLACK, 12.5),
                ColorStop::new(Rgb::WHITE, 100.0),
            ],
            angle: 90.5,
            ..GradientOptions::default()
        };
        assert_eq!(
            css(&options),
            "linear-gradient(90.5deg, #000000 12.5%, #ffffff 100%)"
        );
    }

    #[test]
    fn test_tailwind_config_embeds_css() {
        let snippet = tailwind_config(&GradientOptions::default());
        assert!(snippet.starts_with("// tailwind.config.js\nmodule.exports = {\n"));
        assert!(snippet.contains(
            "        'custom-gradient': 'linear-gradient(135deg, #667eea 0%, #764ba2 100%)',\n"
        ));
        assert!(snippet.ends_with("// Usage:\n// <div className=\"bg-custom-gradient\" />"));
    }

    #[test]
    fn test_css_variables_format() {
        let vars = css_variables(&GradientOptions::default());
        let expected = ":root {\n  --gradient-color-1: #667eea;\n  --gradient-color-2: #764ba2;\n  --gradient: linear-gradient(135deg, #667eea 0%, #764ba2 100%);\n}\n\n/* Usage: */\n.element {\n  background: var(--gradient);\n}";
        assert_eq!(vars, expected);
    }

    #[test]
    fn test_linear_left_to_right_ramp() {
        // angle 90 runs the ramp along +x: column 0 black, the far column
        // near white, luminance nondecreasing in between.
        let options = GradientOptions {
            kind: GradientKind::Linear,
            angle: 90.0,
            stops: bw_stops(),
            ..GradientOptions::default()
        };
        let out = render(&options, 100, 1);

        assert_eq!(out.get_pixel(0, 0), [0, 0, 0, 255]);
        let last = out.get_pixel(99, 0);
        assert!(last[0] >= 250, "far column {:?}", last);

        let mut previous = 0u8;
        for x in 0..100 {
            let v = out.get_pixel(x, 0)[0];
            assert!(v >= previous, "column {} went backwards", x);
            previous = v;
        }
    }

    #[test]
    fn test_stop_order_independence() {
        let base = GradientOptions::default();
        let forward = GradientOptions {
            stops: vec![
                ColorStop::new(Rgb::new(0x11, 0x22, 0x33), 0.0),
                ColorStop::new(Rgb::new(0xaa, 0xbb, 0xcc), 100.0),
            ],
            ..base.clone()
        };
        let reversed = GradientOptions {
            stops: vec![
                ColorStop::new(Rgb::new(0xaa, 0xbb, 0xcc), 100.0),
                ColorStop::new(Rgb::new(0x11, 0x22, 0x33), 0.0),
            ],
            ..base
        };
        assert_eq!(render(&forward, 16, 16), render(&reversed, 16, 16));
    }

    #[test]
    fn test_single_stop_uniform_fill() {
        let options = GradientOptions {
            stops: vec![ColorStop::new(Rgb::new(10, 20, 30), 50.0)],
            ..GradientOptions::default()
        };
        let out = render(&options, 8, 8);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(out.get_pixel(x, y), [10, 20, 30, 255]);
            }
        }
    }

    #[test]
    fn test_no_stops_leaves_buffer() {
        let options = GradientOptions {
            stops: vec![],
            ..GradientOptions::default()
        };
        let out = render(&options, 4, 4);
        assert_eq!(out, PixelBuffer::new(4, 4));
    }

    #[test]
    fn test_equal_position_stops_split() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        let stops = vec![ColorStop::new(red, 50.0), ColorStop::new(blue, 50.0)];

        assert_eq!(color_at(&stops, 0.2), red);
        assert_eq!(color_at(&stops, 0.8), blue);
    }

    #[test]
    fn test_radial_center_takes_first_color() {
        let options = GradientOptions {
            kind: GradientKind::Radial,
            stops: bw_stops(),
            ..GradientOptions::default()
        };
        let out = render(&options, 64, 64);
        assert_eq!(out.get_pixel(32, 32), [0, 0, 0, 255]);
        // Corners sit further out, so they must be brighter.
        assert!(out.get_pixel(0, 0)[0] > 0);
    }

    #[test]
    fn test_radial_ellipse_follows_aspect() {
        // In a wide buffer the ellipse reaches the mid-edge at the same
        // parameter horizontally and vertically.
        let options = GradientOptions {
            kind: GradientKind::Radial,
            radial_shape: RadialShape::Ellipse,
            stops: bw_stops(),
            ..GradientOptions::default()
        };
        let out = render(&options, 200, 50);
        let right = out.get_pixel(150, 25)[0];
        let down = out.get_pixel(100, 37)[0];
        // Both points sit at a quarter of their axis.
        let diff = (i16::from(right) - i16::from(down)).abs();
        assert!(diff <= 3, "right {} vs down {}", right, down);
    }

    #[test]
    fn test_conic_sweep_is_angular() {
        let options = GradientOptions {
            kind: GradientKind::Conic,
            angle: 0.0,
            stops: bw_stops(),
            ..GradientOptions::default()
        };
        let out = render(&options, 101, 101);
        // Just past the +x axis the sweep has barely started; just before
        // it wraps it is nearly complete.
        let just_after = out.get_pixel(100, 51)[0];
        let just_before = out.get_pixel(100, 49)[0];
        assert!(just_after < 10, "start of sweep {}", just_after);
        assert!(just_before > 245, "end of sweep {}", just_before);
    }

    #[test]
    fn test_blur_uniform_identity() {
        let options = GradientOptions {
            stops: vec![ColorStop::new(Rgb::new(80, 90, 100), 0.0)],
            mesh: MeshEffects {
                blur: 40.0,
                ..MeshEffects::default()
            },
            ..GradientOptions::default()
        };
        let out = render(&options, 12, 12);
        for y in 0..12 {
            for x in 0..12 {
                assert_eq!(out.get_pixel(x, y), [80, 90, 100, 255]);
            }
        }
    }

    #[test]
    fn test_blur_below_threshold_is_noop() {
        let mut with = GradientOptions {
            stops: bw_stops(),
            ..GradientOptions::default()
        };
        let without = render(&with, 32, 32);
        with.mesh.blur = 9.0;
        assert_eq!(render(&with, 32, 32), without);
    }

    #[test]
    fn test_blur_smooths_hard_edge() {
        let mut buffer = PixelBuffer::new(10, 1);
        for x in 0..10 {
            let v = if x < 5 { 0 } else { 255 };
            buffer.set_pixel(x, 0, [v, v, v, 255]);
        }
        let options = GradientOptions {
            stops: vec![],
            mesh: MeshEffects {
                blur: 10.0,
                ..MeshEffects::default()
            },
            ..GradientOptions::default()
        };
        render_into(&mut buffer, &options);

        // Radius 1: pixel 4 averages 0, 0, 255 and pixel 5 averages
        // 0, 255, 255.
        assert_eq!(buffer.get_pixel(3, 0)[0], 0);
        assert_eq!(buffer.get_pixel(4, 0)[0], 85);
        assert_eq!(buffer.get_pixel(5, 0)[0], 170);
        assert_eq!(buffer.get_pixel(6, 0)[0], 255);
    }

    #[test]
    fn test_static_noise_two_levels() {
        let options = GradientOptions {
            stops: vec![ColorStop::new(Rgb::new(128, 128, 128), 0.0)],
            mesh: MeshEffects {
                noise: 50.0,
                style: NoiseStyle::Static,
                seed: 11,
                ..MeshEffects::default()
            },
            ..GradientOptions::default()
        };
        let out = render(&options, 16, 16);
        for y in 0..16 {
            for x in 0..16 {
                let [r, g, b, a] = out.get_pixel(x, y);
                assert!(r == 96 || r == 160, "value {}", r);
                assert_eq!(r, g);
                assert_eq!(r, b);
                assert_eq!(a, 255);
            }
        }
    }

    #[test]
    fn test_static_noise_seeded() {
        let mut options = GradientOptions {
            mesh: MeshEffects {
                noise: 50.0,
                style: NoiseStyle::Static,
                seed: 11,
                ..MeshEffects::default()
            },
            ..GradientOptions::default()
        };
        let a = render(&options, 16, 16);
        assert_eq!(a, render(&options, 16, 16));

        options.mesh.seed = 12;
        assert_ne!(render(&options, 16, 16), a);
    }

    #[test]
    fn test_grain_noise_seeded() {
        let mut options = GradientOptions {
            mesh: MeshEffects {
                noise: 30.0,
                seed: 4,
                ..MeshEffects::default()
            },
            ..GradientOptions::default()
        };
        let a = render(&options, 24, 24);
        let b = render(&options, 24, 24);
        assert_eq!(a, b);

        options.mesh.seed = 5;
        assert_ne!(render(&options, 24, 24), a);
    }

    #[test]
    fn test_perlin_noise_seeded_and_bounded() {
        let options = GradientOptions {
            stops: vec![ColorStop::new(Rgb::new(128, 128, 128), 0.0)],
            mesh: MeshEffects {
                noise: 100.0,
                style: NoiseStyle::Perlin,
                seed: 21,
                ..MeshEffects::default()
            },
            ..GradientOptions::default()
        };
        let a = render(&options, 32, 32);
        assert_eq!(a, render(&options, 32, 32));

        // Full-strength perlin moves 128 by at most +-128.
        for y in 0..32 {
            for x in 0..32 {
                let [r, g, b, alpha] = a.get_pixel(x, y);
                assert_eq!(r, g);
                assert_eq!(g, b);
                assert_eq!(alpha, 255);
            }
        }
    }

    #[test]
    fn test_noise_leaves_alpha() {
        let options = GradientOptions {
            mesh: MeshEffects {
                noise: 80.0,
                seed: 3,
                ..MeshEffects::default()
            },
            ..GradientOptions::default()
        };
        let out = render(&options, 9, 9);
        for y in 0..9 {
            for x in 0..9 {
                assert_eq!(out.get_pixel(x, y)[3], 255);
            }
        }
    }

    #[test]
    fn test_render_dimensions() {
        let out = render(&GradientOptions::default(), 33, 17);
        assert_eq!(out.dimensions(), (33, 17));
    }
}
