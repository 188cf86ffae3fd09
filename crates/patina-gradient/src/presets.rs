//! Ready-made gradient catalog.
//!
//! Each preset is a plain constructor returning a fully populated
//! [`GradientOptions`], so callers can tweak fields after the fact. Use
//! [`by_name`] to resolve a catalog name at runtime.

use glam::Vec2;
use rhizome_patina_color::Rgb;

use crate::{
    ColorStop, GradientKind, GradientOptions, MeshEffects, NoiseStyle, RadialShape,
};

fn stop(color: u32, position: f32) -> ColorStop {
    ColorStop::new(Rgb::from_u24(color), position)
}

/// Warm red through amber into sky blue.
pub fn sunset() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Linear,
        angle: 135.0,
        stops: vec![
            stop(0xff6b6b, 0.0),
            stop(0xfeca57, 50.0),
            stop(0x48dbfb, 100.0),
        ],
        ..GradientOptions::default()
    }
}

/// Deep night blues, top to bottom.
pub fn ocean() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Linear,
        angle: 180.0,
        stops: vec![
            stop(0x0f0c29, 0.0),
            stop(0x302b63, 50.0),
            stop(0x24243e, 100.0),
        ],
        ..GradientOptions::default()
    }
}

/// Bright cyan to blue diagonal.
pub fn aurora() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Linear,
        angle: 45.0,
        stops: vec![stop(0x00c6ff, 0.0), stop(0x0072ff, 100.0)],
        ..GradientOptions::default()
    }
}

/// Magenta to cyan.
pub fn neon() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Linear,
        angle: 90.0,
        stops: vec![stop(0xff00ff, 0.0), stop(0x00ffff, 100.0)],
        ..GradientOptions::default()
    }
}

/// Radial ember, red core fading to gold.
pub fn fire() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Radial,
        angle: 0.0,
        stops: vec![stop(0xf12711, 0.0), stop(0xf5af19, 100.0)],
        ..GradientOptions::default()
    }
}

/// Dark teal to moss green.
pub fn forest() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Linear,
        angle: 120.0,
        stops: vec![stop(0x134e5e, 0.0), stop(0x71b280, 100.0)],
        ..GradientOptions::default()
    }
}

/// Pale cream to peach.
pub fn cotton_candy() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Linear,
        angle: 135.0,
        stops: vec![stop(0xffecd2, 0.0), stop(0xfcb69f, 100.0)],
        ..GradientOptions::default()
    }
}

/// Near-black charcoal fade.
pub fn midnight() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Linear,
        angle: 180.0,
        stops: vec![stop(0x232526, 0.0), stop(0x414345, 100.0)],
        ..GradientOptions::default()
    }
}

/// Full hue sweep around the center.
pub fn rainbow() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Conic,
        angle: 0.0,
        stops: vec![
            stop(0xff0000, 0.0),
            stop(0xff8000, 17.0),
            stop(0xffff00, 33.0),
            stop(0x00ff00, 50.0),
            stop(0x0080ff, 67.0),
            stop(0x8000ff, 83.0),
            stop(0xff0080, 100.0),
        ],
        ..GradientOptions::default()
    }
}

/// Violet to magenta diagonal.
pub fn purple_haze() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Linear,
        angle: 135.0,
        stops: vec![stop(0x7f00ff, 0.0), stop(0xe100ff, 100.0)],
        ..GradientOptions::default()
    }
}

/// Hot coral to orange, bottom to top.
pub fn sunrise() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Linear,
        angle: 0.0,
        stops: vec![stop(0xff512f, 0.0), stop(0xf09819, 100.0)],
        ..GradientOptions::default()
    }
}

/// Steel blue to ice.
pub fn cool_blues() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Linear,
        angle: 225.0,
        stops: vec![stop(0x2193b0, 0.0), stop(0x6dd5ed, 100.0)],
        ..GradientOptions::default()
    }
}

/// Off-center elliptical purple wash with grain and heavy blur.
pub fn mesh_dream() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Radial,
        angle: 0.0,
        stops: vec![
            stop(0x667eea, 0.0),
            stop(0x764ba2, 50.0),
            stop(0xf093fb, 100.0),
        ],
        radial_shape: RadialShape::Ellipse,
        center: Vec2::new(30.0, 30.0),
        mesh: MeshEffects {
            noise: 15.0,
            blur: 40.0,
            style: NoiseStyle::Grain,
            seed: 0,
        },
    }
}

/// Pastel conic sweep softened with perlin noise and blur.
pub fn soft_mesh() -> GradientOptions {
    GradientOptions {
        kind: GradientKind::Conic,
        angle: 45.0,
        stops: vec![
            stop(0xa8edea, 0.0),
            stop(0xfed6e3, 50.0),
            stop(0xd299c2, 100.0),
        ],
        mesh: MeshEffects {
            noise: 10.0,
            blur: 60.0,
            style: NoiseStyle::Perlin,
            seed: 0,
        },
        ..GradientOptions::default()
    }
}

/// Names accepted by [`by_name`], in catalog order.
pub const NAMES: [&str; 14] = [
    "sunset",
    "ocean",
    "aurora",
    "neon",
    "fire",
    "forest",
    "cotton_candy",
    "midnight",
    "rainbow",
    "purple_haze",
    "sunrise",
    "cool_blues",
    "mesh_dream",
    "soft_mesh",
];

/// Looks up a preset by its catalog name.
pub fn by_name(name: &str) -> Option<GradientOptions> {
    match name {
        "sunset" => Some(sunset()),
        "ocean" => Some(ocean()),
        "aurora" => Some(aurora()),
        "neon" => Some(neon()),
        "fire" => Some(fire()),
        "forest" => Some(forest()),
        "cotton_candy" => Some(cotton_candy()),
        "midnight" => Some(midnight()),
        "rainbow" => Some(rainbow()),
        "purple_haze" => Some(purple_haze()),
        "sunrise" => Some(sunrise()),
        "cool_blues" => Some(cool_blues()),
        "mesh_dream" => Some(mesh_dream()),
        "soft_mesh" => Some(soft_mesh()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in NAMES {
            assert!(by_name(name).is_some(), "missing preset: {}", name);
        }
        assert!(by_name("lava_lamp").is_none());
    }

    #[test]
    fn test_presets_have_ordered_stops() {
        for name in NAMES {
            let options = by_name(name).unwrap();
            assert!(!options.stops.is_empty());
            for pair in options.stops.windows(2) {
                assert!(pair[0].position <= pair[1].position, "{} out of order", name);
            }
            assert_eq!(options.stops.first().unwrap().position, 0.0);
            assert_eq!(options.stops.last().unwrap().position, 100.0);
        }
    }

    #[test]
    fn test_mesh_presets_carry_effects() {
        let dream = mesh_dream();
        assert_eq!(dream.kind, GradientKind::Radial);
        assert_eq!(dream.radial_shape, RadialShape::Ellipse);
        assert_eq!(dream.center, Vec2::new(30.0, 30.0));
        assert_eq!(dream.mesh.noise, 15.0);
        assert_eq!(dream.mesh.blur, 40.0);
        assert_eq!(dream.mesh.style, NoiseStyle::Grain);

        let soft = soft_mesh();
        assert_eq!(soft.kind, GradientKind::Conic);
        assert_eq!(soft.angle, 45.0);
        assert_eq!(soft.mesh.style, NoiseStyle::Perlin);
        assert_eq!(soft.mesh.blur, 60.0);
    }

    #[test]
    fn test_plain_presets_leave_effects_off() {
        for name in NAMES {
            if name == "mesh_dream" || name == "soft_mesh" {
                continue;
            }
            let options = by_name(name).unwrap();
            assert_eq!(options.mesh, MeshEffects::default(), "{}", name);
        }
    }

    #[test]
    fn test_rainbow_sweeps_seven_hues() {
        let options = rainbow();
        assert_eq!(options.kind, GradientKind::Conic);
        assert_eq!(options.stops.len(), 7);
        assert_eq!(options.stops[0].color, Rgb::from_u24(0xff0000));
        assert_eq!(options.stops[6].color, Rgb::from_u24(0xff0080));
    }
}
