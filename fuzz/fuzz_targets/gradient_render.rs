#![no_main]

use libfuzzer_sys::fuzz_target;
use rhizome_patina_color::Rgb;
use rhizome_patina_gradient::{
    ColorStop, GradientKind, GradientOptions, MeshEffects, NoiseStyle, RadialShape, render,
};

fuzz_target!(|data: &[u8]| {
    // render should never panic for any stop list, angle, or mesh settings
    if data.len() < 12 {
        return;
    }

    let kind = match data[2] % 3 {
        0 => GradientKind::Linear,
        1 => GradientKind::Radial,
        _ => GradientKind::Conic,
    };
    let radial_shape = if data[3] % 2 == 0 {
        RadialShape::Circle
    } else {
        RadialShape::Ellipse
    };
    let angle = f32::from_bits(u32::from_le_bytes([data[4], data[5], data[6], data[7]]));
    let mesh = MeshEffects {
        noise: f32::from(data[8]) / 8.0,
        blur: f32::from(data[9]),
        style: match data[10] % 3 {
            0 => NoiseStyle::Grain,
            1 => NoiseStyle::Perlin,
            _ => NoiseStyle::Static,
        },
        seed: i32::from(data[11]) - 128,
    };
    let stops: Vec<ColorStop> = data[12..]
        .chunks_exact(7)
        .take(12)
        .map(|chunk| {
            let position =
                f32::from_bits(u32::from_le_bytes([chunk[3], chunk[4], chunk[5], chunk[6]]));
            ColorStop::new(Rgb::new(chunk[0], chunk[1], chunk[2]), position)
        })
        .collect();

    let options = GradientOptions {
        kind,
        angle,
        stops,
        radial_shape,
        mesh,
        ..GradientOptions::default()
    };
    let _ = render(&options, u32::from(data[0] % 48), u32::from(data[1] % 48));
});
