//! Benchmarks for ASCII mapping and rendering.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rhizome_patina_ascii::{AsciiOptions, AsciiRenderStyle, image_to_ascii, render_ascii};
use rhizome_patina_core::{PixelBuffer, SineRng};

fn noisy_image(width: u32, height: u32) -> PixelBuffer {
    let mut rng = SineRng::new(42);
    let mut image = PixelBuffer::new(width, height);
    for i in (0..image.data.len()).step_by(4) {
        let v = (rng.next_f64() * 255.0) as u8;
        image.data[i] = v;
        image.data[i + 1] = v;
        image.data[i + 2] = v;
        image.data[i + 3] = 255;
    }
    image
}

fn bench_mapping(c: &mut Criterion) {
    let image = noisy_image(256, 256);

    for key in ["standard", "detailed", "matrix"] {
        let options = AsciiOptions::new(key).width(120);
        c.bench_function(&format!("ascii_map_{}_256", key), |b| {
            b.iter(|| image_to_ascii(black_box(&image), black_box(&options)))
        });
    }
}

fn bench_rendering(c: &mut Criterion) {
    let image = noisy_image(256, 256);
    let options = AsciiOptions::new("standard").width(120);
    let art = image_to_ascii(&image, &options);
    let style = AsciiRenderStyle::default();

    c.bench_function("ascii_render_mono_120", |b| {
        b.iter(|| render_ascii(black_box(&art.lines), &options, &style, None))
    });

    let color = AsciiRenderStyle {
        color_mode: rhizome_patina_ascii::ColorMode::Color,
        ..AsciiRenderStyle::default()
    };
    c.bench_function("ascii_render_color_120", |b| {
        b.iter(|| render_ascii(black_box(&art.lines), &options, &color, Some(&image)))
    });
}

criterion_group!(benches, bench_mapping, bench_rendering);
criterion_main!(benches);
