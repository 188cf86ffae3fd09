//! Benchmarks for the glitch passes.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rhizome_patina_core::PixelBuffer;
use rhizome_patina_glitch::{GlitchMode, GlitchOptions, glitch};

fn test_image(width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 7) % 256) as u8;
            let g = ((y * 11) % 256) as u8;
            let b = ((x + y) % 256) as u8;
            buffer.set_pixel(x, y, [r, g, b, 255]);
        }
    }
    buffer
}

fn bench_modes(c: &mut Criterion) {
    let image = test_image(256, 256);
    let options = GlitchOptions::new(0.7, 42);

    for mode in [
        GlitchMode::ChannelShift,
        GlitchMode::PixelSort,
        GlitchMode::Noise,
        GlitchMode::Scanlines,
        GlitchMode::BlockScramble,
        GlitchMode::WaveDistortion,
        GlitchMode::VhsJitter,
    ] {
        c.bench_function(&format!("glitch_{}_256", mode.id()), |b| {
            b.iter(|| glitch(black_box(&image), black_box(&options), black_box(mode)))
        });
    }
}

fn bench_amounts(c: &mut Criterion) {
    let image = test_image(256, 256);

    c.bench_function("glitch_block_scramble_weak_256", |b| {
        let options = GlitchOptions::new(0.2, 42);
        b.iter(|| glitch(black_box(&image), black_box(&options), GlitchMode::BlockScramble))
    });

    c.bench_function("glitch_block_scramble_strong_256", |b| {
        let options = GlitchOptions::new(1.0, 42);
        b.iter(|| glitch(black_box(&image), black_box(&options), GlitchMode::BlockScramble))
    });
}

criterion_group!(benches, bench_modes, bench_amounts);
criterion_main!(benches);
