//! Seeded gradient-noise field used by the perlin mesh style.
//!
//! Classic Perlin noise over a permutation table shuffled by the caller's
//! [`SineRng`], so the same seed always yields the same field. Samples are
//! returned row-major, one value per pixel, in [0, 1].

use rhizome_patina_core::SineRng;

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn grad(hash: usize, x: f64, y: f64) -> f64 {
    let h = hash & 3;
    let u = if h < 2 { x } else { y };
    let v = if h < 2 { y } else { x };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Fills a `width * height` noise field at the given feature scale.
///
/// Consumes `rng` draws to shuffle the permutation table, so interleaving
/// other draws on the same generator changes the field.
pub(crate) fn field(width: u32, height: u32, scale: f64, rng: &mut SineRng) -> Vec<f64> {
    let mut permutation: Vec<usize> = (0..256).collect();
    for i in (1..=255usize).rev() {
        let j = (rng.next_f64() * (i + 1) as f64).floor() as usize;
        permutation.swap(i, j);
    }
    // Doubled so `perm[perm[xi] + yi + 1]` never wraps.
    let mut perm = permutation.clone();
    perm.extend_from_slice(&permutation);

    let mut field = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let px = (f64::from(x) / scale) % 256.0;
            let py = (f64::from(y) / scale) % 256.0;
            let xi = px.floor() as usize & 255;
            let yi = py.floor() as usize & 255;
            let xf = px - px.floor();
            let yf = py - py.floor();
            let u = fade(xf);
            let v = fade(yf);

            let aa = perm[perm[xi] + yi];
            let ab = perm[perm[xi] + yi + 1];
            let ba = perm[perm[xi + 1] + yi];
            let bb = perm[perm[xi + 1] + yi + 1];

            let x1 = lerp(grad(aa, xf, yf), grad(ba, xf - 1.0, yf), u);
            let x2 = lerp(grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0), u);
            field.push((lerp(x1, x2, v) + 1.0) / 2.0);
        }
    }
    field
}
