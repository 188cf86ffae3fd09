#![no_main]

use libfuzzer_sys::fuzz_target;
use rhizome_patina_core::PixelBuffer;
use rhizome_patina_glitch::{GlitchMode, GlitchOptions, glitch};

fuzz_target!(|data: &[u8]| {
    // glitch should never panic on any geometry, amount, or seed
    if data.len() < 11 {
        return;
    }

    let mut image = PixelBuffer::new(u32::from(data[0] % 48), u32::from(data[1] % 48));
    for (slot, byte) in image.data.iter_mut().zip(&data[11..]) {
        *slot = *byte;
    }

    let mode = match data[2] % 7 {
        0 => GlitchMode::ChannelShift,
        1 => GlitchMode::PixelSort,
        2 => GlitchMode::Noise,
        3 => GlitchMode::Scanlines,
        4 => GlitchMode::BlockScramble,
        5 => GlitchMode::WaveDistortion,
        _ => GlitchMode::VhsJitter,
    };
    let amount = f32::from_bits(u32::from_le_bytes([data[3], data[4], data[5], data[6]]));
    let seed = i32::from_le_bytes([data[7], data[8], data[9], data[10]]);

    let _ = glitch(&image, &GlitchOptions::new(amount, seed), mode);
});
