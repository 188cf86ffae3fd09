#![no_main]

use libfuzzer_sys::fuzz_target;
use rhizome_patina_ascii::{AsciiOptions, AsciiRenderStyle, ColorMode, image_to_ascii, render_ascii};
use rhizome_patina_core::PixelBuffer;

fuzz_target!(|data: &[u8]| {
    // image_to_ascii and render_ascii should never panic on any input
    let key_len = match data.get(7) {
        Some(byte) => usize::from(byte % 8),
        None => return,
    };
    if data.len() < 8 + key_len {
        return;
    }

    let key = String::from_utf8_lossy(&data[8..8 + key_len]).into_owned();
    let options = AsciiOptions::new(key)
        .width(u32::from(data[2]) % 25)
        .invert(data[3] & 1 == 1)
        .contrast(f32::from(data[4]) / 32.0 - 2.0)
        .brightness(f32::from(data[5]) * 2.0 - 255.0)
        .font_size_multiplier(f32::from(data[6]) / 128.0);

    let mut image = PixelBuffer::new(u32::from(data[0] % 24), u32::from(data[1] % 24));
    for (slot, byte) in image.data.iter_mut().zip(&data[8 + key_len..]) {
        *slot = *byte;
    }

    let art = image_to_ascii(&image, &options);

    let style = AsciiRenderStyle {
        color_mode: if data[3] & 2 == 0 { ColorMode::Mono } else { ColorMode::Color },
        ..AsciiRenderStyle::default()
    };
    let source = if data[3] & 4 == 0 { Some(&image) } else { None };
    let _ = render_ascii(&art.lines, &options, &style, source);
});
