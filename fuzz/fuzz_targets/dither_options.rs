#![no_main]

use libfuzzer_sys::fuzz_target;
use rhizome_patina_core::PixelBuffer;
use rhizome_patina_dither::{DitherAlgorithm, DitherOptions, DitherPalette, dither};

fuzz_target!(|data: &[u8]| {
    // dither should never panic and always preserves the input dimensions
    if data.len() < 8 {
        return;
    }

    let mut image = PixelBuffer::new(u32::from(data[0] % 48), u32::from(data[1] % 48));
    for (slot, byte) in image.data.iter_mut().zip(&data[8..]) {
        *slot = *byte;
    }

    let algorithm = match data[2] % 7 {
        0 => DitherAlgorithm::FloydSteinberg,
        1 => DitherAlgorithm::Atkinson,
        2 => DitherAlgorithm::Stucki,
        3 => DitherAlgorithm::Burkes,
        4 => DitherAlgorithm::Sierra,
        5 => DitherAlgorithm::JarvisJudiceNinke,
        _ => DitherAlgorithm::None,
    };
    let palette = match data[3] % 6 {
        0 => DitherPalette::BlackWhite,
        1 => DitherPalette::Grayscale,
        2 => DitherPalette::Rgb,
        3 => DitherPalette::GameBoy,
        4 => DitherPalette::Cga,
        _ => DitherPalette::Sepia,
    };
    let pixel_size = f32::from_bits(u32::from_le_bytes([data[4], data[5], data[6], data[7]]));
    let options = DitherOptions::new(algorithm)
        .palette(palette)
        .pixel_size(pixel_size);

    let output = dither(&image, &options);
    assert_eq!(output.dimensions(), image.dimensions());
});
