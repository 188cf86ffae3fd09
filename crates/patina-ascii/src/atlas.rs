//! Embedded 8x8 pixel font for the glyph renderer.
//!
//! Bitmap rows run top to bottom; the most significant bit is the leftmost
//! column. Coverage is printable ASCII, half-width katakana, the shade
//! blocks, and the full braille page. Everything else renders blank.
//! Letterforms are simplified single-stroke sketches, not a faithful
//! typeface.

/// Returns the 8x8 bitmap for `c`, or an all-zero cell when the glyph is
/// not covered.
pub(crate) fn glyph(c: char) -> [u8; 8] {
    match c {
        ' '..='~' => BASIC[c as usize - 0x20],
        '\u{ff66}'..='\u{ff9d}' => KATAKANA[c as usize - 0xff66],
        '░' => shade(0x88, 0x22),
        '▒' => shade(0xaa, 0x55),
        '▓' => shade(0x77, 0xdd),
        '█' => [0xff; 8],
        '\u{2800}'..='\u{28ff}' => braille((c as u32 & 0xff) as u8),
        _ => [0; 8],
    }
}

/// Alternating two-row stipple used for the shade blocks.
fn shade(even: u8, odd: u8) -> [u8; 8] {
    [even, odd, even, odd, even, odd, even, odd]
}

/// Braille cell built from the codepoint's dot bits: bits 0-2 are the left
/// column top to bottom, bits 3-5 the right column, bits 6 and 7 the bottom
/// pair. Each raised dot fills a 2x2 block.
fn braille(bits: u8) -> [u8; 8] {
    const DOT_ROWS: [(u8, u8); 4] = [(0, 3), (1, 4), (2, 5), (6, 7)];
    let mut rows = [0u8; 8];
    for (i, &(left, right)) in DOT_ROWS.iter().enumerate() {
        let mut pattern = 0u8;
        if bits & (1 << left) != 0 {
            pattern |= 0b0110_0000;
        }
        if bits & (1 << right) != 0 {
            pattern |= 0b0000_0110;
        }
        rows[2 * i] = pattern;
        rows[2 * i + 1] = pattern;
    }
    rows
}

/// Printable ASCII, 0x20 through 0x7e.
const BASIC: [[u8; 8]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00], // !
    [0x66, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // "
    [0x6c, 0x6c, 0xfe, 0x6c, 0xfe, 0x6c, 0x6c, 0x00], // #
    [0x18, 0x3e, 0x60, 0x3c, 0x06, 0x7c, 0x18, 0x00], // $
    [0x00, 0xc6, 0xcc, 0x18, 0x30, 0x66, 0xc6, 0x00], // %
    [0x38, 0x6c, 0x38, 0x76, 0xdc, 0xcc, 0x76, 0x00], // &
    [0x18, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00], // '
    [0x0c, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0c, 0x00], // (
    [0x30, 0x18, 0x0c, 0x0c, 0x0c, 0x18, 0x30, 0x00], // )
    [0x00, 0x66, 0x3c, 0xff, 0x3c, 0x66, 0x00, 0x00], // *
    [0x00, 0x18, 0x18, 0x7e, 0x18, 0x18, 0x00, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30], // ,
    [0x00, 0x00, 0x00, 0x7e, 0x00, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00], // .
    [0x06, 0x0c, 0x18, 0x30, 0x60, 0xc0, 0x80, 0x00], // /
    [0x7c, 0xc6, 0xce, 0xd6, 0xe6, 0xc6, 0x7c, 0x00], // 0
    [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7e, 0x00], // 1
    [0x3c, 0x66, 0x06, 0x0c, 0x30, 0x60, 0x7e, 0x00], // 2
    [0x3c, 0x66, 0x06, 0x1c, 0x06, 0x66, 0x3c, 0x00], // 3
    [0x0c, 0x1c, 0x3c, 0x6c, 0xfe, 0x0c, 0x0c, 0x00], // 4
    [0x7e, 0x60, 0x7c, 0x06, 0x06, 0x66, 0x3c, 0x00], // 5
    [0x1c, 0x30, 0x60, 0x7c, 0x66, 0x66, 0x3c, 0x00], // 6
    [0x7e, 0x06, 0x0c, 0x18, 0x30, 0x30, 0x30, 0x00], // 7
    [0x3c, 0x66, 0x66, 0x3c, 0x66, 0x66, 0x3c, 0x00], // 8
    [0x3c, 0x66, 0x66, 0x3e, 0x06, 0x0c, 0x38, 0x00], // 9
    [0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00], // :
    [0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x30], // ;
    [0x0c, 0x18, 0x30, 0x60, 0x30, 0x18, 0x0c, 0x00], // <
    [0x00, 0x00, 0x7e, 0x00, 0x7e, 0x00, 0x00, 0x00], // =
    [0x30, 0x18, 0x0c, 0x06, 0x0c, 0x18, 0x30, 0x00], // >
    [0x3c, 0x66, 0x06, 0x0c, 0x18, 0x00, 0x18, 0x00], // ?
    [0x3c, 0x66, 0x6e, 0x6a, 0x6e, 0x60, 0x3c, 0x00], // @
    [0x18, 0x3c, 0x66, 0x66, 0x7e, 0x66, 0x66, 0x00], // A
    [0x7c, 0x66, 0x66, 0x7c, 0x66, 0x66, 0x7c, 0x00], // B
    [0x3c, 0x66, 0x60, 0x60, 0x60, 0x66, 0x3c, 0x00], // C
    [0x78, 0x6c, 0x66, 0x66, 0x66, 0x6c, 0x78, 0x00], // D
    [0x7e, 0x60, 0x60, 0x7c, 0x60, 0x60, 0x7e, 0x00], // E
    [0x7e, 0x60, 0x60, 0x7c, 0x60, 0x60, 0x60, 0x00], // F
    [0x3c, 0x66, 0x60, 0x6e, 0x66, 0x66, 0x3e, 0x00], // G
    [0x66, 0x66, 0x66, 0x7e, 0x66, 0x66, 0x66, 0x00], // H
    [0x3c, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3c, 0x00], // I
    [0x1e, 0x0c, 0x0c, 0x0c, 0x0c, 0x6c, 0x38, 0x00], // J
    [0x66, 0x6c, 0x78, 0x70, 0x78, 0x6c, 0x66, 0x00], // K
    [0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7e, 0x00], // L
    [0xc6, 0xee, 0xfe, 0xd6, 0xc6, 0xc6, 0xc6, 0x00], // M
    [0x66, 0x76, 0x7e, 0x7e, 0x6e, 0x66, 0x66, 0x00], // N
    [0x3c, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3c, 0x00], // O
    [0x7c, 0x66, 0x66, 0x7c, 0x60, 0x60, 0x60, 0x00], // P
    [0x3c, 0x66, 0x66, 0x66, 0x6a, 0x6c, 0x36, 0x00], // Q
    [0x7c, 0x66, 0x66, 0x7c, 0x6c, 0x66, 0x66, 0x00], // R
    [0x3c, 0x66, 0x60, 0x3c, 0x06, 0x66, 0x3c, 0x00], // S
    [0x7e, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00], // T
    [0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3c, 0x00], // U
    [0x66, 0x66, 0x66, 0x66, 0x66, 0x3c, 0x18, 0x00], // V
    [0xc6, 0xc6, 0xc6, 0xd6, 0xfe, 0xee, 0xc6, 0x00], // W
    [0x66, 0x66, 0x3c, 0x18, 0x3c, 0x66, 0x66, 0x00], // X
    [0x66, 0x66, 0x66, 0x3c, 0x18, 0x18, 0x18, 0x00], // Y
    [0x7e, 0x06, 0x0c, 0x18, 0x30, 0x60, 0x7e, 0x00], // Z
    [0x3c, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3c, 0x00], // [
    [0x60, 0x30, 0x18, 0x0c, 0x06, 0x03, 0x01, 0x00], // backslash
    [0x3c, 0x0c, 0x0c, 0x0c, 0x0c, 0x0c, 0x3c, 0x00], // ]
    [0x18, 0x3c, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff], // _
    [0x30, 0x18, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x00], // `
    [0x00, 0x00, 0x3c, 0x06, 0x3e, 0x66, 0x3e, 0x00], // a
    [0x60, 0x60, 0x7c, 0x66, 0x66, 0x66, 0x7c, 0x00], // b
    [0x00, 0x00, 0x3c, 0x66, 0x60, 0x66, 0x3c, 0x00], // c
    [0x06, 0x06, 0x3e, 0x66, 0x66, 0x66, 0x3e, 0x00], // d
    [0x00, 0x00, 0x3c, 0x66, 0x7e, 0x60, 0x3c, 0x00], // e
    [0x1c, 0x30, 0x30, 0x7c, 0x30, 0x30, 0x30, 0x00], // f
    [0x00, 0x00, 0x3e, 0x66, 0x66, 0x3e, 0x06, 0x3c], // g
    [0x60, 0x60, 0x7c, 0x66, 0x66, 0x66, 0x66, 0x00], // h
    [0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x3c, 0x00], // i
    [0x0c, 0x00, 0x1c, 0x0c, 0x0c, 0x0c, 0x6c, 0x38], // j
    [0x60, 0x60, 0x66, 0x6c, 0x78, 0x6c, 0x66, 0x00], // k
    [0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3c, 0x00], // l
    [0x00, 0x00, 0xec, 0xfe, 0xd6, 0xd6, 0xc6, 0x00], // m
    [0x00, 0x00, 0x7c, 0x66, 0x66, 0x66, 0x66, 0x00], // n
    [0x00, 0x00, 0x3c, 0x66, 0x66, 0x66, 0x3c, 0x00], // o
    [0x00, 0x00, 0x7c, 0x66, 0x66, 0x7c, 0x60, 0x60], // p
    [0x00, 0x00, 0x3e, 0x66, 0x66, 0x3e, 0x06, 0x06], // q
    [0x00, 0x00, 0x6c, 0x76, 0x60, 0x60, 0x60, 0x00], // r
    [0x00, 0x00, 0x3e, 0x60, 0x3c, 0x06, 0x7c, 0x00], // s
    [0x30, 0x30, 0x7c, 0x30, 0x30, 0x30, 0x1c, 0x00], // t
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3e, 0x00], // u
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3c, 0x18, 0x00], // v
    [0x00, 0x00, 0xc6, 0xd6, 0xd6, 0xfe, 0x6c, 0x00], // w
    [0x00, 0x00, 0x66, 0x3c, 0x18, 0x3c, 0x66, 0x00], // x
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3e, 0x06, 0x3c], // y
    [0x00, 0x00, 0x7e, 0x0c, 0x18, 0x30, 0x7e, 0x00], // z
    [0x0e, 0x18, 0x18, 0x70, 0x18, 0x18, 0x0e, 0x00], // {
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00], // |
    [0x70, 0x18, 0x18, 0x0e, 0x18, 0x18, 0x70, 0x00], // }
    [0x76, 0xdc, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ~
];

/// Half-width katakana, U+FF66 through U+FF9D.
const KATAKANA: [[u8; 8]; 56] = [
    [0x7e, 0x02, 0x7e, 0x04, 0x08, 0x10, 0x60, 0x00], // ｦ wo
    [0x00, 0x00, 0x00, 0x3c, 0x04, 0x18, 0x10, 0x00], // ｧ small a
    [0x00, 0x00, 0x00, 0x04, 0x08, 0x18, 0x08, 0x00], // ｨ small i
    [0x00, 0x00, 0x08, 0x3c, 0x24, 0x04, 0x18, 0x00], // ｩ small u
    [0x00, 0x00, 0x00, 0x3c, 0x08, 0x08, 0x3c, 0x00], // ｪ small e
    [0x00, 0x00, 0x08, 0x3c, 0x08, 0x18, 0x28, 0x00], // ｫ small o
    [0x00, 0x00, 0x00, 0x20, 0x3e, 0x28, 0x08, 0x00], // ｬ small ya
    [0x00, 0x00, 0x00, 0x38, 0x08, 0x08, 0x7c, 0x00], // ｭ small yu
    [0x00, 0x00, 0x00, 0x3c, 0x04, 0x3c, 0x04, 0x3c], // ｮ small yo
    [0x00, 0x00, 0x00, 0x2a, 0x02, 0x04, 0x38, 0x00], // ｯ small tsu
    [0x00, 0x00, 0x00, 0x7e, 0x00, 0x00, 0x00, 0x00], // ｰ prolonged mark
    [0x7e, 0x04, 0x08, 0x38, 0x48, 0x08, 0x10, 0x00], // ｱ a
    [0x06, 0x0c, 0x18, 0x38, 0x48, 0x08, 0x08, 0x00], // ｲ i
    [0x10, 0x7e, 0x42, 0x02, 0x04, 0x08, 0x30, 0x00], // ｳ u
    [0x3c, 0x08, 0x08, 0x08, 0x08, 0x08, 0x7e, 0x00], // ｴ e
    [0x08, 0x7e, 0x08, 0x18, 0x28, 0x48, 0x08, 0x00], // ｵ o
    [0x20, 0x7e, 0x22, 0x22, 0x42, 0x44, 0x00, 0x00], // ｶ ka
    [0x10, 0x7c, 0x10, 0x7e, 0x08, 0x08, 0x08, 0x00], // ｷ ki
    [0x10, 0x20, 0x7e, 0x02, 0x04, 0x18, 0x60, 0x00], // ｸ ku
    [0x10, 0x20, 0x7e, 0x08, 0x08, 0x08, 0x10, 0x00], // ｹ ke
    [0x7e, 0x02, 0x02, 0x02, 0x02, 0x02, 0x7e, 0x00], // ｺ ko
    [0x24, 0x24, 0x7e, 0x24, 0x04, 0x08, 0x30, 0x00], // ｻ sa
    [0x22, 0x02, 0x22, 0x04, 0x08, 0x10, 0x60, 0x00], // ｼ shi
    [0x00, 0x7e, 0x02, 0x04, 0x18, 0x24, 0x42, 0x00], // ｽ su
    [0x20, 0x20, 0x7e, 0x22, 0x24, 0x20, 0x3e, 0x00], // ｾ se
    [0x22, 0x22, 0x02, 0x04, 0x08, 0x10, 0x60, 0x00], // ｿ so
    [0x7e, 0x02, 0x12, 0x0c, 0x08, 0x10, 0x60, 0x00], // ﾀ ta
    [0x0e, 0x10, 0x7e, 0x08, 0x08, 0x08, 0x10, 0x00], // ﾁ chi
    [0x2a, 0x2a, 0x02, 0x02, 0x04, 0x18, 0x60, 0x00], // ﾂ tsu
    [0x3c, 0x00, 0x7e, 0x08, 0x08, 0x08, 0x10, 0x00], // ﾃ te
    [0x20, 0x20, 0x30, 0x28, 0x24, 0x20, 0x20, 0x00], // ﾄ to
    [0x08, 0x7e, 0x08, 0x08, 0x10, 0x10, 0x20, 0x00], // ﾅ na
    [0x00, 0x3c, 0x00, 0x00, 0x00, 0x7e, 0x00, 0x00], // ﾆ ni
    [0x7e, 0x02, 0x24, 0x18, 0x18, 0x24, 0x42, 0x00], // ﾇ nu
    [0x08, 0x7e, 0x04, 0x18, 0x68, 0x18, 0x08, 0x00], // ﾈ ne
    [0x02, 0x04, 0x08, 0x08, 0x10, 0x20, 0x40, 0x00], // ﾉ no
    [0x00, 0x24, 0x24, 0x24, 0x42, 0x42, 0x42, 0x00], // ﾊ ha
    [0x20, 0x2c, 0x30, 0x20, 0x20, 0x20, 0x3e, 0x00], // ﾋ hi
    [0x7e, 0x02, 0x02, 0x04, 0x08, 0x10, 0x60, 0x00], // ﾌ fu
    [0x00, 0x00, 0x20, 0x50, 0x0c, 0x02, 0x00, 0x00], // ﾍ he
    [0x08, 0x7e, 0x08, 0x2a, 0x49, 0x08, 0x08, 0x00], // ﾎ ho
    [0x7e, 0x02, 0x04, 0x18, 0x20, 0x10, 0x08, 0x00], // ﾏ ma
    [0x3e, 0x00, 0x1e, 0x00, 0x00, 0x7e, 0x00, 0x00], // ﾐ mi
    [0x08, 0x10, 0x10, 0x20, 0x40, 0x42, 0x7e, 0x00], // ﾑ mu
    [0x02, 0x04, 0x24, 0x18, 0x18, 0x24, 0x40, 0x00], // ﾒ me
    [0x3c, 0x08, 0x7e, 0x08, 0x08, 0x08, 0x0e, 0x00], // ﾓ mo
    [0x24, 0x3e, 0x0a, 0x08, 0x08, 0x08, 0x08, 0x00], // ﾔ ya
    [0x3c, 0x04, 0x04, 0x04, 0x04, 0x7e, 0x00, 0x00], // ﾕ yu
    [0x3e, 0x02, 0x02, 0x3e, 0x02, 0x02, 0x3e, 0x00], // ﾖ yo
    [0x3c, 0x00, 0x7e, 0x02, 0x04, 0x08, 0x30, 0x00], // ﾗ ra
    [0x22, 0x22, 0x22, 0x22, 0x02, 0x04, 0x18, 0x00], // ﾘ ri
    [0x24, 0x24, 0x24, 0x24, 0x44, 0x44, 0x46, 0x00], // ﾙ ru
    [0x20, 0x20, 0x20, 0x20, 0x22, 0x24, 0x38, 0x00], // ﾚ re
    [0x3e, 0x22, 0x22, 0x22, 0x22, 0x22, 0x3e, 0x00], // ﾛ ro
    [0x7e, 0x42, 0x42, 0x04, 0x08, 0x10, 0x20, 0x00], // ﾜ wa
    [0x20, 0x10, 0x02, 0x04, 0x08, 0x10, 0x60, 0x00], // ﾝ n
];

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage(bitmap: [u8; 8]) -> u32 {
        bitmap.iter().map(|row| row.count_ones()).sum()
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(glyph(' '), [0u8; 8]);
    }

    #[test]
    fn test_printable_ascii_is_covered() {
        for c in '!'..='~' {
            assert_ne!(glyph(c), [0u8; 8], "blank glyph for {:?}", c);
        }
    }

    #[test]
    fn test_katakana_ramp_is_covered() {
        for c in '\u{ff66}'..='\u{ff9d}' {
            assert_ne!(glyph(c), [0u8; 8], "blank glyph for {:?}", c);
        }
    }

    #[test]
    fn test_shade_blocks_step_by_quarters() {
        assert_eq!(coverage(glyph('░')), 16);
        assert_eq!(coverage(glyph('▒')), 32);
        assert_eq!(coverage(glyph('▓')), 48);
        assert_eq!(coverage(glyph('█')), 64);
    }

    #[test]
    fn test_braille_dots_follow_codepoint_bits() {
        assert_eq!(glyph('\u{2800}'), [0u8; 8]);
        assert_eq!(coverage(glyph('\u{28ff}')), 32);

        // Dot 1 alone sits in the top-left corner.
        let dot1 = glyph('\u{2801}');
        assert_eq!(dot1[0], 0b0110_0000);
        assert_eq!(dot1[1], 0b0110_0000);
        assert_eq!(dot1[2..], [0u8; 6]);

        // Dot 8 alone sits in the bottom-right corner.
        let dot8 = glyph('\u{2880}');
        assert_eq!(dot8[6], 0b0000_0110);
        assert_eq!(dot8[7], 0b0000_0110);
        assert_eq!(dot8[..6], [0u8; 6]);
    }

    #[test]
    fn test_uncovered_glyphs_are_blank() {
        assert_eq!(glyph('é'), [0u8; 8]);
        assert_eq!(glyph('中'), [0u8; 8]);
        assert_eq!(glyph('\u{7f}'), [0u8; 8]);
    }
}
