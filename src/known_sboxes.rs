//! Output words of some well-known 4-bit S-boxes, $S(0)$ first.
//!
//! Use [crate::SBox::new] with 4 output bits to analyze them.

/// PRESENT block cipher S-box, `C56B90AD3EF84712`
pub const PRESENT_SBOX: [u32; 16] = [
    0xC, 0x5, 0x6, 0xB, 0x9, 0x0, 0xA, 0xD, 0x3, 0xE, 0xF, 0x8, 0x4, 0x7, 0x1, 0x2,
];

/// GIFT block cipher S-box, `1A4C6F392DB7508E`
pub const GIFT_SBOX: [u32; 16] = [
    0x1, 0xA, 0x4, 0xC, 0x6, 0xF, 0x3, 0x9, 0x2, 0xD, 0xB, 0x7, 0x5, 0x0, 0x8, 0xE,
];
