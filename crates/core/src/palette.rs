//! Fixed grayscale palette for 2-bit tile intensities.

/// Marker color for intensity 0 (the "transparent" backdrop).
pub const TRANSPARENT_MARKER: u32 = 0x00FF_00FF;
/// Intensity 1.
pub const LIGHT_GRAY: u32 = 0x00AA_AAAA;
/// Intensity 2.
pub const DARK_GRAY: u32 = 0x0046_4646;
/// Intensity 3.
pub const BLACK: u32 = 0x0000_0000;

/// Intensity-indexed palette, packed `0x00RRGGBB`.
pub const GRAYSCALE: [u32; 4] = [TRANSPARENT_MARKER, LIGHT_GRAY, DARK_GRAY, BLACK];

/// Map a 2-bit intensity to its color. Only the low two bits are used.
pub fn color(intensity: u8) -> u32 {
    GRAYSCALE[(intensity & 0x03) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_mapping() {
        assert_eq!(color(0), 0x00FF00FF);
        assert_eq!(color(1), 0x00AAAAAA);
        assert_eq!(color(2), 0x00464646);
        assert_eq!(color(3), 0x00000000);
    }

    #[test]
    fn high_bits_ignored() {
        assert_eq!(color(0x41), color(1));
        assert_eq!(color(0xFE), color(2));
    }
}
