//! Core CHR extraction primitives: tile decoding, palette mapping,
//! sheet assembly, and the BMP encoder.

pub mod bmp;
pub mod palette;
pub mod sheet;
pub mod tile;

pub mod types {
    use serde::{Deserialize, Serialize};

    /// Decoded sprite-sheet pixels.
    ///
    /// Row-major, one packed `0x00RRGGBB` value per cell. Row 0 is the
    /// *bottom* scanline: the sheet decoder writes rows in BMP storage
    /// order so the encoder can emit the buffer verbatim.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PixelGrid {
        pub width: u32,
        pub height: u32,
        pub pixels: Vec<u32>,
    }

    impl PixelGrid {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                pixels: vec![0; (width * height) as usize],
            }
        }
    }
}

/// Violations of the CHR tile-bank layout invariants.
///
/// Decoding is all-or-nothing: any of these aborts the extraction with no
/// partial grid.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Zero banks, or more than the single 8 KiB bank we support.
    #[error("expected exactly one 8 KiB CHR bank, found {0}")]
    InvalidBankCount(usize),

    /// Buffer length is not a whole number of 32-byte sprites.
    #[error("CHR buffer of {0} bytes is not a multiple of the 32-byte sprite size")]
    MisalignedBufferSize(usize),

    /// Sprite count cannot be arranged into a square sheet.
    #[error("{0} sprites do not form a square sprite sheet")]
    NonSquareTileArrangement(usize),
}
