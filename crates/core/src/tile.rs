//! 2bpp planar tile decoding.
//!
//! CHR tile data stores each 8x8 tile as two sequential bitplanes of 8
//! bytes each. A pixel's 2-bit intensity is the sum of its bit in the low
//! plane and twice its bit in the high plane:
//!
//! ```text
//!     0  1  0  0  1  1  0  1   low plane
//!  +  1  1  0  0  0  1  0  0   high plane (x2)
//!  -------------------------
//!     2  3  0  0  1  3  0  1   intensity
//! ```

/// Bytes per encoded 8x8 tile: 8 low-plane rows then 8 high-plane rows.
pub const TILE_BYTES: usize = 16;

/// Pixel width/height of a decoded tile.
pub const TILE_DIM: usize = 8;

/// Trait for decoding packed tile data into palette intensities.
pub trait TileDecoder {
    /// Decode one pixel of a tile.
    ///
    /// `x`/`y` are coordinates within the tile (0-7); returns the 2-bit
    /// intensity (0-3). Out-of-range coordinates or short tile data
    /// decode to 0.
    fn decode_pixel(&self, tile_data: &[u8], x: u8, y: u8) -> u8;

    /// Size of one encoded tile in bytes.
    fn tile_size(&self) -> usize;
}

/// Sequential-bitplane 2bpp decoder (the CHR pattern-table layout).
///
/// Bytes 0-7 hold the low bitplane, bytes 8-15 the high bitplane, one
/// byte per row. Bit 7 of each byte is the leftmost pixel of its row.
#[derive(Debug, Clone, Copy)]
pub struct Chr2BppDecoder;

impl TileDecoder for Chr2BppDecoder {
    fn decode_pixel(&self, tile_data: &[u8], x: u8, y: u8) -> u8 {
        if tile_data.len() < TILE_BYTES || x as usize >= TILE_DIM || y as usize >= TILE_DIM {
            return 0;
        }

        let lo = tile_data[y as usize];
        let hi = tile_data[y as usize + TILE_DIM];
        let bit = 7 - x;
        let lo_bit = (lo >> bit) & 1;
        let hi_bit = (hi >> bit) & 1;

        2 * hi_bit + lo_bit
    }

    fn tile_size(&self) -> usize {
        TILE_BYTES
    }
}
