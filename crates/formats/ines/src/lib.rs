//! Minimal iNES container loader.
//!
//! Validates the outer `.nes` container and slices out the PRG and CHR
//! regions. Mapper-specific bank switching is out of scope; the mapper id
//! is only reported in the metadata summary.

use serde::Serialize;
use std::path::Path;

const MAGIC: [u8; 4] = *b"NES\x1A";
const HEADER_BYTES: usize = 16;
const TRAINER_BYTES: usize = 512;
const PRG_BANK_BYTES: usize = 16 * 1024;
const CHR_BANK_BYTES: usize = 8 * 1024;

#[derive(thiserror::Error, Debug)]
pub enum RomError {
    #[error("not an iNES file (bad magic)")]
    BadMagic,
    #[error("file ends before the declared ROM data")]
    Truncated,
    #[error("cartridge uses CHR RAM; there is no tile data to extract")]
    ChrRam,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A parsed iNES ROM image.
#[derive(Debug, Clone)]
pub struct Rom {
    pub prg_rom: Vec<u8>,
    pub chr_rom: Vec<u8>,
    pub mapper: u8,
    pub prg_banks: u8,
    pub chr_banks: u8,
}

/// Serializable summary of the container header.
#[derive(Debug, Clone, Serialize)]
pub struct RomInfo {
    pub mapper: u8,
    pub prg_banks: u8,
    pub chr_banks: u8,
    pub prg_bytes: usize,
    pub chr_bytes: usize,
}

impl Rom {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RomError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, RomError> {
        let header = data.get(..HEADER_BYTES).ok_or(RomError::BadMagic)?;
        if header[..4] != MAGIC {
            return Err(RomError::BadMagic);
        }

        let prg_banks = header[4];
        let chr_banks = header[5];
        let mapper = (header[7] & 0xF0) | (header[6] >> 4);
        let has_trainer = header[6] & 0x04 != 0;

        log::info!(
            "iNES header: mapper {mapper}, {prg_banks} PRG bank(s), {chr_banks} CHR bank(s)"
        );

        if chr_banks == 0 {
            return Err(RomError::ChrRam);
        }

        let mut cursor = HEADER_BYTES;
        if has_trainer {
            log::debug!("skipping {TRAINER_BYTES}-byte trainer");
            cursor += TRAINER_BYTES;
        }

        let prg_size = prg_banks as usize * PRG_BANK_BYTES;
        let prg_rom = data
            .get(cursor..cursor + prg_size)
            .ok_or(RomError::Truncated)?
            .to_vec();
        cursor += prg_size;

        let chr_size = chr_banks as usize * CHR_BANK_BYTES;
        let chr_rom = data
            .get(cursor..cursor + chr_size)
            .ok_or(RomError::Truncated)?
            .to_vec();

        Ok(Self {
            prg_rom,
            chr_rom,
            mapper,
            prg_banks,
            chr_banks,
        })
    }

    pub fn info(&self) -> RomInfo {
        RomInfo {
            mapper: self.mapper,
            prg_banks: self.prg_banks,
            chr_banks: self.chr_banks,
            prg_bytes: self.prg_rom.len(),
            chr_bytes: self.chr_rom.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assemble a synthetic ROM image.
    fn rom_bytes(prg_banks: u8, chr_banks: u8, flags6: u8, trainer: bool) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"NES\x1A");
        data.push(prg_banks);
        data.push(chr_banks);
        data.push(flags6);
        data.extend_from_slice(&[0u8; 9]);
        if trainer {
            data.extend_from_slice(&[0xEE; 512]);
        }
        data.extend(std::iter::repeat(0x11).take(prg_banks as usize * 16384));
        data.extend(std::iter::repeat(0x22).take(chr_banks as usize * 8192));
        data
    }

    #[test]
    fn parses_minimal_rom() {
        let rom = Rom::from_bytes(&rom_bytes(1, 1, 0, false)).unwrap();
        assert_eq!(rom.prg_rom.len(), 16384);
        assert_eq!(rom.chr_rom.len(), 8192);
        assert_eq!(rom.mapper, 0);
        assert!(rom.chr_rom.iter().all(|&b| b == 0x22));
    }

    #[test]
    fn skips_trainer() {
        let rom = Rom::from_bytes(&rom_bytes(1, 1, 0x04, true)).unwrap();
        // Trainer bytes (0xEE) must not leak into either region.
        assert!(rom.prg_rom.iter().all(|&b| b == 0x11));
        assert!(rom.chr_rom.iter().all(|&b| b == 0x22));
    }

    #[test]
    fn mapper_nibbles() {
        let rom = Rom::from_bytes(&rom_bytes(1, 1, 0x40, false)).unwrap();
        assert_eq!(rom.mapper, 4);
        let mut data = rom_bytes(1, 1, 0x10, false);
        data[7] = 0x20;
        assert_eq!(Rom::from_bytes(&data).unwrap().mapper, 0x21);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut data = rom_bytes(1, 1, 0, false);
        data[0] = b'X';
        assert!(matches!(Rom::from_bytes(&data), Err(RomError::BadMagic)));
        assert!(matches!(Rom::from_bytes(&[]), Err(RomError::BadMagic)));
    }

    #[test]
    fn rejects_chr_ram_cartridge() {
        let data = rom_bytes(1, 0, 0, false);
        assert!(matches!(Rom::from_bytes(&data), Err(RomError::ChrRam)));
    }

    #[test]
    fn rejects_truncated_data() {
        let mut data = rom_bytes(1, 1, 0, false);
        data.truncate(data.len() - 100);
        assert!(matches!(Rom::from_bytes(&data), Err(RomError::Truncated)));

        let mut short_prg = rom_bytes(2, 1, 0, false);
        short_prg.truncate(16 + 8000);
        assert!(matches!(
            Rom::from_bytes(&short_prg),
            Err(RomError::Truncated)
        ));
    }

    #[test]
    fn info_summary() {
        let rom = Rom::from_bytes(&rom_bytes(2, 1, 0, false)).unwrap();
        let info = rom.info();
        assert_eq!(info.prg_banks, 2);
        assert_eq!(info.chr_banks, 1);
        assert_eq!(info.prg_bytes, 32768);
        assert_eq!(info.chr_bytes, 8192);
    }
}
