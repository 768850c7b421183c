use anyhow::{Context, Result};
use clap::Parser;

/// Extract the CHR tile graphics of an iNES ROM into a BMP sprite sheet.
#[derive(Parser)]
struct Args {
    /// Path to an iNES ROM file
    #[arg(default_value = "zelda.nes")]
    rom: String,

    /// Destination bitmap path
    #[arg(long, default_value = "sheet.bmp")]
    out: String,

    /// Print the ROM metadata as JSON and exit
    #[arg(long, default_value_t = false)]
    info: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rom = chr_ines::Rom::from_file(&args.rom)
        .with_context(|| format!("failed to load ROM {}", args.rom))?;

    if args.info {
        println!("{}", serde_json::to_string_pretty(&rom.info())?);
        return Ok(());
    }

    let grid = chr_core::sheet::decode(&rom.chr_rom)
        .with_context(|| format!("failed to decode CHR data of {}", args.rom))?;
    log::info!(
        "decoded {} CHR bytes into a {}x{} sheet",
        rom.chr_rom.len(),
        grid.width,
        grid.height
    );

    chr_core::bmp::write(&args.out, &grid)
        .with_context(|| format!("failed to write {}", args.out))?;

    println!(
        "Extracted {} x {} sprite sheet to {}",
        grid.width / 8,
        grid.height / 8,
        args.out
    );
    Ok(())
}
