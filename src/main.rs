//! retrodis - A table-driven disassembler for 8-bit processors
//!
//! Usage:
//!   retrodis <binary>                  Disassemble as 6502 code at $0000
//!   retrodis <binary> -c z80 -a 0x100  Disassemble Z80 code loaded at $0100
//!   retrodis <binary> -b blocks.txt    Show declared regions as data
//!   retrodis --list-cpus               List supported CPUs

use anyhow::{Context, Result};
use clap::Parser;
use retrodis::labels::LABEL_FILE_EXTENSION;
use retrodis::{
    cpus, BlockOverrideTable, Disassembler, DisassemblyOptions, LabelResolver, Outcome,
};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

#[derive(Parser)]
#[command(name = "retrodis")]
#[command(about = "A table-driven disassembler for 8-bit processors", long_about = None)]
struct Cli {
    /// Path to the binary file
    #[arg(required_unless_present = "list_cpus")]
    file: Option<PathBuf>,

    /// CPU to disassemble for
    #[arg(short, long, default_value = "6502")]
    cpu: String,

    /// Operand-only output, without address and byte columns
    #[arg(short, long)]
    nolist: bool,

    /// Address of the first byte (decimal or 0x-prefixed hex)
    #[arg(short, long, default_value = "0", value_parser = parse_address)]
    address: u16,

    /// Decode undocumented opcodes
    #[arg(short, long)]
    undocumented: bool,

    /// Show invalid opcodes as ??? instead of .byte data
    #[arg(short, long)]
    invalid: bool,

    /// Block override file, relative to the input file's directory
    #[arg(short, long)]
    block: Option<PathBuf>,

    /// List supported CPUs and exit
    #[arg(long)]
    list_cpus: bool,
}

/// Parse a decimal or `0x` hex number, keeping the low 16 bits.
fn parse_address(s: &str) -> Result<u16, String> {
    let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    }
    .map_err(|e| e.to_string())?;
    Ok((value & 0xFFFF) as u16)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_cpus {
        for cpu in cpus::CPUS {
            println!("{:<8}{}", cpu.id, cpu.description);
        }
        return Ok(());
    }

    let file = cli.file.clone().context("no input file given")?;

    let options = DisassemblyOptions {
        start_address: cli.address,
        listing: !cli.nolist,
        undocumented: cli.undocumented,
        show_invalid: cli.invalid,
    };
    let mut disassembler = Disassembler::for_cpu(&cli.cpu)?.with_options(options);

    for collision in disassembler.collisions() {
        eprintln!(
            "warning: opcode ${:04X} defined more than once, using last definition",
            collision.opcode
        );
    }

    let input = File::open(&file)
        .with_context(|| format!("Failed to open input file: {}", file.display()))?;

    let label_path = file.with_extension(LABEL_FILE_EXTENSION);
    if label_path.is_file() {
        disassembler = disassembler.with_labels(load_labels(&label_path)?);
    }

    if let Some(block) = &cli.block {
        let block_path = resolve_block_path(&file, block);
        disassembler = disassembler.with_blocks(load_blocks(&block_path)?);
    }

    install_signal_handlers();
    disassembler = disassembler.with_interrupt(&INTERRUPTED);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = disassembler.run(BufReader::new(input), &mut out)?;

    if summary.outcome == Outcome::Interrupted {
        eprintln!("Interrupted by Control-C");
    }
    Ok(())
}

fn load_labels(path: &Path) -> Result<LabelResolver> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read label file: {}", path.display()))?;
    LabelResolver::parse(&text)
        .with_context(|| format!("Failed to parse label file: {}", path.display()))
}

fn load_blocks(path: &Path) -> Result<BlockOverrideTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read block file: {}", path.display()))?;
    BlockOverrideTable::parse(&text)
        .with_context(|| format!("Failed to parse block file: {}", path.display()))
}

/// Relative block paths are looked up next to the input file.
fn resolve_block_path(input: &Path, block: &Path) -> PathBuf {
    if block.is_absolute() {
        return block.to_path_buf();
    }
    match input.parent() {
        Some(dir) => dir.join(block),
        None => block.to_path_buf(),
    }
}

#[cfg(unix)]
extern "C" fn on_sigint(_signal: libc::c_int) {
    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
}

#[cfg(unix)]
fn install_signal_handlers() {
    // SAFETY: the handler only stores to an atomic, which is async-signal-safe.
    unsafe {
        libc::signal(libc::SIGINT, on_sigint as libc::sighandler_t);
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn install_signal_handlers() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("4096").unwrap(), 0x1000);
        assert_eq!(parse_address("0x8000").unwrap(), 0x8000);
        assert_eq!(parse_address("0x12345").unwrap(), 0x2345);
        assert!(parse_address("zz").is_err());
    }

    #[test]
    fn test_resolve_block_path() {
        assert_eq!(
            resolve_block_path(Path::new("/data/rom.bin"), Path::new("rom.blk")),
            PathBuf::from("/data/rom.blk")
        );
        assert_eq!(
            resolve_block_path(Path::new("rom.bin"), Path::new("/etc/rom.blk")),
            PathBuf::from("/etc/rom.blk")
        );
    }
}
