//! PKCS#7 padding tool
//!
//! Reads hex-encoded bytes from a file, pads or unpads them and writes the
//! result as hex.

use clap::{Parser, ValueEnum};
use log::{error, info};
use std::fs;
use std::process::ExitCode;
use thiserror::Error;

/// Command-line arguments for the PKCS#7 padding program.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the input file.
    #[arg(short, long, help = "Path to the hex-encoded input file")]
    file: String,

    /// Path to the output file.
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (pad or unpad).
    #[arg(short, long, help = "Mode of operation (pad/unpad)")]
    mode: OperationMode,

    /// Block size in bytes.
    #[arg(short, long, default_value_t = pkcs7::DEFAULT_BLOCK_SIZE, help = "Block size in bytes (raised to at least 16)")]
    size: usize,

    /// Validate the whole padding trailer when unpadding.
    #[arg(long, help = "Reject malformed padding when unpadding")]
    strict: bool,
}

/// Enum representing the mode of operation.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Pad mode.
    Pad,
    /// Unpad mode.
    Unpad,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error(transparent)]
    Padding(#[from] pkcs7::Pkcs7Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let data = read_hex_from_file(&cli.file)?;
    let block_size = pkcs7::effective_block_size(cli.size);

    let result = match cli.mode {
        OperationMode::Pad => {
            info!("Padding {} bytes to block size {}", data.len(), block_size);
            pkcs7::pad(&data, cli.size)
        }
        OperationMode::Unpad if cli.strict => {
            info!("Strictly unpadding {} bytes with block size {}", data.len(), block_size);
            pkcs7::unpad_strict(&data, cli.size)?.to_vec()
        }
        OperationMode::Unpad => {
            info!("Unpadding {} bytes", data.len());
            pkcs7::unpad(&data)?.to_vec()
        }
    };

    write_hex_to_file(&cli.output, &result)?;
    info!("Wrote {} bytes to {}", result.len(), cli.output);
    Ok(())
}

/// Reads hex from a file, ignoring whitespace. An empty file is an empty buffer.
fn read_hex_from_file(filename: &str) -> Result<Vec<u8>, CliError> {
    let content = fs::read_to_string(filename)?;
    let hex_string: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(hex_string)?)
}

fn write_hex_to_file(filename: &str, data: &[u8]) -> Result<(), CliError> {
    fs::write(filename, hex::encode(data))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_size() {
        let cli = Cli::parse_from(["pkcs7-cli", "-f", "in", "-o", "out", "-m", "pad"]);
        assert_eq!(cli.size, 16);
        assert!(!cli.strict);
    }

    #[test]
    fn test_hex_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.hex");
        let path = path.to_str().unwrap();

        fs::write(path, "01 02\n0a ff").unwrap();
        assert_eq!(read_hex_from_file(path).unwrap(), vec![0x01, 0x02, 0x0a, 0xff]);

        write_hex_to_file(path, &[0xde, 0xad]).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "dead");
    }

    #[test]
    fn test_invalid_hex() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.hex");
        fs::write(&path, "abc").unwrap();

        let result = read_hex_from_file(path.to_str().unwrap());
        assert!(matches!(result, Err(CliError::Hex(_))));
    }
}
