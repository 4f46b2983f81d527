//! Blowfish-CBC command-line tool
//!
//! Reads hex input and a hex key from files, encrypts or decrypts with
//! Blowfish in CBC mode, and writes the result as hex.

use anyhow::{bail, Context, Result};
use blowfish_cbc::{decrypt, encrypt, BLOCK_SIZE};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Blowfish-CBC encryption/decryption with zero padding
///
/// The ciphertext layout is `IV || blocks`; the IV is the first 8 bytes.
#[derive(Parser, Debug)]
#[command(
    name = "blowfish-tool",
    about = "Blowfish-CBC encryption/decryption for hexadecimal input files",
    long_about = "
All files hold hexadecimal digits; whitespace is ignored.

ENCRYPT: the plaintext is zero-padded to a multiple of 8 bytes and the
output is IV || ciphertext. Without --iv an all-zero IV is used.

DECRYPT: the IV is read from the first 8 bytes of the ciphertext. The
output keeps its zero padding unless --length gives the original size.

Set RUST_LOG=info or RUST_LOG=debug for progress output.
"
)]
#[command(version)]
struct Args {
    /// Operation: encrypt or decrypt
    #[arg(long, value_enum)]
    operation: Operation,

    /// Path to the input file (hex)
    #[arg(long, value_name = "INPUT_FILE")]
    file: PathBuf,

    /// Path to the key file (hex, 4 to 56 bytes)
    #[arg(long, value_name = "KEY_FILE")]
    key: PathBuf,

    /// Initialization vector as 16 hex digits
    #[arg(long, value_name = "HEX")]
    iv: Option<String>,

    /// Original plaintext length; decrypted output is truncated to it
    #[arg(long, value_name = "BYTES")]
    length: Option<usize>,

    /// Output destination (file or directory)
    ///
    /// If a directory is given, the output file is created there
    /// with the same name as the input file.
    #[arg(long, value_name = "OUTPUT_DESTINATION")]
    output: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Operation {
    /// Pad, chain and prefix the IV
    Encrypt,
    /// Strip the IV prefix and unchain
    Decrypt,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Encrypt => write!(f, "encryption"),
            Operation::Decrypt => write!(f, "decryption"),
        }
    }
}

/// Decodes hex digits, ignoring spaces and line breaks
fn parse_hex(content: &str) -> Result<Vec<u8>> {
    let digits: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&digits).context("invalid hexadecimal data")
}

fn read_hex_file(path: &Path) -> Result<Vec<u8>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_hex(&content).with_context(|| format!("in {}", path.display()))
}

/// Determines the final output path
///
/// If `output_destination` is a directory, the file name of
/// `input_path` is used inside it.
fn resolve_output_path(output_destination: &Path, input_path: &Path) -> Result<PathBuf> {
    let output_path = if output_destination.is_dir() {
        let input_filename = input_path
            .file_name()
            .context("invalid input file name")?;
        output_destination.join(input_filename)
    } else {
        output_destination.to_path_buf()
    };

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create directory {}", parent.display()))?;
    }

    Ok(output_path)
}

/// Runs the selected operation on already decoded data
fn process(
    operation: Operation,
    data: &[u8],
    key: &[u8],
    iv: Option<&[u8]>,
    length: Option<usize>,
) -> Result<Vec<u8>> {
    match operation {
        Operation::Encrypt => {
            let ciphertext = encrypt(data, key, iv)?;
            debug!(
                "plaintext {} bytes, {} bytes of padding",
                data.len(),
                ciphertext.len() - BLOCK_SIZE - data.len()
            );
            Ok(ciphertext)
        }
        Operation::Decrypt => {
            if let Some(iv) = iv {
                if data.len() >= BLOCK_SIZE && data[..BLOCK_SIZE] != *iv {
                    warn!("--iv differs from the IV embedded in the ciphertext; using the embedded one");
                }
            }
            let mut plaintext = decrypt(data, key, iv)?;
            if let Some(length) = length {
                if length > plaintext.len() {
                    bail!(
                        "--length {} exceeds the decrypted size of {} bytes",
                        length,
                        plaintext.len()
                    );
                }
                plaintext.truncate(length);
            }
            debug!("recovered {} bytes", plaintext.len());
            Ok(plaintext)
        }
    }
}

/// Reads, processes and writes; returns where the result went
fn run(args: &Args) -> Result<PathBuf> {
    let data = read_hex_file(&args.file)?;
    let key = read_hex_file(&args.key)?;
    let iv = args.iv.as_deref().map(parse_hex).transpose().context("invalid --iv")?;

    if args.length.is_some() && args.operation == Operation::Encrypt {
        warn!("--length only applies to decryption and is ignored");
    }

    let result = process(args.operation, &data, &key, iv.as_deref(), args.length)
        .with_context(|| format!("{} failed", args.operation))?;

    // Only touch the filesystem once there is something to write
    let output_path = resolve_output_path(&args.output, &args.file)?;
    fs::write(&output_path, hex::encode(&result))
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    Ok(output_path)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let output_path = run(&args)?;

    info!("{} finished", args.operation);
    info!("result written to {}", output_path.display());

    Ok(())
}
