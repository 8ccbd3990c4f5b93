use std::io::{self, Read, Write};

use anyhow::{anyhow, Context, Result};
use b2kit_corelib as core;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "b2kit", version, about = "BLAKE2 digest toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash in-memory data (an argument, or stdin when omitted)
    Hash {
        /// Variant id: blake2b or blake2s
        #[arg(short = 'a', long, default_value = "blake2b")]
        variant: String,
        /// Digest length in bytes (defaults to the variant maximum)
        #[arg(short, long)]
        length: Option<usize>,
        /// Key as hex (omit for unkeyed hashing)
        #[arg(short, long)]
        key: Option<String>,
        /// Write raw digest bytes instead of hex
        #[arg(long, conflicts_with = "json")]
        raw: bool,
        /// Emit a JSON report
        #[arg(long)]
        json: bool,
        /// Data to hash; stdin is read to the end when omitted
        data: Option<String>,
    },
    /// Streaming BLAKE2b-512 of files, b2sum-style
    Sum {
        /// Write raw digest bytes instead of hex lines
        #[arg(long)]
        raw: bool,
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// List supported variants and their limits
    VariantLs,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Hash {
            variant,
            length,
            key,
            raw,
            json,
            data,
        }) => {
            let variant = core::HashVariant::parse(&variant)
                .ok_or_else(|| anyhow!("unknown variant '{variant}'"))?;
            let output_len = length.unwrap_or(variant.max_output_bytes());
            let key = match key {
                Some(k) => hex::decode(k.trim()).context("key must be hex")?,
                None => Vec::new(),
            };
            let bytes = match data {
                Some(s) => s.into_bytes(),
                None => {
                    let mut buf = Vec::new();
                    io::stdin().read_to_end(&mut buf).context("read stdin")?;
                    buf
                }
            };
            let digest = core::hash(
                &core::HashParams::keyed(variant, output_len, key),
                &bytes,
            )?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "variant": variant.id(),
                        "length": output_len,
                        "hex": digest.to_hex(),
                    })
                );
            } else {
                emit(digest, raw)?;
            }
        }
        Some(Commands::Sum { raw, files }) => {
            for file in &files {
                let digest = core::hash_file(file)?;
                if raw {
                    emit(digest, true)?;
                } else {
                    println!("{}  {}", digest.to_hex(), file);
                }
            }
        }
        Some(Commands::VariantLs) => {
            for v in core::list_variants() {
                println!(
                    "{}  max_output={}  max_key={}",
                    v.id, v.max_output_bytes, v.max_key_bytes
                );
            }
        }
        None => {
            println!("b2kit {} — ready", core::version());
            println!("Try: `b2kit hash [DATA]` or `b2kit sum FILE`");
        }
    }
    Ok(())
}

fn emit(digest: core::Digest, raw: bool) -> Result<()> {
    let encoding = if raw {
        core::Encoding::Raw
    } else {
        core::Encoding::Hex
    };
    match core::encode(digest, encoding) {
        core::EncodedOutput::Raw(bytes) => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(&bytes)?;
            lock.flush()?;
        }
        core::EncodedOutput::Hex(hex) => println!("{hex}"),
    }
    Ok(())
}
