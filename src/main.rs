use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(Parser)]
#[command(name = "steglsb", about = "Steganography image encoder/decoder")]
struct Cli {
    /// Show more information about the program
    #[arg(short, long, global = true, conflicts_with = "debug")]
    verbose: bool,
    /// Debug mode (for developers or troubleshooting)
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message into an image
    Encode {
        /// Path to the input image file
        input: PathBuf,
        /// File holding the message to hide in the image
        message: PathBuf,
        /// Path to save the encoded image (must be .png)
        output: PathBuf,
    },
    /// Decode a message from an image
    Decode {
        /// Path to the input image file (must be .png)
        input: PathBuf,
        /// Size of the message in bytes
        size: usize,
        /// Path to save the decoded message
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::DEBUG
    } else if cli.verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Encode {
            input,
            message,
            output,
        } => {
            steglsb::file::encode(&input, &message, &output).with_context(|| {
                format!(
                    "failed to encode {} into {}",
                    message.display(),
                    output.display()
                )
            })?;
            println!("Message encoded successfully");
        }
        Commands::Decode {
            input,
            size,
            output,
        } => {
            steglsb::file::decode(&input, size, &output)
                .with_context(|| format!("failed to decode {size} bytes from {}", input.display()))?;
        }
    }

    Ok(())
}
