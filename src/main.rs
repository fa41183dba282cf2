use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use b2_string_encoding::{
    codec,
    utils::{self, log, LogLevel},
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

/// Encode and decode strings the way Backblaze B2 expects them in URLs
#[derive(Parser)]
#[command(name = "b2url", author, version, about, long_about = None)]
struct Cli {
    /// Log what is being done to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Percent-encode text
    Encode(InputArgs),

    /// Decode a percent-encoded string
    Decode {
        #[command(flatten)]
        input: InputArgs,

        /// Print the decoded bytes as hex instead of text
        #[arg(long = "hex", conflicts_with = "json")]
        as_hex: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Value to transform
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    value: Option<String>,

    /// Read the value from a file instead
    #[arg(long)]
    file: Option<PathBuf>,

    /// Print input and output as a JSON object
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Transformed<'a> {
    input: &'a str,
    output: &'a str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        utils::set_global_log_level(LogLevel::Debug);
    }

    match cli.command {
        Command::Encode(args) => {
            let input = args.read()?;
            log::debug("encode", &format!("encoding {} bytes", input.len()));
            let output = codec::encode(&input);
            print_output(&input, &output, args.json)
        }
        Command::Decode { input: args, as_hex } => {
            let input = args.read()?;
            log::debug("decode", &format!("decoding {} characters", input.chars().count()));
            if as_hex {
                let bytes = codec::decode_to_bytes(&input).inspect_err(log_failure)?;
                println!("{}", hex::encode(bytes));
                return Ok(());
            }
            let output = codec::decode(&input).inspect_err(log_failure)?;
            print_output(&input, &output, args.json)
        }
    }
}

impl InputArgs {
    fn read(&self) -> Result<String> {
        match (&self.value, &self.file) {
            (_, Some(path)) => read_input_file(path),
            (Some(value), None) => Ok(value.clone()),
            (None, None) => anyhow::bail!("no input given"),
        }
    }
}

/// Read a whole file as the input value, dropping one trailing newline.
fn read_input_file(path: &Path) -> Result<String> {
    let mut contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if contents.ends_with('\n') {
        contents.pop();
        if contents.ends_with('\r') {
            contents.pop();
        }
    }
    log::debug("input", &format!("read {} bytes from {}", contents.len(), path.display()));
    Ok(contents)
}

fn print_output(input: &str, output: &str, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(&Transformed { input, output })
            .context("failed to serialize output")?;
        println!("{}", line);
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn log_failure(err: &codec::DecodeError) {
    match err.position() {
        Some(position) => log::warn("decode", &format!("rejected input at position {}", position)),
        None => log::warn("decode", "rejected input: result is not UTF-8"),
    }
}
