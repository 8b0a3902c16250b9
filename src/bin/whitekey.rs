use anyhow::{Context, Result};
use std::env;
use std::process;
use whitekey::{BackgroundKeyer, DEFAULT_INPUT, DEFAULT_OUTPUT};

fn print_usage(program: &str) {
    eprintln!("Light background to transparency");
    eprintln!();
    eprintln!("Usage: {} [INPUT] [OUTPUT] [OPTIONS]", program);
    eprintln!();
    eprintln!("Pixels with red, green and blue all above 200 become transparent white.");
    eprintln!("OUTPUT is always PNG-encoded, whatever its extension.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  INPUT                JPEG to read (default: {})", DEFAULT_INPUT);
    eprintln!("  OUTPUT               File to write (default: {})", DEFAULT_OUTPUT);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --log                Show conversion information (same as RUST_LOG=info)");
    eprintln!("  -h, --help           Print this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {}", program);
    eprintln!("  {} logo.jpg logo.png --log", program);
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("whitekey");

    let mut positional: Vec<&str> = Vec::new();
    let mut log_enabled = false;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--log" => log_enabled = true,
            "--help" | "-h" => {
                print_usage(program);
                return Ok(());
            }
            other if other.starts_with('-') => {
                return Err(anyhow::anyhow!("Unknown option: {}", other));
            }
            other => positional.push(other),
        }
    }

    if positional.len() > 2 {
        print_usage(program);
        return Err(anyhow::anyhow!("Too many arguments"));
    }

    let default_level = if log_enabled { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let input_path = positional.first().copied().unwrap_or(DEFAULT_INPUT);
    let output_path = positional.get(1).copied().unwrap_or(DEFAULT_OUTPUT);

    log::info!("Input:  {}", input_path);
    log::info!("Output: {}", output_path);

    BackgroundKeyer::new()
        .convert(input_path, output_path)
        .context("Conversion failed")?;

    Ok(())
}
