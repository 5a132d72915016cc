use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use recode_core::{ConversionFacade, ConversionStage};

#[derive(Parser, Debug)]
#[command(name = "recode")]
#[command(about = "Video conversion tool wrapping codec detection, bitrate processing, and audio fixing")]
#[command(version)]
struct Args {
    /// Input video file name (codec is derived from the extension)
    input: String,

    /// Target format; anything other than "mp4" converts to Ogg
    #[arg(short, long, default_value = "mp4")]
    format: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    log::info!("Starting video conversion...");
    log::info!("Input: {}", args.input);
    log::info!("Target format: {}", args.format);

    // One tick per conversion stage
    let pb = ProgressBar::new(6);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let facade = ConversionFacade::new();
    let output = facade.convert_video_with_progress(&args.input, &args.format, |stage| {
        pb.set_message(stage.to_string());
        pb.inc(1);
        if stage == ConversionStage::Completed {
            pb.finish_with_message("Conversion complete!");
        }
    })?;

    println!("\n✅ Video conversion completed successfully!");
    println!("📁 Output handle: {}", output);

    Ok(())
}
