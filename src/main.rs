use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::convert::{convert, ConvertOptions};
mod bgr565;
mod convert;
mod utils;

/// Convert an image into a raw BGR565 pixel stream.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input file to be converted.
    #[arg(short, long)]
    input: PathBuf,
    /// Raw BGR565 output file.
    #[arg(short, long)]
    output: PathBuf,
    /// Resize image before converting.
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["WIDTH", "HEIGHT"],
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    resize: Option<Vec<u32>>,
    /// Also save the quantized result as a viewable image.
    #[arg(short, long)]
    preview: Option<PathBuf>,
}

impl Args {
    fn into_options(self) -> ConvertOptions {
        ConvertOptions {
            input: self.input,
            output: self.output,
            resize: self.resize.map(|r| (r[0], r[1])),
            preview: self.preview,
        }
    }
}

fn main() -> Result<()> {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();

    let options = Args::parse().into_options();
    info!("convert {}", options.input.display());
    convert(&options)?;
    Ok(())
}
