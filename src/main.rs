use clap::{Parser, ValueEnum};
use image::ImageReader;
use std::path::PathBuf;

use notecrop::{
    ConsoleSink, EventSink, NoteDetector, NullSink, OutputMode, PipelineConfig, SegmenterKind,
};

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    ColorRange,
    Saturation,
    Edges,
}

impl From<Strategy> for SegmenterKind {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::ColorRange => SegmenterKind::ColorRange,
            Strategy::Saturation => SegmenterKind::Saturation,
            Strategy::Edges => SegmenterKind::Edges,
        }
    }
}

#[derive(Parser)]
#[command(name = "notecrop")]
#[command(about = "Detect sticky notes in a photo and save them as individual images")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Output directory for the cropped notes
    #[arg(short, long, value_name = "DIR", default_value = "notes")]
    output: PathBuf,

    /// TOML file with pipeline parameters (defaults used when omitted)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Segmentation strategy
    #[arg(long, value_enum, default_value = "color-range")]
    segmenter: Strategy,

    /// Crop axis-aligned boxes instead of perspective-rectifying
    #[arg(long)]
    crop: bool,

    /// Suppress overlapping boxes (crop mode)
    #[arg(long)]
    nms: bool,

    /// File extension for the saved notes
    #[arg(long, default_value = "png")]
    ext: String,

    /// Report pipeline progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };

    // Decode failure is fatal: no partial output.
    let img = ImageReader::open(&args.image_path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("failed to decode image {}: {}", args.image_path.display(), e))?
        .to_rgb8();

    let sink: Box<dyn EventSink> = if args.verbose {
        Box::new(ConsoleSink)
    } else {
        Box::new(NullSink)
    };

    let mode = if args.crop {
        OutputMode::Crop
    } else {
        OutputMode::Rectify
    };

    let detector = NoteDetector::new(config)
        .with_segmenter(args.segmenter.into())
        .with_mode(mode)
        .with_dedup(args.nms);

    let notes = detector.detect(&img, sink.as_ref());
    let paths = notecrop::output::save_notes(&args.output, &notes, &args.ext, sink.as_ref())?;

    println!(
        "Done: {} note{} saved to {}",
        paths.len(),
        if paths.len() == 1 { "" } else { "s" },
        args.output.display()
    );

    Ok(())
}
