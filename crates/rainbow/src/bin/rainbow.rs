use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use rainbow::core::HueScale;
use rainbow::detect::{self, PreparedFrame};
use rainbow::detector::{probe_pixel, BallDetector, Calibration, ColorResult, ExtractorParams};

#[derive(Parser, Debug)]
#[command(name = "rainbow", version, about = "Find colored balls in a still image")]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Detect calibrated balls and optionally write an annotated image.
    Detect(DetectArgs),
    /// Print the HSV value of one pixel.
    Probe(ProbeArgs),
}

#[derive(Args, Debug)]
struct ImageArgs {
    /// Input image.
    #[arg(short, long)]
    image: PathBuf,

    /// Rescale to this width before converting to HSV.
    #[arg(long)]
    width: Option<u32>,

    /// Hue encoding of the thresholds.
    #[arg(long, value_enum, default_value_t = HueArg::Half)]
    hue_scale: HueArg,
}

#[derive(Args, Debug)]
struct DetectArgs {
    #[command(flatten)]
    image: ImageArgs,

    /// Calibration JSON with a `balls` map.
    #[arg(short, long)]
    config: PathBuf,

    /// Colors to look for, in drawing order. Defaults to every calibrated color.
    #[arg(long, value_delimiter = ',')]
    colors: Vec<String>,

    /// Where to write the annotated image.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ProbeArgs {
    #[command(flatten)]
    image: ImageArgs,

    /// Column.
    #[arg(short, long)]
    x: usize,

    /// Row.
    #[arg(short, long)]
    y: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HueArg {
    /// [0, 180), OpenCV style.
    Half,
    /// [0, 360).
    Full,
}

impl From<HueArg> for HueScale {
    fn from(value: HueArg) -> Self {
        match value {
            HueArg::Half => HueScale::Half,
            HueArg::Full => HueScale::Full,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Command::Detect(args) => run_detect(args),
        Command::Probe(args) => run_probe(args),
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    rainbow::core::init_with_level(level)?;
    Ok(())
}

#[cfg(feature = "tracing")]
fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    tracing_log::LogTracer::builder()
        .with_max_level(level)
        .init()?;
    rainbow::core::init_tracing(level, false);
    Ok(())
}

fn load_frame(args: &ImageArgs) -> Result<PreparedFrame, Box<dyn std::error::Error>> {
    let img = detect::load_rgb(&args.image)?;
    log::debug!(
        "loaded {} ({}x{})",
        args.image.display(),
        img.width(),
        img.height()
    );
    Ok(detect::prepare_frame(img, args.width, args.hue_scale.into())?)
}

fn run_detect(args: DetectArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let calibration = Calibration::load_json(&args.config)?;
    let detector = BallDetector::new(calibration, ExtractorParams::default());
    let frame = load_frame(&args.image)?;

    let colors: Vec<&str> = args.colors.iter().map(String::as_str).collect();
    let selection = (!colors.is_empty()).then_some(colors.as_slice());
    let (results, annotated) = detect::detect_and_annotate(frame, &detector, selection)?;

    for r in &results {
        println!("{}", describe(r));
    }

    if let Some(path) = &args.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        annotated.save(path)?;
        println!("wrote annotated image to {}", path.display());
    }

    if results.iter().any(|r| r.result.is_err()) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_probe(args: ProbeArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let frame = load_frame(&args.image)?;
    let views = frame.views()?;
    match probe_pixel(&views, args.x, args.y) {
        Some(p) => {
            println!("{p}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!(
                "({}, {}) is outside the {}x{} image",
                args.x,
                args.y,
                views.width(),
                views.height()
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

fn describe(r: &ColorResult) -> String {
    match &r.result {
        Ok(Some(ball)) => format!(
            "{}: found at ({:.1}, {:.1}) radius {:.1} centroid ({}, {})",
            r.color, ball.center.x, ball.center.y, ball.radius, ball.centroid.x, ball.centroid.y
        ),
        Ok(None) => format!("{}: not found", r.color),
        Err(err) => format!("{}: error: {err}", r.color),
    }
}
