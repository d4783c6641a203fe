use rainbow::core::HueScale;
use rainbow::detect;
use rainbow::detector::{BallDetector, Calibration, ExtractorParams};

#[cfg(feature = "tracing")]
use rainbow::core::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    init_tracing(log::LevelFilter::Info, false);

    let mut args = std::env::args().skip(1);
    let (Some(image_path), Some(config_path)) = (args.next(), args.next()) else {
        eprintln!("Usage: find_balls <image_path> <calibration.json>");
        return Ok(());
    };

    let calibration = Calibration::load_json(config_path)?;
    let detector = BallDetector::new(calibration, ExtractorParams::default());

    let img = detect::load_rgb(image_path)?;
    let frame = detect::prepare_frame(img, Some(600), HueScale::Half)?;
    let (results, _) = detect::detect_and_annotate(frame, &detector, None)?;

    for r in &results {
        match r.ball() {
            Some(ball) => println!("{}: found at {:?}", r.color, ball.center),
            None => println!("{}: not found", r.color),
        }
    }

    Ok(())
}
