//! Command-line foot measurement.
//!
//! Reads one photograph, prints exactly one JSON object to stdout and
//! terminates normally: `{"foot_size_cm": 25.0}` on success,
//! `{"error": "..."}` on failure. Diagnostics go to stderr only.

use std::path::PathBuf;

use clap::Parser;
use footsize::{
    measure_file, ClassifierRule, FootsizeError, MeasureError, MeasureParams, Measurement,
    A4_SHORT_EDGE_CM,
};
use serde::Serialize;

/// Estimate foot length from a photo of a foot beside a reference sheet.
#[derive(Parser, Debug)]
#[command(name = "footsize", version, about)]
struct Args {
    /// Path to the photograph (.jpg, .jpeg or .png)
    image: Option<PathBuf>,

    /// Physical width of the reference sheet in centimeters
    #[arg(long, default_value_t = A4_SHORT_EDGE_CM)]
    reference_width_cm: f64,

    /// Rule deciding which detected region is the reference sheet
    #[arg(long, value_enum, default_value_t = ClassifierArg::BoxWidth)]
    classifier: ClassifierArg,

    /// Ignore contours whose enclosed area is below this many square pixels
    #[arg(long, default_value_t = 0.0)]
    min_contour_area: f64,

    /// Reject measurements outside MIN,MAX centimeters
    #[arg(long, value_name = "MIN,MAX", value_parser = parse_range)]
    plausible_range: Option<(f64, f64)>,

    /// Also report a children's shoe size for the measured length
    #[arg(long)]
    shoe_size: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ClassifierArg {
    /// Wider bounding box is the reference sheet
    BoxWidth,
    /// Aspect ratio closest to an upright A4 page is the reference sheet
    AspectRatio,
    /// Larger enclosed area is the reference sheet
    Area,
}

impl From<ClassifierArg> for ClassifierRule {
    fn from(arg: ClassifierArg) -> Self {
        match arg {
            ClassifierArg::BoxWidth => ClassifierRule::BoxWidth,
            ClassifierArg::AspectRatio => ClassifierRule::AspectRatio,
            ClassifierArg::Area => ClassifierRule::Area,
        }
    }
}

fn parse_range(s: &str) -> Result<(f64, f64), String> {
    let (min, max) = s
        .split_once(',')
        .ok_or_else(|| format!("expected MIN,MAX, got {s:?}"))?;
    let min: f64 = min.trim().parse().map_err(|e| format!("bad MIN: {e}"))?;
    let max: f64 = max.trim().parse().map_err(|e| format!("bad MAX: {e}"))?;
    if min > max {
        return Err(format!("MIN {min} exceeds MAX {max}"));
    }
    Ok((min, max))
}

#[derive(Serialize)]
struct SuccessLine {
    foot_size_cm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    shoe_size: Option<u32>,
}

#[derive(Serialize)]
struct ErrorLine {
    error: &'static str,
}

fn json_line<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("{\"error\":\"Internal error\"}"))
}

fn error_line(message: &'static str) -> String {
    json_line(&ErrorLine { error: message })
}

fn success_line(m: &Measurement, with_shoe_size: bool) -> String {
    json_line(&SuccessLine {
        foot_size_cm: m.foot_length_cm,
        shoe_size: with_shoe_size.then(|| m.shoe_size()),
    })
}

fn message_for(err: &FootsizeError) -> &'static str {
    match err {
        FootsizeError::UnsupportedFormat { .. } => "Invalid image format",
        FootsizeError::Unreadable(_) | FootsizeError::EmptyImage => "Unable to load image",
        FootsizeError::Measure(MeasureError::InsufficientContours { .. }) => {
            "Not enough contours detected"
        }
        FootsizeError::Measure(MeasureError::DegenerateCalibration) => "Degenerate calibration",
        FootsizeError::Measure(MeasureError::ImplausibleMeasurement { .. }) => {
            "Implausible measurement"
        }
    }
}

fn run(args: &Args) -> String {
    let Some(path) = &args.image else {
        return error_line("No image path provided");
    };

    let mut params = MeasureParams {
        reference_width_cm: args.reference_width_cm,
        classifier: args.classifier.into(),
        min_contour_area: args.min_contour_area,
        ..MeasureParams::default()
    };
    if let Some((min_cm, max_cm)) = args.plausible_range {
        params.min_plausible_cm = min_cm;
        params.max_plausible_cm = max_cm;
    }

    match measure_file(path, &params) {
        Ok(m) => success_line(&m, args.shoe_size),
        Err(err) => {
            log::warn!("{err}");
            error_line(message_for(&err))
        }
    }
}

fn main() {
    let args = Args::parse();
    let _ = footsize::core::init_from_verbosity(args.verbose);
    println!("{}", run(&args));
}
