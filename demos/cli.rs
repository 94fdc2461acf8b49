//! Command-line interface for colorify
//!
//! Runs each color operation and prints the JSON record to stdout.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use colorify::raster::{load_image, map_display_point};
use colorify::{AnalysisConfig, ColorAnalyzer, ColorError, ImageGrid, RgbInput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about = "Color extraction and palette tools")]
struct Cli {
    #[arg(long, help = "JSON configuration file")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a random color
    Random {
        #[arg(long, help = "Seed for reproducible output")]
        seed: Option<u64>,
    },
    /// Validate and normalize a hex color
    Validate { hex: String },
    /// Convert RGB channels to hex
    Convert { r: i64, g: i64, b: i64 },
    /// Derive complementary and analogous colors
    Palette { hex: String },
    /// Rank the dominant colors of an image
    Extract {
        image_path: PathBuf,
        #[arg(long, help = "Maximum number of colors")]
        max_colors: Option<usize>,
    },
    /// Read the color at a pixel
    Point {
        image_path: PathBuf,
        x: i64,
        y: i64,
        #[arg(long, value_parser = parse_size, help = "Coordinates are on a WIDTHxHEIGHT view")]
        display: Option<DisplaySize>,
    },
}

#[derive(Clone, Copy, Debug)]
struct DisplaySize {
    width: u32,
    height: u32,
}

fn parse_size(value: &str) -> Result<DisplaySize, String> {
    let (w, h) = value
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value}"))?;
    Ok(DisplaySize {
        width: w.parse().map_err(|e| format!("invalid width: {e}"))?,
        height: h.parse().map_err(|e| format!("invalid height: {e}"))?,
    })
}

fn main() {
    let cli = Cli::parse();

    let analyzer = match load_analyzer(cli.config.as_deref()) {
        Ok(analyzer) => analyzer,
        Err(error) => fail(error),
    };

    let outcome = match cli.command {
        Command::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            print_json(&analyzer.random_color(&mut rng));
            Ok(())
        }
        Command::Validate { hex } => {
            print_json(&analyzer.validate_hex(&hex));
            Ok(())
        }
        Command::Convert { r, g, b } => analyzer
            .convert_rgb_to_hex(RgbInput { r, g, b })
            .map(|record| print_json(&record)),
        Command::Palette { hex } => analyzer
            .generate_palette(&hex)
            .map(|palette| print_json(&palette)),
        Command::Extract {
            image_path,
            max_colors,
        } => load_image(&image_path)
            .and_then(|image| analyzer.extract_dominant_colors(&image, max_colors))
            .map(|response| {
                print_json(&response);
                eprintln!();
                eprintln!("Dominant colors:");
                for color in &response.colors {
                    eprintln!(
                        "  {}  {:>6}  {}",
                        color.color.hex, color.percentage, color.color.name
                    );
                }
            }),
        Command::Point {
            image_path,
            x,
            y,
            display,
        } => load_image(&image_path).and_then(|image| {
            let (x, y) = match display {
                Some(view) => map_display_point(
                    (view.width, view.height),
                    (image.width(), image.height()),
                    x,
                    y,
                ),
                None => (x, y),
            };
            analyzer
                .analyze_point(&image, x, y)
                .map(|analysis| print_json(&analysis))
        }),
    };

    if let Err(error) = outcome {
        fail(error);
    }
}

fn load_analyzer(config_path: Option<&Path>) -> Result<ColorAnalyzer, ColorError> {
    match config_path {
        Some(path) => ColorAnalyzer::with_config(AnalysisConfig::from_json_file(path)?),
        None => Ok(ColorAnalyzer::new()),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }
}

fn fail(error: ColorError) -> ! {
    eprintln!("Error: {}", error);
    eprintln!("{}", error.user_message());
    process::exit(1);
}
