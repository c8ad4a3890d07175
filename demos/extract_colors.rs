//! Command-line demo for image_color_scheme
//!
//! Decodes an image file, prints its dominant colors and one palette of each
//! type. Set `RUST_LOG=image_color_scheme=debug` to see extraction details.

use image_color_scheme::{
    generate_palette, Color, ColorExtractor, ExtractionConfig, PaletteType, PixelBuffer,
    SchemeConfig,
};
use std::{env, path::Path, process};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut image_path_arg = None;
    let mut json_output = false;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
                config_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--json" => json_output = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(image_path_str) = image_path_arg else {
        print_help(&args[0]);
        process::exit(1);
    };
    let image_path = Path::new(&image_path_str);

    if !image_path.exists() {
        eprintln!("Error: Image file '{}' not found.", image_path.display());
        process::exit(1);
    }

    let config = match config_path {
        Some(path) => match SchemeConfig::from_json_file(Path::new(&path)) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: {}", error);
                process::exit(1);
            }
        },
        None => SchemeConfig {
            extraction: ExtractionConfig {
                num_colors: 6,
                ..ExtractionConfig::default()
            },
            ..SchemeConfig::default()
        },
    };

    let image = match image::open(image_path) {
        Ok(image) => image.to_rgb8(),
        Err(error) => {
            eprintln!("Error: Failed to decode '{}': {}", image_path.display(), error);
            process::exit(1);
        }
    };

    if let Err(error) = run(&image, &config, json_output) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run(
    image: &image::RgbImage,
    config: &SchemeConfig,
    json_output: bool,
) -> image_color_scheme::Result<()> {
    let pixels = PixelBuffer::from_rgb_image(image)?;
    let extractor = ColorExtractor::with_config(config.extraction.clone())?;
    let dominant = extractor.extract_with_counts(&pixels)?;
    let colors: Vec<Color> = dominant.iter().map(|d| d.color).collect();

    let mut palettes = Vec::with_capacity(PaletteType::ALL.len());
    for palette_type in PaletteType::ALL {
        let palette = generate_palette(&colors, palette_type, config.palette.num_colors)?;
        palettes.push((palette_type, palette));
    }

    if json_output {
        let report = serde_json::json!({
            "colors": colors,
            "palettes": palettes
                .iter()
                .map(|(kind, palette)| (kind.name(), palette))
                .collect::<std::collections::BTreeMap<_, _>>(),
        });
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing result: {}", e),
        }
        return Ok(());
    }

    println!("Extracted Colors:");
    for (i, entry) in dominant.iter().enumerate() {
        let [r, g, b] = entry.color.rgb();
        println!(
            "Color {}: RGB ({}, {}, {}), HEX {}  {:>5.1}%",
            i + 1,
            r,
            g,
            b,
            entry.color.hex(),
            entry.proportion * 100.0
        );
    }

    for (palette_type, palette) in &palettes {
        let name = palette_type.name();
        let title = format!("{}{}", name[..1].to_uppercase(), &name[1..]);
        println!();
        println!("{} Palette:", title);
        let swatches: Vec<String> = palette.iter().map(Color::hex).collect();
        println!("  {}", swatches.join("  "));
    }

    Ok(())
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Extract dominant colors from an image and derive color palettes.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load extraction/palette settings from a JSON file");
    eprintln!("  --json           Print colors and palettes as JSON");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} --json --config scheme.json photo.png", program_name);
}
