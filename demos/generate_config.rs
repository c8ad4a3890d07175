//! Generate a default scheme configuration file
//!
//! Creates a JSON config with all default parameters

use image_color_scheme::SchemeConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/scheme.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = SchemeConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!(
                "  Extraction: {} colors, resize {} (max side {}px)",
                config.extraction.num_colors,
                if config.extraction.resize { "on" } else { "off" },
                config.extraction.max_size
            );
            eprintln!(
                "  Palette: {}, {} colors",
                config.palette.palette_type, config.palette.num_colors
            );
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
