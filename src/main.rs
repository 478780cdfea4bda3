use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use std::fs::File;
use std::path::PathBuf;

use progress_bar::{config, Color, Orientation, ProgressBar, SolidParent};

/// Render a progress bar to a PNG image
#[derive(Parser, Debug)]
#[command(name = "progress-bar-snapshot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output PNG file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Config file to load (defaults to the user config, then built-in defaults)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the progress value
    #[arg(short = 'v', long = "value")]
    value: Option<f64>,

    /// Override the size, e.g. 300x30
    #[arg(short = 's', long = "size", value_name = "WxH", value_parser = parse_size)]
    size: Option<(i32, i32)>,

    /// Fill bottom to top
    #[arg(long = "vertical")]
    vertical: bool,

    /// Color of the surface the bar is painted on, as R,G,B (0-255)
    #[arg(short = 'p', long = "parent", value_name = "R,G,B", value_parser = parse_rgb, default_value = "240,240,240")]
    parent: Color,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// Parse size string "WxH" into (i32, i32)
fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("Expected format: WxH (e.g., 300x30), got: {}", s))?;
    let w = w.trim().parse::<i32>()
        .map_err(|e| format!("Invalid width: {}", e))?;
    let h = h.trim().parse::<i32>()
        .map_err(|e| format!("Invalid height: {}", e))?;
    Ok((w, h))
}

/// Parse color string "R,G,B" into an opaque Color
fn parse_rgb(s: &str) -> Result<Color, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("Expected format: R,G,B (e.g., 240,240,240), got: {}", s));
    }
    let mut channels = [0u8; 3];
    for (channel, part) in channels.iter_mut().zip(&parts) {
        *channel = part.trim().parse::<u8>()
            .map_err(|e| format!("Invalid color channel '{}': {}", part, e))?;
    }
    Ok(Color::from_rgba8(channels[0], channels[1], channels[2], 255))
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut bar_config = match &cli.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };

    if let Some((width, height)) = cli.size {
        bar_config.width = width;
        bar_config.height = height;
    }
    if cli.vertical {
        bar_config.orientation = Orientation::Vertical;
    }

    let mut bar = match ProgressBar::from_config(&bar_config) {
        Ok(bar) => bar,
        Err(e) => {
            warn!("Config could not be applied, using defaults: {:#}", e);
            let mut bar = ProgressBar::new()?;
            bar.on_resize(bar_config.width, bar_config.height)?;
            bar.set_orientation(bar_config.orientation);
            bar
        }
    };
    if let Some(value) = cli.value {
        bar.set_value(value).context("Invalid --value")?;
    }

    let (width, height) = (bar.width().max(1), bar.height().max(1));
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let cr = cairo::Context::new(&surface)?;
        let parent = SolidParent {
            offset: (0.0, 0.0),
            color: cli.parent,
        };
        parent.color.apply_to_cairo(&cr);
        cr.paint()?;
        bar.on_paint(&cr, Some(&parent))?;
    }

    let mut file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    surface.write_to_png(&mut file)?;
    info!("Wrote {}x{} snapshot to {}", width, height, cli.output.display());
    Ok(())
}
