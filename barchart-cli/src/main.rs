use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use barchart_app::app::BarChartApp;
use barchart_app::chart::{sample_data, ChartConfig, Datum};
use barchart_svg::svg::SvgCanvas;

use clap::{Parser, Subcommand};
use log::info;

/// Render bar charts from JSON datasets
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a dataset to SVG or PNG
    Render {
        /// JSON array of {"category", "value"} records (defaults to the sample dataset)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// JSON chart configuration; flags below override its fields
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output path ending in .svg or .png (SVG is written to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long)]
        width: Option<f32>,

        #[arg(long)]
        height: Option<f32>,

        #[arg(long)]
        margin: Option<f32>,

        /// Pixel ratio for PNG output
        #[arg(short, long, default_value_t = 1.0)]
        scale: f32,
    },

    /// Print the built-in sample dataset as JSON
    Sample,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            data,
            config,
            output,
            width,
            height,
            margin,
            scale,
        } => {
            let data = match data {
                Some(path) => load_data(&path)?,
                None => sample_data(),
            };
            let mut config = match config {
                Some(path) => load_config(&path)?,
                None => ChartConfig::default(),
            };
            config.width = width.unwrap_or(config.width);
            config.height = height.unwrap_or(config.height);
            config.margin = margin.unwrap_or(config.margin);

            render(data, config, output.as_deref(), scale)
        }
        Commands::Sample => {
            let json = serde_json::to_string_pretty(&sample_data())?;
            println!("{json}");
            Ok(())
        }
    }
}

fn load_data(path: &Path) -> anyhow::Result<Vec<Datum>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse data file {}", path.display()))
}

fn load_config(path: &Path) -> anyhow::Result<ChartConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn render(
    data: Vec<Datum>,
    config: ChartConfig,
    output: Option<&Path>,
    scale: f32,
) -> anyhow::Result<()> {
    info!("Rendering {} records at {}x{}", data.len(), config.width, config.height);
    let app = BarChartApp::new(data, config)?;
    let canvas = SvgCanvas::render(&app.scene_graph(), scale)?;

    let Some(output) = output else {
        io::stdout().write_all(canvas.to_svg().as_bytes())?;
        return Ok(());
    };

    match output.extension().and_then(|ext| ext.to_str()) {
        Some("svg") => fs::write(output, canvas.to_svg())?,
        Some("png") => fs::write(output, canvas.to_png()?)?,
        _ => bail!(
            "Unsupported output format for {}, expected .svg or .png",
            output.display()
        ),
    }
    info!("Wrote {}", output.display());
    Ok(())
}
