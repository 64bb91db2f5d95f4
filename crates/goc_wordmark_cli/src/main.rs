//! goc-wordmark CLI
//!
//! Render the Government of Canada wordmark as SVG markup or PNG.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::{parse_attr, WordmarkConfig};
use goc_wordmark::{Node, FLAG_PATH, TEXT_PATH};
use goc_wordmark_svg::RasterizedWordmark;

#[derive(Parser)]
#[command(name = "goc-wordmark")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Government of Canada wordmark renderer", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that renders the wordmark
#[derive(clap::Args)]
struct RenderArgs {
    /// Configuration file (defaults to ./wordmark.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Container attribute, repeatable (e.g. --attr role=img)
    #[arg(short, long = "attr", value_parser = parse_attr)]
    attrs: Vec<(String, String)>,

    /// Accessible title, overrides the configuration file
    #[arg(short, long)]
    title: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the wordmark as SVG markup
    Render {
        #[command(flatten)]
        args: RenderArgs,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rasterize the wordmark to a PNG file
    Rasterize {
        #[command(flatten)]
        args: RenderArgs,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Width in pixels (overrides the configuration file)
        #[arg(long)]
        width: Option<u32>,

        /// Height in pixels (overrides the configuration file)
        #[arg(long)]
        height: Option<u32>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Configuration file (defaults to ./wordmark.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the fixed container attributes and path descriptors
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render { args, output } => cmd_render(&args, output.as_deref()),

        Commands::Rasterize {
            args,
            output,
            width,
            height,
        } => cmd_rasterize(&args, &output, width, height),

        Commands::Config { config } => cmd_config(config.as_deref()),

        Commands::Info => cmd_info(),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<WordmarkConfig> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    WordmarkConfig::resolve(explicit, &cwd)
}

/// Build the wordmark tree from configuration and command-line overrides
fn build_wordmark(args: &RenderArgs) -> Result<(Node, WordmarkConfig)> {
    let config = load_config(args.config.as_deref())?;
    let node = config.build(&args.attrs, args.title.as_deref())?;
    debug!(
        titled = config.title(args.title.as_deref()).is_some(),
        "wordmark built"
    );

    Ok((node, config))
}

fn cmd_render(args: &RenderArgs, output: Option<&Path>) -> Result<()> {
    let (node, _) = build_wordmark(args)?;
    let markup = node.to_markup();

    match output {
        Some(path) => {
            fs::write(path, &markup)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", markup.len(), path.display());
        }
        None => println!("{markup}"),
    }

    Ok(())
}

fn cmd_rasterize(
    args: &RenderArgs,
    output: &Path,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    let (node, config) = build_wordmark(args)?;
    let width = width.unwrap_or(config.raster.width);
    let height = height.unwrap_or(config.raster.height);

    let image = RasterizedWordmark::from_node(&node, width, height)
        .context("Failed to rasterize wordmark")?;
    image
        .save_png(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("Rasterized {}x{} wordmark to {}", width, height, output.display());
    Ok(())
}

fn cmd_config(explicit: Option<&Path>) -> Result<()> {
    let config = load_config(explicit)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn cmd_info() -> Result<()> {
    let defaults = goc_wordmark::container_defaults();

    println!("goc-wordmark {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Container defaults (overridable):");
    for (name, value) in defaults.iter() {
        println!("  {name} = {}", value.as_markup().unwrap_or_default());
    }
    println!();
    println!("Path descriptors (fixed):");
    println!("  flag: {} bytes", FLAG_PATH.len());
    println!("  text: {} bytes", TEXT_PATH.len());
    Ok(())
}
