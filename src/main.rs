use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use venn3::driver::{self, DiagramJob};
use venn3::{RegionText, Renderer, SvgRenderer};

#[derive(Parser, Debug)]
#[command(
    name = "venn3",
    about = "Render a three-set Venn diagram (defaults to the built-in reference sets)",
    version
)]
struct Cli {
    /// JSON job file (sets, labels, colors, bold_labels, save_path, render)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output image path; the extension selects the format (.png or .svg)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Print region elements instead of counts
    #[arg(long, default_value_t = false)]
    show_elements: bool,

    /// Draw set labels in regular weight
    #[arg(long, default_value_t = false)]
    no_bold: bool,

    /// Title drawn above the diagram
    #[arg(long)]
    title: Option<String>,

    /// Print the seven regions as JSON to stdout
    #[arg(long, default_value_t = false)]
    print_regions: bool,
}

fn load_job(args: &Cli) -> Result<DiagramJob> {
    let mut job = match &args.config {
        Some(path) => DiagramJob::from_json_file(path)
            .with_context(|| format!("failed to load job from {}", path.display()))?,
        None => driver::reference_job(),
    };

    if let Some(output) = &args.output {
        job.save_path = output.clone();
    }
    if let Some(width) = args.width {
        job.render.viewport.width = width;
    }
    if let Some(height) = args.height {
        job.render.viewport.height = height;
    }
    if args.show_elements {
        job.render.region_text = RegionText::Elements;
    }
    if args.no_bold {
        job.bold_labels = false;
    }
    if args.title.is_some() {
        job.render.title = args.title.clone();
    }
    Ok(job)
}

fn run(args: Cli) -> Result<()> {
    let job = load_job(&args)?;

    if args.print_regions {
        let regions = job.sets().regions();
        println!("{}", serde_json::to_string_pretty(&regions)?);
        tracing::info!(digest = %regions.digest(), "region digest");
    }

    let renderer = SvgRenderer::new(job.render.clone()).context("invalid render configuration")?;
    let written = driver::run(&renderer, &job)
        .with_context(|| format!("failed to render {}", job.save_path.display()))?;
    println!("{}", written.display());
    Ok(())
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("venn3: {:#}", e);
        std::process::exit(1);
    }
}
