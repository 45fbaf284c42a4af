//! tsp-plot CLI: render best-so-far frames from a TSP solver results file.

use clap::Parser;
use std::path::PathBuf;
use tsp_plot::{FrameRenderer, PlotResult, SolverRun};

#[derive(Parser)]
#[command(name = "tsp-plot")]
#[command(about = "Render one PNG per best-tour improvement of a TSP solver run")]
#[command(version)]
struct Cli {
    /// Solver results file
    #[arg(default_value = "./build/tsp.dat")]
    input: PathBuf,

    /// Output directory for frames (must already exist)
    #[arg(short, long, default_value = "figures")]
    out_dir: PathBuf,

    /// Frame width in pixels
    #[arg(long, default_value = "800")]
    width: u32,

    /// Frame height in pixels
    #[arg(long, default_value = "600")]
    height: u32,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> PlotResult<()> {
    let run = SolverRun::load(&cli.input)?;

    println!("TSP Run Visualization");
    println!("=====================");
    println!("Input:        {}", cli.input.display());
    println!("Cities:       {}", run.header.length);
    println!("Generations:  {}", run.header.generations);
    println!("Population:   {}", run.header.population_size);
    println!();

    let renderer = FrameRenderer::new(&cli.out_dir, cli.width, cli.height);
    let frames = renderer.render_improvements(&run)?;

    for frame in &frames {
        println!("  Wrote: {}", frame.display());
    }

    println!();
    println!(
        "{} improvement(s) rendered from {} generation record(s)",
        frames.len(),
        run.records.len()
    );

    Ok(())
}
