//! tsp-plot: frame-by-frame visualization of genetic TSP solver runs.
//!
//! Reads the results file a TSP solver writes (`tsp.dat`: header, city
//! coordinates, one best-tour row per generation) and renders one PNG per
//! strict improvement of the best tour length.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use tsp_plot::{FrameRenderer, SolverRun};
//!
//! let run = SolverRun::load(Path::new("./build/tsp.dat")).unwrap();
//! let renderer = FrameRenderer::new(Path::new("figures"), 800, 600);
//! let frames = renderer.render_improvements(&run).unwrap();
//! println!("{} frames written", frames.len());
//! ```
//!
//! # Modules
//!
//! - [`results`]: the `tsp.dat` data model and fixed-layout parser
//! - [`render`]: the best-so-far frame renderer
//! - [`error`]: error types

pub mod error;
pub mod render;
pub mod results;

pub use error::{PlotError, PlotResult};
pub use render::{closed_tour_points, frame_file_name, improvements, FrameRenderer};
pub use results::{DatParser, GenerationRecord, RunHeader, SolverRun};
