//! Solver results file model.
//!
//! A solver run is the contents of one `tsp.dat` file: a header row, a
//! point table with the city coordinates, and one row per generation
//! recording the best tour found so far.

mod datfile;

pub use datfile::DatParser;

use crate::error::PlotResult;
use std::path::Path;

/// Header row of a results file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunHeader {
    /// Solver population size
    pub population_size: usize,
    /// Number of generations the solver ran
    pub generations: usize,
    /// Number of cities; governs the size of the point table
    pub length: usize,
    /// Canvas width the cities were placed on
    pub x_size: f64,
    /// Canvas height the cities were placed on
    pub y_size: f64,
}

/// Best tour recorded for a single generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    /// Generation index
    pub generation: usize,
    /// Length of the best tour in this generation
    pub path_length: f64,
    /// Ordered city indices of the best tour
    pub tour: Vec<usize>,
}

/// Fully loaded solver run.
///
/// Loaded once at startup and never mutated; the renderer only iterates it.
#[derive(Debug, Clone)]
pub struct SolverRun {
    /// Parsed header row
    pub header: RunHeader,
    /// City coordinates; index is the city ID referenced by tours
    pub points: Vec<(f64, f64)>,
    /// Per-generation best tours, in file order
    pub records: Vec<GenerationRecord>,
}

impl SolverRun {
    /// Load a solver run from a results file.
    pub fn load(path: &Path) -> PlotResult<Self> {
        DatParser::parse_file(path)
    }
}
