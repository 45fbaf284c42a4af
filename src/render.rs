//! Best-so-far frame renderer.
//!
//! Walks the generation records in file order and writes one PNG for each
//! strict improvement of the best tour length. Each frame shows the full
//! city scatter with the improving tour drawn as a closed polyline.

use crate::error::PlotResult;
use crate::results::{GenerationRecord, SolverRun};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Renderer configuration: output directory and image size in pixels.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    out_dir: PathBuf,
    width: u32,
    height: u32,
}

impl FrameRenderer {
    /// Create a renderer writing into `out_dir`, which must already exist.
    pub fn new(out_dir: &Path, width: u32, height: u32) -> Self {
        Self {
            out_dir: out_dir.to_path_buf(),
            width,
            height,
        }
    }

    /// Render every strict improvement in `run`, in file order.
    ///
    /// Returns the paths of the frames written. Ties and regressions in
    /// path length produce no frame; the running minimum is tracked here
    /// rather than trusted from the file.
    pub fn render_improvements(&self, run: &SolverRun) -> PlotResult<Vec<PathBuf>> {
        let mut written = Vec::new();

        for record in improvements(&run.records) {
            let path = self.out_dir.join(frame_file_name(record.generation));
            self.render_frame(run, record, &path)?;
            written.push(path);
        }

        Ok(written)
    }

    /// Draw a single frame. The backend is created, drawn, presented, and
    /// dropped inside this call, so at most one figure is in flight no
    /// matter how many generations the run holds.
    fn render_frame(
        &self,
        run: &SolverRun,
        record: &GenerationRecord,
        path: &Path,
    ) -> PlotResult<()> {
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let title = frame_title(record.generation, record.path_length);
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(40)
            .build_cartesian_2d(0.0..run.header.x_size, 0.0..run.header.y_size)?;

        chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

        chart.draw_series(
            run.points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLACK.filled())),
        )?;

        let tour_points = closed_tour_points(&run.points, &record.tour);
        chart.draw_series(LineSeries::new(tour_points, &RED))?;

        root.present()?;
        Ok(())
    }
}

/// Records that strictly improve on the best path length seen so far,
/// in file order.
pub fn improvements(records: &[GenerationRecord]) -> Vec<&GenerationRecord> {
    let mut best = f64::INFINITY;
    let mut improving = Vec::new();

    for record in records {
        if record.path_length < best {
            best = record.path_length;
            improving.push(record);
        }
    }

    improving
}

/// Vertices of the closed tour polyline: the visit sequence plus the first
/// city repeated at the end, so a tour of n cities draws exactly n segments.
pub fn closed_tour_points(points: &[(f64, f64)], tour: &[usize]) -> Vec<(f64, f64)> {
    let mut vertices: Vec<(f64, f64)> = tour.iter().map(|&city| points[city]).collect();
    if let Some(&first) = vertices.first() {
        vertices.push(first);
    }
    vertices
}

/// Frame file name for a generation: zero-padded to 4 digits, printed
/// as-is once the index has 4 or more digits.
pub fn frame_file_name(generation: usize) -> String {
    format!("tsp{generation:04}.png")
}

/// Frame caption. Path length keeps its fractional form (`2.0`, not `2`).
fn frame_title(generation: usize, path_length: f64) -> String {
    format!("generation: {generation}  -  path length: {path_length:?}")
}
