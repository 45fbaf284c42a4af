//! Property-based and scenario tests for tsp-plot.
//!
//! Uses proptest to verify the best-so-far filter and parser invariants
//! across many random inputs, plus concrete end-to-end render scenarios.

use proptest::prelude::*;
use std::path::Path;
use tempfile::TempDir;
use tsp_plot::{improvements, DatParser, FrameRenderer, SolverRun};

/// Build a results file for the given point set and
/// `(generation, path_length, tour)` rows.
fn dat_content(points: &[(f64, f64)], rows: &[(usize, f64, Vec<usize>)]) -> String {
    let length = points.len() - 1;
    let mut lines = vec![
        "# tsp solver results".to_string(),
        format!("30 {} {} 10.0 10.0", rows.len(), length),
        String::new(),
        String::new(),
    ];

    for &(x, y) in points {
        lines.push(format!("{x} {y}"));
    }

    // Spacer between the point table and the comma-delimited path table.
    while lines.len() < length + 7 {
        lines.push(String::new());
    }

    for (generation, path_length, tour) in rows {
        let cities: Vec<String> = tour.iter().map(ToString::to_string).collect();
        lines.push(format!("{generation},{path_length},{},99", cities.join(",")));
    }

    lines.join("\n")
}

fn square_points() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
}

/// Strict decreases of a sequence scanned left to right.
fn strict_decrease_count(lengths: &[f64]) -> usize {
    let mut best = f64::INFINITY;
    let mut count = 0;
    for &len in lengths {
        if len < best {
            best = len;
            count += 1;
        }
    }
    count
}

// ============================================================================
// Best-so-far filter properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_improvement_count_equals_strict_decreases(
        lengths in prop::collection::vec(1.0..100.0f64, 1..40)
    ) {
        let rows: Vec<(usize, f64, Vec<usize>)> = lengths
            .iter()
            .enumerate()
            .map(|(gen, &len)| (gen, len, vec![0, 1, 2]))
            .collect();
        let content = dat_content(&square_points(), &rows);
        let run = DatParser::parse(&content, Path::new("prop.dat")).unwrap();

        prop_assert_eq!(
            improvements(&run.records).len(),
            strict_decrease_count(&lengths)
        );
    }

    #[test]
    fn prop_last_improvement_is_running_minimum(
        lengths in prop::collection::vec(1.0..100.0f64, 1..40)
    ) {
        let rows: Vec<(usize, f64, Vec<usize>)> = lengths
            .iter()
            .enumerate()
            .map(|(gen, &len)| (gen, len, vec![0, 1, 2]))
            .collect();
        let content = dat_content(&square_points(), &rows);
        let run = DatParser::parse(&content, Path::new("prop.dat")).unwrap();

        let minimum = lengths.iter().copied().fold(f64::INFINITY, f64::min);
        let last = improvements(&run.records).last().unwrap().path_length;
        prop_assert!((last - minimum).abs() < 1e-12);
    }

    #[test]
    fn prop_parsed_tour_indices_in_range(
        tour in prop::collection::vec(0usize..4, 3..=3)
    ) {
        let rows = vec![(0usize, 5.0, tour)];
        let content = dat_content(&square_points(), &rows);
        let run = DatParser::parse(&content, Path::new("prop.dat")).unwrap();

        for record in &run.records {
            for &city in &record.tour {
                prop_assert!(city < run.points.len());
            }
        }
    }
}

// ============================================================================
// End-to-end render scenarios
// ============================================================================

fn load_run(dir: &TempDir, content: &str) -> SolverRun {
    let path = dir.path().join("tsp.dat");
    std::fs::write(&path, content).unwrap();
    SolverRun::load(&path).unwrap()
}

#[test]
fn test_single_improvement_writes_one_frame() {
    let dir = TempDir::new().unwrap();
    let content = dat_content(&square_points(), &[(0, 2.0, vec![1, 0, 2])]);
    let run = load_run(&dir, &content);

    let out_dir = dir.path().join("figures");
    std::fs::create_dir(&out_dir).unwrap();

    let renderer = FrameRenderer::new(&out_dir, 400, 300);
    let frames = renderer.render_improvements(&run).unwrap();

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0], out_dir.join("tsp0000.png"));
    assert!(frames[0].exists());
    assert!(std::fs::metadata(&frames[0]).unwrap().len() > 0);
}

#[test]
fn test_non_improving_row_writes_no_frame() {
    let dir = TempDir::new().unwrap();
    let content = dat_content(
        &square_points(),
        &[(0, 5.0, vec![0, 1, 2]), (1, 6.0, vec![0, 2, 1])],
    );
    let run = load_run(&dir, &content);

    let out_dir = dir.path().join("figures");
    std::fs::create_dir(&out_dir).unwrap();

    let renderer = FrameRenderer::new(&out_dir, 400, 300);
    let frames = renderer.render_improvements(&run).unwrap();

    assert_eq!(frames.len(), 1);
    assert!(out_dir.join("tsp0000.png").exists());
    assert!(!out_dir.join("tsp0001.png").exists());
}

#[test]
fn test_missing_output_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let content = dat_content(&square_points(), &[(0, 2.0, vec![1, 0, 2])]);
    let run = load_run(&dir, &content);

    let renderer = FrameRenderer::new(&dir.path().join("missing"), 400, 300);
    assert!(renderer.render_improvements(&run).is_err());
}

#[test]
fn test_missing_input_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    assert!(SolverRun::load(&dir.path().join("absent.dat")).is_err());
}
